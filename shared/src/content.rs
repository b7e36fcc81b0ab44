//! ==============================================================================
//! content.rs - markdown bodies keyed by filename
//! ==============================================================================
//!
//! purpose:
//!     tracks the per-post body fetches of the list view. every key holds a
//!     tagged state so "still loading" and "failed" stay distinguishable.
//!
//! relationships:
//!     - owned by: feed::BlogFeed
//!     - read by: frontend post cards
//!
//! ==============================================================================

use std::collections::BTreeMap;
use std::fmt::Display;

/// placeholder shown in place of a body that could not be fetched
pub const BODY_ERROR_TEXT: &str = "Error loading content.";

/// state of one post's markdown body
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BodyState {
    #[default]
    Pending,
    Loaded(String),
    /// reason kept for diagnostics, not for display
    Failed(String),
}

impl BodyState {
    pub fn is_pending(&self) -> bool {
        matches!(self, BodyState::Pending)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, BodyState::Failed(_))
    }

    /// text for the card: the body, or the error placeholder
    pub fn display_text(&self) -> Option<&str> {
        match self {
            BodyState::Pending => None,
            BodyState::Loaded(text) => Some(text),
            BodyState::Failed(_) => Some(BODY_ERROR_TEXT),
        }
    }
}

/// filename -> body state
///
/// each body fetch only ever writes its own key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentMap {
    entries: BTreeMap<String, BodyState>,
}

impl ContentMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// register keys that are about to be fetched
    pub fn mark_pending<'a>(&mut self, files: impl IntoIterator<Item = &'a str>) {
        for file in files {
            self.entries.insert(file.to_string(), BodyState::Pending);
        }
    }

    /// record the result of one body fetch
    pub fn resolve<E: Display>(&mut self, file: &str, result: Result<String, E>) {
        let state = match result {
            Ok(text) => BodyState::Loaded(text),
            Err(e) => BodyState::Failed(e.to_string()),
        };
        self.entries.insert(file.to_string(), state);
    }

    pub fn get(&self, file: &str) -> Option<&BodyState> {
        self.entries.get(file)
    }

    /// state for a key, treating unknown keys as pending
    pub fn state(&self, file: &str) -> BodyState {
        self.entries.get(file).cloned().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn pending_count(&self) -> usize {
        self.entries.values().filter(|s| s.is_pending()).count()
    }

    pub fn failed_files(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, s)| s.is_failed())
            .map(|(k, _)| k.as_str())
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_one_failure_only_marks_its_key() {
        let mut map = ContentMap::new();
        map.mark_pending(["a.md", "b.md", "c.md"]);

        map.resolve::<&str>("c.md", Ok("# C".to_string()));
        map.resolve("b.md", Err("404 Not Found"));
        map.resolve::<&str>("a.md", Ok("# A".to_string()));

        assert_eq!(map.get("a.md"), Some(&BodyState::Loaded("# A".into())));
        assert_eq!(map.get("c.md"), Some(&BodyState::Loaded("# C".into())));
        assert_eq!(map.get("b.md"), Some(&BodyState::Failed("404 Not Found".into())));
        assert_eq!(map.failed_files().collect::<Vec<_>>(), vec!["b.md"]);
        assert_eq!(map.state("b.md").display_text(), Some(BODY_ERROR_TEXT));
    }

    #[test]
    fn test_pending_is_not_failed() {
        let mut map = ContentMap::new();
        map.mark_pending(["a.md"]);

        let state = map.state("a.md");
        assert!(state.is_pending());
        assert!(!state.is_failed());
        assert_eq!(state.display_text(), None);
        assert_eq!(map.pending_count(), 1);

        // unknown keys read as pending too
        assert!(map.state("missing.md").is_pending());
        assert_eq!(map.get("missing.md"), None);
    }

    #[test]
    fn test_resolve_without_mark() {
        let mut map = ContentMap::new();
        map.resolve::<String>("late.md", Ok("body".into()));
        assert_eq!(map.len(), 1);
        assert_eq!(map.pending_count(), 0);
    }
}
