//! ==============================================================================
//! feed.rs - list view state machine
//! ==============================================================================
//!
//! purpose:
//!     everything the landing page knows about posts: the fetch phase, the
//!     list itself, the per-post bodies and how many cards are showing.
//!
//! state machine:
//!     Idle -> Fetching -> { Loaded, Failed }
//!
//! Loaded is entered as soon as the list arrives; body fetches settle
//! afterwards and never move the phase.
//!
//! relationships:
//!     - uses: post::BlogPost, content::ContentMap
//!     - used by: frontend HomePage (held in one signal)
//!
//! ==============================================================================

use std::collections::HashSet;
use std::fmt::Display;

use crate::config::INITIAL_VISIBLE_POSTS;
use crate::content::{BodyState, ContentMap};
use crate::post::BlogPost;
use crate::toast::ToastKind;

/// notice shown when the post list cannot be fetched
pub const LIST_ERROR_TEXT: &str = "Something went wrong!";

// ==============================================================================
// phase
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedPhase {
    #[default]
    Idle,
    Fetching,
    Loaded,
    Failed,
}

// ==============================================================================
// visible window
// ==============================================================================

/// how many cards the expand/collapse control lets through
///
/// the stored limit may exceed the post count; reads are always clamped to
/// [0, total].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostWindow {
    limit: usize,
}

impl Default for PostWindow {
    fn default() -> Self {
        Self { limit: INITIAL_VISIBLE_POSTS }
    }
}

impl PostWindow {
    pub fn visible_count(&self, total: usize) -> usize {
        self.limit.min(total)
    }

    /// "View More" is offered while some posts are hidden
    pub fn can_expand(&self, total: usize) -> bool {
        self.limit < total
    }

    pub fn view_more(&mut self, total: usize) {
        self.limit = total;
    }

    pub fn view_less(&mut self) {
        self.limit = INITIAL_VISIBLE_POSTS;
    }
}

// ==============================================================================
// feed
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogFeed {
    phase: FeedPhase,
    posts: Vec<BlogPost>,
    bodies: ContentMap,
    window: PostWindow,
}

impl BlogFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> FeedPhase {
        self.phase
    }

    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    pub fn bodies(&self) -> &ContentMap {
        &self.bodies
    }

    pub fn body(&self, file: &str) -> BodyState {
        self.bodies.state(file)
    }

    /// list request is going out
    pub fn start_fetch(&mut self) {
        self.phase = FeedPhase::Fetching;
        self.posts.clear();
        self.bodies.clear();
    }

    /// store the list and return the filenames whose bodies must be fetched
    ///
    /// filenames are de-duplicated so each key gets exactly one fetch.
    pub fn list_loaded(&mut self, posts: Vec<BlogPost>) -> Vec<String> {
        let files: Vec<String> = {
            let mut seen = HashSet::new();
            posts
                .iter()
                .filter(|p| seen.insert(p.file.as_str()))
                .map(|p| p.file.clone())
                .collect()
        };

        self.bodies.mark_pending(files.iter().map(String::as_str));
        self.posts = posts;
        self.phase = FeedPhase::Loaded;
        files
    }

    /// list request failed; the list stays empty
    ///
    /// returns the notice to show, only on the transition into Failed, so a
    /// repeated failure report does not notify twice.
    pub fn list_failed(&mut self) -> Option<(ToastKind, &'static str)> {
        self.posts.clear();
        self.bodies.clear();
        if self.phase == FeedPhase::Failed {
            return None;
        }
        self.phase = FeedPhase::Failed;
        Some((ToastKind::Error, LIST_ERROR_TEXT))
    }

    pub fn body_resolved<E: Display>(&mut self, file: &str, result: Result<String, E>) {
        self.bodies.resolve(file, result);
    }

    pub fn visible_posts(&self) -> &[BlogPost] {
        &self.posts[..self.window.visible_count(self.posts.len())]
    }

    pub fn can_expand(&self) -> bool {
        self.window.can_expand(self.posts.len())
    }

    pub fn view_more(&mut self) {
        self.window.view_more(self.posts.len());
    }

    pub fn view_less(&mut self) {
        self.window.view_less();
    }
}

// ==============================================================================
// tests
// ==============================================================================
