//! ==============================================================================
//! post.rs - blog post metadata and upload enumerations
//! ==============================================================================
//!
//! purpose:
//!     the server-owned post record returned by getAllBlogs.php, plus the
//!     closed sets of authors and categories the upload form offers.
//!
//! relationships:
//!     - used by: feed (list of posts, keyed by `file`)
//!     - used by: upload (author / category selects)
//!     - used by: frontend (post cards, select options)
//!
//! ==============================================================================

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// label shown on a card when the server sends no category
pub const DEFAULT_CATEGORY_LABEL: &str = "Tech";

// ==============================================================================
// blog post
// ==============================================================================

/// one post as listed by the api
///
/// read-only on the client. `file` is the uploaded markdown filename and is
/// also the post's identity in the content mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub title: String,
    pub description: String,
    pub author: String,
    /// markdown filename under the uploads base
    pub file: String,
    /// not every deployment of the api returns this
    #[serde(default)]
    pub category: Option<String>,
}

impl BlogPost {
    /// category text for display, falling back to a generic label
    pub fn category_label(&self) -> &str {
        match self.category.as_deref() {
            Some(c) if !c.trim().is_empty() => c,
            _ => DEFAULT_CATEGORY_LABEL,
        }
    }
}

// ==============================================================================
// authors and categories
// ==============================================================================

/// error for a select value that is not one of the known options
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value:?}")]
pub struct UnknownOption {
    pub kind: &'static str,
    pub value: String,
}

/// authors allowed to publish
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Author {
    Suraj,
    Neeraj,
    Aditya,
}

impl Author {
    pub const ALL: [Author; 3] = [Author::Suraj, Author::Neeraj, Author::Aditya];

    /// value sent in the multipart payload
    pub fn as_str(self) -> &'static str {
        match self {
            Author::Suraj => "Suraj",
            Author::Neeraj => "Neeraj",
            Author::Aditya => "Aditya",
        }
    }

    pub fn label(self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Author {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Author::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| UnknownOption { kind: "author", value: s.to_string() })
    }
}

/// post categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    WebDevelopment,
    AiMl,
    Iot,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::WebDevelopment, Category::AiMl, Category::Iot];

    /// value sent in the multipart payload
    pub fn as_str(self) -> &'static str {
        match self {
            Category::WebDevelopment => "Web Development",
            Category::AiMl => "AI-ML",
            Category::Iot => "IOT",
        }
    }

    pub fn label(self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownOption { kind: "category", value: s.to_string() })
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_decodes_api_payload() {
        let json = r#"[
            {"title": "Rust", "description": "intro", "author": "Suraj", "file": "rust.md", "id": "7"},
            {"title": "IoT", "description": "mqtt", "author": "Aditya", "file": "iot.md", "category": "IOT"}
        ]"#;
        let posts: Vec<BlogPost> = serde_json::from_str(json).unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].file, "rust.md");
        assert_eq!(posts[0].category, None);
        assert_eq!(posts[1].category.as_deref(), Some("IOT"));
    }

    #[test]
    fn test_category_label_falls_back() {
        let mut post = BlogPost {
            title: "t".into(),
            description: "d".into(),
            author: "a".into(),
            file: "f.md".into(),
            category: None,
        };
        assert_eq!(post.category_label(), "Tech");

        post.category = Some("  ".into());
        assert_eq!(post.category_label(), "Tech");

        post.category = Some("AI-ML".into());
        assert_eq!(post.category_label(), "AI-ML");
    }

    #[test]
    fn test_select_values_parse_back() {
        for author in Author::ALL {
            assert_eq!(author.as_str().parse::<Author>(), Ok(author));
        }
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
        assert_eq!("Web Development".parse::<Category>(), Ok(Category::WebDevelopment));
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        let err = "Linus".parse::<Author>().unwrap_err();
        assert_eq!(err.kind, "author");
        assert_eq!(err.to_string(), "unknown author: \"Linus\"");
        assert!("".parse::<Category>().is_err());
    }
}
