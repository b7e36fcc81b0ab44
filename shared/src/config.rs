//! ==============================================================================
//! config.rs - api endpoints and ui constants
//! ==============================================================================

use std::time::Duration;

// production host
pub const API_BASE: &str = "https://dev.techboy.in/api";
pub const UPLOADS_BASE: &str = "https://dev.techboy.in/uploads";

/// cards shown before "View More"
pub const INITIAL_VISIBLE_POSTS: usize = 2;

/// viewport width (css px) at which the grid/list toggle appears
pub const DESKTOP_MIN_WIDTH: f64 = 768.0;

/// how long a notification stays on screen
pub const TOAST_TIMEOUT: Duration = Duration::from_millis(3000);

/// where the two views fetch and post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub api_base: String,
    pub uploads_base: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(API_BASE, UPLOADS_BASE)
    }
}

impl ApiConfig {
    /// trailing slashes are dropped so the url builders never double them
    pub fn new(api_base: impl Into<String>, uploads_base: impl Into<String>) -> Self {
        let trim = |s: String| s.trim_end_matches('/').to_string();
        Self {
            api_base: trim(api_base.into()),
            uploads_base: trim(uploads_base.into()),
        }
    }

    /// GET: json array of posts
    pub fn blogs_url(&self) -> String {
        format!("{}/getAllBlogs.php", self.api_base)
    }

    /// POST: multipart upload
    pub fn upload_url(&self) -> String {
        format!("{}/upload.php", self.api_base)
    }

    /// GET: raw markdown for one post
    pub fn body_url(&self, file: &str) -> String {
        format!("{}/{}", self.uploads_base, file.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let config = ApiConfig::default();
        assert_eq!(config.blogs_url(), "https://dev.techboy.in/api/getAllBlogs.php");
        assert_eq!(config.upload_url(), "https://dev.techboy.in/api/upload.php");
        assert_eq!(config.body_url("hello.md"), "https://dev.techboy.in/uploads/hello.md");
    }

    #[test]
    fn test_slashes_are_normalized() {
        let config = ApiConfig::new("http://localhost:8000/api/", "http://localhost:8000/uploads//");
        assert_eq!(config.blogs_url(), "http://localhost:8000/api/getAllBlogs.php");
        assert_eq!(config.body_url("/a.md"), "http://localhost:8000/uploads/a.md");
    }
}
