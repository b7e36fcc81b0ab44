//! ==============================================================================
//! lib.rs - shared model for the techboy blog front end
//! ==============================================================================
//!
//! purpose:
//!     the data model and every state machine behind the two screens,
//!     kept free of browser apis so it can be unit tested on the host.
//!
//! relationships:
//!     - post:     BlogPost, Author, Category
//!     - config:   ApiConfig and ui constants
//!     - content:  per-post markdown bodies (Pending / Loaded / Failed)
//!     - feed:     list view state (Idle -> Fetching -> Loaded | Failed)
//!     - upload:   upload form state (Editing -> Submitting -> Editing)
//!     - toast:    notification queue
//!     - markdown: body rendering
//!     - used by: frontend (all of the above)
//!
//! ==============================================================================

pub mod config;
pub mod content;
pub mod feed;
pub mod markdown;
pub mod post;
pub mod toast;
pub mod upload;

pub use config::ApiConfig;
pub use content::{BodyState, ContentMap, BODY_ERROR_TEXT};
pub use feed::{BlogFeed, FeedPhase, PostWindow, LIST_ERROR_TEXT};
pub use post::{Author, BlogPost, Category};
pub use toast::{Toast, ToastKind, ToastList};
pub use upload::{FormField, SubmitBlocked, SubmitOutcome, SubmitPhase, UploadForm, UploadState};
