//! ==============================================================================
//! upload.rs - upload form state machine
//! ==============================================================================
//!
//! purpose:
//!     holds the upload form's fields, decides whether a submit may start,
//!     and turns the server's reply into an outcome the view can act on.
//!
//! state machine:
//!     Editing -> Submitting -> { Accepted, Rejected, Failed } -> Editing
//!
//! Accepted clears the form. Rejected and Failed keep what the user typed
//! so the submit can be repeated. A submit while already Submitting is
//! refused.
//!
//! wire format:
//!     POST upload.php, multipart fields title, description, author,
//!     category, mdFile. the reply is json: {"success": "..."} or
//!     {"error": "..."}, both with http 200.
//!
//! relationships:
//!     - uses: post (Author, Category), toast (ToastKind)
//!     - used by: frontend UploadPage and api::upload_post
//!
//! ==============================================================================

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::post::{Author, Category};
use crate::toast::ToastKind;

/// the only `success` value that counts as an accepted upload
pub const SUCCESS_MARKER: &str = "File uploaded successfully";

/// shown when a rejection carries no message, and on transport failure
pub const UPLOAD_FAILED_TEXT: &str = "Upload failed";

// ==============================================================================
// fields
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    Author,
    Category,
    MdFile,
}

impl FormField {
    /// multipart part name
    pub fn name(self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Description => "description",
            FormField::Author => "author",
            FormField::Category => "category",
            FormField::MdFile => "mdFile",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Description => "Description",
            FormField::Author => "Author",
            FormField::Category => "Category",
            FormField::MdFile => "Markdown file",
        }
    }
}

/// what the user has entered so far
///
/// `F` is the file handle; the browser uses `web_sys::File`.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadForm<F> {
    pub title: String,
    pub description: String,
    pub author: Option<Author>,
    pub category: Option<Category>,
    pub md_file: Option<F>,
}

impl<F> Default for UploadForm<F> {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            author: None,
            category: None,
            md_file: None,
        }
    }
}

impl<F> UploadForm<F> {
    pub fn set_title(&mut self, value: impl Into<String>) {
        self.title = value.into();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
    }

    pub fn set_author(&mut self, author: Option<Author>) {
        self.author = author;
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.category = category;
    }

    /// an empty file picker selection leaves the previous file in place
    pub fn set_file(&mut self, file: Option<F>) {
        if file.is_some() {
            self.md_file = file;
        }
    }

    /// required fields that are still empty, in form order
    ///
    /// whitespace-only text counts as empty, and both selects are required.
    pub fn missing_fields(&self) -> Vec<FormField> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push(FormField::Title);
        }
        if self.description.trim().is_empty() {
            missing.push(FormField::Description);
        }
        if self.author.is_none() {
            missing.push(FormField::Author);
        }
        if self.category.is_none() {
            missing.push(FormField::Category);
        }
        if self.md_file.is_none() {
            missing.push(FormField::MdFile);
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// the four text parts of the multipart payload, in wire order
    pub fn text_parts(&self) -> [(&'static str, &str); 4] {
        [
            (FormField::Title.name(), self.title.as_str()),
            (FormField::Description.name(), self.description.as_str()),
            (FormField::Author.name(), self.author.map(Author::as_str).unwrap_or("")),
            (FormField::Category.name(), self.category.map(Category::as_str).unwrap_or("")),
        ]
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// ==============================================================================
// server reply
// ==============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
struct UploadReply {
    #[serde(default)]
    success: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// how a submit ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// server stored the post; carries the server's message
    Accepted(String),
    /// server answered but refused; carries the server's message verbatim
    Rejected(String),
    /// request never got a usable answer
    Failed,
}

impl SubmitOutcome {
    /// classify a reply that made it back over http
    pub fn from_reply(status: u16, body: &str) -> Self {
        let reply: UploadReply = serde_json::from_str(body).unwrap_or_default();

        match reply.success {
            Some(msg) if status == 200 && msg == SUCCESS_MARKER => SubmitOutcome::Accepted(msg),
            _ => SubmitOutcome::Rejected(
                reply
                    .error
                    .filter(|e| !e.is_empty())
                    .unwrap_or_else(|| UPLOAD_FAILED_TEXT.to_string()),
            ),
        }
    }

    /// pause before the result is shown
    pub fn settle_delay(&self) -> Duration {
        match self {
            SubmitOutcome::Accepted(_) => Duration::from_millis(2000),
            SubmitOutcome::Rejected(_) => Duration::from_millis(1000),
            SubmitOutcome::Failed => Duration::ZERO,
        }
    }

    /// whether the form, including the file picker, is reset
    pub fn clears_form(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }

    /// notification for this outcome
    pub fn notice(&self) -> (ToastKind, String) {
        match self {
            SubmitOutcome::Accepted(msg) => (ToastKind::Success, msg.clone()),
            SubmitOutcome::Rejected(msg) => (ToastKind::Error, msg.clone()),
            SubmitOutcome::Failed => (ToastKind::Error, UPLOAD_FAILED_TEXT.to_string()),
        }
    }
}

// ==============================================================================
// submit state
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Editing,
    Submitting,
}

/// why a submit did not start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitBlocked {
    #[error("an upload is already in progress")]
    InFlight,
    #[error("{} is required", .0.label())]
    Missing(FormField),
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadState<F> {
    form: UploadForm<F>,
    phase: SubmitPhase,
}

impl<F> Default for UploadState<F> {
    fn default() -> Self {
        Self { form: UploadForm::default(), phase: SubmitPhase::Editing }
    }
}

impl<F> UploadState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &UploadForm<F> {
        &self.form
    }

    /// field edits are applied immediately, even mid-submit
    pub fn form_mut(&mut self) -> &mut UploadForm<F> {
        &mut self.form
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_submitting() { "Loading..." } else { "Upload" }
    }

    /// move to Submitting and hand back the form to send
    pub fn begin_submit(&mut self) -> Result<&UploadForm<F>, SubmitBlocked> {
        if self.is_submitting() {
            return Err(SubmitBlocked::InFlight);
        }
        if let Some(field) = self.form.missing_fields().into_iter().next() {
            return Err(SubmitBlocked::Missing(field));
        }
        self.phase = SubmitPhase::Submitting;
        Ok(&self.form)
    }

    /// settle a submit and return to Editing
    pub fn finish(&mut self, outcome: &SubmitOutcome) {
        if outcome.clears_form() {
            self.form.clear();
        }
        self.phase = SubmitPhase::Editing;
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// stand-in for a browser file handle
    #[derive(Debug, Clone, PartialEq)]
    struct FakeFile(&'static str);

    fn filled() -> UploadState<FakeFile> {
        let mut state = UploadState::new();
        let form = state.form_mut();
        form.set_title("Ownership");
        form.set_description("borrowing explained");
        form.set_author(Some(Author::Neeraj));
        form.set_category(Some(Category::WebDevelopment));
        form.set_file(Some(FakeFile("ownership.md")));
        state
    }

    #[test]
    fn test_accepted_upload_clears_form() {
        let mut state = filled();
        assert!(state.begin_submit().is_ok());
        assert_eq!(state.button_label(), "Loading...");

        let outcome = SubmitOutcome::from_reply(200, r#"{"success":"File uploaded successfully"}"#);
        assert_eq!(outcome, SubmitOutcome::Accepted(SUCCESS_MARKER.into()));
        assert_eq!(outcome.notice(), (ToastKind::Success, SUCCESS_MARKER.to_string()));

        state.finish(&outcome);
        assert_eq!(state.form(), &UploadForm::default());
        assert_eq!(state.phase(), SubmitPhase::Editing);
        assert_eq!(state.button_label(), "Upload");
    }

    #[test]
    fn test_rejected_upload_keeps_values() {
        let mut state = filled();
        let before = state.form().clone();
        state.begin_submit().unwrap();

        let outcome = SubmitOutcome::from_reply(200, r#"{"error":"Only .md files are allowed"}"#);
        assert_eq!(
            outcome.notice(),
            (ToastKind::Error, "Only .md files are allowed".to_string())
        );

        state.finish(&outcome);
        assert_eq!(state.form(), &before);
        assert!(!state.is_submitting());
    }

    #[test]
    fn test_failed_upload_keeps_values() {
        let mut state = filled();
        let before = state.form().clone();
        state.begin_submit().unwrap();
        state.finish(&SubmitOutcome::Failed);

        assert_eq!(state.form(), &before);
        assert_eq!(SubmitOutcome::Failed.settle_delay(), Duration::ZERO);
        assert_eq!(SubmitOutcome::Failed.notice().1, "Upload failed");
    }

    #[test]
    fn test_reentrant_submit_refused() {
        let mut state = filled();
        state.begin_submit().unwrap();
        assert_eq!(state.begin_submit().unwrap_err(), SubmitBlocked::InFlight);
    }

    #[test]
    fn test_missing_fields_block_submit() {
        let mut state: UploadState<FakeFile> = UploadState::new();
        assert_eq!(
            state.form().missing_fields(),
            vec![
                FormField::Title,
                FormField::Description,
                FormField::Author,
                FormField::Category,
                FormField::MdFile,
            ]
        );
        let err = state.begin_submit().unwrap_err();
        assert_eq!(err, SubmitBlocked::Missing(FormField::Title));
        assert_eq!(err.to_string(), "Title is required");
        assert_eq!(state.phase(), SubmitPhase::Editing);

        let mut state = filled();
        state.form_mut().md_file = None;
        assert_eq!(state.begin_submit().unwrap_err(), SubmitBlocked::Missing(FormField::MdFile));
    }

    #[test]
    fn test_success_marker_must_match() {
        let outcome = SubmitOutcome::from_reply(200, r#"{"success":"ok"}"#);
        assert_eq!(outcome, SubmitOutcome::Rejected(UPLOAD_FAILED_TEXT.into()));

        let outcome = SubmitOutcome::from_reply(201, r#"{"success":"File uploaded successfully"}"#);
        assert!(matches!(outcome, SubmitOutcome::Rejected(_)));

        let outcome = SubmitOutcome::from_reply(200, "<b>Warning</b>: not json");
        assert_eq!(outcome, SubmitOutcome::Rejected(UPLOAD_FAILED_TEXT.into()));
    }

    #[test]
    fn test_settle_delays() {
        assert_eq!(SubmitOutcome::Accepted(String::new()).settle_delay(), Duration::from_secs(2));
        assert_eq!(SubmitOutcome::Rejected(String::new()).settle_delay(), Duration::from_secs(1));
    }

    #[test]
    fn test_text_parts_order() {
        let state = filled();
        assert_eq!(
            state.form().text_parts(),
            [
                ("title", "Ownership"),
                ("description", "borrowing explained"),
                ("author", "Neeraj"),
                ("category", "Web Development"),
            ]
        );
        assert_eq!(FormField::MdFile.name(), "mdFile");
    }

    #[test]
    fn test_only_accepted_clears_file_picker() {
        assert!(SubmitOutcome::Accepted(SUCCESS_MARKER.into()).clears_form());
        assert!(!SubmitOutcome::Rejected("too large".into()).clears_form());
        assert!(!SubmitOutcome::Failed.clears_form());

        let mut state = filled();
        state.begin_submit().unwrap();
        state.finish(&SubmitOutcome::Accepted(SUCCESS_MARKER.into()));
        assert_eq!(state.form().md_file, None);
    }

    #[test]
    fn test_whitespace_title_is_missing() {
        let mut state = filled();
        state.form_mut().set_title("   ");
        assert_eq!(state.begin_submit().unwrap_err(), SubmitBlocked::Missing(FormField::Title));
    }

    #[test]
    fn test_empty_file_selection_keeps_previous() {
        let mut form: UploadForm<FakeFile> = UploadForm::default();
        form.set_file(Some(FakeFile("a.md")));
        form.set_file(None);
        assert_eq!(form.md_file, Some(FakeFile("a.md")));
    }
}
