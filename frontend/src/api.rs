//! ==============================================================================
//! api.rs - HTTP client for the blog api
//! ==============================================================================
//!
//! api:
//!     GET  {api}/getAllBlogs.php      -> json array of posts
//!     GET  {uploads}/{file}           -> raw markdown
//!     POST {api}/upload.php           -> {"success": ..} | {"error": ..}
//!
//! non-2xx statuses are reported as errors, same as a dropped connection.
//! no retries, no timeouts beyond the browser's own.
//!
//! ==============================================================================

use gloo_net::http::{Request, Response};
use leptos::logging::log;
use shared::{ApiConfig, BlogPost, FormField, SubmitOutcome, UploadForm};
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

// ==============================================================================
// errors
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// transport failure, or the request could not be built
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected http status {0}")]
    Status(u16),
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

impl ApiError {
    fn js(value: JsValue) -> Self {
        ApiError::Network(format!("{value:?}"))
    }
}

fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status(response.status()))
    }
}

// ==============================================================================
// list view
// ==============================================================================

/// fetch metadata for every post
pub async fn fetch_blogs(config: &ApiConfig) -> Result<Vec<BlogPost>, ApiError> {
    let response = Request::get(&config.blogs_url()).send().await?;
    let posts = ensure_ok(response)?.json::<Vec<BlogPost>>().await?;
    Ok(posts)
}

/// fetch one post's markdown body
pub async fn fetch_body(config: &ApiConfig, file: &str) -> Result<String, ApiError> {
    let response = Request::get(&config.body_url(file)).send().await?;
    let text = ensure_ok(response)?.text().await?;
    Ok(text)
}

// ==============================================================================
// upload view
// ==============================================================================

/// build the multipart payload
///
/// the file part is skipped when no file is selected.
pub fn multipart(form: &UploadForm<File>) -> Result<FormData, ApiError> {
    let data = FormData::new().map_err(ApiError::js)?;
    for (name, value) in form.text_parts() {
        data.append_with_str(name, value).map_err(ApiError::js)?;
    }
    if let Some(file) = &form.md_file {
        data.append_with_blob_and_filename(FormField::MdFile.name(), file, &file.name())
            .map_err(ApiError::js)?;
    }
    Ok(data)
}

/// post a prepared payload and classify the reply
///
/// an application-level rejection is `Ok(SubmitOutcome::Rejected(..))`.
pub async fn upload_post(config: &ApiConfig, body: FormData) -> Result<SubmitOutcome, ApiError> {
    // the browser fills in the multipart boundary when no content-type is set
    let response = Request::post(&config.upload_url()).body(body)?.send().await?;
    let response = ensure_ok(response)?;

    let status = response.status();
    let text = response.text().await?;
    log!("upload response: {status} {text}");

    Ok(SubmitOutcome::from_reply(status, &text))
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gloo_errors_map_to_taxonomy() {
        let err: ApiError = gloo_net::Error::GlooError("failed to fetch".into()).into();
        assert!(matches!(err, ApiError::Network(ref msg) if msg.contains("failed to fetch")));

        let serde_err = serde_json_error();
        let err: ApiError = gloo_net::Error::SerdeError(serde_err).into();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ApiError::Status(500).to_string(), "unexpected http status 500");
        assert_eq!(
            ApiError::Network("offline".into()).to_string(),
            "network error: offline"
        );
    }

    fn serde_json_error() -> serde_json::Error {
        serde_json::from_str::<Vec<BlogPost>>("not json").unwrap_err()
    }
}
