//! HTTP client for the announcements API.

use core_types::Announcement;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;
use web_types::{ApiError, announcements_url};

/// Base URL of the API when none is configured.
pub const DEFAULT_API_BASE: &str = web_types::API_PREFIX;

/// Errors from API requests.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] gloo_net::Error),

    #[error("server responded {status}: {message}")]
    Status { status: u16, message: String },
}

/// Result type for API requests.
pub type Result<T> = std::result::Result<T, FetchError>;

/// GET a JSON document, turning non-2xx responses into `FetchError::Status`.
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T> {
    let resp = Request::get(url).send().await?;

    if !resp.ok() {
        let body = resp.json::<ApiError>().await.ok();
        return Err(status_error(resp.status(), resp.status_text(), body));
    }

    Ok(resp.json::<T>().await?)
}

/// Build the error for a non-2xx response, preferring the server's
/// `ApiError` message over the HTTP status text.
fn status_error(status: u16, status_text: String, body: Option<ApiError>) -> FetchError {
    let message = match body {
        Some(err) => err.error,
        None => status_text,
    };
    FetchError::Status { status, message }
}

/// Fetch a company's announcements.
pub async fn fetch_announcements(api_base: &str, handle: &str) -> Result<Vec<Announcement>> {
    get_json(&announcements_url(api_base, handle)).await
}

/// Fetch the handles of all known companies.
pub async fn fetch_companies(api_base: &str) -> Result<Vec<String>> {
    get_json(&format!("{}/companies", api_base.trim_end_matches('/'))).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_prefers_api_error_body() {
        let body = ApiError::with_code("A company with the provided id does not exist.", "NOT_FOUND");

        let err = status_error(404, "Not Found".to_string(), Some(body));

        assert!(matches!(
            err,
            FetchError::Status { status: 404, ref message }
                if message == "A company with the provided id does not exist."
        ));
    }

    #[test]
    fn test_status_error_falls_back_to_status_text() {
        let err = status_error(502, "Bad Gateway".to_string(), None);

        assert!(matches!(
            err,
            FetchError::Status { status: 502, ref message } if message == "Bad Gateway"
        ));
    }

    #[test]
    fn test_status_error_message() {
        let err = FetchError::Status {
            status: 404,
            message: "A company with the provided id does not exist.".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "server responded 404: A company with the provided id does not exist."
        );
    }
}
