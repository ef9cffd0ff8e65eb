//! API types shared between the announcements server and the web frontend.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

/// Prefix under which the server mounts the JSON API.
pub const API_PREFIX: &str = "/api";

/// Bytes escaped in a path segment: everything except RFC 3986 unreserved
/// characters.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Error body returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable message
    pub error: String,
    /// Machine-readable code, e.g. `NOT_FOUND`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ApiError {
    /// Create an error without a code.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: None,
        }
    }

    /// Create an error with a machine-readable code.
    pub fn with_code(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: Some(code.into()),
        }
    }
}

/// Path of a company's announcement collection, relative to the API prefix.
///
/// The handle is percent-encoded so it always stays a single path segment.
pub fn announcements_path(handle: &str) -> String {
    format!(
        "/company/{}/announcements",
        utf8_percent_encode(handle, PATH_SEGMENT)
    )
}

/// Full URL of a company's announcement collection under `api_base`.
pub fn announcements_url(api_base: &str, handle: &str) -> String {
    format!(
        "{}{}",
        api_base.trim_end_matches('/'),
        announcements_path(handle)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_announcements_path() {
        assert_eq!(announcements_path("acme"), "/company/acme/announcements");
    }

    #[test]
    fn test_announcements_path_encodes_handle() {
        assert_eq!(
            announcements_path("a/b?c#d%e"),
            "/company/a%2Fb%3Fc%23d%25e/announcements"
        );
        assert_eq!(
            announcements_path("acme corp"),
            "/company/acme%20corp/announcements"
        );
        assert_eq!(
            announcements_path("my-co_1.x~"),
            "/company/my-co_1.x~/announcements"
        );
    }

    #[test]
    fn test_announcements_url_joins_base() {
        assert_eq!(
            announcements_url("/api", "7"),
            "/api/company/7/announcements"
        );
        assert_eq!(
            announcements_url("http://localhost:5970/api/", "acme"),
            "http://localhost:5970/api/company/acme/announcements"
        );
        assert_eq!(announcements_url("", "acme"), "/company/acme/announcements");
    }

    #[test]
    fn test_api_error_serialization() {
        let err = ApiError::with_code("Company not found", "NOT_FOUND");
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"error":"Company not found","code":"NOT_FOUND"}"#);

        let plain = serde_json::to_string(&ApiError::new("boom")).unwrap();
        assert_eq!(plain, r#"{"error":"boom"}"#);

        let parsed: ApiError = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();
        assert_eq!(parsed, ApiError::new("boom"));
    }
}
