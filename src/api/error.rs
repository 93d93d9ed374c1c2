//! # API Error Type
//!
//! A single error type shared by every remote operation. The service the
//! client talks to reports failures as JSON bodies carrying either a
//! top-level `message` or an `errors` array of `{message}` objects; this
//! module extracts whichever is present so callers always see one shape.

use thiserror::Error;

/// Unified failure type for all API client operations.
///
/// Every operation returns `Result<T, ApiError>` regardless of whether it
/// reads or writes, so callers handle exactly one convention.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (DNS, TLS, connection reset).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("{message} (status {status})")]
    Api { status: u16, message: String },

    /// The response body could not be decoded into the expected shape.
    #[error("could not decode response body: {0}")]
    Decode(String),

    /// The operation requires authentication but no token is configured.
    #[error("not logged in")]
    NotLoggedIn,
}

impl ApiError {
    /// Build an `Api` error from a status code and a raw response body.
    ///
    /// Prefers the service's own `message` field, then the first entry of an
    /// `errors` array, then a generic fallback.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = extract_message(body)
            .unwrap_or_else(|| format!("request failed with status {status}"));
        ApiError::Api { status, message }
    }

    /// True when the failure came from the service as an HTTP status.
    pub fn is_api(&self) -> bool {
        matches!(self, ApiError::Api { .. })
    }

    /// Status code of an `Api` failure, if that is what this is.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Pull a human-readable message out of a service error body.
fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;

    if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
        return Some(message.to_string());
    }

    value
        .get("errors")
        .and_then(|e| e.as_array())
        .and_then(|a| a.first())
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
        .map(|m| m.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_response_should_extract_top_level_message() {
        let err = ApiError::from_response(400, r#"{"message": "Title is required"}"#);
        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Title is required");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn from_response_should_extract_errors_array_message() {
        let body = r#"{"errors": [{"message": "Invalid email or password"}], "status": "Unauthorized"}"#;
        let err = ApiError::from_response(401, body);
        assert_eq!(err.status(), Some(401));
        assert!(err.to_string().contains("Invalid email or password"));
    }

    #[test]
    fn from_response_should_fall_back_on_unparseable_body() {
        let err = ApiError::from_response(502, "<html>Bad Gateway</html>");
        assert!(err.to_string().contains("status 502"));
    }

    #[test]
    fn not_logged_in_is_not_an_api_error() {
        assert!(!ApiError::NotLoggedIn.is_api());
        assert_eq!(ApiError::NotLoggedIn.status(), None);
    }
}
