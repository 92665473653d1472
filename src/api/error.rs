//! Error taxonomy for the Twist API client

use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

/// Every way a client call can fail.
///
/// Nothing here is retried; callers see the error exactly as classified.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, TLS, refused, reset).
    #[error("request to {url} failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Bad local input, rejected before any request was sent.
    #[error("{0}")]
    Validation(String),

    /// The service answered with its structured `{"error": [code, message]}` body.
    ///
    /// `code` is the first element as sent, usually an integer.
    #[error("API error {code}: {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    /// Non-200 response whose body is not the structured error shape.
    #[error("API request failed with status {status}: {body}")]
    Http { status: u16, body: String },

    /// 200 response whose body does not decode into the expected type.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Local file I/O during upload or download.
    #[error("failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ApiError {
    /// HTTP status of a remote failure, if the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } | ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ApiError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

/// Wire shape of the service's error body: `{"error": [code, message, ...]}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Vec<serde_json::Value>,
}

fn render(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Classify a non-200 response body.
///
/// Any non-empty `error` array is the structured shape; anything else falls
/// back to the raw status and text.
pub(crate) fn classify_failure(status: u16, body: &[u8]) -> ApiError {
    if let Ok(parsed) = serde_json::from_slice::<ErrorBody>(body) {
        if let Some(code) = parsed.error.first() {
            return ApiError::Api {
                status,
                code: render(code),
                message: parsed.error.get(1).map(render).unwrap_or_default(),
            };
        }
    }

    ApiError::Http {
        status,
        body: String::from_utf8_lossy(body).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_error_body() {
        let err = classify_failure(400, br#"{"error": [42, "bad thing"]}"#);
        match err {
            ApiError::Api {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 400);
                assert_eq!(code, "42");
                assert_eq!(message, "bad thing");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_structured_error_extra_elements_ignored() {
        let err = classify_failure(403, br#"{"error": [7, "denied", {"field": "id"}]}"#);
        assert_eq!(err.to_string(), "API error 7: denied");
        assert_eq!(err.status(), Some(403));
    }

    #[test]
    fn test_unparseable_body_keeps_raw_text() {
        let err = classify_failure(502, b"not json");
        match err {
            ApiError::Http { status, body } => {
                assert_eq!(status, 502);
                assert_eq!(body, "not json");
            }
            other => panic!("expected Http error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_error_array_falls_back() {
        let err = classify_failure(500, br#"{"error": []}"#);
        assert!(matches!(err, ApiError::Http { status: 500, .. }));
    }

    #[test]
    fn test_string_code_is_still_structured() {
        let err = classify_failure(404, br#"{"error": ["oops", "missing"]}"#);
        match err {
            ApiError::Api {
                status,
                ref code,
                ref message,
            } => {
                assert_eq!(status, 404);
                assert_eq!(code, "oops");
                assert_eq!(message, "missing");
            }
            ref other => panic!("expected Api error, got {:?}", other),
        }
        assert_eq!(err.to_string(), "API error oops: missing");
    }

    #[test]
    fn test_float_code_and_object_message() {
        let err = classify_failure(400, br#"{"error": [42.0, {"field": "id"}]}"#);
        assert!(matches!(err, ApiError::Api { status: 400, .. }), "got {:?}", err);
        assert_eq!(err.to_string(), r#"API error 42.0: {"field":"id"}"#);
    }

    #[test]
    fn test_code_without_message() {
        let err = classify_failure(500, br#"{"error": [17]}"#);
        match err {
            ApiError::Api { code, message, .. } => {
                assert_eq!(code, "17");
                assert!(message.is_empty());
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }
}
