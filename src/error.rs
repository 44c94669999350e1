use serde_json::{json, Value};
use thiserror::Error;

/// Dictionary error types
///
/// Every failure is scoped to a single call and reaches the caller unchanged;
/// invalid caller input (malformed filters, bad pagination) is never an error.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// The backend answered with a non-success status. Holds the backend's own
    /// JSON error body, or a synthesized `{status, error}` object when the body
    /// was not JSON.
    #[error("Backend error: {0}")]
    Backend(Value),

    /// A response body that could not be parsed, or that lacks the
    /// `response.docs` shape
    #[error("Malformed JSON response: {0}")]
    MalformedJson(#[from] serde_json::Error),

    /// The request never produced a response
    #[error("Transport error: {0}")]
    Transport(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl DictionaryError {
    /// Build the error synthesized for a non-JSON, non-success response
    pub fn from_status(status: u16, body: &str) -> Self {
        DictionaryError::Backend(json!({
            "status": status,
            "error": body,
        }))
    }

    /// Get error code string
    pub fn error_code(&self) -> &str {
        match self {
            DictionaryError::Backend(_) => "BACKEND_ERROR",
            DictionaryError::MalformedJson(_) => "MALFORMED_JSON",
            DictionaryError::Transport(_) => "TRANSPORT_ERROR",
            DictionaryError::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// The verbatim backend payload, if this is a backend error
    pub fn backend_payload(&self) -> Option<&Value> {
        match self {
            DictionaryError::Backend(payload) => Some(payload),
            _ => None,
        }
    }

    /// JSON rendering used by the CLI; backend payloads pass through as-is
    pub fn to_json(&self) -> Value {
        match self {
            DictionaryError::Backend(payload) => payload.clone(),
            other => json!({
                "error": {
                    "code": other.error_code(),
                    "message": other.to_string(),
                }
            }),
        }
    }
}

/// Conversion from reqwest::Error
impl From<reqwest::Error> for DictionaryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            DictionaryError::Transport(format!("Failed to connect to backend: {}", err))
        } else {
            DictionaryError::Transport(format!("Backend request failed: {}", err))
        }
    }
}

/// Conversion from config::ConfigError
impl From<config::ConfigError> for DictionaryError {
    fn from(err: config::ConfigError) -> Self {
        DictionaryError::Configuration(err.to_string())
    }
}

/// Result type alias
pub type DictionaryResult<T> = std::result::Result<T, DictionaryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            DictionaryError::Backend(json!({})).error_code(),
            "BACKEND_ERROR"
        );
        assert_eq!(
            DictionaryError::Transport("down".to_string()).error_code(),
            "TRANSPORT_ERROR"
        );
        assert_eq!(
            DictionaryError::Configuration("bad".to_string()).error_code(),
            "CONFIGURATION_ERROR"
        );
    }

    #[test]
    fn test_from_status_keeps_raw_body_as_string() {
        let err = DictionaryError::from_status(404, "<h1>Not Found</h1>");
        assert_eq!(
            err.backend_payload(),
            Some(&json!({ "status": 404, "error": "<h1>Not Found</h1>" }))
        );
    }

    #[test]
    fn test_backend_payload_passes_through_to_json() {
        let payload = json!({ "responseHeader": { "status": 400 }, "error": { "msg": "undefined field" } });
        let err = DictionaryError::Backend(payload.clone());
        assert_eq!(err.to_json(), payload);

        let err = DictionaryError::Transport("connection refused".to_string());
        assert_eq!(err.to_json()["error"]["code"], "TRANSPORT_ERROR");
    }

    #[test]
    fn test_malformed_json_conversion() {
        let parse_err = serde_json::from_str::<Value>("not json").unwrap_err();
        let err: DictionaryError = parse_err.into();
        assert!(matches!(err, DictionaryError::MalformedJson(_)));
        assert!(err.backend_payload().is_none());
    }
}
