//! Application-level errors for the HTTP boundary, plus extraction of the
//! service's own message out of a JSON error body.

use std::fmt;

#[derive(Clone, Debug)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

/// Pulls the human-readable message out of a service error body. The auth
/// endpoints answer with `msg`, the data endpoints with `message`, and
/// OAuth-shaped failures with `error_description`/`error`; the first
/// non-empty one wins. Returns `None` for non-JSON bodies.
pub fn service_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body.trim()).ok()?;
    for key in ["msg", "message", "error_description", "error"] {
        if let Some(text) = value.get(key).and_then(|entry| entry.as_str()) {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::service_message;

    #[test]
    fn prefers_msg_then_message() {
        assert_eq!(
            service_message(r#"{"code":403,"msg":"Token has expired or is invalid"}"#).as_deref(),
            Some("Token has expired or is invalid")
        );
        assert_eq!(
            service_message(r#"{"message":"duplicate key value","code":"23505"}"#).as_deref(),
            Some("duplicate key value")
        );
    }

    #[test]
    fn falls_back_to_oauth_shapes() {
        assert_eq!(
            service_message(r#"{"error":"invalid_grant","error_description":"Email link is invalid"}"#)
                .as_deref(),
            Some("Email link is invalid")
        );
        assert_eq!(
            service_message(r#"{"error":"invalid_grant"}"#).as_deref(),
            Some("invalid_grant")
        );
    }

    #[test]
    fn non_json_and_empty_fields_yield_none() {
        assert_eq!(service_message("<html>502</html>"), None);
        assert_eq!(service_message(""), None);
        assert_eq!(service_message(r#"{"msg":"  "}"#), None);
        assert_eq!(service_message(r#"{"code":500}"#), None);
    }
}
