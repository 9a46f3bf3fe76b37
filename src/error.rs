//! Error types for the Freshdesk client.
//!
//! This module defines `FreshdeskError`, the unified error type returned by
//! the dispatcher and every resource accessor.
//!
//! HTTP error statuses map onto dedicated variants through
//! [`FreshdeskError::from_status`]. Each of those variants keeps the
//! response body so callers can inspect the API's error details.
//!
//! # Security
//!
//! Error messages built from transport failures may echo request details.
//! Use `sanitize_message()` before logging anything that could contain the
//! API key.

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

/// Unified error type for all Freshdesk operations.
#[derive(Error, Debug)]
pub enum FreshdeskError {
    /// Configuration error - missing or invalid API key or domain.
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP client initialization failed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// HTTP request failed before a response was received.
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// HTTP 401: the API key was rejected.
    #[error("authentication failed - check the Freshdesk API key")]
    Authentication {
        /// The response body.
        body: String,
    },

    /// HTTP 403: the authenticated agent lacks permission.
    #[error("access denied: {body}")]
    AccessDenied {
        /// The response body.
        body: String,
    },

    /// HTTP 404: the resource does not exist.
    #[error("resource not found: {body}")]
    NotFound {
        /// The response body.
        body: String,
    },

    /// HTTP 405: the endpoint does not support the method.
    #[error("method not allowed: {body}")]
    MethodNotAllowed {
        /// The response body.
        body: String,
    },

    /// HTTP 406: the API cannot produce the requested content type.
    #[error("unsupported accept header: {body}")]
    UnsupportedAcceptHeader {
        /// The response body.
        body: String,
    },

    /// HTTP 409: the resource is in a state that conflicts with the request.
    #[error("conflicting state: {body}")]
    ConflictingState {
        /// The response body.
        body: String,
    },

    /// HTTP 415: the request body encoding was not accepted.
    #[error("unsupported content type: {body}")]
    UnsupportedContentType {
        /// The response body.
        body: String,
    },

    /// HTTP 429: the account's rate limit was exceeded.
    #[error("rate limit exceeded - please wait before retrying")]
    RateLimitExceeded {
        /// Delay suggested by the `Retry-After` header, if present.
        retry_after: Option<Duration>,
        /// The response body.
        body: String,
    },

    /// HTTP 422: the payload failed validation.
    #[error("validation failed: {body}")]
    Validation {
        /// The response body, usually listing the offending fields.
        body: String,
    },

    /// Any other non-success HTTP status.
    #[error("API error {status}: {body}")]
    Api {
        /// The HTTP status code returned.
        status: StatusCode,
        /// The response body.
        body: String,
    },

    /// JSON serialization or deserialization failed.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An `attachments` entry could not be turned into a multipart file part.
    #[error("invalid attachment: {0}")]
    InvalidAttachment(String),
}

impl FreshdeskError {
    /// Creates a configuration error for a missing environment variable.
    pub fn missing_env(var_name: &str) -> Self {
        FreshdeskError::Config(format!(
            "missing required environment variable: {}",
            var_name
        ))
    }

    /// Creates a configuration error for an invalid value.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        FreshdeskError::Config(message.into())
    }

    /// Creates an invalid attachment error.
    pub fn invalid_attachment(message: impl Into<String>) -> Self {
        FreshdeskError::InvalidAttachment(message.into())
    }

    /// Maps a non-success HTTP status to its error kind.
    ///
    /// The body is preserved verbatim. `retry_after` is only kept for 429.
    pub fn from_status(
        status: StatusCode,
        body: impl Into<String>,
        retry_after: Option<Duration>,
    ) -> Self {
        let body = body.into();
        match status.as_u16() {
            401 => FreshdeskError::Authentication { body },
            403 => FreshdeskError::AccessDenied { body },
            404 => FreshdeskError::NotFound { body },
            405 => FreshdeskError::MethodNotAllowed { body },
            406 => FreshdeskError::UnsupportedAcceptHeader { body },
            409 => FreshdeskError::ConflictingState { body },
            415 => FreshdeskError::UnsupportedContentType { body },
            422 => FreshdeskError::Validation { body },
            429 => FreshdeskError::RateLimitExceeded { retry_after, body },
            _ => FreshdeskError::Api { status, body },
        }
    }

    /// Returns the HTTP status this error was derived from, if any.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FreshdeskError::Authentication { .. } => Some(StatusCode::UNAUTHORIZED),
            FreshdeskError::AccessDenied { .. } => Some(StatusCode::FORBIDDEN),
            FreshdeskError::NotFound { .. } => Some(StatusCode::NOT_FOUND),
            FreshdeskError::MethodNotAllowed { .. } => Some(StatusCode::METHOD_NOT_ALLOWED),
            FreshdeskError::UnsupportedAcceptHeader { .. } => Some(StatusCode::NOT_ACCEPTABLE),
            FreshdeskError::ConflictingState { .. } => Some(StatusCode::CONFLICT),
            FreshdeskError::UnsupportedContentType { .. } => {
                Some(StatusCode::UNSUPPORTED_MEDIA_TYPE)
            }
            FreshdeskError::Validation { .. } => Some(StatusCode::UNPROCESSABLE_ENTITY),
            FreshdeskError::RateLimitExceeded { .. } => Some(StatusCode::TOO_MANY_REQUESTS),
            FreshdeskError::Api { status, .. } => Some(*status),
            FreshdeskError::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Returns the response body carried by a status-derived error.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            FreshdeskError::Authentication { body }
            | FreshdeskError::AccessDenied { body }
            | FreshdeskError::NotFound { body }
            | FreshdeskError::MethodNotAllowed { body }
            | FreshdeskError::UnsupportedAcceptHeader { body }
            | FreshdeskError::ConflictingState { body }
            | FreshdeskError::UnsupportedContentType { body }
            | FreshdeskError::Validation { body }
            | FreshdeskError::RateLimitExceeded { body, .. }
            | FreshdeskError::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Returns true if this is a rate limit error.
    #[must_use]
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, FreshdeskError::RateLimitExceeded { .. })
    }

    /// Returns the delay the server asked for before the next request, if any.
    #[must_use]
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            FreshdeskError::RateLimitExceeded { retry_after, .. } => *retry_after,
            _ => None,
        }
    }

    /// Sanitizes an error message to remove any occurrence of the API key.
    ///
    /// # Arguments
    ///
    /// * `message` - The message to sanitize
    /// * `api_key` - The API key to strip from the message
    ///
    /// # Returns
    ///
    /// The message with any occurrence of the API key replaced with `[REDACTED]`
    #[must_use]
    pub fn sanitize_message(message: &str, api_key: &str) -> String {
        if api_key.is_empty() {
            return message.to_string();
        }
        message.replace(api_key, "[REDACTED]")
    }

    /// Creates a sanitized version of this error's display message.
    #[must_use]
    pub fn sanitized_display(&self, api_key: &str) -> String {
        Self::sanitize_message(&self.to_string(), api_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kind(code: u16) -> FreshdeskError {
        let status = StatusCode::from_u16(code).unwrap();
        FreshdeskError::from_status(status, "{\"code\":\"x\"}", None)
    }

    #[test]
    fn test_missing_env_error() {
        let err = FreshdeskError::missing_env("FRESHDESK_API_KEY");
        assert!(err.to_string().contains("FRESHDESK_API_KEY"));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_from_status_maps_documented_codes() {
        assert!(matches!(kind(401), FreshdeskError::Authentication { .. }));
        assert!(matches!(kind(403), FreshdeskError::AccessDenied { .. }));
        assert!(matches!(kind(404), FreshdeskError::NotFound { .. }));
        assert!(matches!(kind(405), FreshdeskError::MethodNotAllowed { .. }));
        assert!(matches!(
            kind(406),
            FreshdeskError::UnsupportedAcceptHeader { .. }
        ));
        assert!(matches!(kind(409), FreshdeskError::ConflictingState { .. }));
        assert!(matches!(
            kind(415),
            FreshdeskError::UnsupportedContentType { .. }
        ));
        assert!(matches!(kind(422), FreshdeskError::Validation { .. }));
        assert!(matches!(
            kind(429),
            FreshdeskError::RateLimitExceeded { .. }
        ));
    }

    #[test]
    fn test_from_status_falls_back_to_api_error() {
        for code in [400, 500, 502, 503] {
            match kind(code) {
                FreshdeskError::Api { status, body } => {
                    assert_eq!(status.as_u16(), code);
                    assert_eq!(body, "{\"code\":\"x\"}");
                }
                other => panic!("expected Api error for {}, got {:?}", code, other),
            }
        }
    }

    #[test]
    fn test_status_round_trips_through_mapping() {
        for code in [401, 403, 404, 405, 406, 409, 415, 422, 429, 400, 500] {
            assert_eq!(kind(code).status().map(|s| s.as_u16()), Some(code));
        }
    }

    #[test]
    fn test_body_is_preserved() {
        let err = kind(422);
        assert_eq!(err.body(), Some("{\"code\":\"x\"}"));
        assert_eq!(FreshdeskError::invalid_config("bad").body(), None);
    }

    #[test]
    fn test_retry_after_only_for_rate_limit() {
        let err = FreshdeskError::from_status(
            StatusCode::TOO_MANY_REQUESTS,
            "",
            Some(Duration::from_secs(30)),
        );
        assert!(err.is_rate_limit());
        assert_eq!(err.retry_after(), Some(Duration::from_secs(30)));

        let err = FreshdeskError::from_status(
            StatusCode::CONFLICT,
            "",
            Some(Duration::from_secs(30)),
        );
        assert!(!err.is_rate_limit());
        assert_eq!(err.retry_after(), None);
    }

    #[test]
    fn test_config_error_has_no_status() {
        assert_eq!(FreshdeskError::invalid_config("Domain is empty.").status(), None);
    }

    #[test]
    fn test_sanitize_message_removes_api_key() {
        let api_key = "super_secret_key_12345";
        let message = format!("Error connecting with key {} to server", api_key);
        let sanitized = FreshdeskError::sanitize_message(&message, api_key);
        assert!(!sanitized.contains(api_key));
        assert!(sanitized.contains("[REDACTED]"));
    }

    #[test]
    fn test_sanitize_message_empty_key() {
        let message = "Some error message";
        let sanitized = FreshdeskError::sanitize_message(message, "");
        assert_eq!(sanitized, message);
    }

    #[test]
    fn test_sanitized_display() {
        let err = FreshdeskError::Api {
            status: StatusCode::BAD_REQUEST,
            body: "key abc123 rejected".to_string(),
        };
        assert_eq!(
            err.sanitized_display("abc123"),
            "API error 400 Bad Request: key [REDACTED] rejected"
        );
    }
}
