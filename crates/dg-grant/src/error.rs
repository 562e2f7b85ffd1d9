//! Grant failure types.
//!
//! Implements the OAuth 2.0 error responses of RFC 6749 section 5.2 for
//! the failure cases the password grant can produce. These are expected
//! outcomes represented as data; directory faults are a separate error
//! type and never surface here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An expected authentication failure.
///
/// Each variant carries the human-readable description returned to the
/// caller unchanged in the `error_description` response field.
#[derive(Debug, Clone, Error)]
pub enum GrantFailure {
    /// The request is structurally incomplete.
    #[error("invalid_request: {0}")]
    InvalidRequest(String),

    /// Client or resource owner authentication failed.
    #[error("invalid_client: {0}")]
    InvalidClient(String),
}

impl GrantFailure {
    /// Creates an `invalid_request` failure.
    #[must_use]
    pub fn invalid_request(description: impl Into<String>) -> Self {
        Self::InvalidRequest(description.into())
    }

    /// Creates an `invalid_client` failure.
    #[must_use]
    pub fn invalid_client(description: impl Into<String>) -> Self {
        Self::InvalidClient(description.into())
    }

    /// Returns the OAuth 2.0 error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) => "invalid_request",
            Self::InvalidClient(_) => "invalid_client",
        }
    }

    /// Returns the HTTP status code for this failure.
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::InvalidRequest(_) => 400,
            Self::InvalidClient(_) => 401,
        }
    }

    /// Returns the human-readable description.
    #[must_use]
    pub fn error_description(&self) -> &str {
        match self {
            Self::InvalidRequest(description) | Self::InvalidClient(description) => description,
        }
    }

    /// Creates an error response for OAuth 2.0.
    #[must_use]
    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.error_code().to_string(),
            error_description: Some(self.error_description().to_string()),
            error_uri: None,
        }
    }
}

/// OAuth 2.0 error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code.
    pub error: String,

    /// Human-readable error description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,

    /// URI with more information about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_uri: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_request_maps_to_400() {
        let failure = GrantFailure::invalid_request("username is required");

        assert_eq!(failure.error_code(), "invalid_request");
        assert_eq!(failure.http_status(), 400);
        assert_eq!(failure.error_description(), "username is required");
    }

    #[test]
    fn invalid_client_maps_to_401() {
        let failure = GrantFailure::invalid_client("Incorrect username or password");

        assert_eq!(failure.error_code(), "invalid_client");
        assert_eq!(failure.http_status(), 401);
        assert_eq!(failure.error_description(), "Incorrect username or password");
    }

    #[test]
    fn display_includes_code_and_description() {
        let failure = GrantFailure::invalid_client("Incorrect username or password");

        assert_eq!(
            failure.to_string(),
            "invalid_client: Incorrect username or password"
        );
    }

    #[test]
    fn error_response_wire_shape() {
        let failure = GrantFailure::invalid_client("Incorrect username or password");
        let response = failure.to_error_response();

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "error": "invalid_client",
                "error_description": "Incorrect username or password",
            })
        );
    }

    #[test]
    fn error_response_skips_absent_fields() {
        let response = ErrorResponse {
            error: "invalid_request".to_string(),
            error_description: None,
            error_uri: None,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"error":"invalid_request"}"#);
    }
}
