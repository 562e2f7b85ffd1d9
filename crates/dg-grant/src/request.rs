//! Grant request type.

use serde::{Deserialize, Serialize};

/// Parameters of one token-endpoint authentication attempt.
///
/// Built from whatever parameter mapping the host framework extracted
/// from the request body; every field may be absent. Hosts using a form
/// or JSON extractor can deserialize into this type directly.
///
/// The `username`/`password` accessors treat empty values as absent, so
/// the grant protocol sees one notion of "missing".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GrantRequest {
    /// Grant type.
    #[serde(skip_serializing_if = "Option::is_none")]
    grant_type: Option<String>,

    /// OAuth client identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    client_id: Option<String>,

    /// Resource owner username.
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,

    /// Resource owner password.
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<String>,
}

impl GrantRequest {
    /// Creates an empty request.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            grant_type: None,
            client_id: None,
            username: None,
            password: None,
        }
    }

    /// Builds a request from an iterator of key/value parameter pairs.
    ///
    /// Unknown keys are ignored; a repeated key keeps its last value.
    #[must_use]
    pub fn from_params<I, K, V>(params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut request = Self::new();
        for (key, value) in params {
            match key.as_ref() {
                "grant_type" => request.grant_type = Some(value.into()),
                "client_id" => request.client_id = Some(value.into()),
                "username" => request.username = Some(value.into()),
                "password" => request.password = Some(value.into()),
                _ => {}
            }
        }
        request
    }

    /// Sets the grant type.
    #[must_use]
    pub fn with_grant_type(mut self, grant_type: impl Into<String>) -> Self {
        self.grant_type = Some(grant_type.into());
        self
    }

    /// Sets the client identifier.
    #[must_use]
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Sets the username.
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the password.
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Returns the grant type.
    #[must_use]
    pub fn grant_type(&self) -> Option<&str> {
        self.grant_type.as_deref()
    }

    /// Returns the client identifier.
    #[must_use]
    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    /// Returns the username; an empty value counts as absent.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        non_empty(self.username.as_deref())
    }

    /// Returns the password; an empty value counts as absent.
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        non_empty(self.password.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_params_picks_known_keys() {
        let request = GrantRequest::from_params([
            ("grant_type", "password"),
            ("client_id", "awesome"),
            ("username", "someuser"),
            ("password", "s3cret"),
            ("scope", "openid"),
        ]);

        assert_eq!(request.grant_type(), Some("password"));
        assert_eq!(request.client_id(), Some("awesome"));
        assert_eq!(request.username(), Some("someuser"));
        assert_eq!(request.password(), Some("s3cret"));
    }

    #[test]
    fn empty_request() {
        let request = GrantRequest::new();

        assert_eq!(request.grant_type(), None);
        assert_eq!(request.client_id(), None);
        assert_eq!(request.username(), None);
        assert_eq!(request.password(), None);
    }

    #[test]
    fn empty_username_and_password_count_as_absent() {
        let request = GrantRequest::new().with_username("").with_password("");

        assert_eq!(request.username(), None);
        assert_eq!(request.password(), None);
    }

    #[test]
    fn empty_client_id_is_preserved() {
        let request = GrantRequest::new().with_client_id("");

        assert_eq!(request.client_id(), Some(""));
    }

    #[test]
    fn builders_set_fields() {
        let request = GrantRequest::new()
            .with_grant_type("password")
            .with_username("someuser");

        assert_eq!(request.grant_type(), Some("password"));
        assert_eq!(request.username(), Some("someuser"));
        assert_eq!(request.password(), None);
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let request: GrantRequest = serde_json::from_str(
            r#"{"grant_type":"password","client_id":"awesome"}"#,
        )
        .unwrap();

        assert_eq!(request.grant_type(), Some("password"));
        assert_eq!(request.client_id(), Some("awesome"));
        assert_eq!(request.username(), None);
    }

    #[test]
    fn serializes_skipping_absent_fields() {
        let json = serde_json::to_string(&GrantRequest::new()).unwrap();

        assert_eq!(json, "{}");
    }
}
