//! Grant strategies for the token endpoint.
//!
//! A strategy implements one OAuth 2.0 grant type. The host framework
//! probes each registered strategy with [`GrantStrategy::is_applicable`]
//! and invokes [`GrantStrategy::authenticate`] on the first match.
//!
//! [`PasswordGrant`] implements the resource owner password credentials
//! grant (RFC 6749 section 4.3): structural validation, client lookup,
//! credential verification, and account-confirmation gating, in that
//! order.

use std::sync::Arc;

use async_trait::async_trait;
use dg_directory::{ClientDirectory, ClientRecord, DirectoryError};

use crate::error::GrantFailure;
use crate::outcome::GrantOutcome;
use crate::request::GrantRequest;

/// The `grant_type` value served by [`PasswordGrant`].
pub const PASSWORD_GRANT_TYPE: &str = "password";

/// Description returned when credentials are rejected or the client
/// cannot be located. One message for both cases, so client identifiers
/// cannot be enumerated.
pub const BAD_CREDENTIALS_DESCRIPTION: &str = "Incorrect username or password";

/// Description returned for a correctly authenticated but unconfirmed
/// account.
pub const UNCONFIRMED_DESCRIPTION: &str = "Please confirm your account prior to use our service";

/// A grant-type handler the token endpoint can probe and invoke.
#[async_trait]
pub trait GrantStrategy: Send + Sync {
    /// The subject type produced on success.
    type Subject;

    /// Returns the `grant_type` value this strategy serves.
    fn grant_type(&self) -> &'static str;

    /// Checks whether this strategy applies to the request.
    ///
    /// The default implementation compares the request's `grant_type`
    /// against the value of `grant_type()`. Must stay cheap and free of
    /// side effects; frameworks probe several strategies per request.
    fn is_applicable(&self, request: &GrantRequest) -> bool {
        request.grant_type() == Some(self.grant_type())
    }

    /// Runs the authentication protocol for this grant type.
    ///
    /// Expected failures (malformed request, rejected credentials) are
    /// part of the returned outcome.
    ///
    /// # Errors
    ///
    /// Directory faults propagate unmodified; mapping them to a
    /// server-error response is the caller's responsibility.
    async fn authenticate(
        &self,
        request: &GrantRequest,
    ) -> Result<GrantOutcome<Self::Subject>, DirectoryError>;
}

/// Resource owner password credentials grant.
///
/// **Note**: this grant is deprecated in OAuth 2.1 and should only be
/// used for trusted first-party applications.
pub struct PasswordGrant<D: ClientDirectory> {
    directory: Arc<D>,
}

impl<D: ClientDirectory> PasswordGrant<D> {
    /// Creates a new password grant strategy over the given directory.
    #[allow(clippy::missing_const_for_fn)] // Can't be const: moves Arc
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl<D: ClientDirectory> GrantStrategy for PasswordGrant<D> {
    type Subject = D::Record;

    fn grant_type(&self) -> &'static str {
        PASSWORD_GRANT_TYPE
    }

    async fn authenticate(
        &self,
        request: &GrantRequest,
    ) -> Result<GrantOutcome<D::Record>, DirectoryError> {
        // Structural validation runs before any directory access.
        let Some(username) = request.username() else {
            return Ok(GrantFailure::invalid_request("username is required").into());
        };
        let Some(password) = request.password() else {
            return Ok(GrantFailure::invalid_request("password is required").into());
        };

        // An absent client_id is looked up as-is; directories report no
        // record for it and the attempt fails like any bad login.
        let client_id = request.client_id().unwrap_or_default();

        let Some(record) = self.directory.locate(client_id).await? else {
            tracing::debug!(client_id = %client_id, "Password grant denied: unknown client");
            return Ok(GrantFailure::invalid_client(BAD_CREDENTIALS_DESCRIPTION).into());
        };

        if !record.validate_credentials(username, password).await? {
            tracing::debug!(client_id = %client_id, "Password grant denied: credentials rejected");
            return Ok(GrantFailure::invalid_client(BAD_CREDENTIALS_DESCRIPTION).into());
        }

        // Confirmation is consulted only after the credentials pass, so
        // a failed login never reveals confirmation status.
        if !record.is_confirmed(username).await? {
            tracing::debug!(client_id = %client_id, "Password grant denied: account not confirmed");
            return Ok(GrantFailure::invalid_client(UNCONFIRMED_DESCRIPTION).into());
        }

        tracing::debug!(client_id = %client_id, "Password grant succeeded");
        Ok(GrantOutcome::success(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dg_directory::MemoryDirectory;

    fn strategy() -> PasswordGrant<MemoryDirectory> {
        PasswordGrant::new(Arc::new(MemoryDirectory::new()))
    }

    #[test]
    fn serves_the_password_grant_type() {
        assert_eq!(strategy().grant_type(), "password");
    }

    #[test]
    fn applicable_to_password_requests() {
        let request = GrantRequest::new().with_grant_type("password");

        assert!(strategy().is_applicable(&request));
    }

    #[test]
    fn not_applicable_without_grant_type() {
        assert!(!strategy().is_applicable(&GrantRequest::new()));
    }

    #[test]
    fn not_applicable_to_other_grant_types() {
        let request = GrantRequest::new().with_grant_type("client_credentials");

        assert!(!strategy().is_applicable(&request));
    }

    #[test]
    fn applicability_ignores_other_parameters() {
        let request = GrantRequest::new()
            .with_grant_type("password")
            .with_client_id("awesome")
            .with_username("someuser")
            .with_password("s3cret");

        assert!(strategy().is_applicable(&request));
    }
}
