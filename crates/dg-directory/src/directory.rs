//! Client directory traits.
//!
//! A directory resolves OAuth `client_id` values to client records and
//! answers the credential and confirmation queries the password grant
//! needs. Backends (in-memory, SQL, LDAP) implement these traits.

use async_trait::async_trait;

use crate::error::DirectoryResult;

/// A client record located in a directory.
///
/// The record answers queries about end-user accounts reachable through
/// this client. Implementations must be thread-safe.
#[async_trait]
pub trait ClientRecord: Send + Sync {
    /// Checks a username/password pair against the stored credentials.
    ///
    /// Returns `false` for unknown usernames as well as wrong passwords;
    /// callers must not be able to tell the two apart.
    async fn validate_credentials(&self, username: &str, password: &str) -> DirectoryResult<bool>;

    /// Checks whether the account with the given username is confirmed.
    async fn is_confirmed(&self, username: &str) -> DirectoryResult<bool>;
}

/// Provider resolving client identifiers to records.
///
/// Implementations must be thread-safe and support concurrent access.
#[async_trait]
pub trait ClientDirectory: Send + Sync {
    /// The record type this directory produces.
    type Record: ClientRecord;

    /// Locates a client by its OAuth `client_id`.
    ///
    /// Returns `Ok(None)` when no client with the given identifier exists.
    async fn locate(&self, client_id: &str) -> DirectoryResult<Option<Self::Record>>;
}
