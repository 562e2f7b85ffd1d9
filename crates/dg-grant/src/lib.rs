//! # dg-grant
//!
//! Server-side authentication logic for the OAuth 2.0 resource owner
//! password credentials grant (RFC 6749 section 4.3).
//!
//! The crate is transport-agnostic: the host framework parses the
//! request into a [`GrantRequest`], probes the strategy with
//! [`GrantStrategy::is_applicable`], runs
//! [`GrantStrategy::authenticate`], and serializes the resulting
//! [`GrantOutcome`]. Client and account data come from a
//! [`dg_directory::ClientDirectory`] injected at construction.
//!
//! ## Modules
//!
//! - [`strategy`] - The [`GrantStrategy`] trait and [`PasswordGrant`]
//! - [`request`] - The [`GrantRequest`] parameter mapping
//! - [`outcome`] - The [`GrantOutcome`] success/failure result
//! - [`error`] - [`GrantFailure`] and the RFC 6749 [`ErrorResponse`]
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use dg_directory::MemoryDirectory;
//! use dg_grant::{GrantRequest, GrantStrategy, PasswordGrant};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), dg_directory::DirectoryError> {
//! let directory = Arc::new(MemoryDirectory::new());
//! directory.register_client("awesome").await;
//! directory.register_account("someuser", "s3cret").await?;
//! directory.confirm_account("someuser").await;
//!
//! let grant = PasswordGrant::new(directory);
//! let request = GrantRequest::from_params([
//!     ("grant_type", "password"),
//!     ("client_id", "awesome"),
//!     ("username", "someuser"),
//!     ("password", "s3cret"),
//! ]);
//!
//! assert!(grant.is_applicable(&request));
//! let outcome = grant.authenticate(&request).await?;
//! assert!(outcome.succeeded());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod error;
pub mod outcome;
pub mod request;
pub mod strategy;

pub use error::{ErrorResponse, GrantFailure};
pub use outcome::GrantOutcome;
pub use request::GrantRequest;
pub use strategy::{
    BAD_CREDENTIALS_DESCRIPTION, GrantStrategy, PASSWORD_GRANT_TYPE, PasswordGrant,
    UNCONFIRMED_DESCRIPTION,
};
