//! # dg-directory
//!
//! Client directory abstraction for the direct-grant workspace.
//!
//! This crate defines the directory interface the password grant consumes
//! (locate a client, validate end-user credentials, check account
//! confirmation) and ships an in-memory implementation backed by Argon2id
//! password hashing.
//!
//! ## Modules
//!
//! - [`directory`] - The [`ClientDirectory`] and [`ClientRecord`] traits
//! - [`memory`] - [`MemoryDirectory`], the in-memory implementation
//! - [`password`] - Argon2id credential hashing
//! - [`error`] - Directory error types

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod directory;
pub mod error;
pub mod memory;
pub mod password;

pub use directory::{ClientDirectory, ClientRecord};
pub use error::{DirectoryError, DirectoryResult};
pub use memory::{MemoryClient, MemoryDirectory};
pub use password::{CredentialHasher, PasswordPolicy};
