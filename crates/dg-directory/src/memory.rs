//! In-memory client directory.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::directory::{ClientDirectory, ClientRecord};
use crate::error::DirectoryResult;
use crate::password::{CredentialHasher, PasswordPolicy};

/// Stored account data.
#[derive(Debug, Clone)]
struct Account {
    password_hash: String,
    confirmed: bool,
}

/// State shared between the directory and the records it hands out.
struct DirectoryState {
    clients: RwLock<HashSet<String>>,
    accounts: RwLock<HashMap<String, Account>>,
    hasher: CredentialHasher,
}

/// In-memory client directory.
///
/// Accounts are registered with an Argon2id-hashed password and start
/// unconfirmed. This is suitable for single-instance deployments or
/// testing; for production with multiple instances, use a shared backend.
#[derive(Clone)]
pub struct MemoryDirectory {
    state: Arc<DirectoryState>,
}

impl MemoryDirectory {
    /// Creates an empty directory with the default password policy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(PasswordPolicy::default())
    }

    /// Creates an empty directory with the given password policy.
    #[must_use]
    pub fn with_policy(policy: PasswordPolicy) -> Self {
        Self {
            state: Arc::new(DirectoryState {
                clients: RwLock::new(HashSet::new()),
                accounts: RwLock::new(HashMap::new()),
                hasher: CredentialHasher::new(policy),
            }),
        }
    }

    /// Registers a client under the given identifier.
    pub async fn register_client(&self, client_id: impl Into<String>) {
        self.state.clients.write().await.insert(client_id.into());
    }

    /// Registers an account with the given username and password.
    ///
    /// New accounts start unconfirmed; call [`confirm_account`] once the
    /// user has completed confirmation.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::Internal` if password hashing fails.
    ///
    /// [`confirm_account`]: Self::confirm_account
    pub async fn register_account(
        &self,
        username: impl Into<String>,
        password: &str,
    ) -> DirectoryResult<()> {
        let password_hash = self.state.hasher.hash(password)?;
        self.state.accounts.write().await.insert(
            username.into(),
            Account {
                password_hash,
                confirmed: false,
            },
        );
        Ok(())
    }

    /// Marks an account as confirmed.
    ///
    /// Returns `false` if no account with the given username exists.
    pub async fn confirm_account(&self, username: &str) -> bool {
        match self.state.accounts.write().await.get_mut(username) {
            Some(account) => {
                account.confirmed = true;
                true
            }
            None => false,
        }
    }
}

impl Default for MemoryDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClientDirectory for MemoryDirectory {
    type Record = MemoryClient;

    async fn locate(&self, client_id: &str) -> DirectoryResult<Option<MemoryClient>> {
        let clients = self.state.clients.read().await;
        Ok(clients.get(client_id).map(|id| MemoryClient {
            client_id: id.clone(),
            state: Arc::clone(&self.state),
        }))
    }
}

/// A client located in a [`MemoryDirectory`].
///
/// The record is a cheap handle into the directory's shared state, so
/// credential and confirmation queries run against live data.
#[derive(Clone)]
pub struct MemoryClient {
    client_id: String,
    state: Arc<DirectoryState>,
}

impl MemoryClient {
    /// Returns the OAuth `client_id` this record was located under.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }
}

#[async_trait]
impl ClientRecord for MemoryClient {
    async fn validate_credentials(&self, username: &str, password: &str) -> DirectoryResult<bool> {
        // The Argon2id verify is CPU-bound; it must not run under the
        // accounts lock, so the stored hash is cloned out first.
        let password_hash = {
            let accounts = self.state.accounts.read().await;
            let Some(account) = accounts.get(username) else {
                return Ok(false);
            };
            account.password_hash.clone()
        };

        self.state.hasher.verify(password, &password_hash)
    }

    async fn is_confirmed(&self, username: &str) -> DirectoryResult<bool> {
        let accounts = self.state.accounts.read().await;
        Ok(accounts.get(username).is_some_and(|account| account.confirmed))
    }
}
