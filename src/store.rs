//! Account persistence seam.
//!
//! [`AccountStore`] is the narrow interface the credential service needs:
//! load an account, persist an accepted hash. [`InMemoryAccountStore`]
//! backs tests and demos; a database-backed store implements the same
//! trait.

use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use crate::account::Account;
use crate::error::{CredentialError, CredentialResult};
use crate::password::Password;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait AccountStore: Send + Sync {
    /// Load an account by id. `Ok(None)` when it does not exist.
    fn find(&self, id: Uuid) -> CredentialResult<Option<Account>>;

    /// Persist a newly accepted hash for an existing account.
    fn save_credential(&self, id: Uuid, hash: &Password) -> CredentialResult<()>;
}

/// Thread-safe in-memory store.
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    accounts: RwLock<HashMap<Uuid, Account>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an account into the store.
    pub fn insert(&self, account: Account) -> CredentialResult<()> {
        let mut accounts = self
            .accounts
            .write()
            .map_err(|_| CredentialError::storage("account store lock poisoned"))?;
        accounts.insert(account.id, account);
        Ok(())
    }
}

impl AccountStore for InMemoryAccountStore {
    fn find(&self, id: Uuid) -> CredentialResult<Option<Account>> {
        let accounts = self
            .accounts
            .read()
            .map_err(|_| CredentialError::storage("account store lock poisoned"))?;
        Ok(accounts.get(&id).cloned())
    }

    fn save_credential(&self, id: Uuid, hash: &Password) -> CredentialResult<()> {
        let mut accounts = self
            .accounts
            .write()
            .map_err(|_| CredentialError::storage("account store lock poisoned"))?;
        match accounts.get_mut(&id) {
            Some(account) => {
                account.store_password_hash(hash.clone());
                Ok(())
            }
            None => Err(CredentialError::AccountNotFound),
        }
    }
}
