//! Credential service orchestration.
//!
//! [`CredentialService`] is the application-facing API: load the account,
//! validate the submitted change against it and persist the new hash when
//! the verdict says so. [`CredentialManager`] is the production
//! implementation; callers depend on the trait so tests can substitute a
//! mock.

use std::sync::Arc;

use uuid::Uuid;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use crate::error::{CredentialError, CredentialResult};
use crate::request::PasswordChange;
use crate::store::AccountStore;
use crate::validator::{CredentialValidator, CredentialVerdict};

#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait CredentialService: Send + Sync {
    /// Validate a change against the stored account without persisting
    /// anything.
    fn validate_change(
        &self,
        account_id: Uuid,
        change: PasswordChange,
    ) -> CredentialResult<CredentialVerdict>;

    /// Validate a change and persist the new hash when it is accepted.
    ///
    /// An accepted no-op succeeds without touching the store. A rejected
    /// change surfaces as [`CredentialError::Rejected`] carrying the full
    /// report.
    fn change_password(&self, account_id: Uuid, change: PasswordChange) -> CredentialResult<()>;
}

/// Production [`CredentialService`] backed by an [`AccountStore`].
pub struct CredentialManager {
    store: Arc<dyn AccountStore>,
    validator: CredentialValidator,
}

impl CredentialManager {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self::with_validator(store, CredentialValidator::new())
    }

    pub fn with_validator(store: Arc<dyn AccountStore>, validator: CredentialValidator) -> Self {
        Self { store, validator }
    }
}

impl CredentialService for CredentialManager {
    fn validate_change(
        &self,
        account_id: Uuid,
        change: PasswordChange,
    ) -> CredentialResult<CredentialVerdict> {
        let account = self
            .store
            .find(account_id)?
            .ok_or(CredentialError::AccountNotFound)?;
        let verdict = self.validator.validate(&account.change_request(change))?;
        tracing::debug!(
            account_id = %account_id,
            accepted = verdict.is_accepted(),
            "credential change validated"
        );
        Ok(verdict)
    }

    fn change_password(&self, account_id: Uuid, change: PasswordChange) -> CredentialResult<()> {
        match self.validate_change(account_id, change)? {
            CredentialVerdict::Accepted {
                hash_to_persist: Some(hash),
            } => {
                self.store.save_credential(account_id, &hash)?;
                tracing::info!(account_id = %account_id, "password changed");
                Ok(())
            }
            CredentialVerdict::Accepted {
                hash_to_persist: None,
            } => {
                tracing::debug!(account_id = %account_id, "no password change requested");
                Ok(())
            }
            CredentialVerdict::Rejected(report) => {
                tracing::debug!(
                    account_id = %account_id,
                    fields = ?report.fields(),
                    "password change rejected"
                );
                Err(CredentialError::Rejected(report))
            }
        }
    }
}
