//! Credential-change validation.
//!
//! [`CredentialValidator::validate`] is the single decision point for
//! password creation and password change. It applies every rule to the
//! request, accumulates all violations into one [`RejectionReport`] and
//! only derives a hash once the request is fully clean, so exactly one
//! hash is produced per accepted change and none for a rejected one.

use std::sync::Arc;

use crate::error::CredentialResult;
use crate::hasher::{Argon2Hasher, PasswordHasher};
use crate::password::Password;
use crate::policy::PasswordPolicy;
use crate::report::{RejectionReason, RejectionReport};
use crate::request::CredentialChangeRequest;

/// Outcome of validating a credential-change request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialVerdict {
    /// The request passed every rule. `hash_to_persist` carries the newly
    /// derived hash, or `None` when the request was a no-op (no candidate
    /// password on an account that already has one).
    Accepted { hash_to_persist: Option<Password> },
    /// The request violated at least one rule; the report lists all of
    /// them in rule order.
    Rejected(RejectionReport),
}

impl CredentialVerdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    pub fn rejection(&self) -> Option<&RejectionReport> {
        match self {
            Self::Rejected(report) => Some(report),
            Self::Accepted { .. } => None,
        }
    }
}

/// Applies the password rules to a [`CredentialChangeRequest`].
///
/// Stateless apart from its policy and hasher; one instance can serve any
/// number of validations.
pub struct CredentialValidator {
    policy: PasswordPolicy,
    hasher: Arc<dyn PasswordHasher>,
}

impl CredentialValidator {
    /// Validator with the default policy and the Argon2 hasher.
    pub fn new() -> Self {
        Self::with_policy(PasswordPolicy::default())
    }

    /// Validator with a custom policy and the Argon2 hasher.
    pub fn with_policy(policy: PasswordPolicy) -> Self {
        Self {
            policy,
            hasher: Arc::new(Argon2Hasher),
        }
    }

    /// Replace the hasher, e.g. with a mock in tests.
    pub fn with_hasher(mut self, hasher: Arc<dyn PasswordHasher>) -> Self {
        self.hasher = hasher;
        self
    }

    pub fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }

    /// Validate a credential-change request.
    ///
    /// Every applicable rule runs; violations accumulate in a fixed order
    /// (presence, complexity, confirmation, old password) so the caller
    /// sees the full picture at once. A blank candidate counts as no
    /// candidate at all.
    ///
    /// Returns `Err` only for operational failures (hash derivation); rule
    /// violations are the `Rejected` verdict, not errors.
    pub fn validate(&self, request: &CredentialChangeRequest) -> CredentialResult<CredentialVerdict> {
        let mut report = RejectionReport::new();
        let candidate = request.requested_password();

        // An account without a credential must end up with one.
        if candidate.is_none() && !request.has_existing_credential {
            report.push(RejectionReason::BlankPassword);
        }

        if let Some(plain) = candidate {
            if !self.policy.satisfies(plain) {
                report.push(RejectionReason::complexity(&self.policy));
            }

            // Byte-for-byte comparison against the raw candidate; a missing
            // confirmation never matches a present candidate.
            if request.password_confirmation.as_deref() != Some(plain) {
                report.push(RejectionReason::ConfirmationMismatch);
            }

            // Replacing an existing credential requires proving knowledge of
            // the current one. A missing old password, a missing stored hash
            // or an unreadable stored hash all fail the same way as a wrong
            // old password.
            if request.has_existing_credential {
                let proven = match (&request.old_password, &request.stored_hash) {
                    (Some(old), Some(stored)) => self.hasher.verify(old, stored),
                    _ => false,
                };
                if !proven {
                    report.push(RejectionReason::IncorrectOldPassword);
                }
            }
        }

        if !report.is_empty() {
            tracing::debug!(fields = ?report.fields(), "credential change rejected");
            return Ok(CredentialVerdict::Rejected(report));
        }

        let hash_to_persist = candidate
            .map(|plain| self.hasher.derive(plain))
            .transpose()?;
        Ok(CredentialVerdict::Accepted { hash_to_persist })
    }
}

impl Default for CredentialValidator {
    fn default() -> Self {
        Self::new()
    }
}
