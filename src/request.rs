//! Credential-change request shaping.
//!
//! A [`PasswordChange`] is what the caller collects from the user: the
//! candidate password, its confirmation and (for updates) the old password.
//! A [`CredentialChangeRequest`] is that payload joined with the account's
//! stored credential state, which is everything the validator needs; it is
//! built per operation, validated once and discarded.

use serde::Deserialize;

use crate::password::Password;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn redact(value: &Option<String>) -> &'static str {
    match value {
        Some(_) => "Some([REDACTED])",
        None => "None",
    }
}

/// Caller-facing password-change payload. All fields optional: an entirely
/// empty payload is a valid no-op on an account that already has a
/// credential.
#[derive(Clone, Default, Deserialize)]
pub struct PasswordChange {
    pub new_password: Option<String>,
    pub password_confirmation: Option<String>,
    pub old_password: Option<String>,
}

// Plaintext passwords must not leak through debug output (security)
impl std::fmt::Debug for PasswordChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordChange")
            .field("new_password", &redact(&self.new_password))
            .field("password_confirmation", &redact(&self.password_confirmation))
            .field("old_password", &redact(&self.old_password))
            .finish()
    }
}

impl PasswordChange {
    /// Payload requesting a new password with its confirmation.
    pub fn new(
        new_password: impl Into<String>,
        password_confirmation: impl Into<String>,
    ) -> Self {
        Self {
            new_password: Some(new_password.into()),
            password_confirmation: Some(password_confirmation.into()),
            old_password: None,
        }
    }

    /// Attach the old-password proof required when a credential already
    /// exists.
    pub fn with_old_password(mut self, old_password: impl Into<String>) -> Self {
        self.old_password = Some(old_password.into());
        self
    }

    /// Payload requesting no password change at all.
    pub fn none() -> Self {
        Self::default()
    }
}

/// Everything the validator needs for one decision: the submitted payload
/// plus the stored credential state supplied by the persistence layer.
#[derive(Clone)]
pub struct CredentialChangeRequest {
    /// Plaintext candidate; absent means "no change requested"
    pub new_password: Option<String>,
    /// Must match `new_password` byte-for-byte when a change is requested
    pub password_confirmation: Option<String>,
    /// Proof of knowledge, required only when updating an existing credential
    pub old_password: Option<String>,
    /// True when the account already has a stored hash (update vs creation)
    pub has_existing_credential: bool,
    /// The currently persisted hash; empty on creation
    pub stored_hash: Option<Password>,
}

impl std::fmt::Debug for CredentialChangeRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialChangeRequest")
            .field("new_password", &redact(&self.new_password))
            .field("password_confirmation", &redact(&self.password_confirmation))
            .field("old_password", &redact(&self.old_password))
            .field("has_existing_credential", &self.has_existing_credential)
            .field("stored_hash", &self.stored_hash)
            .finish()
    }
}

impl CredentialChangeRequest {
    /// Shape a request for an account with no stored credential yet
    /// (creation: a candidate password is mandatory).
    pub fn for_new_credential(change: PasswordChange) -> Self {
        Self {
            new_password: change.new_password,
            password_confirmation: change.password_confirmation,
            old_password: change.old_password,
            has_existing_credential: false,
            stored_hash: None,
        }
    }

    /// Shape a request against an existing stored credential (update: a
    /// candidate password is optional, but changing it requires the old
    /// password).
    pub fn for_existing(stored_hash: Password, change: PasswordChange) -> Self {
        Self {
            new_password: change.new_password,
            password_confirmation: change.password_confirmation,
            old_password: change.old_password,
            has_existing_credential: true,
            stored_hash: Some(stored_hash),
        }
    }

    /// The candidate password, with blank treated as absent.
    ///
    /// An empty or whitespace-only submission means "no change requested",
    /// exactly like no submission at all. The raw value is never trimmed:
    /// a present candidate keeps its bytes for the confirmation comparison.
    pub fn requested_password(&self) -> Option<&str> {
        self.new_password.as_deref().filter(|p| !is_blank(p))
    }
}
