//! Account entity owning the stored credential.
//!
//! The stored hash is private on purpose: the only way to change it is
//! [`Account::store_password_hash`], which the credential service calls
//! with the hash carried by an accepted verdict. Profile data (email,
//! name) is validated separately from credentials via [`AccountProfile`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::password::Password;
use crate::request::{CredentialChangeRequest, PasswordChange};

/// An account that may or may not have a credential yet.
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing)]
    password_hash: Option<Password>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Account without a credential; the first accepted change creates one.
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            name: name.into(),
            password_hash: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Account created with an already-derived hash.
    pub fn with_credential(
        email: impl Into<String>,
        name: impl Into<String>,
        password_hash: Password,
    ) -> Self {
        let mut account = Self::new(email, name);
        account.password_hash = Some(password_hash);
        account
    }

    pub fn has_credential(&self) -> bool {
        self.password_hash.is_some()
    }

    pub fn password_hash(&self) -> Option<&Password> {
        self.password_hash.as_ref()
    }

    /// Replace the stored hash with one carried by an accepted verdict.
    pub fn store_password_hash(&mut self, hash: Password) {
        self.password_hash = Some(hash);
        self.updated_at = Utc::now();
    }

    /// Join a submitted payload with this account's credential state.
    pub fn change_request(&self, change: PasswordChange) -> CredentialChangeRequest {
        match &self.password_hash {
            Some(stored) => CredentialChangeRequest::for_existing(stored.clone(), change),
            None => CredentialChangeRequest::for_new_credential(change),
        }
    }

    /// Apply validated profile fields. Credentials are untouched; they have
    /// their own rules.
    pub fn update_profile(&mut self, profile: &AccountProfile) -> Result<(), ValidationErrors> {
        profile.validate()?;
        self.email = profile.email.clone();
        self.name = profile.name.clone();
        self.updated_at = Utc::now();
        Ok(())
    }
}

/// Profile fields with their own validation, separate from credentials.
#[derive(Debug, Clone, Validate, Deserialize)]
pub struct AccountProfile {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,
}
