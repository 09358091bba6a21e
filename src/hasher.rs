//! Hashing service seam.
//!
//! SOLID (DIP): The validator depends on this trait, not on a concrete
//! algorithm. [`Argon2Hasher`] is the in-crate implementation; tests inject
//! `MockPasswordHasher` to pin down rule behavior without paying for real
//! key-stretching.

use crate::error::CredentialResult;
use crate::password::Password;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// One-way hashing capability consumed by the validator.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait PasswordHasher: Send + Sync {
    /// Derive a salted one-way hash from a plaintext.
    fn derive(&self, plain_text: &str) -> CredentialResult<Password>;

    /// Check a plaintext against a stored hash. Unreadable hashes verify as
    /// false; this never panics or errors.
    fn verify(&self, plain_text: &str, stored: &Password) -> bool;
}

/// Argon2id-backed hashing service.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Hasher;

impl PasswordHasher for Argon2Hasher {
    fn derive(&self, plain_text: &str) -> CredentialResult<Password> {
        Password::derive(plain_text)
    }

    fn verify(&self, plain_text: &str, stored: &Password) -> bool {
        stored.verify(plain_text)
    }
}
