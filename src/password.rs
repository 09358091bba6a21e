//! Password value object - one-way hash handling.
//!
//! DDD: Encapsulates password hashing as a domain value object.
//! SOLID (SRP): Single responsibility - hash derivation and verification only.
//! Candidate quality (length, character classes) is the policy's job, not this
//! type's: `derive` hashes whatever it is given.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{CredentialError, CredentialResult};

/// One-way salted password hash in PHC string format.
///
/// DDD: Value object - immutable, compared by value. The wrapped hash is safe
/// to persist; the plaintext it was derived from is never retained.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash material in debug output (security)
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Derive a new hash from a plaintext with a fresh random salt.
    ///
    /// # Errors
    /// Returns [`CredentialError::Hashing`] if the hashing backend fails.
    pub fn derive(plain_text: &str) -> CredentialResult<Self> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| CredentialError::hashing(format!("hash derivation failed: {}", e)))?;
        Ok(Self {
            hash: hash.to_string(),
        })
    }

    /// Restore a Password from an already-persisted hash string.
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    /// Verify a plaintext against this hash.
    ///
    /// A hash that fails to parse verifies as false rather than erroring:
    /// from the caller's perspective an unreadable stored hash and a wrong
    /// password are the same "no proof" outcome.
    pub fn verify(&self, plain_text: &str) -> bool {
        match PasswordHash::new(&self.hash) {
            Ok(parsed) => Self::argon2()
                .verify_password(plain_text.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::warn!("stored password hash is not a valid PHC string: {}", e);
                false
            }
        }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Get Argon2 instance with default config (Argon2id).
    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.hash
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for Password {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_and_verify() {
        let plain = "SecurePassword123!";
        let password = Password::derive(plain).unwrap();

        assert!(password.verify(plain));
        assert!(!password.verify("WrongPassword123"));
    }

    #[test]
    fn test_from_hash_round_trip() {
        let plain = "TestPassword123";
        let password = Password::derive(plain).unwrap();
        let hash = password.as_str().to_string();

        let restored = Password::from_hash(hash);
        assert!(restored.verify(plain));
    }

    #[test]
    fn test_same_password_different_salts() {
        let plain = "SamePassword123";
        let first = Password::derive(plain).unwrap();
        let second = Password::derive(plain).unwrap();

        // Different salts produce different hashes
        assert_ne!(first.as_str(), second.as_str());
        // But both verify correctly
        assert!(first.verify(plain));
        assert!(second.verify(plain));
    }

    #[test]
    fn test_malformed_hash_verifies_false() {
        let password = Password::from_hash("not-a-phc-string");
        assert!(!password.verify("anything"));
    }

    #[test]
    fn test_empty_hash_verifies_false() {
        let password = Password::from_hash("");
        assert!(!password.verify("anything"));
    }

    #[test]
    fn test_debug_redacts_hash() {
        let password = Password::derive("SecurePassword123!").unwrap();
        let output = format!("{:?}", password);
        assert!(output.contains("[REDACTED]"));
        assert!(!output.contains("argon2"));
    }
}
