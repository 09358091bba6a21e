//! Credential validation core - password rules, hashing and verdicts
//!
//! This crate provides the domain logic for creating and changing account
//! passwords: presence and complexity rules, confirmation matching,
//! old-password re-verification against the stored Argon2 hash, and a
//! persistence seam for the accepted result. Rule violations accumulate
//! into a single report instead of failing one at a time.
//!
//! # Architecture Layers
//!
//! - **constants**: Policy defaults shared across the crate
//! - **policy**: Structural password requirements
//! - **report**: Rejection reasons and the accumulated report
//! - **error**: Centralized error handling
//! - **password**: Argon2 hash value object
//! - **hasher**: Hashing seam with the production Argon2 implementation
//! - **request**: Change payloads and request shaping
//! - **validator**: The decision procedure producing verdicts
//! - **account**: Account entity owning the stored credential
//! - **store**: Persistence seam with an in-memory implementation
//! - **service**: Application-facing orchestration
//!
//! # Usage
//!
//! ```
//! use credential_core::{Account, CredentialValidator, PasswordChange};
//!
//! let account = Account::new("user@example.com", "Pat Doe");
//! let validator = CredentialValidator::new();
//!
//! let request = account.change_request(PasswordChange::new("Str0ng!pass", "Str0ng!pass"));
//! let verdict = validator.validate(&request)?;
//! assert!(verdict.is_accepted());
//! # Ok::<(), credential_core::CredentialError>(())
//! ```

pub mod account;
pub mod constants;
pub mod error;
pub mod hasher;
pub mod password;
pub mod policy;
pub mod report;
pub mod request;
pub mod service;
pub mod store;
pub mod validator;

// Re-export commonly used types at crate root
pub use account::{Account, AccountProfile};
pub use error::{CredentialError, CredentialResult};
pub use hasher::{Argon2Hasher, PasswordHasher};
pub use password::Password;
pub use policy::PasswordPolicy;
pub use report::{CredentialField, FieldError, RejectionReason, RejectionReport};
pub use request::{CredentialChangeRequest, PasswordChange};
pub use service::{CredentialManager, CredentialService};
pub use store::{AccountStore, InMemoryAccountStore};
pub use validator::{CredentialValidator, CredentialVerdict};

#[cfg(any(test, feature = "test-utils"))]
pub use hasher::MockPasswordHasher;
#[cfg(any(test, feature = "test-utils"))]
pub use service::MockCredentialService;
#[cfg(any(test, feature = "test-utils"))]
pub use store::MockAccountStore;
