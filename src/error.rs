//! Crate-level errors.
//!
//! These errors represent credential rule violations and collaborator
//! failures. They are independent of infrastructure concerns (HTTP, gRPC,
//! database); callers map them onto their own transport the way they map any
//! domain error.

use thiserror::Error;

use crate::report::RejectionReport;

/// Errors surfaced by credential operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    /// The request failed validation; the report lists every reason.
    /// Recoverable: re-prompt the user and submit a new request.
    #[error("credential change rejected: {0}")]
    Rejected(RejectionReport),

    /// No account exists for the given id
    #[error("account not found")]
    AccountNotFound,

    /// The hashing backend failed while deriving a new hash. Not a rule
    /// outcome; with a healthy backend this does not happen.
    #[error("password hashing failed: {reason}")]
    Hashing { reason: String },

    /// An account store implementation failed
    #[error("credential storage failed: {reason}")]
    Storage { reason: String },
}

impl CredentialError {
    /// Create a hashing-backend error
    pub fn hashing(reason: impl Into<String>) -> Self {
        CredentialError::Hashing {
            reason: reason.into(),
        }
    }

    /// Create a storage error
    pub fn storage(reason: impl Into<String>) -> Self {
        CredentialError::Storage {
            reason: reason.into(),
        }
    }

    /// The rejection report, if this error wraps one.
    pub fn rejection(&self) -> Option<&RejectionReport> {
        match self {
            CredentialError::Rejected(report) => Some(report),
            _ => None,
        }
    }
}

impl From<RejectionReport> for CredentialError {
    fn from(report: RejectionReport) -> Self {
        CredentialError::Rejected(report)
    }
}

/// Result type alias for credential operations
pub type CredentialResult<T> = Result<T, CredentialError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::RejectionReason;

    #[test]
    fn test_rejected_display_includes_report() {
        let mut report = RejectionReport::new();
        report.push(RejectionReason::IncorrectOldPassword);
        let err = CredentialError::from(report);

        assert_eq!(
            err.to_string(),
            "credential change rejected: old_password is incorrect"
        );
    }

    #[test]
    fn test_rejection_accessor() {
        let mut report = RejectionReport::new();
        report.push(RejectionReason::BlankPassword);
        let err = CredentialError::from(report.clone());

        assert_eq!(err.rejection(), Some(&report));
        assert_eq!(CredentialError::AccountNotFound.rejection(), None);
    }
}
