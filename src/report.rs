//! Rejection vocabulary for credential validation.
//!
//! A failed validation produces a [`RejectionReport`]: the ordered list of
//! every rule that rejected the request, each reason tagged with the form
//! field it belongs to. Collecting all problems in one pass lets a caller
//! render the complete list in a single round trip instead of re-prompting
//! per failure.

use serde::Serialize;
use thiserror::Error;

use crate::policy::PasswordPolicy;

/// Form field a rejection reason is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialField {
    Password,
    PasswordConfirmation,
    OldPassword,
}

impl std::fmt::Display for CredentialField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CredentialField::Password => "password",
            CredentialField::PasswordConfirmation => "password_confirmation",
            CredentialField::OldPassword => "old_password",
        };
        write!(f, "{}", name)
    }
}

/// One reason a credential-change request was rejected.
///
/// Every reason is recoverable: the caller re-prompts the user and submits a
/// new request. Messages are worded for end users and phrased relative to the
/// field the reason maps to.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    /// No credential established yet and none supplied
    #[error("can't be blank")]
    BlankPassword,

    /// Candidate fails the length/character-class policy as a whole.
    /// Which criterion failed is not reported; the policy is one gate.
    #[error("complexity requirement not met. Length should be {min_length}-{max_length} characters and include: 1 uppercase, 1 lowercase, 1 digit and 1 special character")]
    ComplexityViolation {
        min_length: usize,
        max_length: usize,
    },

    /// Confirmation does not equal the candidate password
    #[error("doesn't match password")]
    ConfirmationMismatch,

    /// Old-password proof failed verification (or the stored hash was
    /// unreadable, which the caller cannot tell apart)
    #[error("is incorrect")]
    IncorrectOldPassword,
}

impl RejectionReason {
    /// Complexity rejection carrying the bounds of the policy that rejected,
    /// so the message stays truthful for non-default policies.
    pub fn complexity(policy: &PasswordPolicy) -> Self {
        RejectionReason::ComplexityViolation {
            min_length: policy.min_length,
            max_length: policy.max_length,
        }
    }

    /// The form field this reason is attached to.
    pub fn field(&self) -> CredentialField {
        match self {
            RejectionReason::BlankPassword | RejectionReason::ComplexityViolation { .. } => {
                CredentialField::Password
            }
            RejectionReason::ConfirmationMismatch => CredentialField::PasswordConfirmation,
            RejectionReason::IncorrectOldPassword => CredentialField::OldPassword,
        }
    }
}

/// Field + message pair, the wire-friendly shape of one rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: CredentialField,
    pub message: String,
}

/// Ordered collection of rejection reasons for one request.
///
/// Order is deterministic: reasons appear in rule-evaluation order (presence,
/// complexity, confirmation, old password), which keeps error display and
/// test expectations stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RejectionReport {
    reasons: Vec<RejectionReason>,
}

impl RejectionReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, reason: RejectionReason) {
        self.reasons.push(reason);
    }

    pub fn is_empty(&self) -> bool {
        self.reasons.is_empty()
    }

    pub fn len(&self) -> usize {
        self.reasons.len()
    }

    /// Reasons in rule-evaluation order.
    pub fn reasons(&self) -> &[RejectionReason] {
        &self.reasons
    }

    /// Fields that rejected, in order, duplicates preserved.
    pub fn fields(&self) -> Vec<CredentialField> {
        self.reasons.iter().map(RejectionReason::field).collect()
    }

    pub fn contains(&self, reason: &RejectionReason) -> bool {
        self.reasons.contains(reason)
    }

    /// True if any reason is attached to the given field.
    pub fn rejects_field(&self, field: CredentialField) -> bool {
        self.reasons.iter().any(|r| r.field() == field)
    }

    /// Serializable field + message pairs, one per reason, in order.
    pub fn field_errors(&self) -> Vec<FieldError> {
        self.reasons
            .iter()
            .map(|reason| FieldError {
                field: reason.field(),
                message: reason.to_string(),
            })
            .collect()
    }
}

impl std::fmt::Display for RejectionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .reasons
            .iter()
            .map(|reason| format!("{} {}", reason.field(), reason))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}", joined)
    }
}
