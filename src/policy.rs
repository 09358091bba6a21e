//! Password complexity policy.
//!
//! DDD: Value object - the policy travels with the validator and is compared
//! by value. The whole policy evaluates as one atomic predicate: a candidate
//! either satisfies all criteria or fails the policy as a unit.

use crate::constants::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH, PASSWORD_SPECIAL_CHARS};

/// Complexity requirements a candidate password must satisfy.
///
/// The default policy requires 8-70 characters with at least one uppercase
/// letter, one lowercase letter, one digit and one special character from
/// [`PASSWORD_SPECIAL_CHARS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    /// Minimum length in characters (inclusive)
    pub min_length: usize,
    /// Maximum length in characters (inclusive)
    pub max_length: usize,
    /// Characters that satisfy the special-character criterion
    pub special_chars: &'static [char],
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: MIN_PASSWORD_LENGTH,
            max_length: MAX_PASSWORD_LENGTH,
            special_chars: PASSWORD_SPECIAL_CHARS,
        }
    }
}

impl PasswordPolicy {
    /// Evaluate the policy against a candidate password.
    ///
    /// Returns true only when every criterion holds: length within bounds
    /// (counted in characters, not bytes) plus one uppercase, one lowercase,
    /// one digit and one special character. Callers get a single yes/no;
    /// which criterion failed is deliberately not reported.
    pub fn satisfies(&self, candidate: &str) -> bool {
        let length = candidate.chars().count();
        if length < self.min_length || length > self.max_length {
            return false;
        }

        let has_uppercase = candidate.chars().any(|c| c.is_ascii_uppercase());
        let has_lowercase = candidate.chars().any(|c| c.is_ascii_lowercase());
        let has_digit = candidate.chars().any(|c| c.is_ascii_digit());
        let has_special = candidate.chars().any(|c| self.special_chars.contains(&c));

        has_uppercase && has_lowercase && has_digit && has_special
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_valid_password() {
        let policy = PasswordPolicy::default();
        assert!(policy.satisfies("Aa1#aaaa"));
    }

    #[test]
    fn test_too_short() {
        let policy = PasswordPolicy::default();
        assert!(!policy.satisfies("Aa1#aaa"));
    }

    #[test]
    fn test_too_long() {
        let policy = PasswordPolicy::default();
        let candidate = format!("Aa1#{}", "a".repeat(67));
        assert_eq!(candidate.chars().count(), 71);
        assert!(!policy.satisfies(&candidate));
    }

    #[test]
    fn test_boundary_lengths() {
        let policy = PasswordPolicy::default();
        let at_min = "Aa1#aaaa";
        assert_eq!(at_min.chars().count(), 8);
        assert!(policy.satisfies(at_min));

        let at_max = format!("Aa1#{}", "a".repeat(66));
        assert_eq!(at_max.chars().count(), 70);
        assert!(policy.satisfies(&at_max));
    }

    #[test]
    fn test_missing_uppercase() {
        let policy = PasswordPolicy::default();
        assert!(!policy.satisfies("aa1#aaaa"));
    }

    #[test]
    fn test_missing_lowercase() {
        let policy = PasswordPolicy::default();
        assert!(!policy.satisfies("AA1#AAAA"));
    }

    #[test]
    fn test_missing_digit() {
        let policy = PasswordPolicy::default();
        assert!(!policy.satisfies("Aaa#aaaa"));
    }

    #[test]
    fn test_missing_special() {
        let policy = PasswordPolicy::default();
        assert!(!policy.satisfies("Aa1aaaaa"));
    }

    #[test]
    fn test_every_special_char_accepted() {
        let policy = PasswordPolicy::default();
        for c in PASSWORD_SPECIAL_CHARS {
            let candidate = format!("Aa1{}aaaa", c);
            assert!(policy.satisfies(&candidate), "rejected special char {c:?}");
        }
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let policy = PasswordPolicy::default();
        // 8 characters, more than 8 bytes
        let candidate = "Aa1#aaaé";
        assert_eq!(candidate.chars().count(), 8);
        assert!(policy.satisfies(candidate));
    }

    #[test]
    fn test_non_ascii_letters_do_not_satisfy_classes() {
        let policy = PasswordPolicy::default();
        // Cyrillic uppercase does not count as the required uppercase letter
        assert!(!policy.satisfies("Яa1#aaaa"));
    }

    #[test]
    fn test_custom_policy_bounds() {
        let policy = PasswordPolicy {
            min_length: 4,
            max_length: 6,
            ..PasswordPolicy::default()
        };
        assert!(policy.satisfies("Aa1#"));
        assert!(!policy.satisfies("Aa1#aaaa"));
    }
}
