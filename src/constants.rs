//! Crate-wide constants
//!
//! Centralized location for the password policy's magic values.

// =============================================================================
// Password Complexity
// =============================================================================

/// Minimum candidate password length, in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum candidate password length, in characters
pub const MAX_PASSWORD_LENGTH: usize = 70;

/// Characters that satisfy the special-character requirement
pub const PASSWORD_SPECIAL_CHARS: &[char] = &['#', '?', '!', '@', '$', '%', '^', '&', '*', '-'];
