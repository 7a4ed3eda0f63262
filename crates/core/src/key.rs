//! Account-name normalization and validation
//!
//! The store itself is normalization-agnostic: it treats keys as opaque
//! ordered values. Callers that use human-supplied identifiers as keys
//! normalize them first so that "Mark", " mark " and "MARK" all address
//! the same entry. The ledger layer funnels every account name through
//! these helpers.

use thiserror::Error;

/// Maximum accepted byte length for a normalized account name
pub const MAX_NAME_BYTES: usize = 256;

/// Normalize an account name into its store-key form
///
/// Trims surrounding whitespace and lower-cases the result.
///
/// # Examples
///
/// ```
/// use till_core::key::normalize_name;
///
/// assert_eq!(normalize_name("Mark"), "mark");
/// assert_eq!(normalize_name("  JANE  "), "jane");
/// ```
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Validate a normalized account name
///
/// # Examples
///
/// ```
/// use till_core::key::validate_name;
///
/// assert!(validate_name("mark").is_ok());
/// assert!(validate_name("").is_err()); // empty
/// assert!(validate_name("a\x00b").is_err()); // contains NUL
/// ```
pub fn validate_name(name: &str) -> Result<(), KeyError> {
    if name.is_empty() {
        return Err(KeyError::Empty);
    }

    if name.contains('\x00') {
        return Err(KeyError::ContainsNul);
    }

    let len = name.len();
    if len > MAX_NAME_BYTES {
        return Err(KeyError::TooLong {
            actual: len,
            max: MAX_NAME_BYTES,
        });
    }

    Ok(())
}

/// Account-name validation errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// Name is empty after normalization
    #[error("account name cannot be empty")]
    Empty,

    /// Name contains a NUL byte (\0)
    #[error("account name cannot contain NUL bytes")]
    ContainsNul,

    /// Name exceeds the maximum length
    #[error("account name too long: {actual} bytes exceeds maximum {max}")]
    TooLong {
        /// Actual name length in bytes
        actual: usize,
        /// Maximum allowed length
        max: usize,
    },
}
