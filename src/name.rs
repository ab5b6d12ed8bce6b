//! Cardholder name validation.

use crate::error::FieldError;

/// Validates a cardholder name: it must contain something other than
/// whitespace.
///
/// No other rule applies here; the normalizer has already removed anything
/// that is not a letter or whitespace.
///
/// # Example
///
/// ```
/// use card_form::name::validate_name;
///
/// assert!(validate_name("John Smith").is_ok());
/// assert!(validate_name("   ").is_err());
/// ```
pub fn validate_name(input: &str) -> Result<(), FieldError> {
    if input.trim().is_empty() {
        return Err(FieldError::BlankName);
    }
    Ok(())
}

/// Checks if a name is non-blank.
#[inline]
pub fn is_valid_name(input: &str) -> bool {
    validate_name(input).is_ok()
}
