//! CVC validation.
//!
//! The form accepts exactly [`CVC_LENGTH`] digits, whatever the card network.
//!
//! # Example
//!
//! ```
//! use card_form::cvc::{is_valid_cvc, validate_cvc};
//!
//! assert!(validate_cvc("123").is_ok());
//! assert!(!is_valid_cvc("12"));
//! assert!(!is_valid_cvc("1234"));
//! ```

use crate::error::FieldError;
use crate::mask::mask_cvc;
use crate::normalize::is_all_digits;
use std::fmt;
use zeroize::Zeroize;

/// Required number of CVC digits.
pub const CVC_LENGTH: usize = 3;

/// A validated CVC.
#[derive(Clone)]
pub struct ValidatedCvc {
    digits: [u8; CVC_LENGTH],
}

impl ValidatedCvc {
    /// Returns the CVC as a string.
    pub fn as_str(&self) -> String {
        self.digits.iter().map(|&d| (b'0' + d) as char).collect()
    }

    /// Returns the number of digits.
    #[inline]
    pub const fn length(&self) -> usize {
        CVC_LENGTH
    }

    /// Returns the CVC digits.
    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }
}

impl fmt::Debug for ValidatedCvc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedCvc")
            .field("value", &"***")
            .finish()
    }
}

impl fmt::Display for ValidatedCvc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", mask_cvc(&self.as_str()))
    }
}

impl Drop for ValidatedCvc {
    fn drop(&mut self) {
        self.digits.zeroize();
    }
}

/// Validates a CVC: exactly three ASCII digits.
///
/// The length is counted in characters, so a value with a stray non-digit is
/// reported as the wrong length rather than silently cleaned.
pub fn validate_cvc(input: &str) -> Result<ValidatedCvc, FieldError> {
    let length = input.chars().count();

    if length != CVC_LENGTH || !is_all_digits(input) {
        return Err(FieldError::InvalidCvcLength {
            length,
            expected: CVC_LENGTH,
        });
    }

    let mut digits = [0u8; CVC_LENGTH];
    for (slot, b) in digits.iter_mut().zip(input.bytes()) {
        *slot = b - b'0';
    }

    Ok(ValidatedCvc { digits })
}

/// Checks if a CVC is valid.
#[inline]
pub fn is_valid_cvc(input: &str) -> bool {
    validate_cvc(input).is_ok()
}
