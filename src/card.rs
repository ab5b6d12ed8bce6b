//! Card number validation.
//!
//! A card number is accepted when it has at least [`MIN_CARD_DIGITS`] digits
//! and passes the Luhn checksum. There is no upper length bound and no brand
//! detection.

use crate::error::FieldError;
use crate::format::format_card_number;
use crate::luhn;
use crate::mask::{last_four, mask_card_number};
use std::fmt;
use zeroize::Zeroize;

/// Minimum number of digits for a card number to be accepted.
pub const MIN_CARD_DIGITS: usize = 14;

/// A card number that passed validation.
///
/// # Security
///
/// - The digits are only reachable through [`CardNumber::number`]
/// - Memory is zeroed on drop using the `zeroize` crate
/// - `Debug` and `Display` show the masked number only
#[derive(Clone)]
pub struct CardNumber {
    digits: String,
}

impl CardNumber {
    /// Returns the number of digits.
    #[inline]
    pub fn length(&self) -> usize {
        self.digits.len()
    }

    /// Returns the last four digits.
    #[inline]
    pub fn last_four(&self) -> String {
        last_four(&self.digits)
    }

    /// Returns the digits grouped in fours, as shown in the field.
    ///
    /// # Security Warning
    ///
    /// This exposes the full card number. Use [`CardNumber::masked`] for logs.
    pub fn formatted(&self) -> String {
        format_card_number(&self.digits)
    }

    /// Returns the full card number as digits.
    ///
    /// # Security Warning
    ///
    /// This exposes the full card number. Never log the result.
    #[inline]
    pub fn number(&self) -> &str {
        &self.digits
    }

    /// Returns the card number with all but the last 4 digits masked.
    #[inline]
    pub fn masked(&self) -> String {
        mask_card_number(&self.digits)
    }
}

impl fmt::Debug for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardNumber")
            .field("number", &self.masked())
            .field("length", &self.length())
            .finish()
    }
}

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}

impl Drop for CardNumber {
    fn drop(&mut self) {
        self.digits.zeroize();
    }
}

/// Validates a card number.
///
/// Non-digit characters are ignored, so both the raw digits and the formatted
/// field text are accepted. The length check runs first: a short number
/// reports [`FieldError::CardNumberTooShort`] even if its checksum happens to
/// pass. The empty string is reported as too short, so the Luhn routine never
/// sees an empty input.
///
/// # Example
///
/// ```
/// use card_form::card::validate_card_number;
///
/// let card = validate_card_number("4539 1488 0343 6467").unwrap();
/// assert_eq!(card.last_four(), "6467");
///
/// assert!(validate_card_number("4539148803436468").is_err());
/// ```
pub fn validate_card_number(input: &str) -> Result<CardNumber, FieldError> {
    let digits = luhn::to_digit_values(input);
    let length = digits.len();

    if length < MIN_CARD_DIGITS {
        return Err(FieldError::CardNumberTooShort {
            length,
            minimum: MIN_CARD_DIGITS,
        });
    }

    if !luhn::validate(&digits) {
        return Err(FieldError::InvalidChecksum);
    }

    Ok(CardNumber {
        digits: digits.iter().map(|&d| (b'0' + d) as char).collect(),
    })
}

/// Checks if a card number passes the length and checksum rules.
#[inline]
pub fn is_valid_card_number(input: &str) -> bool {
    validate_card_number(input).is_ok()
}
