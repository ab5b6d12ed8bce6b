//! Expiry month and year validation.
//!
//! The form takes the month and the year in two separate fields. Each one is
//! checked on its own range only:
//!
//! - month: an integer in 1-12
//! - year: an integer in 0-99 (two-digit year, no century)
//!
//! Nothing is compared with the current date: an expiry that already passed
//! is still accepted.
//!
//! # Example
//!
//! ```
//! use card_form::expiry::{validate_expiry, validate_month, validate_year};
//!
//! assert_eq!(validate_month("04"), Ok(4));
//! assert_eq!(validate_year("25"), Ok(25));
//!
//! let expiry = validate_expiry("4", "25").unwrap();
//! assert_eq!(expiry.to_string(), "04/25");
//! ```

use crate::error::FieldError;
use crate::normalize::is_all_digits;
use std::fmt;

/// Highest accepted month.
pub const MAX_MONTH: u32 = 12;

/// Highest accepted two-digit year.
pub const MAX_YEAR: u32 = 99;

/// A month/year pair that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryDate {
    /// Month (1-12)
    month: u8,
    /// Two-digit year (0-99)
    year: u8,
}

impl ExpiryDate {
    /// Creates a new expiry date.
    ///
    /// Returns `None` if the month is not 1-12 or the year is not 0-99.
    pub fn new(month: u8, year: u8) -> Option<Self> {
        if !(1..=12).contains(&month) || year > 99 {
            return None;
        }
        Some(Self { month, year })
    }

    /// Returns the month (1-12).
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the two-digit year (0-99).
    #[inline]
    pub const fn year(&self) -> u8 {
        self.year
    }

    /// Formats as MM/YY.
    pub fn format_short(&self) -> String {
        format!("{:02}/{:02}", self.month, self.year)
    }
}

impl fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.year)
    }
}

/// Parses a run of ASCII digits as a number.
///
/// Returns `None` for empty input, anything that is not a plain digit (signs
/// included), and values too large to represent.
fn parse_digits(input: &str) -> Option<u32> {
    if input.is_empty() || !is_all_digits(input) {
        return None;
    }
    input.parse().ok()
}

/// Validates the expiry month field.
///
/// Leading zeros are allowed, so `"04"` and `"4"` are both April.
///
/// # Example
///
/// ```
/// use card_form::expiry::validate_month;
///
/// assert_eq!(validate_month("1"), Ok(1));
/// assert_eq!(validate_month("12"), Ok(12));
/// assert!(validate_month("0").is_err());
/// assert!(validate_month("13").is_err());
/// ```
pub fn validate_month(input: &str) -> Result<u8, FieldError> {
    match parse_digits(input) {
        Some(month) if (1..=MAX_MONTH).contains(&month) => Ok(month as u8),
        _ => Err(FieldError::InvalidMonth),
    }
}

/// Validates the expiry year field.
///
/// # Example
///
/// ```
/// use card_form::expiry::validate_year;
///
/// assert_eq!(validate_year("0"), Ok(0));
/// assert_eq!(validate_year("99"), Ok(99));
/// assert!(validate_year("100").is_err());
/// assert!(validate_year("-1").is_err());
/// ```
pub fn validate_year(input: &str) -> Result<u8, FieldError> {
    match parse_digits(input) {
        Some(year) if year <= MAX_YEAR => Ok(year as u8),
        _ => Err(FieldError::InvalidYear),
    }
}

/// Validates both expiry fields together.
///
/// The month is checked first, so an invalid month is reported even when the
/// year is invalid too.
pub fn validate_expiry(month: &str, year: &str) -> Result<ExpiryDate, FieldError> {
    let month = validate_month(month)?;
    let year = validate_year(year)?;
    Ok(ExpiryDate { month, year })
}

/// Checks if a month field is valid.
#[inline]
pub fn is_valid_month(input: &str) -> bool {
    validate_month(input).is_ok()
}

/// Checks if a year field is valid.
#[inline]
pub fn is_valid_year(input: &str) -> bool {
    validate_year(input).is_ok()
}
