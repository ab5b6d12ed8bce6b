//! Error types for field validation and configuration.
//!
//! Field errors are ordinary values: every failed predicate produces one, the
//! form shows its message next to the offending input, and nothing is ever
//! raised as a program fault.

use crate::field::Field;
use std::fmt;

/// Why a single form field failed validation.
///
/// The `Display` output is the message shown to the user under the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The cardholder name is empty or whitespace only.
    BlankName,

    /// The card number has too few digits.
    CardNumberTooShort {
        /// The number of digits provided.
        length: usize,
        /// The minimum required digits (14).
        minimum: usize,
    },

    /// The card number failed the Luhn checksum.
    InvalidChecksum,

    /// The expiry month is missing, not a number, or outside 1-12.
    InvalidMonth,

    /// The expiry year is missing, not a number, or outside 0-99.
    InvalidYear,

    /// The CVC does not have exactly the required number of digits.
    InvalidCvcLength {
        /// The number of characters provided.
        length: usize,
        /// The required number of digits (3).
        expected: usize,
    },
}

impl FieldError {
    /// Returns the field this error belongs to.
    pub const fn field(&self) -> Field {
        match self {
            Self::BlankName => Field::Name,
            Self::CardNumberTooShort { .. } | Self::InvalidChecksum => Field::CardNumber,
            Self::InvalidMonth => Field::Month,
            Self::InvalidYear => Field::Year,
            Self::InvalidCvcLength { .. } => Field::Cvc,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankName => write!(f, "Can't be blank"),
            Self::CardNumberTooShort { minimum, .. } => {
                write!(f, "Card number must be at least {} digits", minimum)
            }
            Self::InvalidChecksum => write!(f, "Invalid card number"),
            Self::InvalidMonth => write!(f, "Must be a valid month"),
            Self::InvalidYear => write!(f, "Must be a valid year"),
            Self::InvalidCvcLength { expected, .. } => {
                write!(f, "CVC must be {} digits", expected)
            }
        }
    }
}

impl std::error::Error for FieldError {}

/// Errors that can occur while loading a form configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read the configuration source.
    Io(std::io::Error),
    /// The configuration could not be parsed.
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Parse(s) => write!(f, "Parse error: {}", s),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
