//! Form fields and their validation state.

use crate::error::FieldError;
use std::fmt;

/// The five input fields of the payment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "snake_case"))]
pub enum Field {
    /// Cardholder name.
    Name,
    /// Card number.
    CardNumber,
    /// Expiry month.
    Month,
    /// Expiry year.
    Year,
    /// Card verification code.
    Cvc,
}

impl Field {
    /// All fields, in form order.
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::CardNumber,
        Field::Month,
        Field::Year,
        Field::Cvc,
    ];

    /// Position of the field in [`Field::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::CardNumber => 1,
            Self::Month => 2,
            Self::Year => 3,
            Self::Cvc => 4,
        }
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Cardholder name",
            Self::CardNumber => "Card number",
            Self::Month => "Expiry month",
            Self::Year => "Expiry year",
            Self::Cvc => "CVC",
        }
    }

    /// Returns true if the field only accepts digits.
    #[inline]
    pub const fn is_numeric(self) -> bool {
        !matches!(self, Self::Name)
    }

    /// Returns true if the field holds data that must never be logged in full.
    #[inline]
    pub const fn is_sensitive(self) -> bool {
        matches!(self, Self::CardNumber | Self::Cvc)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Validation state of one field as the user sees it.
///
/// The error indicator (message visibility) and the input decoration (the
/// red "invalid" outline) are tracked separately, since submit-time logic
/// does not always move them together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldStatus {
    error: Option<FieldError>,
    error_visible: bool,
    decorated: bool,
}

impl FieldStatus {
    /// A status with no error shown.
    pub const fn clear() -> Self {
        Self {
            error: None,
            error_visible: false,
            decorated: false,
        }
    }

    /// A status showing `error` with its decoration.
    pub fn failed(error: FieldError) -> Self {
        Self {
            error: Some(error),
            error_visible: true,
            decorated: true,
        }
    }

    /// Builds the status for a predicate result.
    pub fn from_result<T>(result: &Result<T, FieldError>) -> Self {
        match result {
            Ok(_) => Self::clear(),
            Err(e) => Self::failed(e.clone()),
        }
    }

    /// Returns true if the error indicator is visible.
    #[inline]
    pub const fn has_error(&self) -> bool {
        self.error_visible
    }

    /// Returns true if the input carries the "invalid" decoration.
    #[inline]
    pub const fn is_decorated(&self) -> bool {
        self.decorated
    }

    /// The error carried by the indicator, if any.
    ///
    /// The error survives hiding the indicator, mirroring a message element
    /// whose text stays set while it is hidden.
    #[inline]
    pub const fn error(&self) -> Option<&FieldError> {
        self.error.as_ref()
    }

    /// The message shown under the field, if the indicator is visible.
    pub fn message(&self) -> Option<String> {
        if self.error_visible {
            self.error.as_ref().map(ToString::to_string)
        } else {
            None
        }
    }

    /// Hides the indicator and removes the decoration.
    pub(crate) fn hide(&mut self) {
        self.error_visible = false;
        self.decorated = false;
    }
}
