//! Form configuration.
//!
//! A [`FormConfig`] selects the preview placeholders and the submit policy.
//! The defaults reproduce the stock form; with the `json` feature a config
//! can also be loaded from JSON, where any missing key keeps its default:
//!
//! ```json
//! {
//!   "submit_policy": "legacy",
//!   "placeholders": { "name": "YOUR NAME" }
//! }
//! ```

use crate::preview::Placeholders;
use std::fmt;

/// How `submit()` treats field errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "snake_case"))]
pub enum SubmitPolicy {
    /// Every field is treated alike: all indicators are cleared before the
    /// re-check and any failing field blocks submission.
    #[default]
    Strict,
    /// Reproduces the historical page script: only the month and year
    /// indicators are cleared before the re-check, and an invalid CVC shows
    /// its error without blocking submission.
    Legacy,
}

impl SubmitPolicy {
    /// Returns true if a failure of `field` blocks submission.
    #[inline]
    pub const fn blocks_on(self, field: crate::Field) -> bool {
        match self {
            Self::Strict => true,
            Self::Legacy => !matches!(field, crate::Field::Cvc),
        }
    }

    /// Returns true if `field`'s indicator is cleared before the re-check.
    #[inline]
    pub const fn clears_before_check(self, field: crate::Field) -> bool {
        match self {
            Self::Strict => true,
            Self::Legacy => matches!(field, crate::Field::Month | crate::Field::Year),
        }
    }

    /// Returns the policy's lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Legacy => "legacy",
        }
    }
}

impl fmt::Display for SubmitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Configuration of a [`CardForm`](crate::CardForm).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(default))]
pub struct FormConfig {
    /// Texts shown on the preview card while fields are empty.
    pub placeholders: Placeholders,
    /// Submit-time behaviour.
    pub submit_policy: SubmitPolicy,
}

impl FormConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the submit policy.
    pub fn submit_policy(mut self, policy: SubmitPolicy) -> Self {
        self.submit_policy = policy;
        self
    }

    /// Sets the preview placeholders.
    pub fn placeholders(mut self, placeholders: Placeholders) -> Self {
        self.placeholders = placeholders;
        self
    }
}

#[cfg(feature = "json")]
mod json {
    use super::FormConfig;
    use crate::error::ConfigError;
    use std::fs;
    use std::io::Read;
    use std::path::Path;

    impl FormConfig {
        /// Loads a configuration from a JSON file.
        ///
        /// # Example
        ///
        /// ```rust,ignore
        /// use card_form::FormConfig;
        ///
        /// let config = FormConfig::from_file("form.json")?;
        /// ```
        pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
            let content = fs::read_to_string(path)?;
            Self::from_json_str(&content)
        }

        /// Loads a configuration from a reader.
        pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, ConfigError> {
            let mut content = String::new();
            reader.read_to_string(&mut content)?;
            Self::from_json_str(&content)
        }

        /// Parses a configuration from a JSON string.
        pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
            serde_json::from_str(json)
                .map_err(|e| ConfigError::Parse(format!("JSON parse error: {}", e)))
        }
    }
}
