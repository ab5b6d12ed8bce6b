//! Card preview projection.
//!
//! The page shows a mock card that mirrors what the user typed. Each preview
//! slot shows the field's current value, or a fixed placeholder while the
//! field is empty. Validity plays no part here: an invalid value is previewed
//! just like a valid one.

/// Placeholder texts shown while a field is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(default))]
pub struct Placeholders {
    /// Shown in place of the cardholder name.
    pub name: String,
    /// Shown in place of the card number.
    pub card_number: String,
    /// Shown in place of either side of the expiry.
    pub expiry_part: String,
    /// Shown in place of the CVC.
    pub cvc: String,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            name: "Jane Appleseed".to_string(),
            card_number: "0000 0000 0000 0000".to_string(),
            expiry_part: "00".to_string(),
            cvc: "000".to_string(),
        }
    }
}

/// The four preview display surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct Preview {
    /// Cardholder name line.
    pub name: String,
    /// Card number line.
    pub card_number: String,
    /// Expiry, `MM/YY`.
    pub expiry: String,
    /// CVC on the back of the card.
    pub cvc: String,
}

impl Preview {
    /// The preview of an empty form.
    pub fn placeholders(placeholders: &Placeholders) -> Self {
        Self {
            name: placeholders.name.clone(),
            card_number: placeholders.card_number.clone(),
            expiry: project_expiry("", "", placeholders),
            cvc: placeholders.cvc.clone(),
        }
    }
}

impl Default for Preview {
    fn default() -> Self {
        Self::placeholders(&Placeholders::default())
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

/// Projects the normalized name onto the preview.
///
/// Only an empty name falls back to the placeholder; a whitespace-only name
/// is shown as typed.
pub fn project_name(normalized: &str, placeholders: &Placeholders) -> String {
    or_placeholder(normalized, &placeholders.name)
}

/// Projects the formatted card number onto the preview.
pub fn project_card_number(formatted: &str, placeholders: &Placeholders) -> String {
    or_placeholder(formatted, &placeholders.card_number)
}

/// Projects the month and year fields onto the preview as `month/year`.
///
/// Each side falls back to its placeholder on its own.
///
/// # Example
///
/// ```
/// use card_form::preview::{project_expiry, Placeholders};
///
/// let placeholders = Placeholders::default();
/// assert_eq!(project_expiry("", "", &placeholders), "00/00");
/// assert_eq!(project_expiry("4", "", &placeholders), "4/00");
/// assert_eq!(project_expiry("04", "25", &placeholders), "04/25");
/// ```
pub fn project_expiry(month: &str, year: &str, placeholders: &Placeholders) -> String {
    format!(
        "{}/{}",
        or_placeholder(month, &placeholders.expiry_part),
        or_placeholder(year, &placeholders.expiry_part)
    )
}

/// Projects the normalized CVC onto the preview.
pub fn project_cvc(normalized: &str, placeholders: &Placeholders) -> String {
    or_placeholder(normalized, &placeholders.cvc)
}
