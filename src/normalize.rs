//! Input normalization.
//!
//! Every keystroke is run through a normalizer before anything else sees it.
//! Characters outside the field's alphabet are dropped, and the result is
//! written back into the field so illegal characters never stay visible.
//!
//! | Field | Alphabet |
//! |-------|----------|
//! | Cardholder name | ASCII letters and whitespace |
//! | Card number, month, year, CVC | ASCII digits |

/// Returns true if `c` may appear in a cardholder name.
#[inline]
pub fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c.is_whitespace()
}

/// Strips everything except ASCII letters and whitespace.
///
/// Whitespace is kept as typed (not trimmed, not collapsed).
///
/// # Example
///
/// ```
/// use card_form::normalize::normalize_name;
///
/// assert_eq!(normalize_name("J0hn  Sm1th!"), "Jhn  Smth");
/// assert_eq!(normalize_name("Zoë"), "Zo");
/// ```
pub fn normalize_name(input: &str) -> String {
    input.chars().filter(|&c| is_name_char(c)).collect()
}

/// Strips everything except ASCII digits.
///
/// Used for the card number, expiry month, expiry year and CVC fields.
///
/// # Example
///
/// ```
/// use card_form::normalize::normalize_digits;
///
/// assert_eq!(normalize_digits("4539 1488-0343x6467"), "4539148803436467");
/// assert_eq!(normalize_digits("-1"), "1");
/// ```
pub fn normalize_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Returns true if `input` is already a normalized name.
#[inline]
pub fn is_normalized_name(input: &str) -> bool {
    input.chars().all(is_name_char)
}

/// Returns true if `input` consists of ASCII digits only (the empty string
/// included).
#[inline]
pub fn is_all_digits(input: &str) -> bool {
    input.bytes().all(|b| b.is_ascii_digit())
}
