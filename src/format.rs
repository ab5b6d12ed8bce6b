//! Card number formatting.
//!
//! The card number field always shows its digits in groups of four:
//! `XXXX XXXX XXXX XXXX`, with a shorter last group when the digit count is
//! not a multiple of four and never a trailing separator. Formatting is
//! recomputed from scratch on each keystroke, so it does not matter where the
//! cursor was or what separators the field held before.
//!
//! # Example
//!
//! ```
//! use card_form::format::{format_card_number, format_with_separator, strip_formatting};
//!
//! assert_eq!(format_card_number("4539148803436467"), "4539 1488 0343 6467");
//! assert_eq!(format_card_number("45391"), "4539 1");
//! assert_eq!(format_with_separator("4539148803436467", "-"), "4539-1488-0343-6467");
//! assert_eq!(strip_formatting("4539 1488 0343 6467"), "4539148803436467");
//! ```

/// Number of digits per display group.
pub const GROUP_SIZE: usize = 4;

/// Formats a card number with single spaces between groups of four.
///
/// Anything that is not an ASCII digit is dropped first, which makes the
/// function idempotent: formatting an already formatted value returns it
/// unchanged.
///
/// # Example
///
/// ```
/// use card_form::format::format_card_number;
///
/// assert_eq!(format_card_number("4111111111111111"), "4111 1111 1111 1111");
/// assert_eq!(format_card_number("4111 1111 1111 1111"), "4111 1111 1111 1111");
/// assert_eq!(format_card_number(""), "");
/// ```
pub fn format_card_number(input: &str) -> String {
    format_with_separator(input, " ")
}

/// Formats a card number with a custom separator between groups of four.
///
/// # Example
///
/// ```
/// use card_form::format::format_with_separator;
///
/// assert_eq!(format_with_separator("4111111111111111", " - "), "4111 - 1111 - 1111 - 1111");
/// assert_eq!(format_with_separator("411111", ""), "411111");
/// ```
pub fn format_with_separator(input: &str, separator: &str) -> String {
    let digits: Vec<char> = input.chars().filter(char::is_ascii_digit).collect();

    if digits.is_empty() {
        return String::new();
    }

    let group_count = digits.len().div_ceil(GROUP_SIZE);
    let mut result = String::with_capacity(digits.len() + group_count * separator.len());

    for (i, group) in digits.chunks(GROUP_SIZE).enumerate() {
        if i > 0 {
            result.push_str(separator);
        }
        result.extend(group);
    }

    result
}

/// Splits a card number into its display groups.
///
/// Returns a vector of digit groups for flexible rendering.
///
/// # Example
///
/// ```
/// use card_form::format::split_into_groups;
///
/// assert_eq!(split_into_groups("4111111111111"), vec!["4111", "1111", "1111", "1"]);
/// assert!(split_into_groups("").is_empty());
/// ```
pub fn split_into_groups(input: &str) -> Vec<String> {
    let digits: Vec<char> = input.chars().filter(char::is_ascii_digit).collect();

    digits
        .chunks(GROUP_SIZE)
        .map(|group| group.iter().collect())
        .collect()
}

/// Strips all formatting from a card number, leaving only digits.
///
/// # Example
///
/// ```
/// use card_form::format::strip_formatting;
///
/// assert_eq!(strip_formatting("4111 1111 1111 1111"), "4111111111111111");
/// assert_eq!(strip_formatting("4111-1111-1111-1111"), "4111111111111111");
/// ```
#[inline]
pub fn strip_formatting(input: &str) -> String {
    crate::normalize::normalize_digits(input)
}
