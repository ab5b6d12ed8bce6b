//! Masking for log output and debug formatting.
//!
//! The form holds the full card number and CVC while the user types. Anything
//! that leaves the engine for diagnostics goes through these helpers first.
//!
//! - Card numbers keep only the last 4 digits, in the form's display grouping
//! - CVCs are fully masked, only their length is visible

use crate::format::format_card_number;

/// Masks a card number, showing only the last 4 digits.
///
/// Non-digit characters are ignored. The result uses the same grouping as the
/// card number field. Inputs of 4 digits or fewer are masked entirely.
///
/// # Example
///
/// ```
/// use card_form::mask::mask_card_number;
///
/// assert_eq!(mask_card_number("4539148803436467"), "**** **** **** 6467");
/// assert_eq!(mask_card_number("4539 1488 0"), "**** *488 0");
/// assert_eq!(mask_card_number("453"), "***");
/// ```
pub fn mask_card_number(input: &str) -> String {
    let formatted = format_card_number(input);
    let digit_count = formatted.bytes().filter(u8::is_ascii_digit).count();
    let keep_from = if digit_count > 4 { digit_count - 4 } else { digit_count };

    let mut seen = 0;
    formatted
        .chars()
        .map(|c| {
            if !c.is_ascii_digit() {
                return c;
            }
            seen += 1;
            if seen > keep_from {
                c
            } else {
                '*'
            }
        })
        .collect()
}

/// Masks a CVC completely, keeping its length.
///
/// # Example
///
/// ```
/// use card_form::mask::mask_cvc;
///
/// assert_eq!(mask_cvc("123"), "***");
/// assert_eq!(mask_cvc(""), "");
/// ```
#[inline]
pub fn mask_cvc(input: &str) -> String {
    "*".repeat(input.chars().count())
}

/// Extracts the last 4 digits of a card number.
///
/// Returns an empty string if there are fewer than 4 digits.
pub fn last_four(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(char::is_ascii_digit).collect();
    if digits.len() >= 4 {
        digits[digits.len() - 4..].iter().collect()
    } else {
        String::new()
    }
}
