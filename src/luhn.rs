//! Luhn checksum for card numbers.
//!
//! The Luhn algorithm (also known as the "modulus 10" algorithm) is a checksum
//! formula that catches single-digit typos and most adjacent transpositions.
//! The form runs it on every keystroke in the card number field, so it works
//! on plain digit slices and allocates nothing.

/// Lookup table for doubled digits: double the value, subtract 9 if > 9.
/// Index is the digit (0-9), value is the transformed result.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Validates a sequence of digits using the Luhn algorithm.
///
/// # Arguments
///
/// * `digits` - A slice of digits (0-9, not ASCII) representing the number.
///
/// # Returns
///
/// `true` if the checksum is divisible by 10. An empty slice is never valid,
/// even though its checksum of 0 would be.
///
/// # Example
///
/// ```
/// use card_form::luhn::validate;
///
/// let digits = [4, 5, 3, 9, 1, 4, 8, 8, 0, 3, 4, 3, 6, 4, 6, 7];
/// assert!(validate(&digits));
///
/// let typo = [4, 5, 3, 9, 1, 4, 8, 8, 0, 3, 4, 3, 6, 4, 6, 8];
/// assert!(!validate(&typo));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    if digits.is_empty() {
        return false;
    }

    compute_checksum(digits) % 10 == 0
}

/// Computes the Luhn sum for a sequence of digits.
///
/// Digits are walked from the rightmost one. The rightmost digit is kept as
/// is, the next one is doubled, and so on alternately; a doubled digit above
/// 9 has 9 subtracted.
///
/// # Returns
///
/// The Luhn sum (not reduced modulo 10).
#[inline]
pub fn compute_checksum(digits: &[u8]) -> u32 {
    let mut sum: u32 = 0;
    let mut double = false;

    for &digit in digits.iter().rev() {
        if double {
            sum += DOUBLE_TABLE[digit as usize] as u32;
        } else {
            sum += digit as u32;
        }
        double = !double;
    }

    sum
}

/// Generates the check digit for a partial number.
///
/// Given digits without the check digit, computes the digit that must be
/// appended for the full number to pass [`validate`].
///
/// # Example
///
/// ```
/// use card_form::luhn::generate_check_digit;
///
/// let partial = [4, 5, 3, 9, 1, 4, 8, 8, 0, 3, 4, 3, 6, 4, 6];
/// assert_eq!(generate_check_digit(&partial), 7);
/// ```
#[inline]
pub fn generate_check_digit(digits: &[u8]) -> u8 {
    // Once the check digit is appended every existing digit moves one
    // position to the left, so the rightmost one here is doubled.
    let mut sum: u32 = 0;
    let mut double = true;

    for &digit in digits.iter().rev() {
        if double {
            sum += DOUBLE_TABLE[digit as usize] as u32;
        } else {
            sum += digit as u32;
        }
        double = !double;
    }

    ((10 - (sum % 10)) % 10) as u8
}

/// Checks a string with the Luhn algorithm, ignoring anything that is not an
/// ASCII digit.
///
/// Returns `false` when the input holds no digits at all.
///
/// # Example
///
/// ```
/// use card_form::luhn::passes_luhn;
///
/// assert!(passes_luhn("4539 1488 0343 6467"));
/// assert!(!passes_luhn("4539 1488 0343 6468"));
/// assert!(!passes_luhn(""));
/// ```
pub fn passes_luhn(input: &str) -> bool {
    let digits = to_digit_values(input);
    validate(&digits)
}

/// Converts the ASCII digits of `input` into digit values, skipping
/// everything else.
pub(crate) fn to_digit_values(input: &str) -> Vec<u8> {
    input
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}
