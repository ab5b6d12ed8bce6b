//! Fuzz target for card formatting and normalization.
//!
//! Tests that formatting functions never panic on arbitrary input.

#![no_main]

use card_form::{format, mask, normalize};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // These should never panic
    let _ = format::format_with_separator(data, "-");
    let _ = format::format_with_separator(data, "");
    let _ = format::split_into_groups(data);
    let _ = mask::mask_card_number(data);
    let _ = mask::last_four(data);

    let name = normalize::normalize_name(data);
    assert!(normalize::is_normalized_name(&name));
    assert_eq!(normalize::normalize_name(&name), name, "Name normalization is idempotent");

    // Verify roundtrip property
    let formatted = format::format_card_number(data);
    let stripped = format::strip_formatting(&formatted);
    let original_digits = normalize::normalize_digits(data);
    assert_eq!(stripped, original_digits, "Format roundtrip should preserve digits");
    assert_eq!(format::format_card_number(&formatted), formatted, "Formatting is idempotent");
});
