//! Integration tests for card_form.
//!
//! These drive the form engine through full typing sessions the way a page
//! would: keystroke by keystroke, then submit and reset.

use card_form::{
    format, luhn, CardForm, Field, FieldError, FormConfig, FormView, Placeholders, SubmitPolicy,
};

// =============================================================================
// TEST DATA
// =============================================================================

mod test_cards {
    // 16 digits, passes Luhn
    pub const VALID_16: &str = "4539148803436467";
    // Same number with the last digit changed
    pub const BAD_CHECKSUM: &str = "4539148803436468";
    // 14 digits, passes Luhn (Diners Club test number)
    pub const VALID_14: &str = "30569309025904";
    // 13 digits, passes Luhn (Visa test number)
    pub const VALID_13: &str = "4222222222222";
    // Processor test cards
    pub const VISA: &str = "4111111111111111";
    pub const MASTERCARD: &str = "5555555555554444";
    pub const AMEX: &str = "378282246310005";
}

fn form_with(policy: SubmitPolicy) -> CardForm {
    CardForm::new(FormConfig::new().submit_policy(policy))
}

fn fill(form: &mut CardForm, name: &str, number: &str, month: &str, year: &str, cvc: &str) {
    form.input_name(name);
    form.input_card_number(number);
    form.input_month(month);
    form.input_year(year);
    form.input_cvc(cvc);
}

/// Types `text` into `field` one character at a time, feeding back the text
/// the engine wrote into the field, like a browser input does.
fn type_into(form: &mut CardForm, field: Field, text: &str) {
    for c in text.chars() {
        let mut current = form.text(field).to_string();
        current.push(c);
        form.input(field, &current);
    }
}

// =============================================================================
// END-TO-END SCENARIOS
// =============================================================================

#[test]
fn test_valid_form_submits_under_both_policies() {
    for policy in [SubmitPolicy::Strict, SubmitPolicy::Legacy] {
        let mut form = form_with(policy);
        fill(&mut form, "John Smith", test_cards::VALID_16, "04", "25", "123");

        let outcome = form.submit();
        assert!(outcome.is_submitted(), "policy {}", policy);
        assert!(outcome.is_clean());
        assert_eq!(form.view(), FormView::Submitted);
        for field in Field::ALL {
            assert!(!form.status(field).has_error(), "{} under {}", field, policy);
        }
    }
}

#[test]
fn test_short_cvc_blocks_submission_under_strict_policy() {
    let mut form = form_with(SubmitPolicy::Strict);
    fill(&mut form, "John Smith", test_cards::VALID_16, "04", "25", "12");

    let outcome = form.submit();
    assert!(!outcome.is_submitted());
    assert_eq!(outcome.failed_fields(), &[Field::Cvc]);
    assert_eq!(form.view(), FormView::Editing);
    assert_eq!(
        form.status(Field::Cvc).message().as_deref(),
        Some("CVC must be 3 digits")
    );
}

#[test]
fn test_short_cvc_still_submits_under_legacy_policy() {
    let mut form = form_with(SubmitPolicy::Legacy);
    fill(&mut form, "John Smith", test_cards::VALID_16, "04", "25", "12");

    let outcome = form.submit();
    assert!(outcome.is_submitted());
    assert_eq!(outcome.failed_fields(), &[Field::Cvc]);
    assert_eq!(form.view(), FormView::Submitted);
    assert!(form.status(Field::Cvc).has_error());
}

#[test]
fn test_each_other_field_blocks_under_both_policies() {
    let cases = [
        (Field::Name, ["", test_cards::VALID_16, "04", "25", "123"]),
        (Field::CardNumber, ["John", test_cards::BAD_CHECKSUM, "04", "25", "123"]),
        (Field::Month, ["John", test_cards::VALID_16, "13", "25", "123"]),
        (Field::Year, ["John", test_cards::VALID_16, "04", "", "123"]),
    ];

    for policy in [SubmitPolicy::Strict, SubmitPolicy::Legacy] {
        for (field, [name, number, month, year, cvc]) in cases {
            let mut form = form_with(policy);
            fill(&mut form, name, number, month, year, cvc);

            let outcome = form.submit();
            assert!(!outcome.is_submitted(), "{} should block under {}", field, policy);
            assert_eq!(outcome.failed_fields(), &[field]);
            assert!(form.status(field).has_error());
            assert!(form.status(field).is_decorated());
        }
    }
}

#[test]
fn test_submit_rechecks_without_live_input() {
    // Submitting an untouched form flags every field
    let mut form = CardForm::default();
    let outcome = form.submit();
    assert_eq!(outcome.failed_fields(), &Field::ALL);
    assert_eq!(
        form.status(Field::Name).message().as_deref(),
        Some("Can't be blank")
    );
    assert_eq!(
        form.status(Field::CardNumber).error(),
        Some(&FieldError::CardNumberTooShort {
            length: 0,
            minimum: 14
        })
    );
}

#[test]
fn test_whitespace_name_fails_at_submit() {
    let mut form = CardForm::default();
    fill(&mut form, "   ", test_cards::VALID_16, "04", "25", "123");
    assert!(form.status(Field::Name).has_error());
    assert!(!form.submit().is_submitted());
}

#[test]
fn test_fixing_fields_after_failed_submit() {
    let mut form = CardForm::default();
    fill(&mut form, "John Smith", test_cards::VALID_16, "00", "25", "123");
    assert!(!form.submit().is_submitted());
    assert!(form.status(Field::Month).has_error());

    let update = form.input_month("04");
    assert!(!update.status.has_error());
    assert!(!update.status.is_decorated());

    assert!(form.submit().is_submitted());
}

// =============================================================================
// STALE INDICATORS
// =============================================================================

#[test]
fn test_strict_submit_clears_stale_decoration_on_every_field() {
    let mut form = CardForm::default();
    form.submit(); // flag everything
    fill(&mut form, "John Smith", test_cards::VALID_16, "04", "25", "123");
    form.submit();

    for field in Field::ALL {
        assert!(!form.status(field).has_error(), "{}", field);
        assert!(!form.status(field).is_decorated(), "{}", field);
    }
}

#[test]
fn test_legacy_submit_only_clears_month_and_year() {
    let mut form = form_with(SubmitPolicy::Legacy);
    form.submit(); // flag everything

    // Fix everything except the name
    form.input_card_number(test_cards::VALID_16);
    form.input_month("04");
    form.input_year("25");
    form.input_cvc("123");

    // The name was never retyped so it still shows the submit-time error
    assert!(form.status(Field::Name).has_error());

    let outcome = form.submit();
    assert!(!outcome.is_submitted());
    assert_eq!(outcome.failed_fields(), &[Field::Name]);
    assert!(!form.status(Field::Month).has_error());
    assert!(!form.status(Field::Year).has_error());
}

// =============================================================================
// LIVE TYPING
// =============================================================================

#[test]
fn test_typing_card_number_keystroke_by_keystroke() {
    let mut form = CardForm::default();
    type_into(&mut form, Field::CardNumber, test_cards::VALID_16);

    assert_eq!(form.text(Field::CardNumber), "4539 1488 0343 6467");
    assert_eq!(form.preview().card_number, "4539 1488 0343 6467");
    assert!(!form.status(Field::CardNumber).has_error());
}

#[test]
fn test_card_number_error_progression() {
    let mut form = CardForm::default();
    let digits = test_cards::VALID_16;

    for end in 1..digits.len() {
        let update = form.input_card_number(&digits[..end]);
        if end < 14 {
            assert!(matches!(
                update.status.error(),
                Some(FieldError::CardNumberTooShort { .. })
            ));
        }
        assert!(update.status.has_error() || luhn::passes_luhn(&digits[..end]));
    }

    let update = form.input_card_number(digits);
    assert!(!update.status.has_error());
}

#[test]
fn test_illegal_characters_never_persist() {
    let mut form = CardForm::default();
    type_into(&mut form, Field::Name, "J0hn Sm1th!");
    type_into(&mut form, Field::CardNumber, "4539-1488-abcd");
    type_into(&mut form, Field::Month, "o4");
    type_into(&mut form, Field::Cvc, "1.2.3");

    assert_eq!(form.text(Field::Name), "Jhn Smth");
    assert_eq!(form.text(Field::CardNumber), "4539 1488");
    assert_eq!(form.text(Field::Month), "4");
    assert_eq!(form.text(Field::Cvc), "123");
}

#[test]
fn test_card_number_length_floor() {
    let mut form = CardForm::default();

    let update = form.input_card_number(test_cards::VALID_13);
    assert!(luhn::passes_luhn(test_cards::VALID_13));
    assert_eq!(
        update.status.error(),
        Some(&FieldError::CardNumberTooShort {
            length: 13,
            minimum: 14
        })
    );

    let update = form.input_card_number(test_cards::VALID_14);
    assert!(!update.status.has_error());
}

#[test]
fn test_processor_test_cards_accepted() {
    let mut form = CardForm::default();
    for card in [test_cards::VISA, test_cards::MASTERCARD, test_cards::AMEX] {
        let update = form.input_card_number(card);
        assert!(!update.status.has_error(), "{} should be accepted", card);
        assert_eq!(update.text, format::format_card_number(card));
    }
}

#[test]
fn test_month_and_year_boundaries() {
    let mut form = CardForm::default();

    for month in ["1", "01", "12"] {
        assert!(!form.input_month(month).status.has_error(), "month {}", month);
    }
    for month in ["0", "00", "13", ""] {
        assert!(form.input_month(month).status.has_error(), "month {}", month);
    }
    for year in ["0", "00", "99"] {
        assert!(!form.input_year(year).status.has_error(), "year {}", year);
    }
    for year in ["100", ""] {
        assert!(form.input_year(year).status.has_error(), "year {}", year);
    }
}

#[test]
fn test_negative_year_is_normalized_before_validation() {
    let mut form = CardForm::default();
    // The sign is not a digit, so the field keeps "1"
    let update = form.input_year("-1");
    assert_eq!(update.text, "1");
    assert!(!update.status.has_error());
}

// =============================================================================
// PREVIEW
// =============================================================================

#[test]
fn test_preview_tracks_fields_regardless_of_validity() {
    let mut form = CardForm::default();
    fill(&mut form, "John Smith", "4539", "13", "7", "12");

    let preview = form.preview();
    assert_eq!(preview.name, "John Smith");
    assert_eq!(preview.card_number, "4539");
    assert_eq!(preview.expiry, "13/7");
    assert_eq!(preview.cvc, "12");
}

#[test]
fn test_preview_falls_back_when_cleared() {
    let mut form = CardForm::default();
    fill(&mut form, "John Smith", test_cards::VALID_16, "04", "25", "123");
    fill(&mut form, "", "", "", "", "");

    let preview = form.preview();
    assert_eq!(preview.name, "Jane Appleseed");
    assert_eq!(preview.card_number, "0000 0000 0000 0000");
    assert_eq!(preview.expiry, "00/00");
    assert_eq!(preview.cvc, "000");
}

#[test]
fn test_custom_placeholders() {
    let placeholders = Placeholders {
        name: "YOUR NAME".to_string(),
        ..Placeholders::default()
    };
    let mut form = CardForm::new(FormConfig::new().placeholders(placeholders));
    assert_eq!(form.preview().name, "YOUR NAME");

    form.input_name("Ann");
    form.input_name("");
    assert_eq!(form.preview().name, "YOUR NAME");
}

// =============================================================================
// RESET
// =============================================================================

#[test]
fn test_reset_after_submission() {
    let mut form = CardForm::default();
    fill(&mut form, "John Smith", test_cards::VALID_16, "04", "25", "123");
    assert!(form.submit().is_submitted());

    form.reset();

    for field in Field::ALL {
        assert_eq!(form.text(field), "", "{}", field);
        assert!(!form.status(field).has_error(), "{}", field);
        assert!(!form.status(field).is_decorated(), "{}", field);
    }
    let preview = form.preview();
    assert_eq!(preview.name, "Jane Appleseed");
    assert_eq!(preview.card_number, "0000 0000 0000 0000");
    assert_eq!(preview.expiry, "00/00");
    assert_eq!(preview.cvc, "000");
    assert_eq!(form.view(), FormView::Editing);
}

#[test]
fn test_reset_after_failed_submission() {
    let mut form = CardForm::default();
    form.submit();
    form.reset();
    for field in Field::ALL {
        assert!(!form.status(field).has_error());
    }
}

#[test]
fn test_reset_keeps_configuration() {
    let mut form = form_with(SubmitPolicy::Legacy);
    form.reset();
    assert_eq!(form.config().submit_policy, SubmitPolicy::Legacy);
}

// =============================================================================
// SECURITY
// =============================================================================

#[test]
fn test_form_debug_never_shows_card_number_or_cvc() {
    let mut form = CardForm::default();
    fill(&mut form, "John Smith", test_cards::VALID_16, "04", "25", "987");
    let debug = format!("{:?}", form);
    assert!(!debug.contains("4539 1488 0343 6467"));
    assert!(!debug.contains("4539148803436467"));
    assert!(!debug.contains("987"));
}
