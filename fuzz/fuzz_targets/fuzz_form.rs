//! Fuzz target for the form engine.
//!
//! Replays arbitrary sessions of keystrokes, submits and resets and checks
//! the form never panics and keeps its field texts normalized.

#![no_main]

use arbitrary::Arbitrary;
use card_form::{normalize, CardForm, Field, FormConfig, SubmitPolicy};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Event {
    Input { field: u8, text: String },
    Submit,
    Reset,
}

#[derive(Debug, Arbitrary)]
struct Session {
    legacy: bool,
    events: Vec<Event>,
}

fuzz_target!(|session: Session| {
    let policy = if session.legacy {
        SubmitPolicy::Legacy
    } else {
        SubmitPolicy::Strict
    };
    let mut form = CardForm::new(FormConfig::new().submit_policy(policy));

    for event in session.events {
        match event {
            Event::Input { field, text } => {
                let field = Field::ALL[field as usize % Field::ALL.len()];
                let update = form.input(field, &text);
                assert_eq!(update.status.has_error(), form.check(field).is_err());
            }
            Event::Submit => {
                let outcome = form.submit();
                if policy == SubmitPolicy::Strict {
                    assert_eq!(outcome.is_submitted(), outcome.is_clean());
                }
            }
            Event::Reset => {
                form.reset();
                assert!(!form.is_submitted());
            }
        }

        assert!(normalize::is_normalized_name(form.text(Field::Name)));
        for field in [Field::Month, Field::Year, Field::Cvc] {
            assert!(normalize::is_all_digits(form.text(field)));
        }
    }
});
