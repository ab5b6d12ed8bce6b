//! Checkout form walkthrough.
//!
//! Simulates a user typing into the payment form, hitting submit with a
//! mistake, fixing it and resetting.
//!
//! Run with: `cargo run --example checkout`

use card_form::{
    card::validate_card_number, cvc::validate_cvc, expiry::validate_expiry, CardForm, Field,
    FieldUpdate, FormConfig, SubmitPolicy,
};

fn show(update: &FieldUpdate) {
    let status = match update.status.message() {
        Some(message) => format!("error: {}", message),
        None => "ok".to_string(),
    };
    println!(
        "  {:<16} text={:<22} preview={:<22} {}",
        update.field.label(),
        format!("{:?}", update.text),
        format!("{:?}", update.preview),
        status
    );
}

fn print_preview(form: &CardForm) {
    let preview = form.preview();
    println!("  +---------------------------+");
    println!("  | {:<25} |", preview.card_number);
    println!("  | {:<18} {:>6} |", preview.name, preview.expiry);
    println!("  | CVC {:<21} |", preview.cvc);
    println!("  +---------------------------+");
}

fn main() {
    println!("=== Payment Form Walkthrough ===\n");

    let mut form = CardForm::default();
    println!("Empty form:");
    print_preview(&form);
    println!();

    // Example 1: Typing the card number keystroke by keystroke
    println!("Typing the card number:");
    for c in "4539-1488-0343-6467".chars() {
        let mut text = form.text(Field::CardNumber).to_string();
        text.push(c);
        show(&form.input(Field::CardNumber, &text));
    }
    println!();

    // Example 2: The other fields, with some stray characters
    println!("Filling the rest:");
    show(&form.input_name("J0hn Smith"));
    show(&form.input_month("13"));
    show(&form.input_month("04"));
    show(&form.input_year("25"));
    show(&form.input_cvc("12"));
    println!();
    print_preview(&form);
    println!();

    // Example 3: Submit with a short CVC
    println!("Submitting with a 2-digit CVC:");
    let outcome = form.submit();
    println!("  Failed fields: {:?}", outcome.failed_fields());
    println!("  Submitted: {}", outcome.is_submitted());
    println!();

    // Example 4: Fix and resubmit
    println!("Fixing the CVC and resubmitting:");
    show(&form.input_cvc("123"));
    let outcome = form.submit();
    println!("  Submitted: {}", outcome.is_submitted());
    println!("  View: {:?}", form.view());
    println!();

    // Example 5: Continue resets everything
    println!("Continue:");
    form.reset();
    print_preview(&form);
    println!("  View: {:?}", form.view());
    println!();

    // Example 6: The historical submit behaviour
    println!("Legacy submit policy with a 2-digit CVC:");
    let mut legacy = CardForm::new(FormConfig::new().submit_policy(SubmitPolicy::Legacy));
    legacy.input_name("John Smith");
    legacy.input_card_number("4539148803436467");
    legacy.input_month("04");
    legacy.input_year("25");
    legacy.input_cvc("12");
    let outcome = legacy.submit();
    println!("  Failed fields: {:?}", outcome.failed_fields());
    println!("  Submitted: {}", outcome.is_submitted());
    println!();

    // Example 7: Field validators on their own
    println!("Standalone validators:");
    match validate_card_number("4539 1488 0343 6467") {
        Ok(card) => println!("  Card: {} ({} digits)", card, card.length()),
        Err(e) => println!("  Card: {}", e),
    }
    match validate_expiry("4", "25") {
        Ok(expiry) => println!("  Expiry: {}", expiry),
        Err(e) => println!("  Expiry: {}", e),
    }
    match validate_cvc("123") {
        Ok(cvc) => println!("  CVC: {}", cvc),
        Err(e) => println!("  CVC: {}", e),
    }
}
