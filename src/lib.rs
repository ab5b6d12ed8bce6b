//! # card_form
//!
//! Live validation, formatting and preview engine for credit card payment
//! forms.
//!
//! ## Features
//!
//! - Per-keystroke normalization of the five form fields
//! - Card number grouping (`XXXX XXXX XXXX XXXX`)
//! - Luhn checksum validation
//! - Name, card number, expiry and CVC rules with user-facing messages
//! - A mock-card preview with placeholders for empty fields
//! - Submit-time re-validation gating the confirmation view
//! - Multiple interfaces: library, CLI, WASM
//!
//! ## Quick Start
//!
//! ```rust
//! use card_form::{CardForm, Field};
//!
//! let mut form = CardForm::default();
//!
//! // Feed "input changed" notifications as the user types
//! let update = form.input(Field::CardNumber, "4539148803436467");
//! assert_eq!(update.text, "4539 1488 0343 6467");
//! assert_eq!(form.preview().card_number, "4539 1488 0343 6467");
//!
//! let update = form.input(Field::Month, "13");
//! assert_eq!(update.status.message().as_deref(), Some("Must be a valid month"));
//! assert_eq!(form.preview().expiry, "13/00");
//!
//! form.input(Field::Month, "04");
//! form.input(Field::Year, "25");
//! form.input(Field::Name, "John Smith");
//! form.input(Field::Cvc, "123");
//!
//! assert!(form.submit().is_submitted());
//!
//! form.reset();
//! assert_eq!(form.preview().name, "Jane Appleseed");
//! ```
//!
//! ## Field Rules
//!
//! | Field | Alphabet | Valid when |
//! |-------|----------|------------|
//! | Name | letters, whitespace | non-blank after trimming |
//! | Card number | digits | at least 14 digits and passes Luhn |
//! | Month | digits | integer in 1-12 |
//! | Year | digits | integer in 0-99 |
//! | CVC | digits | exactly 3 digits |
//!
//! ## Building Blocks
//!
//! ```rust
//! use card_form::{format, luhn, normalize};
//!
//! assert_eq!(normalize::normalize_name("J0hn"), "Jhn");
//! assert_eq!(format::format_card_number("45391488"), "4539 1488");
//! assert!(luhn::passes_luhn("4539148803436467"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `json` | JSON configuration loading, serializable views |
//! | `cli` | Command-line tool |
//! | `wasm` | WebAssembly bindings |
//!
//! ## Security
//!
//! - Card numbers and CVCs are zeroized when dropped or reset
//! - `Debug` and `Display` show masked numbers only
//! - Log events never carry an unmasked card number or CVC
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod card;
pub mod config;
pub mod cvc;
pub mod error;
pub mod expiry;
pub mod field;
pub mod form;
pub mod format;
pub mod luhn;
pub mod mask;
pub mod name;
pub mod normalize;
pub mod preview;

#[cfg(feature = "wasm")]
mod wasm;

// Re-export main types at crate root
pub use card::{CardNumber, MIN_CARD_DIGITS};
pub use config::{FormConfig, SubmitPolicy};
pub use cvc::{ValidatedCvc, CVC_LENGTH};
pub use error::{ConfigError, FieldError};
pub use expiry::ExpiryDate;
pub use field::{Field, FieldStatus};
pub use form::{CardForm, FieldUpdate, FormView, SubmitOutcome};
pub use preview::{Placeholders, Preview};
