//! WebAssembly bindings for the payment form engine.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { WasmCardForm } from 'card_form';
//!
//! await init();
//!
//! const form = new WasmCardForm();
//!
//! numberInput.addEventListener("input", () => {
//!     const result = form.input_card_number(numberInput.value);
//!     numberInput.value = result.text;
//!     numberDisplay.textContent = result.preview;
//!     numberError.classList.toggle("hidden", !result.has_error);
//!     numberError.textContent = result.message ?? "";
//!     numberInput.classList.toggle("border-red-500", result.decorated);
//! });
//!
//! formElement.addEventListener("submit", (e) => {
//!     e.preventDefault();
//!     if (form.submit()) {
//!         formElement.classList.add("hidden");
//!         thankYou.classList.remove("hidden");
//!     }
//! });
//! ```

#![cfg(feature = "wasm")]

use crate::{CardForm, Field, FieldUpdate, FormConfig, SubmitPolicy};
use wasm_bindgen::prelude::*;

/// Result of one input notification, returned to JavaScript.
#[wasm_bindgen]
pub struct FieldResult {
    text: String,
    preview: String,
    has_error: bool,
    decorated: bool,
    message: Option<String>,
}

#[wasm_bindgen]
impl FieldResult {
    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn preview(&self) -> String {
        self.preview.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn has_error(&self) -> bool {
        self.has_error
    }

    #[wasm_bindgen(getter)]
    pub fn decorated(&self) -> bool {
        self.decorated
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> Option<String> {
        self.message.clone()
    }
}

impl From<FieldUpdate> for FieldResult {
    fn from(update: FieldUpdate) -> Self {
        Self {
            has_error: update.status.has_error(),
            decorated: update.status.is_decorated(),
            message: update.status.message(),
            text: update.text,
            preview: update.preview,
        }
    }
}

/// Error indicator state of one field, returned to JavaScript.
#[wasm_bindgen]
pub struct FieldState {
    has_error: bool,
    decorated: bool,
    message: Option<String>,
}

#[wasm_bindgen]
impl FieldState {
    #[wasm_bindgen(getter)]
    pub fn has_error(&self) -> bool {
        self.has_error
    }

    #[wasm_bindgen(getter)]
    pub fn decorated(&self) -> bool {
        self.decorated
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> Option<String> {
        self.message.clone()
    }
}

/// A payment form, driven from the page's event handlers.
#[wasm_bindgen]
pub struct WasmCardForm {
    inner: CardForm,
}

#[wasm_bindgen]
impl WasmCardForm {
    /// Creates a form with the default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmCardForm {
        WasmCardForm {
            inner: CardForm::default(),
        }
    }

    /// Creates a form with the given submit policy ("strict" or "legacy").
    pub fn with_policy(policy: &str) -> Result<WasmCardForm, JsValue> {
        let policy = parse_policy(policy)?;
        Ok(WasmCardForm {
            inner: CardForm::new(FormConfig::new().submit_policy(policy)),
        })
    }

    pub fn input_name(&mut self, raw: &str) -> FieldResult {
        self.inner.input_name(raw).into()
    }

    pub fn input_card_number(&mut self, raw: &str) -> FieldResult {
        self.inner.input_card_number(raw).into()
    }

    pub fn input_month(&mut self, raw: &str) -> FieldResult {
        self.inner.input_month(raw).into()
    }

    pub fn input_year(&mut self, raw: &str) -> FieldResult {
        self.inner.input_year(raw).into()
    }

    pub fn input_cvc(&mut self, raw: &str) -> FieldResult {
        self.inner.input_cvc(raw).into()
    }

    /// Re-validates every field. Returns true if the confirmation panel
    /// should be shown.
    pub fn submit(&mut self) -> bool {
        self.inner.submit().is_submitted()
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Indicator state of a field: "name", "card_number", "month", "year" or
    /// "cvc".
    pub fn field_state(&self, field: &str) -> Result<FieldState, JsValue> {
        let status = self.inner.status(parse_field(field)?);
        Ok(FieldState {
            has_error: status.has_error(),
            decorated: status.is_decorated(),
            message: status.message(),
        })
    }

    /// Current text of a field.
    pub fn field_text(&self, field: &str) -> Result<String, JsValue> {
        Ok(self.inner.text(parse_field(field)?).to_string())
    }

    #[wasm_bindgen(getter)]
    pub fn submitted(&self) -> bool {
        self.inner.is_submitted()
    }

    #[wasm_bindgen(getter)]
    pub fn preview_name(&self) -> String {
        self.inner.preview().name.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn preview_card_number(&self) -> String {
        self.inner.preview().card_number.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn preview_expiry(&self) -> String {
        self.inner.preview().expiry.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn preview_cvc(&self) -> String {
        self.inner.preview().cvc.clone()
    }
}

impl Default for WasmCardForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats a card number in groups of four.
#[wasm_bindgen]
pub fn format_card(card_number: &str) -> String {
    crate::format::format_card_number(card_number)
}

/// Checks if a card number passes the Luhn algorithm.
#[wasm_bindgen]
pub fn passes_luhn(card_number: &str) -> bool {
    crate::luhn::passes_luhn(card_number)
}

fn parse_field(field: &str) -> Result<Field, JsValue> {
    match field.to_lowercase().as_str() {
        "name" => Ok(Field::Name),
        "card_number" | "cardnumber" | "number" => Ok(Field::CardNumber),
        "month" => Ok(Field::Month),
        "year" => Ok(Field::Year),
        "cvc" | "cvv" => Ok(Field::Cvc),
        _ => Err(JsValue::from_str(&format!("Unknown field: {}", field))),
    }
}

fn parse_policy(policy: &str) -> Result<SubmitPolicy, JsValue> {
    match policy.to_lowercase().as_str() {
        "strict" => Ok(SubmitPolicy::Strict),
        "legacy" => Ok(SubmitPolicy::Legacy),
        _ => Err(JsValue::from_str(&format!("Unknown policy: {}", policy))),
    }
}
