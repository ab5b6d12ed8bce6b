//! The payment form engine.
//!
//! [`CardForm`] owns every slot of the form: the five input texts, their
//! validation status, the preview card and the form/confirmation view switch.
//! A UI layer forwards each "input changed" notification to [`CardForm::input`]
//! and copies the returned [`FieldUpdate`] back onto its elements; the submit
//! and reset buttons map to [`CardForm::submit`] and [`CardForm::reset`].
//!
//! Every operation is synchronous and total. Invalid input never produces an
//! `Err`, only a [`FieldStatus`] with its error indicator shown.
//!
//! # Example
//!
//! ```
//! use card_form::{CardForm, Field, FormView};
//!
//! let mut form = CardForm::default();
//!
//! let update = form.input(Field::CardNumber, "4539148803436467");
//! assert_eq!(update.text, "4539 1488 0343 6467");
//! assert!(!update.status.has_error());
//!
//! form.input_name("John Smith");
//! form.input_month("04");
//! form.input_year("25");
//! form.input_cvc("123");
//!
//! assert!(form.submit().is_submitted());
//! assert_eq!(form.view(), FormView::Submitted);
//! ```

use crate::card::validate_card_number;
use crate::config::FormConfig;
use crate::cvc::validate_cvc;
use crate::error::FieldError;
use crate::expiry::{validate_month, validate_year};
use crate::field::{Field, FieldStatus};
use crate::format::format_card_number;
use crate::mask::{mask_card_number, mask_cvc};
use crate::name::validate_name;
use crate::normalize::{normalize_digits, normalize_name};
use crate::preview::{self, Preview};
use std::fmt;
use tracing::{debug, trace};
use zeroize::Zeroize;

/// Which half of the page is visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "snake_case"))]
pub enum FormView {
    /// The input form is shown.
    #[default]
    Editing,
    /// The form is hidden and the confirmation panel is shown.
    Submitted,
}

/// What a UI layer must write back after one input notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUpdate {
    /// The field that changed.
    pub field: Field,
    /// Normalized (and for the card number, formatted) text for the input.
    pub text: String,
    /// New text of the preview surface fed by this field.
    pub preview: String,
    /// Error indicator and decoration state of the field.
    pub status: FieldStatus,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    failed: Vec<Field>,
    submitted: bool,
}

impl SubmitOutcome {
    /// Returns true if the view switched to the confirmation panel.
    #[inline]
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Fields whose check failed, in form order.
    ///
    /// Under [`SubmitPolicy::Legacy`](crate::SubmitPolicy::Legacy) this can be
    /// non-empty even though the form was submitted.
    #[inline]
    pub fn failed_fields(&self) -> &[Field] {
        &self.failed
    }

    /// Returns true if every field passed.
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// State of one payment form.
pub struct CardForm {
    config: FormConfig,
    texts: [String; 5],
    statuses: [FieldStatus; 5],
    preview: Preview,
    view: FormView,
}

impl CardForm {
    /// Creates an empty form.
    pub fn new(config: FormConfig) -> Self {
        let preview = Preview::placeholders(&config.placeholders);
        Self {
            config,
            texts: Default::default(),
            statuses: Default::default(),
            preview,
            view: FormView::Editing,
        }
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Current text of an input field.
    #[inline]
    pub fn text(&self, field: Field) -> &str {
        &self.texts[field.index()]
    }

    /// Current validation status of a field.
    #[inline]
    pub fn status(&self, field: Field) -> &FieldStatus {
        &self.statuses[field.index()]
    }

    /// Current preview card.
    #[inline]
    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    /// Which view is shown.
    #[inline]
    pub fn view(&self) -> FormView {
        self.view
    }

    /// Returns true if the confirmation panel is shown.
    #[inline]
    pub fn is_submitted(&self) -> bool {
        self.view == FormView::Submitted
    }

    /// Handles a "content changed" notification for `field`.
    ///
    /// The raw text is normalized, written into the field slot, projected onto
    /// the preview and validated. Only this field's status changes. The month
    /// and year both feed the expiry preview, so either one refreshes it.
    pub fn input(&mut self, field: Field, raw: &str) -> FieldUpdate {
        let text = match field {
            Field::Name => normalize_name(raw),
            Field::CardNumber => format_card_number(&normalize_digits(raw)),
            Field::Month | Field::Year | Field::Cvc => normalize_digits(raw),
        };

        let idx = field.index();
        self.texts[idx].zeroize();
        self.texts[idx] = text;

        let preview = self.project(field);
        let status = FieldStatus::from_result(&self.check(field));
        self.statuses[idx] = status.clone();

        trace!(
            field = ?field,
            text = %self.loggable_text(field),
            error = status.has_error(),
            "field updated"
        );

        FieldUpdate {
            field,
            text: self.texts[idx].clone(),
            preview,
            status,
        }
    }

    /// Shorthand for `input(Field::Name, raw)`.
    pub fn input_name(&mut self, raw: &str) -> FieldUpdate {
        self.input(Field::Name, raw)
    }

    /// Shorthand for `input(Field::CardNumber, raw)`.
    pub fn input_card_number(&mut self, raw: &str) -> FieldUpdate {
        self.input(Field::CardNumber, raw)
    }

    /// Shorthand for `input(Field::Month, raw)`.
    pub fn input_month(&mut self, raw: &str) -> FieldUpdate {
        self.input(Field::Month, raw)
    }

    /// Shorthand for `input(Field::Year, raw)`.
    pub fn input_year(&mut self, raw: &str) -> FieldUpdate {
        self.input(Field::Year, raw)
    }

    /// Shorthand for `input(Field::Cvc, raw)`.
    pub fn input_cvc(&mut self, raw: &str) -> FieldUpdate {
        self.input(Field::Cvc, raw)
    }

    /// Re-evaluates a field's predicate against its current text.
    ///
    /// Pure: no status or view changes.
    pub fn check(&self, field: Field) -> Result<(), FieldError> {
        let text = self.text(field);
        match field {
            Field::Name => validate_name(text),
            Field::CardNumber => validate_card_number(text).map(drop),
            Field::Month => validate_month(text).map(drop),
            Field::Year => validate_year(text).map(drop),
            Field::Cvc => validate_cvc(text).map(drop),
        }
    }

    /// Re-validates every field and switches to the confirmation view if the
    /// submit policy allows it.
    ///
    /// All five predicates are recomputed from the current texts; the live
    /// statuses are not reused. Which indicators are cleared beforehand and
    /// which failures block the transition depend on the configured
    /// [`SubmitPolicy`](crate::SubmitPolicy).
    pub fn submit(&mut self) -> SubmitOutcome {
        let policy = self.config.submit_policy;

        for field in Field::ALL {
            if policy.clears_before_check(field) {
                self.statuses[field.index()].hide();
            }
        }

        let mut failed = Vec::new();
        let mut blocked = false;

        for field in Field::ALL {
            if let Err(e) = self.check(field) {
                self.statuses[field.index()] = FieldStatus::failed(e);
                blocked |= policy.blocks_on(field);
                failed.push(field);
            }
        }

        if !blocked {
            self.view = FormView::Submitted;
        }

        debug!(
            policy = %policy,
            failed = ?failed,
            submitted = !blocked,
            "form submitted"
        );

        SubmitOutcome {
            failed,
            submitted: !blocked,
        }
    }

    /// Restores the initial state: empty fields, hidden indicators,
    /// placeholder preview and the input form shown.
    ///
    /// Field contents are zeroized before being released.
    pub fn reset(&mut self) {
        for text in self.texts.iter_mut() {
            text.zeroize();
        }
        self.statuses = Default::default();
        self.preview = Preview::placeholders(&self.config.placeholders);
        self.view = FormView::Editing;

        debug!("form reset");
    }

    /// Writes the preview slot fed by `field` and returns its new text.
    fn project(&mut self, field: Field) -> String {
        let placeholders = &self.config.placeholders;
        let text = &self.texts[field.index()];

        let (slot, value) = match field {
            Field::Name => (
                &mut self.preview.name,
                preview::project_name(text, placeholders),
            ),
            Field::CardNumber => (
                &mut self.preview.card_number,
                preview::project_card_number(text, placeholders),
            ),
            Field::Month | Field::Year => (
                &mut self.preview.expiry,
                preview::project_expiry(
                    &self.texts[Field::Month.index()],
                    &self.texts[Field::Year.index()],
                    placeholders,
                ),
            ),
            Field::Cvc => (
                &mut self.preview.cvc,
                preview::project_cvc(text, placeholders),
            ),
        };

        slot.clone_from(&value);
        value
    }

    /// Field text safe for log output.
    fn loggable_text(&self, field: Field) -> String {
        let text = self.text(field);
        match field {
            Field::CardNumber => mask_card_number(text),
            Field::Cvc => mask_cvc(text),
            _ => text.to_string(),
        }
    }
}

impl Default for CardForm {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}

impl fmt::Debug for CardForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardForm")
            .field("name", &self.text(Field::Name))
            .field("card_number", &self.loggable_text(Field::CardNumber))
            .field("month", &self.text(Field::Month))
            .field("year", &self.text(Field::Year))
            .field("cvc", &self.loggable_text(Field::Cvc))
            .field("view", &self.view)
            .field("policy", &self.config.submit_policy)
            .finish()
    }
}

impl Drop for CardForm {
    fn drop(&mut self) {
        for text in self.texts.iter_mut() {
            text.zeroize();
        }
    }
}
