//! Contact-form field state and real-time validation.
//!
//! DESIGN
//! ======
//! Errors are shown on blur and on submit, but only ever cleared while the
//! user types: a field never turns red mid-keystroke. Submit clears every
//! error before re-running all four rules so stale text cannot survive a
//! pass.

use time::OffsetDateTime;

use crate::error::SiteError;
use crate::submission::FormSubmission;
use crate::validation::FieldKind;

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// One input with its rule and current error text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormField {
    kind: FieldKind,
    value: String,
    error: String,
}

impl FormField {
    #[must_use]
    pub fn new(kind: FieldKind) -> Self {
        Self { kind, value: String::new(), error: String::new() }
    }

    #[must_use]
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Current error text; empty when valid or not yet validated.
    #[must_use]
    pub fn error(&self) -> &str {
        &self.error
    }

    /// Whether the field group should carry the error styling.
    #[must_use]
    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.kind.is_valid(&self.value)
    }

    pub fn show_error(&mut self) {
        self.error = self.kind.error_message().to_owned();
    }

    pub fn clear_error(&mut self) {
        self.error.clear();
    }
}

/// Result of a submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every rule passed; the snapshot is ready to render.
    Accepted(FormSubmission),
    /// These fields failed, in form order. Their errors are now shown.
    Rejected(Vec<FieldKind>),
}

/// The four contact-form fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactForm {
    fields: [FormField; 4],
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self { fields: FieldKind::ALL.map(FormField::new) }
    }

    #[must_use]
    pub fn field(&self, kind: FieldKind) -> &FormField {
        &self.fields[index(kind)]
    }

    fn field_mut(&mut self, kind: FieldKind) -> &mut FormField {
        &mut self.fields[index(kind)]
    }

    #[must_use]
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    #[must_use]
    pub fn value(&self, kind: FieldKind) -> &str {
        self.field(kind).value()
    }

    #[must_use]
    pub fn error(&self, kind: FieldKind) -> &str {
        self.field(kind).error()
    }

    /// Keystroke handler: store the value and clear the error once it passes.
    pub fn input(&mut self, kind: FieldKind, value: impl Into<String>) {
        let field = self.field_mut(kind);
        field.value = value.into();
        if !field.value.is_empty() && field.is_valid() {
            field.clear_error();
        }
    }

    /// Focus-loss handler: show or clear the error for a non-empty value.
    pub fn blur(&mut self, kind: FieldKind) {
        let field = self.field_mut(kind);
        if field.value.is_empty() {
            return;
        }
        if field.is_valid() {
            field.clear_error();
        } else {
            field.show_error();
        }
    }

    pub fn clear_errors(&mut self) {
        for field in &mut self.fields {
            field.clear_error();
        }
    }

    /// Clear every error, run all four rules, and show each failure.
    ///
    /// Returns the failing fields in form order.
    pub fn validate_all(&mut self) -> Vec<FieldKind> {
        self.clear_errors();
        let mut failed = Vec::new();
        for field in &mut self.fields {
            if !field.is_valid() {
                field.show_error();
                failed.push(field.kind);
            }
        }
        failed
    }

    /// Validate everything and snapshot the values when all rules pass.
    ///
    /// Field values are not reset here; the caller resets once the summary
    /// has been rendered.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Timestamp`] if `at` cannot be rendered.
    pub fn submit(&mut self, at: OffsetDateTime) -> Result<SubmitOutcome, SiteError> {
        let failed = self.validate_all();
        if !failed.is_empty() {
            log::debug!("contact form rejected: {failed:?}");
            return Ok(SubmitOutcome::Rejected(failed));
        }
        let submission = FormSubmission::capture(
            self.value(FieldKind::Name),
            self.value(FieldKind::Email),
            self.value(FieldKind::Phone),
            self.value(FieldKind::Message),
            at,
        )?;
        Ok(SubmitOutcome::Accepted(submission))
    }

    /// Empty every field value.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
    }
}

fn index(kind: FieldKind) -> usize {
    match kind {
        FieldKind::Name => 0,
        FieldKind::Email => 1,
        FieldKind::Phone => 2,
        FieldKind::Message => 3,
    }
}
