//! Snapshot of a successful contact-form submit.
//!
//! The summary block shows the capture time in Jakarta local time using
//! Indonesian day-first conventions, e.g. `03/01/2024, 00.04.05`.

use time::macros::{format_description, offset};
use time::{OffsetDateTime, UtcOffset};

use crate::error::SiteError;

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

/// Asia/Jakarta (WIB). No daylight saving.
pub const JAKARTA_OFFSET: UtcOffset = offset!(+7);

/// Render `at` in Jakarta time as `DD/MM/YYYY, HH.MM.SS` (24-hour).
///
/// # Errors
///
/// Returns [`SiteError::Timestamp`] if the formatter rejects the value.
pub fn format_timestamp(at: OffsetDateTime) -> Result<String, SiteError> {
    let format = format_description!("[day]/[month]/[year], [hour repr:24].[minute].[second]");
    at.to_offset(JAKARTA_OFFSET)
        .format(format)
        .map_err(|e| SiteError::Timestamp(e.to_string()))
}

/// Validated field values plus the capture timestamp.
///
/// Only [`crate::form::ContactForm::submit`] can build one, and only after
/// every rule has passed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormSubmission {
    name: String,
    email: String,
    phone: String,
    message: String,
    captured_at: OffsetDateTime,
    timestamp: String,
}

impl FormSubmission {
    pub(crate) fn capture(
        name: &str,
        email: &str,
        phone: &str,
        message: &str,
        at: OffsetDateTime,
    ) -> Result<Self, SiteError> {
        Ok(Self {
            name: name.to_owned(),
            email: email.to_owned(),
            phone: phone.to_owned(),
            message: message.to_owned(),
            captured_at: at,
            timestamp: format_timestamp(at)?,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn captured_at(&self) -> OffsetDateTime {
        self.captured_at
    }

    /// Capture time formatted for the summary block.
    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}
