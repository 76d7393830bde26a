//! Contact-form field rules.
//!
//! Each rule is a pure predicate over the raw field value. Lengths are
//! counted in UTF-16 code units, the unit browsers report for input values,
//! after trimming whitespace and byte-order marks from both ends.

use std::sync::LazyLock;

use regex::Regex;

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").expect("valid email regex"));

// The optional `+` is not counted toward the digit bound.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+?[0-9]{10,15}$").expect("valid phone regex"));

/// Name: at least two characters once trimmed.
#[must_use]
pub fn validate_name(name: &str) -> bool {
    utf16_len(trim_blank(name)) >= NAME_MIN_CHARS
}

/// Email: `local@domain.tld` with no whitespace and a single `@`.
#[must_use]
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Phone: optional leading `+` then 10 to 15 digits, ignoring whitespace,
/// hyphens and parentheses.
#[must_use]
pub fn validate_phone(phone: &str) -> bool {
    PHONE_RE.is_match(&strip_phone_punctuation(phone))
}

/// Message: at least ten characters once trimmed.
#[must_use]
pub fn validate_message(message: &str) -> bool {
    utf16_len(trim_blank(message)) >= MESSAGE_MIN_CHARS
}

fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Trim whitespace and byte-order marks from both ends.
pub(crate) fn trim_blank(value: &str) -> &str {
    value.trim_matches(is_blank)
}

fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

fn strip_phone_punctuation(phone: &str) -> String {
    phone
        .chars()
        .filter(|&c| !(is_blank(c) || matches!(c, '-' | '(' | ')')))
        .collect()
}

/// The four contact-form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Email,
    Phone,
    Message,
}

impl FieldKind {
    /// Form order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Phone, Self::Message];

    /// Id of the input element.
    #[must_use]
    pub fn input_id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Message => "messageText",
        }
    }

    /// Id of the element that displays this field's error text.
    #[must_use]
    pub fn error_id(self) -> &'static str {
        match self {
            Self::Name => "nameError",
            Self::Email => "emailError",
            Self::Phone => "phoneError",
            Self::Message => "messageError",
        }
    }

    /// Id of the summary slot that echoes this field after submit.
    #[must_use]
    pub fn output_id(self) -> &'static str {
        match self {
            Self::Name => "outputName",
            Self::Email => "outputEmail",
            Self::Phone => "outputPhone",
            Self::Message => "outputMessage",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Message => "Message",
        }
    }

    #[must_use]
    pub fn from_input_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.input_id() == id)
    }

    /// The predicate guarding this field.
    #[must_use]
    pub fn validator(self) -> fn(&str) -> bool {
        match self {
            Self::Name => validate_name,
            Self::Email => validate_email,
            Self::Phone => validate_phone,
            Self::Message => validate_message,
        }
    }

    #[must_use]
    pub fn is_valid(self, value: &str) -> bool {
        (self.validator())(value)
    }

    /// Inline error text shown when the rule fails.
    #[must_use]
    pub fn error_message(self) -> &'static str {
        match self {
            Self::Name => "Name must be at least 2 characters long",
            Self::Email => "Please enter a valid email address",
            Self::Phone => "Please enter a valid phone number (10-15 digits)",
            Self::Message => "Message must be at least 10 characters long",
        }
    }
}
