//! Contact form model and per-field validation.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::format::format_phone;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// French numbers: `0X XX XX XX XX`, `+33 X…` or `0033 X…`.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(?:\+|00)33|0)\s*[1-9](?:[\s.-]*\d{2}){4}$").expect("valid phone regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Level,
    Message,
    Consent,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Phone,
        Field::Level,
        Field::Message,
        Field::Consent,
    ];

    pub fn is_required(self) -> bool {
        !matches!(self, Field::Phone)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    Email,
    Phone,
    Select,
    Consent,
}

impl FieldError {
    pub fn message_key(self) -> &'static str {
        match self {
            FieldError::Required => "contact.errors.required",
            FieldError::Email => "contact.errors.email",
            FieldError::Phone => "contact.errors.phone",
            FieldError::Select => "contact.errors.select",
            FieldError::Consent => "contact.errors.consent",
        }
    }
}

/// Levels offered in the select, with their option-label keys.
pub const LEVELS: [(&str, &str); 3] = [
    ("debutant", "contact.level.beginner"),
    ("intermediaire", "contact.level.intermediate"),
    ("confirme", "contact.level.advanced"),
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub level: String,
    pub message: String,
    pub consent: bool,
    /// Honeypot, hidden from humans. Never persisted.
    #[serde(skip)]
    pub website: String,
}

/// JSON body sent to the contact endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub level: &'a str,
    pub message: &'a str,
}

impl ContactForm {
    fn text(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Level => &self.level,
            Field::Message => &self.message,
            Field::Consent => "",
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = format_phone(&value),
            Field::Level => self.level = value,
            Field::Message => self.message = value,
            Field::Consent => self.consent = !value.is_empty() && value != "false",
        }
    }

    /// Whether the field currently holds anything (blur-time validation
    /// only runs on non-empty fields).
    pub fn is_filled(&self, field: Field) -> bool {
        match field {
            Field::Consent => self.consent,
            other => !self.text(other).trim().is_empty(),
        }
    }

    pub fn validate_field(&self, field: Field) -> Result<(), FieldError> {
        if field == Field::Consent {
            return if self.consent { Ok(()) } else { Err(FieldError::Consent) };
        }
        let value = self.text(field).trim();
        if value.is_empty() {
            if field == Field::Level {
                return Err(FieldError::Select);
            }
            return if field.is_required() {
                Err(FieldError::Required)
            } else {
                Ok(())
            };
        }
        match field {
            Field::Email if !EMAIL_RE.is_match(value) => Err(FieldError::Email),
            Field::Phone if !is_valid_phone(value) => Err(FieldError::Phone),
            Field::Level if !LEVELS.iter().any(|(code, _)| *code == value) => Err(FieldError::Select),
            _ => Ok(()),
        }
    }

    /// All failing fields; empty means the form may be sent.
    pub fn validate(&self) -> BTreeMap<Field, FieldError> {
        Field::ALL
            .iter()
            .filter_map(|&field| self.validate_field(field).err().map(|e| (field, e)))
            .collect()
    }

    /// A filled honeypot means a bot; the submission is dropped silently.
    pub fn is_bot(&self) -> bool {
        !self.website.trim().is_empty()
    }

    pub fn submission(&self) -> ContactSubmission<'_> {
        ContactSubmission {
            first_name: self.first_name.trim(),
            last_name: self.last_name.trim(),
            email: self.email.trim(),
            phone: self.phone.trim(),
            level: &self.level,
            message: self.message.trim(),
        }
    }
}

fn is_valid_phone(raw: &str) -> bool {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    PHONE_RE.is_match(&compact)
}
