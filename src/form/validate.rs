use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::form::fields::{ClaimField, ClaimType};
use crate::signature::encode::SignatureImage;

const MIN_ID_LEN: usize = 3;
const MIN_BANK_ACCOUNT_LEN: usize = 8;

/// A user-facing validation message for one field.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    #[error("{} is required", .0.label())]
    Required(ClaimField),

    #[error("{} must be at least {min} characters", .field.label())]
    TooShort { field: ClaimField, min: usize },

    #[error("Amount must be a number")]
    NotANumber,

    #[error("Amount must be greater than 0")]
    NotPositive,

    #[error("{} should contain only letters", letters_subject(.0))]
    LettersOnly(ClaimField),

    #[error("Bank Account should contain only digits")]
    DigitsOnly,

    #[error("Bank Account must be at least {min} digits")]
    TooFewDigits { min: usize },

    #[error("Date of incident cannot be in the future")]
    FutureDate,

    #[error("Signature is required")]
    MissingSignature,
}

fn letters_subject(field: &ClaimField) -> &'static str {
    match *field {
        ClaimField::NameOfClaimant => "Name",
        other => other.label(),
    }
}

/// Current validation errors, keyed by field. Fields without an error are absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    map: BTreeMap<ClaimField, FieldError>,
}

impl FieldErrors {
    pub fn insert(&mut self, field: ClaimField, err: FieldError) {
        self.map.insert(field, err);
    }

    pub fn remove(&mut self, field: ClaimField) -> Option<FieldError> {
        self.map.remove(&field)
    }

    /// Insert or remove depending on the outcome of a validator.
    pub fn set(&mut self, field: ClaimField, outcome: Option<FieldError>) {
        match outcome {
            Some(err) => self.insert(field, err),
            None => {
                self.remove(field);
            }
        }
    }

    pub fn get(&self, field: ClaimField) -> Option<&FieldError> {
        self.map.get(&field)
    }

    pub fn contains(&self, field: ClaimField) -> bool {
        self.map.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (ClaimField, &FieldError)> + '_ {
        self.map.iter().map(|(f, e)| (*f, e))
    }
}

impl serde::Serialize for FieldErrors {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut m = s.serialize_map(Some(self.map.len()))?;
        for (field, err) in &self.map {
            m.serialize_entry(field.as_str(), &err.to_string())?;
        }
        m.end()
    }
}

/// Validation hook for the signature field: a missing committed value is an error.
pub fn validate_signature(value: Option<&SignatureImage>) -> Option<FieldError> {
    match value {
        Some(_) => None,
        None => Some(FieldError::MissingSignature),
    }
}

pub fn validate_claim_type(value: Option<ClaimType>) -> Option<FieldError> {
    value
        .is_none()
        .then_some(FieldError::Required(ClaimField::ClaimType))
}

/// Date of incident: present and not after `today`.
pub fn validate_date(value: Option<NaiveDate>, today: NaiveDate) -> Option<FieldError> {
    match value {
        None => Some(FieldError::Required(ClaimField::Date)),
        Some(d) if d > today => Some(FieldError::FutureDate),
        Some(_) => None,
    }
}

/// Validate one free-text field. Returns `None` for fields that are not text.
pub fn validate_text(field: ClaimField, value: &str) -> Option<FieldError> {
    if !field.is_text() {
        return None;
    }
    if value.trim().is_empty() {
        return Some(FieldError::Required(field));
    }
    let len = value.chars().count();
    match field {
        ClaimField::ClaimNo | ClaimField::CustomerId if len < MIN_ID_LEN => {
            Some(FieldError::TooShort {
                field,
                min: MIN_ID_LEN,
            })
        }
        ClaimField::Amount => validate_amount(value),
        ClaimField::Nominee | ClaimField::NameOfClaimant if !is_letters_and_spaces(value) => {
            Some(FieldError::LettersOnly(field))
        }
        ClaimField::BankAccountNo => {
            if !value.chars().all(|c| c.is_ascii_digit()) {
                Some(FieldError::DigitsOnly)
            } else if len < MIN_BANK_ACCOUNT_LEN {
                Some(FieldError::TooFewDigits {
                    min: MIN_BANK_ACCOUNT_LEN,
                })
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Parse a claim amount. Accepts surrounding whitespace; rejects non-finite values.
pub fn parse_amount(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

fn validate_amount(value: &str) -> Option<FieldError> {
    match parse_amount(value) {
        None => Some(FieldError::NotANumber),
        Some(v) if v <= 0.0 => Some(FieldError::NotPositive),
        Some(_) => None,
    }
}

fn is_letters_and_spaces(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
}

#[cfg(test)]
#[path = "../../tests/unit/form/validate.rs"]
mod tests;
