use chrono::{NaiveDate, NaiveTime};
use email_address::EmailAddress;
use thiserror::Error;

use super::fields::{Field, FieldKind, FieldValues, Step};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in {0}.")]
    Missing(Field),
    #[error("Please check {0}, it doesn't look right.")]
    Malformed(Field),
    #[error("Please choose an event date in the future.")]
    PastDate,
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Missing(field) | ValidationError::Malformed(field) => *field,
            ValidationError::PastDate => Field::Date,
        }
    }
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Checks every field owned by `step`. The past-date rule is checked first so
/// it is reported no matter what else is wrong on the step.
pub fn validate_step(step: Step, values: &FieldValues, today: NaiveDate) -> Result<(), ValidationError> {
    if step == Field::Date.step() {
        if let Some(date) = parse_date(values.get(Field::Date).trim()) {
            if date < today {
                return Err(ValidationError::PastDate);
            }
        }
    }

    for field in step.fields() {
        validate_field(field, values.get(field))?;
    }
    Ok(())
}

pub fn validate_field(field: Field, raw: &str) -> Result<(), ValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return if field.required() {
            Err(ValidationError::Missing(field))
        } else {
            Ok(())
        };
    }

    let well_formed = match field.kind() {
        FieldKind::Text | FieldKind::TextArea => true,
        FieldKind::Date => parse_date(value).is_some(),
        FieldKind::Time => NaiveTime::parse_from_str(value, "%H:%M").is_ok(),
        FieldKind::Email => EmailAddress::is_valid(value),
        FieldKind::Tel => is_phone(value),
        FieldKind::Select(options) => options.iter().any(|option| *option == value),
    };

    if well_formed {
        Ok(())
    } else {
        Err(ValidationError::Malformed(field))
    }
}

fn is_phone(value: &str) -> bool {
    let digits = value.chars().filter(char::is_ascii_digit).count();
    digits >= 7
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '(' | ')' | '-'))
}
