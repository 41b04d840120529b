//! Validation of free-text customer answers.
//!
//! Each function takes the raw text a customer typed and either returns a
//! cleaned value or a [`ValidationError`] describing what was wrong. The
//! flows turn those errors into customer-facing prompts.

use chrono::NaiveDate;

use crate::domain::foundation::ValidationError;

/// A customer name split into first and last parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactName {
    pub first: String,
    pub last: String,
}

impl ContactName {
    pub fn full(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}

/// What a move date tells us about scheduling pressure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveDateAssessment {
    pub date: NaiveDate,
    /// The move is today. Triggers the same-day surcharge.
    pub is_same_day: bool,
    /// Seven days out or less.
    pub is_short_notice: bool,
}

/// Splits a full name into first and last. Requires at least two parts;
/// everything after the first word becomes the last name.
pub fn parse_full_name(raw: &str) -> Result<ContactName, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field("name"));
    }
    let mut parts = trimmed.split_whitespace();
    let first = match parts.next() {
        Some(first) => first.to_string(),
        None => return Err(ValidationError::empty_field("name")),
    };
    let last = parts.collect::<Vec<_>>().join(" ");
    if last.is_empty() {
        return Err(ValidationError::invalid_format(
            "name",
            "first and last name are both required",
        ));
    }
    Ok(ContactName { first, last })
}

/// Accepts an email when it has an `@`, a dot, and more than five
/// characters. Deliberately loose; the lead email is the real check.
pub fn validate_email(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field("email"));
    }
    if trimmed.contains('@') && trimmed.contains('.') && trimmed.len() > 5 {
        Ok(trimmed.to_string())
    } else {
        Err(ValidationError::invalid_format(
            "email",
            "expected something like name@example.com",
        ))
    }
}

/// Accepts a phone number with at least ten digits, ignoring punctuation.
pub fn validate_phone(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field("phone"));
    }
    let digits = trimmed.chars().filter(|c| c.is_ascii_digit()).count();
    if digits >= 10 {
        Ok(trimmed.to_string())
    } else {
        Err(ValidationError::invalid_format(
            "phone",
            "expected at least 10 digits",
        ))
    }
}

/// Accepts an address when it has a comma separating at least two parts.
pub fn validate_address(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field("address"));
    }
    let has_two_parts = trimmed.split(',').filter(|p| !p.trim().is_empty()).count() >= 2;
    if trimmed.contains(',') && has_two_parts {
        Ok(trimmed.to_string())
    } else {
        Err(ValidationError::invalid_format(
            "address",
            "expected street and city separated by a comma",
        ))
    }
}

const DATE_FORMATS: &[&str] = &[
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%Y-%m-%d",
    "%B %d, %Y",
    "%B %d %Y",
    "%b %d, %Y",
    "%b %d %Y",
];

/// Parses a move date and classifies its urgency relative to `today`.
/// Past dates are rejected.
pub fn parse_move_date(raw: &str, today: NaiveDate) -> Result<MoveDateAssessment, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field("move_date"));
    }
    let date = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| {
            ValidationError::invalid_format("move_date", "expected a date like 06/15/2026")
        })?;
    if date < today {
        return Err(ValidationError::invalid_format(
            "move_date",
            "date has already passed",
        ));
    }
    let days_out = (date - today).num_days();
    Ok(MoveDateAssessment {
        date,
        is_same_day: days_out == 0,
        is_short_notice: days_out <= 7,
    })
}

/// Parses a whole number and checks it against an inclusive range.
pub fn parse_int_in_range(
    field: &str,
    raw: &str,
    min: i64,
    max: i64,
) -> Result<i64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    let value: i64 = trimmed
        .parse()
        .map_err(|_| ValidationError::invalid_format(field, "expected a whole number"))?;
    if value < min || value > max {
        return Err(ValidationError::out_of_range(field, min, max, value));
    }
    Ok(value)
}

/// Parses an hour count as a decimal number. Returns `None` for anything
/// that is not a finite non-negative number; range checks belong to the
/// caller because the labor flow words each bound differently.
pub fn parse_hours(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}

/// Parses a dollar amount, tolerating `$`, commas, and whitespace.
pub fn parse_currency_amount(raw: &str) -> Option<i64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | ' '))
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

/// Accepts a free-text description of at least `min_len` characters.
pub fn validate_description(
    field: &str,
    raw: &str,
    min_len: usize,
) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    if trimmed.len() < min_len {
        return Err(ValidationError::invalid_format(
            field,
            format!("expected at least {min_len} characters"),
        ));
    }
    Ok(trimmed.to_string())
}
