// Boundary validation for values arriving from forms, JSON bodies and GraphQL arguments.
//
// Purpose
// - Turn loosely typed input into the typed values the records carry.
// - Reject malformed numerics explicitly instead of letting NaN reach the aggregations.

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} is not a number: {value}")]
    NotANumber { field: &'static str, value: String },

    #[error("{field} must be a finite, non-negative number of hours, got {value}")]
    InvalidHours { field: &'static str, value: f64 },

    #[error("invalid month, expected YYYY-MM: {0}")]
    InvalidMonth(String),

    #[error("invalid date, expected YYYY-MM-DD: {0}")]
    InvalidDate(String),

    #[error("invalid time, expected HH:MM: {0}")]
    InvalidTime(String),

    #[error("an id is required")]
    MissingId,

    #[error("break of {break_minutes} minutes does not fit into a shift of {elapsed_minutes} minutes")]
    BreakExceedsShift {
        break_minutes: u32,
        elapsed_minutes: i64,
    },
}

/// A number as sent by a form (text) or a JSON client (number).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
}

impl NumericInput {
    pub fn hours(&self, field: &'static str) -> Result<f64, ValidationError> {
        match self {
            NumericInput::Number(value) => require_hours(field, *value),
            NumericInput::Text(raw) => parse_hours(field, raw),
        }
    }
}

pub fn require_text(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_string())
}

pub fn require_id(value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingId);
    }
    Ok(trimmed.to_string())
}

pub fn require_hours(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidHours { field, value });
    }
    Ok(value)
}

pub fn parse_hours(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    let value = trimmed
        .parse::<f64>()
        .map_err(|_| ValidationError::NotANumber {
            field,
            value: trimmed.to_string(),
        })?;
    require_hours(field, value)
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(raw.to_string()))
}

pub fn parse_clock_time(raw: &str) -> Result<NaiveTime, ValidationError> {
    let trimmed = raw.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|_| ValidationError::InvalidTime(raw.to_string()))
}
