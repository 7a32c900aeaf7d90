//! # Validation & Normalization
//!
//! Per-field normalizers return `Result<value, Problem>`, so every fallback (a blank optional
//! string becoming `""`, a non-numeric price becoming `0`) is a visible decision of the
//! [`Coercion`] policy rather than an accident of parsing.
//!
//! [`FieldReader`] walks a payload with those normalizers and collects every failure into a
//! single [`ValidationError`].

use crate::entity::Payload;
use serde::Serialize;
use serde_json::Value;

/// What happens when a numeric field holds something that is not a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Coercion {
    /// Non-numeric input becomes `0`. `null` counts as `0` and booleans as `1`/`0`.
    #[default]
    Lenient,
    /// Only JSON numbers and numeric strings are accepted.
    Strict,
}

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Problem {
    Missing,
    Blank,
    NotAString,
    NotANumber,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{}", describe(.field, .problem))]
pub struct FieldError {
    pub field: String,
    pub problem: Problem,
}

fn describe(field: &str, problem: &Problem) -> String {
    match *problem {
        Problem::Missing => format!("{field} is required"),
        Problem::Blank => format!("{field} must not be blank"),
        Problem::NotAString => format!("{field} must be a string"),
        Problem::NotANumber => format!("{field} must be a number"),
    }
}

/// One or more rejected fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", join(.fields))]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
}

fn join(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationError {
    pub fn single(field: impl Into<String>, problem: Problem) -> Self {
        Self {
            fields: vec![FieldError {
                field: field.into(),
                problem,
            }],
        }
    }

    pub fn has(&self, field: &str, problem: Problem) -> bool {
        self.fields
            .iter()
            .any(|f| f.field == field && f.problem == problem)
    }
}

/// Parses a numeric-looking string: trimmed, empty means zero, non-finite is rejected.
pub(crate) fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Trims a string value. Anything other than a JSON string is rejected.
pub fn normalize_text(value: &Value) -> Result<String, Problem> {
    match value {
        Value::String(s) => Ok(s.trim().to_string()),
        _ => Err(Problem::NotAString),
    }
}

/// Coerces a value to a number under `coercion`.
pub fn coerce_number(value: &Value, coercion: Coercion) -> Result<f64, Problem> {
    let parsed = match (value, coercion) {
        (Value::Number(n), _) => n.as_f64(),
        (Value::String(s), _) => parse_number(s),
        (Value::Bool(b), Coercion::Lenient) => Some(if *b { 1.0 } else { 0.0 }),
        (Value::Null, Coercion::Lenient) => Some(0.0),
        _ => None,
    };
    match (parsed, coercion) {
        (Some(n), _) => Ok(n),
        (None, Coercion::Lenient) => Ok(0.0),
        (None, Coercion::Strict) => Err(Problem::NotANumber),
    }
}

/// Reads fields out of a payload, normalizing each and collecting failures.
///
/// Accessors return a placeholder when a field fails; [`FieldReader::finish`] discards the
/// assembled value in that case.
pub struct FieldReader<'a> {
    payload: &'a Payload,
    coercion: Coercion,
    errors: Vec<FieldError>,
}

impl<'a> FieldReader<'a> {
    pub fn new(payload: &'a Payload, coercion: Coercion) -> Self {
        Self {
            payload,
            coercion,
            errors: Vec::new(),
        }
    }

    fn reject(&mut self, field: &str, problem: Problem) {
        self.errors.push(FieldError {
            field: field.to_string(),
            problem,
        });
    }

    /// Present value, treating `null` as absent.
    fn present(&self, field: &str) -> Option<&'a Value> {
        self.payload.get(field).filter(|v| !v.is_null())
    }

    fn text(&mut self, field: &str, value: &Value, required: bool) -> Option<String> {
        match normalize_text(value) {
            Ok(text) if required && text.is_empty() => {
                self.reject(field, Problem::Blank);
                None
            }
            Ok(text) => Some(text),
            Err(problem) => {
                self.reject(field, problem);
                None
            }
        }
    }

    fn number(&mut self, field: &str, value: &Value) -> Option<f64> {
        match coerce_number(value, self.coercion) {
            Ok(n) => Some(n),
            Err(problem) => {
                self.reject(field, problem);
                None
            }
        }
    }

    pub fn required_text(&mut self, field: &str) -> String {
        match self.present(field) {
            Some(value) => self.text(field, value, true).unwrap_or_default(),
            None => {
                self.reject(field, Problem::Missing);
                String::new()
            }
        }
    }

    /// Defaults to `""` when absent or `null`.
    pub fn optional_text(&mut self, field: &str) -> String {
        match self.present(field) {
            Some(value) => self.text(field, value, false).unwrap_or_default(),
            None => String::new(),
        }
    }

    pub fn required_number(&mut self, field: &str) -> f64 {
        match self.present(field) {
            Some(value) => self.number(field, value).unwrap_or_default(),
            None => {
                self.reject(field, Problem::Missing);
                0.0
            }
        }
    }

    /// Defaults to `0` when absent.
    pub fn optional_number(&mut self, field: &str) -> f64 {
        match self.payload.get(field) {
            Some(value) => self.number(field, value).unwrap_or_default(),
            None => 0.0,
        }
    }

    /// `None` when absent. Present values must be non-blank strings.
    pub fn required_text_patch(&mut self, field: &str) -> Option<String> {
        let value = self.payload.get(field)?;
        if value.is_null() {
            self.reject(field, Problem::Missing);
            return None;
        }
        self.text(field, value, true)
    }

    /// `None` when absent; `null` clears the field to `""`.
    pub fn optional_text_patch(&mut self, field: &str) -> Option<String> {
        let value = self.payload.get(field)?;
        if value.is_null() {
            return Some(String::new());
        }
        self.text(field, value, false)
    }

    /// `None` when absent.
    pub fn number_patch(&mut self, field: &str) -> Option<f64> {
        let value = self.payload.get(field)?;
        self.number(field, value)
    }

    /// `None` when absent; `null` is rejected because the field may not be emptied.
    pub fn required_number_patch(&mut self, field: &str) -> Option<f64> {
        let value = self.payload.get(field)?;
        if value.is_null() {
            self.reject(field, Problem::Missing);
            return None;
        }
        self.number(field, value)
    }

    pub fn finish<T>(self, value: T) -> Result<T, ValidationError> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(ValidationError {
                fields: self.errors,
            })
        }
    }
}
