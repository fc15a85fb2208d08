use serde_json::{Map, Value};

use super::domain::{PatientRecord, REQUIRED_FIELDS};

/// Validation errors raised while turning a raw request into a `PatientRecord`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .fields.join(", "))]
    MissingFields { fields: Vec<String> },
    #[error("Invalid numerical input: {field} expects {expected}, found {value}")]
    InvalidNumericInput {
        field: String,
        value: String,
        expected: NumericKind,
    },
    #[error("Invalid text input: {field} expects a string, found {value}")]
    InvalidTextInput { field: String, value: String },
}

/// Target type of a numeric conversion, kept for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericKind {
    Float,
    Integer,
}

impl std::fmt::Display for NumericKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumericKind::Float => f.write_str("a number"),
            NumericKind::Integer => f.write_str("an integer"),
        }
    }
}

/// Guard responsible for producing `PatientRecord` instances from untyped input.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldValidator;

impl FieldValidator {
    pub fn new() -> Self {
        Self
    }

    /// Presence is checked for every field before any conversion is attempted.
    pub fn validate(&self, input: &Map<String, Value>) -> Result<PatientRecord, ValidationError> {
        let missing: Vec<String> = REQUIRED_FIELDS
            .iter()
            .filter(|field| !input.contains_key(**field))
            .map(|field| field.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields { fields: missing });
        }

        let age = float_field(input, "age")?;
        let bmi = float_field(input, "bmi")?;
        let hba1c_level = float_field(input, "HbA1c_level")?;
        let blood_glucose_level = float_field(input, "blood_glucose_level")?;
        let hypertension = integer_field(input, "hypertension")?;
        let heart_disease = integer_field(input, "heart_disease")?;

        Ok(PatientRecord {
            gender: text_field(input, "gender")?,
            smoking_history: text_field(input, "smoking_history")?,
            age,
            bmi,
            hba1c_level,
            blood_glucose_level,
            hypertension,
            heart_disease,
        })
    }
}

fn raw<'a>(input: &'a Map<String, Value>, field: &str) -> &'a Value {
    input.get(field).unwrap_or(&Value::Null)
}

fn float_field(input: &Map<String, Value>, field: &str) -> Result<f64, ValidationError> {
    let value = raw(input, field);
    coerce_float(value)
        .filter(|parsed| parsed.is_finite())
        .ok_or_else(|| invalid_numeric(field, value, NumericKind::Float))
}

fn integer_field(input: &Map<String, Value>, field: &str) -> Result<i64, ValidationError> {
    let value = raw(input, field);
    coerce_integer(value).ok_or_else(|| invalid_numeric(field, value, NumericKind::Integer))
}

fn text_field(input: &Map<String, Value>, field: &str) -> Result<String, ValidationError> {
    match raw(input, field) {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        other => Err(ValidationError::InvalidTextInput {
            field: field.to_string(),
            value: other.to_string(),
        }),
    }
}

fn coerce_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
        _ => None,
    }
}

fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|float| float.is_finite())
                .map(|float| float.trunc() as i64)
        }),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        Value::Bool(flag) => Some(i64::from(*flag)),
        _ => None,
    }
}

fn invalid_numeric(field: &str, value: &Value, expected: NumericKind) -> ValidationError {
    ValidationError::InvalidNumericInput {
        field: field.to_string(),
        value: value.to_string(),
        expected,
    }
}
