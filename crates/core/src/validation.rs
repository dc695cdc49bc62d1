//! Request field validation helpers.
//!
//! DTOs derive [`validator::Validate`]; this module flattens the resulting
//! [`ValidationErrors`] tree into a list of [`FieldError`]s so the HTTP layer
//! can return them as a stable, flat JSON array. It also hosts the few
//! cross-field checks that a derive attribute cannot express.

use serde::Serialize;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::error::CoreError;
use crate::types::Date;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Flatten a `validator` error tree into field errors.
///
/// Nested structs and list items are reported with dotted / indexed paths
/// (`occupants[2].id`). Output is sorted by field name so responses are
/// deterministic.
pub fn flatten_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out = Vec::new();
    collect(errors, "", &mut out);
    out.sort_by(|a, b| a.field.cmp(&b.field));
    out
}

fn collect(errors: &ValidationErrors, prefix: &str, out: &mut Vec<FieldError>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(errs) => {
                out.extend(errs.iter().map(|e| FieldError::new(&path, describe(e))));
            }
            ValidationErrorsKind::Struct(inner) => collect(inner, &path, out),
            ValidationErrorsKind::List(items) => {
                for (idx, inner) in items {
                    collect(inner, &format!("{path}[{idx}]"), out);
                }
            }
        }
    }
}

fn describe(error: &ValidationError) -> String {
    if let Some(msg) = &error.message {
        return msg.to_string();
    }
    match error.code.as_ref() {
        "length" => "must not be empty".to_string(),
        "email" => "must be a valid email address".to_string(),
        "url" => "must be a valid URL".to_string(),
        "range" => "is out of range".to_string(),
        other => format!("is invalid ({other})"),
    }
}

/// Convert a failed derive validation into a [`CoreError::InvalidFields`].
pub fn into_core_error(errors: &ValidationErrors) -> CoreError {
    CoreError::InvalidFields(flatten_errors(errors))
}

/// A trip's end date must not precede its start date.
///
/// Only checked when both dates are known; partial updates that touch just one
/// side are checked by the caller against the stored row.
pub fn check_date_range(start: Option<Date>, end: Option<Date>) -> Result<(), FieldError> {
    match (start, end) {
        (Some(start), Some(end)) if end < start => Err(FieldError::new(
            "end_date",
            "must be on or after start_date",
        )),
        _ => Ok(()),
    }
}

/// Reject a value that is not in a fixed vocabulary.
pub fn check_one_of(field: &str, value: &str, allowed: &[&str]) -> Result<(), FieldError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(FieldError::new(
            field,
            format!("must be one of: {}", allowed.join(", ")),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1))]
        name: String,
        #[validate(email)]
        email: Option<String>,
        #[validate(range(min = 0, message = "must not be negative"))]
        count: Option<i32>,
    }

    #[test]
    fn flattens_and_sorts_field_errors() {
        let sample = Sample {
            name: String::new(),
            email: Some("not-an-email".into()),
            count: Some(-1),
        };
        let errors = sample.validate().unwrap_err();
        let fields = flatten_errors(&errors);

        let names: Vec<_> = fields.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(names, vec!["count", "email", "name"]);
        assert_eq!(fields[0].message, "must not be negative");
        assert_eq!(fields[1].message, "must be a valid email address");
        assert_eq!(fields[2].message, "must not be empty");
    }

    #[test]
    fn valid_struct_produces_no_errors() {
        let sample = Sample {
            name: "ok".into(),
            email: None,
            count: Some(3),
        };
        assert!(sample.validate().is_ok());
    }

    #[test]
    fn date_range_rejects_end_before_start() {
        let start = Date::from_ymd_opt(2025, 6, 5).unwrap();
        let end = Date::from_ymd_opt(2025, 6, 1).unwrap();
        let err = check_date_range(Some(start), Some(end)).unwrap_err();
        assert_eq!(err.field, "end_date");
    }

    #[test]
    fn date_range_allows_same_day_and_missing_sides() {
        let day = Date::from_ymd_opt(2025, 6, 1).unwrap();
        assert!(check_date_range(Some(day), Some(day)).is_ok());
        assert!(check_date_range(None, Some(day)).is_ok());
        assert!(check_date_range(Some(day), None).is_ok());
    }

    #[test]
    fn one_of_lists_allowed_values() {
        let err = check_one_of("priority", "urgent", &["low", "high"]).unwrap_err();
        assert_eq!(err.message, "must be one of: low, high");
        assert!(check_one_of("priority", "low", &["low", "high"]).is_ok());
    }
}
