//! Field-contract helpers shared by every input DTO.
//!
//! Input types declare their rules with `validator` derive attributes;
//! [`validate_input`] runs them and folds every failing field into a single
//! [`DomainError::ValidationFailed`].

use std::borrow::Cow;

use rust_decimal::Decimal;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::shared::{DomainError, DomainResult, FieldViolation};

/// Run all declared field contracts and report every violation at once.
pub fn validate_input<T: Validate>(input: &T) -> DomainResult<()> {
    input
        .validate()
        .map_err(|errors| DomainError::ValidationFailed(collect_violations(&errors)))
}

/// Flatten `validator` output into sorted field violations.
pub fn collect_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations: Vec<FieldViolation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter()
                .map(move |e| FieldViolation::new(field.to_string(), describe(e)))
        })
        .collect();
    violations.sort_by(|a, b| a.field.cmp(&b.field).then(a.message.cmp(&b.message)));
    violations
}

fn describe(error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }
    let param = |name: &str| error.params.get(name).map(|v| v.to_string());
    match error.code.as_ref() {
        "email" => "must be a valid email address".to_string(),
        "length" => match (param("min"), param("max")) {
            (Some(min), Some(max)) => format!("length must be between {} and {}", min, max),
            (Some(min), None) => format!("length must be at least {}", min),
            (None, Some(max)) => format!("length must be at most {}", max),
            (None, None) => "invalid length".to_string(),
        },
        "range" => match (param("min"), param("max")) {
            (Some(min), Some(max)) => format!("must be between {} and {}", min, max),
            (Some(min), None) => format!("must be at least {}", min),
            (None, Some(max)) => format!("must be at most {}", max),
            (None, None) => "out of range".to_string(),
        },
        code => code.to_string(),
    }
}

fn failure(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Rejects empty and whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(failure("blank", "must not be blank"));
    }
    Ok(())
}

pub fn positive_amount(value: &Decimal) -> Result<(), ValidationError> {
    if *value <= Decimal::ZERO {
        return Err(failure("positive", "must be greater than zero"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Debug, Validate)]
    struct Sample {
        #[validate(custom(function = "not_blank"))]
        name: String,
        #[validate(email)]
        email: String,
        #[validate(range(min = 1, max = 5))]
        score: i32,
        #[validate(custom(function = "positive_amount"))]
        amount: Decimal,
    }

    fn valid_sample() -> Sample {
        Sample {
            name: "ok".into(),
            email: "a@b.io".into(),
            score: 3,
            amount: Decimal::new(1050, 2),
        }
    }

    #[test]
    fn valid_input_passes() {
        assert!(validate_input(&valid_sample()).is_ok());
    }

    #[test]
    fn all_violations_reported_together() {
        let sample = Sample {
            name: "   ".into(),
            email: "nope".into(),
            score: 9,
            amount: Decimal::ZERO,
        };
        let Err(DomainError::ValidationFailed(violations)) = validate_input(&sample) else {
            panic!("expected validation failure");
        };
        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["amount", "email", "name", "score"]);
    }

    #[test]
    fn negative_amount_rejected() {
        assert!(positive_amount(&Decimal::new(-1, 0)).is_err());
        assert!(positive_amount(&Decimal::new(1, 2)).is_ok());
    }
}
