use serde::Serialize;
use thiserror::Error;

/// A single failed field contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Clone, Error)]
pub enum DomainError {
    #[error("Validation failed: {}", join_violations(.0))]
    ValidationFailed(Vec<FieldViolation>),

    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Invalid reference: no {entity} with {field}={value}")]
    InvalidReference {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Invalid transition: {entity} cannot move from {from} to {to}")]
    InvalidTransition {
        entity: &'static str,
        from: String,
        to: String,
    },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Credential error: {0}")]
    Credential(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound {
            entity,
            field: "id",
            value: id.to_string(),
        }
    }

    pub fn invalid_reference(entity: &'static str, field: &'static str, id: i64) -> Self {
        Self::InvalidReference {
            entity,
            field,
            value: id.to_string(),
        }
    }

    /// Whether this error is likely transient (e.g. DB connection lost)
    /// and the operation may succeed if retried.
    pub fn is_transient(&self) -> bool {
        matches!(self, DomainError::StorageUnavailable(_))
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::StorageUnavailable(e.to_string())
    }
}

impl From<bcrypt::BcryptError> for DomainError {
    fn from(e: bcrypt::BcryptError) -> Self {
        DomainError::Credential(e.to_string())
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_lists_every_field() {
        let err = DomainError::ValidationFailed(vec![
            FieldViolation::new("email", "must be a valid email"),
            FieldViolation::new("username", "must not be blank"),
        ]);
        let msg = err.to_string();
        assert!(msg.contains("email: must be a valid email"));
        assert!(msg.contains("username: must not be blank"));
    }

    #[test]
    fn only_storage_errors_are_transient() {
        assert!(DomainError::StorageUnavailable("connection reset".into()).is_transient());
        assert!(!DomainError::Conflict("taken".into()).is_transient());
        assert!(!DomainError::not_found("Customer", 1).is_transient());
    }

    #[test]
    fn db_errors_map_to_storage_unavailable() {
        let err: DomainError = sea_orm::DbErr::Custom("disk I/O error".into()).into();
        assert!(matches!(err, DomainError::StorageUnavailable(_)));
    }
}
