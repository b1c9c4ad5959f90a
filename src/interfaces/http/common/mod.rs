//! Shared HTTP plumbing: the response envelope, error mapping and the JSON
//! body extractor.

mod json;

pub use json::{ApiJson, ApiJsonRejection};

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::DomainError;

/// Standard API response envelope.
///
/// Success: `{"success": true, "data": {...}}`,
/// failure: `{"success": false, "data": null, "error": "..."}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Error half of every handler result.
pub type ApiError = (StatusCode, Json<ApiResponse<()>>);

pub type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

/// HTTP status for a domain failure.
pub fn status_for(e: &DomainError) -> StatusCode {
    match e {
        DomainError::ValidationFailed(_) | DomainError::InvalidReference { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::InvalidTransition { .. } | DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        DomainError::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        DomainError::Credential(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn api_error(e: DomainError) -> ApiError {
    let status = status_for(&e);
    if status.is_server_error() {
        tracing::error!(error = %e, "Request failed");
    }
    (status, Json(ApiResponse::error(e.to_string())))
}

/// Wrap a value in a successful envelope.
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok(Json(ApiResponse::success(data)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldViolation;

    #[test]
    fn every_domain_error_has_a_status() {
        let cases = [
            (
                DomainError::ValidationFailed(vec![FieldViolation::new("rating", "out of range")]),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (DomainError::not_found("Customer", 1), StatusCode::NOT_FOUND),
            (
                DomainError::invalid_reference("Vehicle", "vehicle_id", 2),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                DomainError::InvalidTransition {
                    entity: "Reservation",
                    from: "COMPLETED".into(),
                    to: "PENDING".into(),
                },
                StatusCode::CONFLICT,
            ),
            (DomainError::Conflict("taken".into()), StatusCode::CONFLICT),
            (DomainError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (
                DomainError::StorageUnavailable("db down".into()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                DomainError::Credential("bad cost".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(status_for(&err), expected, "{err}");
        }
    }

    #[test]
    fn error_envelope_omits_data() {
        let (status, Json(body)) = api_error(DomainError::not_found("Driver", 4));
        assert_eq!(status, StatusCode::NOT_FOUND);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], false);
        assert!(json["data"].is_null());
        assert_eq!(json["error"], "Not found: Driver with id=4");
    }
}
