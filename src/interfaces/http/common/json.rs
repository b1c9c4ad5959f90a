//! JSON body extractor for Axum
//!
//! `ApiJson<T>` works like `axum::Json<T>`, but a body that cannot be
//! deserialized is rejected inside the standard `ApiResponse` envelope
//! instead of axum's plain-text rejection. Field contracts are checked by
//! the services, not here.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;

use super::ApiResponse;

/// An extractor that deserializes a JSON request body.
///
/// ```ignore
/// async fn handler(ApiJson(body): ApiJson<CreateCustomerDto>) {
///     // `body` is well-formed; the service validates its fields
/// }
/// ```
pub struct ApiJson<T>(pub T);

/// The body was missing, not JSON, or did not match the expected shape.
pub struct ApiJsonRejection(JsonRejection);

impl IntoResponse for ApiJsonRejection {
    fn into_response(self) -> Response {
        let status = self.0.status();
        let body = ApiResponse::<()>::error(format!("Invalid JSON: {}", self.0.body_text()));
        (status, Json(body)).into_response()
    }
}

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiJsonRejection;

    async fn from_request(
        req: axum::extract::Request,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ApiJsonRejection)?;
        Ok(ApiJson(value))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::post;
    use axum::Router;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Debug, Deserialize)]
    struct TestBody {
        #[allow(dead_code)]
        rating: i32,
    }

    async fn handler(ApiJson(_body): ApiJson<TestBody>) -> &'static str {
        "ok"
    }

    fn app() -> Router {
        Router::new().route("/test", post(handler))
    }

    fn request(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/test")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn well_formed_body_passes() {
        let resp = app().oneshot(request(r#"{"rating": 4}"#)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn syntax_error_returns_400_envelope() {
        let resp = app().oneshot(request("not json")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn wrong_shape_returns_422() {
        let resp = app().oneshot(request(r#"{"rating": "high"}"#)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
