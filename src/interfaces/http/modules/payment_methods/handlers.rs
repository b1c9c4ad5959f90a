//! Payment method HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use super::dto::{PaymentMethodFilter, PaymentMethodResponse};
use crate::application::Services;
use crate::domain::{CreatePaymentMethodDto, UpdatePaymentMethodDto};
use crate::interfaces::http::common::{api_error, ok, ApiError, ApiJson, ApiResponse, ApiResult};

#[utoipa::path(
    post,
    path = "/api/payment-methods/create",
    tag = "Payment Methods",
    request_body = CreatePaymentMethodDto,
    responses(
        (status = 201, description = "Payment method added", body = ApiResponse<PaymentMethodResponse>),
        (status = 422, description = "Validation error or unknown customer")
    )
)]
pub async fn create_payment_method(
    State(services): State<Arc<Services>>,
    ApiJson(request): ApiJson<CreatePaymentMethodDto>,
) -> Result<(StatusCode, Json<ApiResponse<PaymentMethodResponse>>), ApiError> {
    let method = services.payment_methods.save(request).await.map_err(api_error)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(PaymentMethodResponse::from(method))),
    ))
}

#[utoipa::path(
    get,
    path = "/api/payment-methods/get",
    tag = "Payment Methods",
    params(PaymentMethodFilter),
    responses(
        (status = 200, description = "Payment methods, optionally of one customer", body = ApiResponse<Vec<PaymentMethodResponse>>)
    )
)]
pub async fn list_payment_methods(
    State(services): State<Arc<Services>>,
    Query(filter): Query<PaymentMethodFilter>,
) -> ApiResult<Vec<PaymentMethodResponse>> {
    let methods = match filter.customer_id {
        Some(customer_id) => services.payment_methods.get_by_customer_id(customer_id).await,
        None => services.payment_methods.get_all().await,
    }
    .map_err(api_error)?;
    ok(methods.into_iter().map(PaymentMethodResponse::from).collect())
}

#[utoipa::path(
    get,
    path = "/api/payment-methods/customer/{customer_id}",
    tag = "Payment Methods",
    params(("customer_id" = i64, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Payment methods of the customer", body = ApiResponse<Vec<PaymentMethodResponse>>)
    )
)]
pub async fn list_customer_payment_methods(
    State(services): State<Arc<Services>>,
    Path(customer_id): Path<i64>,
) -> ApiResult<Vec<PaymentMethodResponse>> {
    let methods = services
        .payment_methods
        .get_by_customer_id(customer_id)
        .await
        .map_err(api_error)?;
    ok(methods.into_iter().map(PaymentMethodResponse::from).collect())
}

#[utoipa::path(
    get,
    path = "/api/payment-methods/{id}",
    tag = "Payment Methods",
    params(("id" = i64, Path, description = "Payment method ID")),
    responses(
        (status = 200, description = "Payment method details", body = ApiResponse<PaymentMethodResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_payment_method(
    State(services): State<Arc<Services>>,
    Path(id): Path<i64>,
) -> ApiResult<PaymentMethodResponse> {
    let method = services.payment_methods.get_by_id(id).await.map_err(api_error)?;
    ok(method.into())
}

#[utoipa::path(
    put,
    path = "/api/payment-methods/{id}",
    tag = "Payment Methods",
    params(("id" = i64, Path, description = "Payment method ID")),
    request_body = UpdatePaymentMethodDto,
    responses(
        (status = 200, description = "Payment method updated", body = ApiResponse<PaymentMethodResponse>),
        (status = 404, description = "Not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_payment_method(
    State(services): State<Arc<Services>>,
    Path(id): Path<i64>,
    ApiJson(request): ApiJson<UpdatePaymentMethodDto>,
) -> ApiResult<PaymentMethodResponse> {
    let method = services
        .payment_methods
        .update(id, request)
        .await
        .map_err(api_error)?;
    ok(method.into())
}

#[utoipa::path(
    delete,
    path = "/api/payment-methods/{id}",
    tag = "Payment Methods",
    params(("id" = i64, Path, description = "Payment method ID")),
    responses(
        (status = 204, description = "Payment method deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_payment_method(
    State(services): State<Arc<Services>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    services.payment_methods.delete(id).await.map_err(api_error)?;
    Ok(StatusCode::NO_CONTENT)
}
