//! Customer HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::dto::CustomerResponse;
use crate::application::Services;
use crate::domain::{CreateCustomerDto, UpdateCustomerDto};
use crate::interfaces::http::common::{api_error, ok, ApiError, ApiJson, ApiResponse, ApiResult};

#[utoipa::path(
    post,
    path = "/api/customers/create",
    tag = "Customers",
    request_body = CreateCustomerDto,
    responses(
        (status = 201, description = "Customer created", body = ApiResponse<CustomerResponse>),
        (status = 409, description = "Username already taken"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_customer(
    State(services): State<Arc<Services>>,
    ApiJson(request): ApiJson<CreateCustomerDto>,
) -> Result<(StatusCode, Json<ApiResponse<CustomerResponse>>), ApiError> {
    let customer = services.customers.save(request).await.map_err(api_error)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(CustomerResponse::from(customer))),
    ))
}

#[utoipa::path(
    get,
    path = "/api/customers/get",
    tag = "Customers",
    responses(
        (status = 200, description = "All customers", body = ApiResponse<Vec<CustomerResponse>>)
    )
)]
pub async fn list_customers(
    State(services): State<Arc<Services>>,
) -> ApiResult<Vec<CustomerResponse>> {
    let customers = services.customers.get_all().await.map_err(api_error)?;
    ok(customers.into_iter().map(CustomerResponse::from).collect())
}

#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    tag = "Customers",
    params(("id" = i64, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer details", body = ApiResponse<CustomerResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_customer(
    State(services): State<Arc<Services>>,
    Path(id): Path<i64>,
) -> ApiResult<CustomerResponse> {
    let customer = services.customers.get_by_id(id).await.map_err(api_error)?;
    ok(customer.into())
}

#[utoipa::path(
    put,
    path = "/api/customers/{id}",
    tag = "Customers",
    params(("id" = i64, Path, description = "Customer ID")),
    request_body = UpdateCustomerDto,
    responses(
        (status = 200, description = "Customer updated", body = ApiResponse<CustomerResponse>),
        (status = 404, description = "Not found"),
        (status = 409, description = "Username already taken"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_customer(
    State(services): State<Arc<Services>>,
    Path(id): Path<i64>,
    ApiJson(request): ApiJson<UpdateCustomerDto>,
) -> ApiResult<CustomerResponse> {
    let customer = services.customers.update(id, request).await.map_err(api_error)?;
    ok(customer.into())
}

#[utoipa::path(
    delete,
    path = "/api/customers/{id}",
    tag = "Customers",
    params(("id" = i64, Path, description = "Customer ID")),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 404, description = "Not found"),
        (status = 409, description = "Customer still has reservations, payment methods or feedback")
    )
)]
pub async fn delete_customer(
    State(services): State<Arc<Services>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    services.customers.delete(id).await.map_err(api_error)?;
    Ok(StatusCode::NO_CONTENT)
}
