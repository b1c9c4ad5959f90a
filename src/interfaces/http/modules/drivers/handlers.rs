//! Driver HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::dto::DriverResponse;
use crate::application::Services;
use crate::domain::{CreateDriverDto, UpdateDriverDto};
use crate::interfaces::http::common::{api_error, ok, ApiError, ApiJson, ApiResponse, ApiResult};

#[utoipa::path(
    post,
    path = "/api/drivers/create",
    tag = "Drivers",
    request_body = CreateDriverDto,
    responses(
        (status = 201, description = "Driver created", body = ApiResponse<DriverResponse>),
        (status = 409, description = "Username already taken"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_driver(
    State(services): State<Arc<Services>>,
    ApiJson(request): ApiJson<CreateDriverDto>,
) -> Result<(StatusCode, Json<ApiResponse<DriverResponse>>), ApiError> {
    let driver = services.drivers.save(request).await.map_err(api_error)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(DriverResponse::from(driver))),
    ))
}

#[utoipa::path(
    get,
    path = "/api/drivers/get",
    tag = "Drivers",
    responses(
        (status = 200, description = "All drivers", body = ApiResponse<Vec<DriverResponse>>)
    )
)]
pub async fn list_drivers(State(services): State<Arc<Services>>) -> ApiResult<Vec<DriverResponse>> {
    let drivers = services.drivers.get_all().await.map_err(api_error)?;
    ok(drivers.into_iter().map(DriverResponse::from).collect())
}

#[utoipa::path(
    get,
    path = "/api/drivers/{id}",
    tag = "Drivers",
    params(("id" = i64, Path, description = "Driver ID")),
    responses(
        (status = 200, description = "Driver details", body = ApiResponse<DriverResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_driver(
    State(services): State<Arc<Services>>,
    Path(id): Path<i64>,
) -> ApiResult<DriverResponse> {
    let driver = services.drivers.get_by_id(id).await.map_err(api_error)?;
    ok(driver.into())
}

#[utoipa::path(
    put,
    path = "/api/drivers/{id}",
    tag = "Drivers",
    params(("id" = i64, Path, description = "Driver ID")),
    request_body = UpdateDriverDto,
    responses(
        (status = 200, description = "Driver updated", body = ApiResponse<DriverResponse>),
        (status = 404, description = "Not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_driver(
    State(services): State<Arc<Services>>,
    Path(id): Path<i64>,
    ApiJson(request): ApiJson<UpdateDriverDto>,
) -> ApiResult<DriverResponse> {
    let driver = services.drivers.update(id, request).await.map_err(api_error)?;
    ok(driver.into())
}

#[utoipa::path(
    delete,
    path = "/api/drivers/{id}",
    tag = "Drivers",
    params(("id" = i64, Path, description = "Driver ID")),
    responses(
        (status = 204, description = "Driver deleted"),
        (status = 404, description = "Not found"),
        (status = 409, description = "Driver still has vehicles assigned")
    )
)]
pub async fn delete_driver(
    State(services): State<Arc<Services>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    services.drivers.delete(id).await.map_err(api_error)?;
    Ok(StatusCode::NO_CONTENT)
}
