//! Vehicle HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::dto::VehicleResponse;
use crate::application::Services;
use crate::domain::VehicleDto;
use crate::interfaces::http::common::{api_error, ok, ApiError, ApiJson, ApiResponse, ApiResult};

#[utoipa::path(
    post,
    path = "/api/vehicles/create",
    tag = "Vehicles",
    request_body = VehicleDto,
    responses(
        (status = 201, description = "Vehicle created", body = ApiResponse<VehicleResponse>),
        (status = 422, description = "Validation error or unknown driver")
    )
)]
pub async fn create_vehicle(
    State(services): State<Arc<Services>>,
    ApiJson(request): ApiJson<VehicleDto>,
) -> Result<(StatusCode, Json<ApiResponse<VehicleResponse>>), ApiError> {
    let vehicle = services.vehicles.save(request).await.map_err(api_error)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(VehicleResponse::from(vehicle))),
    ))
}

#[utoipa::path(
    get,
    path = "/api/vehicles/get",
    tag = "Vehicles",
    responses(
        (status = 200, description = "All vehicles", body = ApiResponse<Vec<VehicleResponse>>)
    )
)]
pub async fn list_vehicles(
    State(services): State<Arc<Services>>,
) -> ApiResult<Vec<VehicleResponse>> {
    let vehicles = services.vehicles.get_all().await.map_err(api_error)?;
    ok(vehicles.into_iter().map(VehicleResponse::from).collect())
}

#[utoipa::path(
    get,
    path = "/api/vehicles/{id}",
    tag = "Vehicles",
    params(("id" = i64, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "Vehicle details", body = ApiResponse<VehicleResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_vehicle(
    State(services): State<Arc<Services>>,
    Path(id): Path<i64>,
) -> ApiResult<VehicleResponse> {
    let vehicle = services.vehicles.get_by_id(id).await.map_err(api_error)?;
    ok(vehicle.into())
}

#[utoipa::path(
    get,
    path = "/api/vehicles/driver/{driver_id}",
    tag = "Vehicles",
    params(("driver_id" = i64, Path, description = "Driver ID")),
    responses(
        (status = 200, description = "Vehicles assigned to the driver", body = ApiResponse<Vec<VehicleResponse>>)
    )
)]
pub async fn list_driver_vehicles(
    State(services): State<Arc<Services>>,
    Path(driver_id): Path<i64>,
) -> ApiResult<Vec<VehicleResponse>> {
    let vehicles = services.vehicles.get_by_driver(driver_id).await.map_err(api_error)?;
    ok(vehicles.into_iter().map(VehicleResponse::from).collect())
}

#[utoipa::path(
    put,
    path = "/api/vehicles/{id}",
    tag = "Vehicles",
    params(("id" = i64, Path, description = "Vehicle ID")),
    request_body = VehicleDto,
    responses(
        (status = 200, description = "Vehicle updated", body = ApiResponse<VehicleResponse>),
        (status = 404, description = "Not found"),
        (status = 422, description = "Validation error or unknown driver")
    )
)]
pub async fn update_vehicle(
    State(services): State<Arc<Services>>,
    Path(id): Path<i64>,
    ApiJson(request): ApiJson<VehicleDto>,
) -> ApiResult<VehicleResponse> {
    let vehicle = services.vehicles.update(id, request).await.map_err(api_error)?;
    ok(vehicle.into())
}

#[utoipa::path(
    delete,
    path = "/api/vehicles/{id}",
    tag = "Vehicles",
    params(("id" = i64, Path, description = "Vehicle ID")),
    responses(
        (status = 204, description = "Vehicle deleted"),
        (status = 404, description = "Not found"),
        (status = 409, description = "Vehicle has reservations")
    )
)]
pub async fn delete_vehicle(
    State(services): State<Arc<Services>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    services.vehicles.delete(id).await.map_err(api_error)?;
    Ok(StatusCode::NO_CONTENT)
}
