//! Reservation HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::dto::ReservationResponse;
use crate::application::Services;
use crate::domain::{CreateReservationDto, Reservation, UpdateReservationDto};
use crate::interfaces::http::common::{api_error, ok, ApiError, ApiJson, ApiResponse, ApiResult};

fn to_responses(reservations: Vec<Reservation>) -> Vec<ReservationResponse> {
    reservations.into_iter().map(ReservationResponse::from).collect()
}

#[utoipa::path(
    post,
    path = "/api/reservations/create",
    tag = "Reservations",
    request_body = CreateReservationDto,
    responses(
        (status = 201, description = "Reservation created", body = ApiResponse<ReservationResponse>),
        (status = 409, description = "Vehicle already booked for an overlapping window"),
        (status = 422, description = "Validation error or unknown customer/vehicle")
    )
)]
pub async fn create_reservation(
    State(services): State<Arc<Services>>,
    ApiJson(request): ApiJson<CreateReservationDto>,
) -> Result<(StatusCode, Json<ApiResponse<ReservationResponse>>), ApiError> {
    let reservation = services.reservations.save(request).await.map_err(api_error)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(ReservationResponse::from(reservation))),
    ))
}

#[utoipa::path(
    get,
    path = "/api/reservations/get",
    tag = "Reservations",
    responses(
        (status = 200, description = "All reservations", body = ApiResponse<Vec<ReservationResponse>>)
    )
)]
pub async fn list_reservations(
    State(services): State<Arc<Services>>,
) -> ApiResult<Vec<ReservationResponse>> {
    let reservations = services.reservations.get_all().await.map_err(api_error)?;
    ok(to_responses(reservations))
}

#[utoipa::path(
    get,
    path = "/api/reservations/{id}",
    tag = "Reservations",
    params(("id" = i64, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation details", body = ApiResponse<ReservationResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_reservation(
    State(services): State<Arc<Services>>,
    Path(id): Path<i64>,
) -> ApiResult<ReservationResponse> {
    let reservation = services.reservations.get_by_id(id).await.map_err(api_error)?;
    ok(reservation.into())
}

#[utoipa::path(
    get,
    path = "/api/reservations/customer/{customer_id}",
    tag = "Reservations",
    params(("customer_id" = i64, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Reservations of the customer", body = ApiResponse<Vec<ReservationResponse>>)
    )
)]
pub async fn list_customer_reservations(
    State(services): State<Arc<Services>>,
    Path(customer_id): Path<i64>,
) -> ApiResult<Vec<ReservationResponse>> {
    let reservations = services
        .reservations
        .get_by_customer(customer_id)
        .await
        .map_err(api_error)?;
    ok(to_responses(reservations))
}

#[utoipa::path(
    get,
    path = "/api/reservations/vehicle/{vehicle_id}",
    tag = "Reservations",
    params(("vehicle_id" = i64, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "Reservations of the vehicle", body = ApiResponse<Vec<ReservationResponse>>)
    )
)]
pub async fn list_vehicle_reservations(
    State(services): State<Arc<Services>>,
    Path(vehicle_id): Path<i64>,
) -> ApiResult<Vec<ReservationResponse>> {
    let reservations = services
        .reservations
        .get_by_vehicle(vehicle_id)
        .await
        .map_err(api_error)?;
    ok(to_responses(reservations))
}

#[utoipa::path(
    put,
    path = "/api/reservations/{id}",
    tag = "Reservations",
    params(("id" = i64, Path, description = "Reservation ID")),
    request_body = UpdateReservationDto,
    responses(
        (status = 200, description = "Reservation updated", body = ApiResponse<ReservationResponse>),
        (status = 404, description = "Not found"),
        (status = 409, description = "Disallowed status change or overlapping window"),
        (status = 422, description = "Validation error or unknown vehicle")
    )
)]
pub async fn update_reservation(
    State(services): State<Arc<Services>>,
    Path(id): Path<i64>,
    ApiJson(request): ApiJson<UpdateReservationDto>,
) -> ApiResult<ReservationResponse> {
    let reservation = services.reservations.update(id, request).await.map_err(api_error)?;
    ok(reservation.into())
}

#[utoipa::path(
    delete,
    path = "/api/reservations/{id}",
    tag = "Reservations",
    params(("id" = i64, Path, description = "Reservation ID")),
    responses(
        (status = 204, description = "Reservation deleted"),
        (status = 404, description = "Not found"),
        (status = 409, description = "Reservation has payments or feedback")
    )
)]
pub async fn delete_reservation(
    State(services): State<Arc<Services>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    services.reservations.delete(id).await.map_err(api_error)?;
    Ok(StatusCode::NO_CONTENT)
}
