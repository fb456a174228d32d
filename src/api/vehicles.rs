//! Vehicle endpoints

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::{
    error::{AppResult, ErrorResponse},
    models::{InsertVehicle, UpdateVehicle, Vehicle, VehicleFilter, VehicleQuery},
};

use super::MessageResponse;

/// List vehicles, newest first
#[utoipa::path(
    get,
    path = "/vehicles",
    tag = "vehicles",
    params(VehicleQuery),
    responses(
        (status = 200, description = "Matching vehicles, newest first", body = Vec<Vehicle>),
        (status = 400, description = "Malformed filter", body = ErrorResponse)
    )
)]
pub async fn list_vehicles(
    State(state): State<crate::AppState>,
    query: Result<Query<VehicleQuery>, QueryRejection>,
) -> AppResult<Json<Vec<Vehicle>>> {
    let Query(query) = query?;
    let filter = VehicleFilter::try_from(query)?;
    Ok(Json(state.services.vehicles.list(&filter)))
}

/// Get vehicle by serial number
#[utoipa::path(
    get,
    path = "/vehicles/{slNo}",
    tag = "vehicles",
    params(("slNo" = i32, Path, description = "Vehicle serial number")),
    responses(
        (status = 200, description = "Vehicle details", body = Vehicle),
        (status = 404, description = "Vehicle not found", body = ErrorResponse)
    )
)]
pub async fn get_vehicle(
    State(state): State<crate::AppState>,
    sl_no: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<Vehicle>> {
    let Path(sl_no) = sl_no?;
    let vehicle = state.services.vehicles.get_by_id(sl_no)?;
    Ok(Json(vehicle))
}

/// Create a vehicle
#[utoipa::path(
    post,
    path = "/vehicles",
    tag = "vehicles",
    request_body = InsertVehicle,
    responses(
        (status = 201, description = "Vehicle created", body = Vehicle),
        (status = 400, description = "Validation failed", body = ErrorResponse)
    )
)]
pub async fn create_vehicle(
    State(state): State<crate::AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Vehicle>)> {
    let Json(payload) = payload?;
    let vehicle = state.services.vehicles.create(&payload)?;
    Ok((StatusCode::CREATED, Json(vehicle)))
}

/// Partially update a vehicle
#[utoipa::path(
    put,
    path = "/vehicles/{slNo}",
    tag = "vehicles",
    params(("slNo" = i32, Path, description = "Vehicle serial number")),
    request_body = UpdateVehicle,
    responses(
        (status = 200, description = "Vehicle updated", body = Vehicle),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Vehicle not found", body = ErrorResponse)
    )
)]
pub async fn update_vehicle(
    State(state): State<crate::AppState>,
    sl_no: Result<Path<i32>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<Vehicle>> {
    let Path(sl_no) = sl_no?;
    let Json(payload) = payload?;
    let vehicle = state.services.vehicles.update(sl_no, &payload)?;
    Ok(Json(vehicle))
}

/// Delete a vehicle
#[utoipa::path(
    delete,
    path = "/vehicles/{slNo}",
    tag = "vehicles",
    params(("slNo" = i32, Path, description = "Vehicle serial number")),
    responses(
        (status = 200, description = "Vehicle deleted", body = MessageResponse),
        (status = 404, description = "Vehicle not found", body = ErrorResponse)
    )
)]
pub async fn delete_vehicle(
    State(state): State<crate::AppState>,
    sl_no: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Path(sl_no) = sl_no?;
    state.services.vehicles.delete(sl_no)?;
    Ok(Json(MessageResponse {
        message: "Vehicle deleted successfully".to_string(),
    }))
}
