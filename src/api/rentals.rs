//! Rental management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::rental::{Rental, RentalRequest, RentalResponse},
};

fn mutation_status(response: &RentalResponse) -> StatusCode {
    if response.error.is_some() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::OK
    }
}

/// List all rentals
#[utoipa::path(
    get,
    path = "/rentals/all",
    tag = "rentals",
    responses(
        (status = 200, description = "List of rentals", body = Vec<Rental>)
    )
)]
pub async fn list_rentals(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Rental>>> {
    let rentals = state.services.rentals.list().await?;
    Ok(Json(rentals))
}

/// Get rental by ID
#[utoipa::path(
    get,
    path = "/rentals/{id}",
    tag = "rentals",
    params(
        ("id" = i64, Path, description = "Rental ID")
    ),
    responses(
        (status = 200, description = "Rental details", body = Rental),
        (status = 404, description = "Rental not found")
    )
)]
pub async fn get_rental(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Rental>> {
    let rental = state.services.rentals.get_by_id(id).await?;
    Ok(Json(rental))
}

/// Add a new rental
#[utoipa::path(
    post,
    path = "/rentals/add",
    tag = "rentals",
    request_body = RentalRequest,
    responses(
        (status = 200, description = "Rental added", body = RentalResponse),
        (status = 400, description = "Failed to add rental", body = RentalResponse)
    )
)]
pub async fn add_rental(
    State(state): State<crate::AppState>,
    Json(request): Json<RentalRequest>,
) -> AppResult<(StatusCode, Json<RentalResponse>)> {
    let response = state.services.rentals.add_rental(request).await?;
    Ok((mutation_status(&response), Json(response)))
}

/// Update an existing rental
#[utoipa::path(
    put,
    path = "/rentals/update/{id}",
    tag = "rentals",
    params(
        ("id" = i64, Path, description = "Rental ID")
    ),
    request_body = RentalRequest,
    responses(
        (status = 200, description = "Rental updated", body = RentalResponse),
        (status = 400, description = "Rental not found", body = RentalResponse)
    )
)]
pub async fn update_rental(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(request): Json<RentalRequest>,
) -> AppResult<(StatusCode, Json<RentalResponse>)> {
    let response = state.services.rentals.update_rental(id, request).await?;
    Ok((mutation_status(&response), Json(response)))
}
