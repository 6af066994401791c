//! Reservation endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{error::AppResult, models::reservation::Reservation, AppState};

/// List all reservations
#[utoipa::path(
    get,
    path = "/reservas",
    tag = "reservations",
    responses(
        (status = 200, description = "List of reservations", body = Vec<Reservation>)
    )
)]
pub async fn list_reservations(State(state): State<AppState>) -> AppResult<Json<Vec<Reservation>>> {
    let reservations = state.services.reservations.list_all().await?;
    Ok(Json(reservations))
}

/// Create a reservation
#[utoipa::path(
    post,
    path = "/reservas",
    tag = "reservations",
    request_body = Reservation,
    responses(
        (status = 201, description = "Reservation created", body = Reservation),
        (status = 422, description = "Unknown user or item (reference validation enabled)", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    Json(reservation): Json<Reservation>,
) -> AppResult<(StatusCode, Json<Reservation>)> {
    let created = state.services.reservations.create(reservation).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
