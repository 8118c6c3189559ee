use std::collections::BTreeMap;

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tripdesk_core::{BookingRequest, CoreError, Reservation, ResponseStatus};
use tripdesk_order::BookingError;
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reservations", get(list_reservations))
        .route("/reservations/book", post(book))
        .route("/reservations/competitive_book", post(competitive_book))
}

#[derive(Debug, Deserialize)]
pub struct ReservationsQuery {
    pub user: String,
}

#[derive(Debug, Serialize)]
pub struct ReservationsResponse {
    pub status: ResponseStatus,
    pub reservations: BTreeMap<Uuid, Reservation>,
}

async fn list_reservations(
    State(state): State<AppState>,
    Query(query): Query<ReservationsQuery>,
) -> Result<Json<ReservationsResponse>, AppError> {
    let reservations: BTreeMap<Uuid, Reservation> = state
        .reservations
        .list_for_user(&query.user)
        .await?
        .into_iter()
        .map(|r| (r.reservation_id, r))
        .collect();

    let status = if reservations.is_empty() {
        ResponseStatus::NotFound
    } else {
        ResponseStatus::Found
    };
    Ok(Json(ReservationsResponse {
        status,
        reservations,
    }))
}

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub msg: String,
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Reservation>,
}

async fn book(
    State(state): State<AppState>,
    Json(request): Json<BookingRequest>,
) -> Result<Json<BookingResponse>, AppError> {
    booking_response(state.executor.book(&request).await)
}

async fn competitive_book(
    State(state): State<AppState>,
    Json(request): Json<BookingRequest>,
) -> Result<Json<BookingResponse>, AppError> {
    booking_response(state.executor.competitive_book(&request).await)
}

/// Not-found and not-available are ordinary outcomes; only validation and
/// internal failures leave the 200 path.
fn booking_response(result: Result<Reservation, BookingError>) -> Result<Json<BookingResponse>, AppError> {
    match result {
        Ok(reservation) => Ok(Json(BookingResponse {
            msg: "booking made".to_string(),
            status: ResponseStatus::Confirmed,
            details: Some(reservation),
        })),
        Err(e @ BookingError::OpeningNotFound(_)) => Ok(Json(BookingResponse {
            msg: e.to_string(),
            status: ResponseStatus::NotFound,
            details: None,
        })),
        Err(e @ BookingError::NotAvailable) => Ok(Json(BookingResponse {
            msg: e.to_string(),
            status: ResponseStatus::NotAvailable,
            details: None,
        })),
        Err(BookingError::Core(CoreError::ValidationError(msg))) => Err(AppError::ValidationError(msg)),
        Err(BookingError::Core(CoreError::InternalError(msg))) => Err(AppError::InternalServerError(msg)),
    }
}
