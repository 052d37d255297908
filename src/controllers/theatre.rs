use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

use crate::errors::AppError;
use crate::models::SeatBooking;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/theatre", get(list_theatre_bookings))
}

// GET /theatre
async fn list_theatre_bookings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SeatBooking>>, AppError> {
    let seats = state.store.list_theatre_bookings().await?;
    tracing::debug!("list_theatre_bookings: {} seats", seats.len());
    Ok(Json(seats))
}
