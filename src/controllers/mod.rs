pub mod bookings;
pub mod movies;
pub mod theatre;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(movies::routes())
        .merge(theatre::routes())
        .merge(bookings::routes())
}

/// The full HTTP application: service routes plus banner and health check.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Movie Booking API v1.0" }))
        .route("/health", get(|| async { "OK" }))
        .merge(routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
