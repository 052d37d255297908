use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

use crate::errors::AppError;
use crate::models::Movie;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/movies", get(list_movies))
}

// GET /movies
async fn list_movies(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Movie>>, AppError> {
    let movies = state.store.list_movies().await?;
    tracing::debug!("list_movies: {} movies", movies.len());
    Ok(Json(movies))
}
