use axum::{
    body::Bytes,
    extract::{RawQuery, State},
    http::{header, HeaderMap, Method},
    routing::get,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

use crate::errors::AppError;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/book", get(book_seat).post(book_seat))
}

/// Form fields of `/book`. `movie` and `movie_time` are only echoed back.
#[derive(Debug, Deserialize, Validate)]
pub struct BookForm {
    #[validate(range(min = 1, message = "room_no must be a positive number"))]
    pub room_no: i32,
    #[validate(length(min = 1, max = 50, message = "seat_no must be 1 to 50 characters"))]
    pub seat_no: String,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub movie: String,
    #[serde(default)]
    #[validate(length(max = 64))]
    pub movie_time: String,
}

impl BookForm {
    /// Collects the fields from the urlencoded body and the query string.
    /// A field present in both is taken from the body; for repeated keys the
    /// first value wins.
    pub fn from_parts(query: Option<&str>, body: Option<&[u8]>) -> Result<Self, AppError> {
        let invalid = |e: &dyn std::fmt::Display| AppError::InvalidRequest(e.to_string());

        let mut fields: Vec<(String, String)> = match body {
            Some(body) => serde_urlencoded::from_bytes(body).map_err(|e| invalid(&e))?,
            None => Vec::new(),
        };
        if let Some(query) = query {
            let query: Vec<(String, String)> =
                serde_urlencoded::from_str(query).map_err(|e| invalid(&e))?;
            fields.extend(query);
        }

        let mut merged: Vec<(String, String)> = Vec::with_capacity(fields.len());
        for (key, value) in fields {
            if !merged.iter().any(|(seen, _)| *seen == key) {
                merged.push((key, value));
            }
        }

        let encoded = serde_urlencoded::to_string(&merged).map_err(|e| invalid(&e))?;
        serde_urlencoded::from_str(&encoded).map_err(|e| invalid(&e))
    }
}

fn is_urlencoded(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"))
}

// GET|POST /book
// Тело читаем только у POST с urlencoded Content-Type, query string всегда
async fn book_seat(
    State(state): State<Arc<AppState>>,
    method: Method,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> Result<String, AppError> {
    let body = (method == Method::POST && is_urlencoded(&headers)).then_some(body.as_ref());
    let form = BookForm::from_parts(query.as_deref(), body)?;
    form.validate()
        .map_err(|e| AppError::InvalidRequest(e.to_string()))?;

    state.booking.book(form.room_no, &form.seat_no).await?;

    Ok(format!(
        "Booking successful for seat {} in room {} for movie {} at {}\n",
        form.seat_no, form.room_no, form.movie, form.movie_time
    ))
}
