use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("Seat {seat_no} in room {room_no} is not available")]
    SeatUnavailable { room_no: i32, seat_no: String },

    #[error("No seat {seat_no} in room {room_no}")]
    SeatNotFound { room_no: i32, seat_no: String },

    #[error("invalid booking request: {0}")]
    InvalidRequest(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::SeatUnavailable { .. } => StatusCode::CONFLICT,
            AppError::SeatNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

// Клиенту отдаём текст ошибки как есть
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Store(ref e) = self {
            tracing::error!("store error: {:?}", e);
        }
        (self.status(), self.to_string()).into_response()
    }
}
