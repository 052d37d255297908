//! store
//!
//! Доступ к хранилищу: фильмы и места в залах.
//!
//! `TheatreStore` is the seam between the HTTP layer and persistence. The
//! production backend is [`Database`](crate::database::Database) (PostgreSQL);
//! [`MemoryStore`] keeps the same rows in process.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::models::{Movie, SeatBooking};

pub use memory::MemoryStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait TheatreStore: Send + Sync {
    /// All movies, with list columns parsed.
    async fn list_movies(&self) -> Result<Vec<Movie>, StoreError>;

    /// All seat rows, ordered by room and seat.
    async fn list_theatre_bookings(&self) -> Result<Vec<SeatBooking>, StoreError>;

    /// Current booking flag of a seat, `None` when no such seat exists.
    async fn booking_flag(&self, room_no: i32, seat_no: &str) -> Result<Option<bool>, StoreError>;

    /// Sets the booking flag if it is still unset. Returns whether a row changed.
    async fn mark_booked(&self, room_no: i32, seat_no: &str) -> Result<bool, StoreError>;
}
