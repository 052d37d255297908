//! booking.rs
//!
//! Бронирование места в зале.
//!
//! The read-check-write sequence runs under one async mutex owned by the
//! service. The application state holds a single `BookingService`, so at most
//! one booking is in flight per process, whatever seat it targets. The read and
//! the write are separate store calls with no database transaction around them:
//! running several instances of the service against one database is not
//! supported.

use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::store::TheatreStore;

pub struct BookingService {
    store: Arc<dyn TheatreStore>,
    lock: Mutex<()>,
}

impl BookingService {
    pub fn new(store: Arc<dyn TheatreStore>) -> Self {
        Self {
            store,
            lock: Mutex::new(()),
        }
    }

    /// Books a free seat. Fails with `SeatNotFound` when the seat row does not
    /// exist and with `SeatUnavailable` when it is already booked.
    pub async fn book(&self, room_no: i32, seat_no: &str) -> Result<(), AppError> {
        let _guard = self.lock.lock().await;

        let booked = self
            .store
            .booking_flag(room_no, seat_no)
            .await?
            .ok_or_else(|| {
                warn!("No booking found for room {} seat {}", room_no, seat_no);
                AppError::SeatNotFound { room_no, seat_no: seat_no.to_string() }
            })?;

        if booked {
            warn!("Seat {} in room {} is already booked", seat_no, room_no);
            return Err(AppError::SeatUnavailable { room_no, seat_no: seat_no.to_string() });
        }

        // Условие booking_flag = false в самом UPDATE
        if !self.store.mark_booked(room_no, seat_no).await? {
            warn!("Seat {} in room {} was taken before the update", seat_no, room_no);
            return Err(AppError::SeatUnavailable { room_no, seat_no: seat_no.to_string() });
        }

        info!("Seat {} in room {} booked", seat_no, room_no);
        Ok(())
    }
}
