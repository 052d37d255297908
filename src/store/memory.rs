use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use super::{StoreError, TheatreStore};
use crate::models::{Movie, MovieRow, SeatBooking};

type SeatKey = (i32, String);

/// In-process store with the same row semantics as the `movies` and
/// `theatre` tables.
#[derive(Debug, Default)]
pub struct MemoryStore {
    movies: RwLock<Vec<MovieRow>>,
    seats: RwLock<BTreeMap<SeatKey, SeatBooking>>,
    offline: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_movies(self, movies: impl IntoIterator<Item = MovieRow>) -> Self {
        if let Ok(mut rows) = self.movies.write() {
            rows.extend(movies);
        }
        self
    }

    /// Adds seat rows. A later row for the same (room, seat) replaces the earlier one.
    pub fn with_seats(self, seats: impl IntoIterator<Item = SeatBooking>) -> Self {
        if let Ok(mut rows) = self.seats.write() {
            for seat in seats {
                rows.insert((seat.room_no, seat.seat_no.clone()), seat);
            }
        }
        self
    }

    /// While offline every operation fails with `StoreError::Unavailable`.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn seat(&self, room_no: i32, seat_no: &str) -> Option<SeatBooking> {
        self.seats
            .read()
            .ok()
            .and_then(|rows| rows.get(&(room_no, seat_no.to_string())).cloned())
    }

    pub fn seat_count(&self) -> usize {
        self.seats.read().map(|rows| rows.len()).unwrap_or_default()
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store is offline".to_string()));
        }
        Ok(())
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Unavailable("memory store lock poisoned".to_string())
}

#[async_trait]
impl TheatreStore for MemoryStore {
    async fn list_movies(&self) -> Result<Vec<Movie>, StoreError> {
        self.check_online()?;
        let rows = self.movies.read().map_err(poisoned)?;
        Ok(rows.iter().cloned().map(Movie::from).collect())
    }

    async fn list_theatre_bookings(&self) -> Result<Vec<SeatBooking>, StoreError> {
        self.check_online()?;
        let rows = self.seats.read().map_err(poisoned)?;
        Ok(rows.values().cloned().collect())
    }

    async fn booking_flag(&self, room_no: i32, seat_no: &str) -> Result<Option<bool>, StoreError> {
        self.check_online()?;
        let rows = self.seats.read().map_err(poisoned)?;
        Ok(rows.get(&(room_no, seat_no.to_string())).map(|seat| seat.booked))
    }

    async fn mark_booked(&self, room_no: i32, seat_no: &str) -> Result<bool, StoreError> {
        self.check_online()?;
        let mut rows = self.seats.write().map_err(poisoned)?;
        match rows.get_mut(&(room_no, seat_no.to_string())) {
            Some(seat) if !seat.booked => {
                seat.booked = true;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
