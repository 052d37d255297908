mod common;

use async_trait::async_trait;
use futures::future::join_all;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use movie_booking::errors::AppError;
use movie_booking::models::{Movie, SeatBooking};
use movie_booking::services::BookingService;
use movie_booking::store::{MemoryStore, StoreError, TheatreStore};

use common::{booked_seat, seat, seeded_store};

// ── Helpers ──

/// Wraps a store and records how many booking calls overlap in time.
struct OverlapProbe {
    inner: MemoryStore,
    active: AtomicUsize,
    max_active: AtomicUsize,
}

impl OverlapProbe {
    fn new(inner: MemoryStore) -> Self {
        Self {
            inner,
            active: AtomicUsize::new(0),
            max_active: AtomicUsize::new(0),
        }
    }

    async fn track<T>(&self, fut: impl std::future::Future<Output = T>) -> T {
        let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_active.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(2)).await;
        let out = fut.await;
        self.active.fetch_sub(1, Ordering::SeqCst);
        out
    }
}

#[async_trait]
impl TheatreStore for OverlapProbe {
    async fn list_movies(&self) -> Result<Vec<Movie>, StoreError> {
        self.inner.list_movies().await
    }

    async fn list_theatre_bookings(&self) -> Result<Vec<SeatBooking>, StoreError> {
        self.inner.list_theatre_bookings().await
    }

    async fn booking_flag(&self, room_no: i32, seat_no: &str) -> Result<Option<bool>, StoreError> {
        self.track(self.inner.booking_flag(room_no, seat_no)).await
    }

    async fn mark_booked(&self, room_no: i32, seat_no: &str) -> Result<bool, StoreError> {
        self.track(self.inner.mark_booked(room_no, seat_no)).await
    }
}

fn service(store: Arc<MemoryStore>) -> BookingService {
    BookingService::new(store)
}

// ── Tests ──

#[tokio::test]
async fn booking_a_free_seat_marks_it_booked() {
    let store = Arc::new(seeded_store());
    let booking = service(store.clone());

    booking.book(1, "A1").await.expect("free seat should be bookable");

    assert!(store.seat(1, "A1").unwrap().booked);
    assert!(!store.seat(2, "A1").unwrap().booked, "same seat number in another room is untouched");
}

#[tokio::test]
async fn second_booking_of_the_same_seat_is_refused() {
    let store = Arc::new(seeded_store());
    let booking = service(store.clone());

    booking.book(1, "A2").await.unwrap();
    let before = store.seat(1, "A2").unwrap();

    let err = booking.book(1, "A2").await.unwrap_err();
    assert!(matches!(err, AppError::SeatUnavailable { room_no: 1, ref seat_no } if seat_no == "A2"));
    assert_eq!(store.seat(1, "A2").unwrap(), before);
}

#[tokio::test]
async fn already_booked_seat_from_the_store_is_refused() {
    let store = Arc::new(MemoryStore::new().with_seats([booked_seat(3, "C4")]));
    let booking = service(store);

    let err = booking.book(3, "C4").await.unwrap_err();
    assert_eq!(err.to_string(), "Seat C4 in room 3 is not available");
}

#[tokio::test]
async fn unknown_seat_is_not_found_and_creates_nothing() {
    let store = Arc::new(seeded_store());
    let count = store.seat_count();
    let booking = service(store.clone());

    let err = booking.book(9, "Z1").await.unwrap_err();

    assert!(matches!(err, AppError::SeatNotFound { room_no: 9, .. }));
    assert_eq!(store.seat_count(), count);
    assert!(store.seat(9, "Z1").is_none());
}

#[tokio::test]
async fn store_failure_is_reported_as_store_error() {
    let store = Arc::new(seeded_store());
    let booking = service(store.clone());
    store.set_offline(true);

    let err = booking.book(1, "A1").await.unwrap_err();
    assert!(matches!(err, AppError::Store(StoreError::Unavailable(_))));

    store.set_offline(false);
    assert!(!store.seat(1, "A1").unwrap().booked);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_bookings_of_one_seat_have_a_single_winner() {
    let store = Arc::new(MemoryStore::new().with_seats([seat(1, "A1")]));
    let booking = Arc::new(service(store.clone()));

    let attempts = (0..32).map(|_| {
        let booking = booking.clone();
        tokio::spawn(async move { booking.book(1, "A1").await })
    });
    let results: Vec<_> = join_all(attempts)
        .await
        .into_iter()
        .map(|joined| joined.expect("task panicked"))
        .collect();

    let winners = results.iter().filter(|r| r.is_ok()).count();
    let refused = results
        .iter()
        .filter(|r| matches!(r, Err(AppError::SeatUnavailable { .. })))
        .count();
    assert_eq!(winners, 1);
    assert_eq!(refused, 31);
    assert!(store.seat(1, "A1").unwrap().booked);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_bookings_of_distinct_seats_all_succeed() {
    let store = Arc::new(seeded_store());
    let booking = Arc::new(service(store.clone()));

    let attempts = (1..=2).flat_map(|room| (1..=5).map(move |n| (room, format!("A{}", n))));
    let handles = attempts.map(|(room, seat_no)| {
        let booking = booking.clone();
        tokio::spawn(async move { booking.book(room, &seat_no).await })
    });

    for joined in join_all(handles).await {
        joined.expect("task panicked").expect("distinct seats never conflict");
    }

    let seats = store.list_theatre_bookings().await.unwrap();
    assert_eq!(seats.len(), 10);
    assert!(seats.iter().all(|s| s.booked));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn bookings_never_overlap_in_the_store() {
    let probe = Arc::new(OverlapProbe::new(seeded_store()));
    let booking = Arc::new(BookingService::new(probe.clone()));

    let handles = (1..=5).map(|n| {
        let booking = booking.clone();
        tokio::spawn(async move { booking.book(2, &format!("A{}", n)).await })
    });
    for joined in join_all(handles).await {
        joined.unwrap().unwrap();
    }

    assert_eq!(probe.max_active.load(Ordering::SeqCst), 1);
}
