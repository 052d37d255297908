#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};

use movie_booking::models::{MovieRow, SeatBooking};
use movie_booking::store::MemoryStore;

pub fn show_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 15)
        .unwrap()
        .and_hms_opt(19, 30, 0)
        .unwrap()
}

pub fn seat(room_no: i32, seat_no: &str) -> SeatBooking {
    SeatBooking::new(room_no, seat_no, "Interstellar", show_time())
}

pub fn booked_seat(room_no: i32, seat_no: &str) -> SeatBooking {
    SeatBooking { booked: true, ..seat(room_no, seat_no) }
}

pub fn movie_rows() -> Vec<MovieRow> {
    vec![
        MovieRow {
            movie_name: "Interstellar".into(),
            about: "A team travels through a wormhole".into(),
            rating: 8.6,
            hours: 3,
            lang: "English, Hindi".into(),
            genre: "Sci-Fi, Drama".into(),
        },
        MovieRow {
            movie_name: "RRR".into(),
            about: "Two revolutionaries".into(),
            rating: 7.8,
            hours: 3,
            lang: "{Telugu,Tamil,Hindi}".into(),
            genre: "Action".into(),
        },
    ]
}

/// Room 1 seats A1..A5 and room 2 seats A1..A5, all free.
pub fn seeded_store() -> MemoryStore {
    let seats = (1..=2).flat_map(|room| (1..=5).map(move |n| seat(room, &format!("A{}", n))));
    MemoryStore::new().with_movies(movie_rows()).with_seats(seats)
}
