use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One seat of a showing. A row exists per (room_no, seat_no) and only its
/// booking flag ever changes.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SeatBooking {
    pub room_no: i32,
    pub seat_no: String,
    #[sqlx(rename = "booking_flag")]
    #[serde(rename = "BookingFlag")]
    pub booked: bool,
    pub movie_name: String,
    pub movie_time: NaiveDateTime,
}

impl SeatBooking {
    pub fn new(room_no: i32, seat_no: impl Into<String>, movie_name: impl Into<String>, movie_time: NaiveDateTime) -> Self {
        Self {
            room_no,
            seat_no: seat_no.into(),
            booked: false,
            movie_name: movie_name.into(),
            movie_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn serializes_with_wire_keys() {
        let time = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(18, 30, 0)
            .unwrap();
        let seat = SeatBooking::new(1, "A1", "Dune", time);
        let json = serde_json::to_value(&seat).unwrap();
        assert_eq!(json["RoomNo"], 1);
        assert_eq!(json["SeatNo"], "A1");
        assert_eq!(json["BookingFlag"], false);
        assert_eq!(json["MovieName"], "Dune");
        assert_eq!(json["MovieTime"], "2024-05-01T18:30:00");
    }
}
