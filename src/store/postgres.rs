use async_trait::async_trait;

use super::{StoreError, TheatreStore};
use crate::database::Database;
use crate::models::{Movie, MovieRow, SeatBooking};

#[async_trait]
impl TheatreStore for Database {
    async fn list_movies(&self) -> Result<Vec<Movie>, StoreError> {
        // Приводим типы: колонки могут быть REAL/INT или TEXT[]
        let rows = sqlx::query_as::<_, MovieRow>(
            "SELECT movie_name, about, rating::float8 AS rating, hours::bigint AS hours,
                    lang::text AS lang, genre::text AS genre
             FROM movies"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn list_theatre_bookings(&self) -> Result<Vec<SeatBooking>, StoreError> {
        let seats = sqlx::query_as::<_, SeatBooking>(
            "SELECT room_no, seat_no, booking_flag, movie_name, movie_time
             FROM theatre
             ORDER BY room_no, seat_no"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(seats)
    }

    async fn booking_flag(&self, room_no: i32, seat_no: &str) -> Result<Option<bool>, StoreError> {
        let flag = sqlx::query_scalar::<_, bool>(
            "SELECT booking_flag FROM theatre WHERE room_no = $1 AND seat_no = $2"
        )
        .bind(room_no)
        .bind(seat_no)
        .fetch_optional(&self.pool)
        .await?;

        Ok(flag)
    }

    async fn mark_booked(&self, room_no: i32, seat_no: &str) -> Result<bool, StoreError> {
        let updated = sqlx::query(
            "UPDATE theatre
             SET booking_flag = true
             WHERE room_no = $1 AND seat_no = $2 AND booking_flag = false"
        )
        .bind(room_no)
        .bind(seat_no)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated > 0)
    }
}
