pub mod movie;
pub mod theatre;

pub use movie::{parse_list, Movie, MovieRow};
pub use theatre::SeatBooking;
