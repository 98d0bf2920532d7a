//! Flight module - the booking entity model.
//!
//! A [`Flight`] owns an ordered list of [`Seat`]s, and each seat owns at
//! most one [`Passenger`]. Flights and seats are identified by
//! case-insensitive keys (flight id, seat number).

mod aggregate;
mod errors;
mod passenger;
mod seat;
mod seat_grid;
pub mod validation;

pub use aggregate::Flight;
pub use errors::FlightError;
pub use passenger::Passenger;
pub use seat::Seat;
pub use seat_grid::{SeatGrid, MAX_SEATS_PER_FLIGHT};

pub(crate) use seat_grid::layout_seats;
