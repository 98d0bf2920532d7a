//! Flight command handlers.

mod add_flight;
mod book_seat;
mod delete_flight;
mod release_seat;

pub use add_flight::{AddFlightCommand, AddFlightHandler, AddFlightResult};
pub use book_seat::{BookSeatCommand, BookSeatHandler, BookSeatResult};
pub use delete_flight::{DeleteFlightCommand, DeleteFlightHandler};
pub use release_seat::{ReleaseSeatCommand, ReleaseSeatHandler};
