//! Application layer - the flight repository and command handlers.
//!
//! The repository is the single owner of flight state; handlers sit in
//! front of it and apply the input rules a clerk must follow.

mod flight_repository;
pub mod handlers;

pub use flight_repository::FlightRepository;
pub use handlers::{
    AddFlightCommand, AddFlightHandler, AddFlightResult,
    BookSeatCommand, BookSeatHandler, BookSeatResult,
    DeleteFlightCommand, DeleteFlightHandler,
    ReleaseSeatCommand, ReleaseSeatHandler,
};
