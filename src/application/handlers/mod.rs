//! Application handlers.
//!
//! Command handlers that validate clerk input before it reaches the repository.

pub mod flight;

pub use flight::{
    AddFlightCommand, AddFlightHandler, AddFlightResult,
    BookSeatCommand, BookSeatHandler, BookSeatResult,
    DeleteFlightCommand, DeleteFlightHandler,
    ReleaseSeatCommand, ReleaseSeatHandler,
};
