//! BookSeatHandler - Command handler for assigning a passenger to a seat.

use std::sync::Arc;

use crate::application::FlightRepository;
use crate::domain::flight::validation::{is_valid_dob_iso, is_valid_name};
use crate::domain::flight::{FlightError, Passenger, Seat};

/// Command to book a seat for a passenger.
#[derive(Debug, Clone)]
pub struct BookSeatCommand {
    pub flight_id: String,
    pub seat_number: String,
    pub first_name: String,
    pub last_name: String,
    /// `yyyy-MM-dd`
    pub date_of_birth: String,
}

/// Result of a successful booking.
#[derive(Debug, Clone)]
pub struct BookSeatResult {
    pub flight_id: String,
    pub seat: Seat,
}

/// Handler for booking seats.
pub struct BookSeatHandler {
    repository: Arc<FlightRepository>,
}

impl BookSeatHandler {
    pub fn new(repository: Arc<FlightRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: BookSeatCommand) -> Result<BookSeatResult, FlightError> {
        // 1. Validate passenger details
        if !is_valid_name(&cmd.first_name) {
            return Err(FlightError::validation(
                "first_name",
                "must contain only letters, spaces, hyphens and apostrophes",
            ));
        }
        if !is_valid_name(&cmd.last_name) {
            return Err(FlightError::validation(
                "last_name",
                "must contain only letters, spaces, hyphens and apostrophes",
            ));
        }
        let date_of_birth = cmd.date_of_birth.trim();
        if !is_valid_dob_iso(date_of_birth) {
            return Err(FlightError::validation(
                "date_of_birth",
                "must be a past date in yyyy-MM-dd format",
            ));
        }

        // 2. Book and persist
        let flight_id = cmd.flight_id.trim();
        let seat_number = cmd.seat_number.trim();
        let passenger = Passenger::new(&cmd.first_name, &cmd.last_name, date_of_birth);
        let seat = self
            .repository
            .book_seat(flight_id, seat_number, passenger)
            .await?;

        Ok(BookSeatResult {
            flight_id: flight_id.to_string(),
            seat,
        })
    }
}
