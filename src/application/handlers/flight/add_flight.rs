//! AddFlightHandler - Command handler for creating flights from clerk input.

use std::sync::Arc;

use crate::application::FlightRepository;
use crate::domain::flight::validation::{
    is_valid_flight_id, is_valid_flight_number, is_valid_row_range, parse_seat_letters_unique,
    MAX_ROWS_PER_FLIGHT, MAX_SEAT_LETTERS,
};
use crate::domain::flight::{Flight, FlightError};

/// Command to create a flight with a full seat grid.
#[derive(Debug, Clone)]
pub struct AddFlightCommand {
    pub flight_id: String,
    pub flight_number: String,
    pub start_row: i64,
    pub end_row: i64,
    /// Seat letters as typed, e.g. "ABCDEF".
    pub seat_letters: String,
}

/// Result of successful flight creation.
#[derive(Debug, Clone)]
pub struct AddFlightResult {
    pub flight: Flight,
}

/// Handler for adding flights.
pub struct AddFlightHandler {
    repository: Arc<FlightRepository>,
}

impl AddFlightHandler {
    pub fn new(repository: Arc<FlightRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: AddFlightCommand) -> Result<AddFlightResult, FlightError> {
        // 1. Validate clerk input
        let flight_id = cmd.flight_id.trim();
        if !is_valid_flight_id(flight_id) {
            return Err(FlightError::validation(
                "flight_id",
                "must contain only letters, digits and dashes",
            ));
        }

        let flight_number = cmd.flight_number.trim();
        if !is_valid_flight_number(flight_number) {
            return Err(FlightError::validation(
                "flight_number",
                "must be NU followed by 1 to 4 digits",
            ));
        }

        if !is_valid_row_range(cmd.start_row, cmd.end_row) {
            return Err(FlightError::validation(
                "rows",
                format!(
                    "start must be at least 1, end at or after start, at most {} rows",
                    MAX_ROWS_PER_FLIGHT
                ),
            ));
        }
        let rows = (u32::try_from(cmd.start_row), u32::try_from(cmd.end_row));
        let (start_row, end_row) = match rows {
            (Ok(start), Ok(end)) => (start, end),
            _ => return Err(FlightError::validation("rows", "row number out of range")),
        };

        let letters = parse_seat_letters_unique(&cmd.seat_letters);
        if letters.is_empty() {
            return Err(FlightError::validation(
                "seat_letters",
                format!("must be 1 to {} distinct letters", MAX_SEAT_LETTERS),
            ));
        }

        // 2. Create and persist
        self.repository
            .add_flight(flight_id, flight_number, start_row, end_row, &letters)
            .await?;

        // 3. Hand back the stored flight
        let flight = self
            .repository
            .find_flight(flight_id)
            .await
            .ok_or_else(|| FlightError::flight_not_found(flight_id))?;

        Ok(AddFlightResult { flight })
    }
}
