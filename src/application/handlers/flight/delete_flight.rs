//! DeleteFlightHandler - Command handler for removing flights.

use std::sync::Arc;

use crate::application::FlightRepository;
use crate::domain::flight::FlightError;

/// Command to delete a flight and all its seats.
#[derive(Debug, Clone)]
pub struct DeleteFlightCommand {
    pub flight_id: String,
}

/// Handler for deleting flights.
pub struct DeleteFlightHandler {
    repository: Arc<FlightRepository>,
}

impl DeleteFlightHandler {
    pub fn new(repository: Arc<FlightRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteFlightCommand) -> Result<(), FlightError> {
        let flight_id = cmd.flight_id.trim();
        if flight_id.is_empty() {
            return Err(FlightError::validation("flight_id", "cannot be empty"));
        }

        self.repository.delete_flight(flight_id).await
    }
}
