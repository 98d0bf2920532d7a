//! ReleaseSeatHandler - Command handler for freeing a booked seat.

use std::sync::Arc;

use crate::application::FlightRepository;
use crate::domain::flight::FlightError;

/// Command to release a seat.
#[derive(Debug, Clone)]
pub struct ReleaseSeatCommand {
    pub flight_id: String,
    pub seat_number: String,
}

/// Handler for releasing seats.
pub struct ReleaseSeatHandler {
    repository: Arc<FlightRepository>,
}

impl ReleaseSeatHandler {
    pub fn new(repository: Arc<FlightRepository>) -> Self {
        Self { repository }
    }

    /// Releasing an already available seat succeeds and still autosaves.
    pub async fn handle(&self, cmd: ReleaseSeatCommand) -> Result<(), FlightError> {
        self.repository
            .release_seat(cmd.flight_id.trim(), cmd.seat_number.trim())
            .await?;
        Ok(())
    }
}
