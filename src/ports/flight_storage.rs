//! Flight Storage Port - Interface for persisting the flight collection.
//!
//! Storage always deals in the whole collection: reads return every
//! flight, writes replace everything previously stored.

use async_trait::async_trait;

use crate::domain::flight::Flight;

/// Errors that can occur while writing flights
#[derive(Debug, thiserror::Error)]
pub enum FlightStorageError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Port for loading and saving the full flight collection
#[async_trait]
pub trait FlightStorage: Send + Sync {
    /// Read every stored flight.
    ///
    /// Never fails: when nothing usable is stored, implementations return
    /// (and where possible persist) the built-in default flights.
    async fn read(&self) -> Vec<Flight>;

    /// Replace the stored collection with `flights`.
    ///
    /// # Errors
    /// Returns `FlightStorageError` if the write fails
    async fn write(&self, flights: &[Flight]) -> Result<(), FlightStorageError>;
}
