//! Flight-specific error types.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};

/// Outcome of a failed repository or handler operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlightError {
    /// No flight with the given id.
    #[error("Flight not found: {0}")]
    FlightNotFound(String),

    /// The flight exists but has no such seat.
    #[error("Seat {seat_number} not found on flight {flight_id}")]
    SeatNotFound {
        flight_id: String,
        seat_number: String,
    },

    /// Another flight already uses this id.
    #[error("Flight already exists: {0}")]
    DuplicateFlight(String),

    /// Input failed a validation rule.
    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    /// Writing to storage failed. In-memory state was kept.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl FlightError {
    pub fn flight_not_found(flight_id: impl Into<String>) -> Self {
        FlightError::FlightNotFound(flight_id.into())
    }

    pub fn seat_not_found(flight_id: impl Into<String>, seat_number: impl Into<String>) -> Self {
        FlightError::SeatNotFound {
            flight_id: flight_id.into(),
            seat_number: seat_number.into(),
        }
    }

    pub fn duplicate(flight_id: impl Into<String>) -> Self {
        FlightError::DuplicateFlight(flight_id.into())
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        FlightError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        FlightError::Storage(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            FlightError::FlightNotFound(_) => ErrorCode::FlightNotFound,
            FlightError::SeatNotFound { .. } => ErrorCode::SeatNotFound,
            FlightError::DuplicateFlight(_) => ErrorCode::DuplicateFlight,
            FlightError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            FlightError::Storage(_) => ErrorCode::StorageError,
        }
    }

    /// Returns true for errors caused by the caller's input.
    pub fn is_validation(&self) -> bool {
        matches!(self, FlightError::ValidationFailed { .. })
    }
}

impl From<ValidationError> for FlightError {
    fn from(err: ValidationError) -> Self {
        FlightError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}
