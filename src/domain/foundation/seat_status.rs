//! SeatStatus enum for tracking whether a seat is taken.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Booking status of a single seat.
///
/// A seat is `Booked` exactly when it holds a passenger. The two states
/// are always reachable from each other and neither is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatStatus {
    #[default]
    Available,
    Booked,
}

impl SeatStatus {
    /// Returns true if the seat is taken.
    pub fn is_booked(&self) -> bool {
        matches!(self, SeatStatus::Booked)
    }

    /// Name used in the flat-file format.
    pub fn as_str(&self) -> &'static str {
        match self {
            SeatStatus::Available => "AVAILABLE",
            SeatStatus::Booked => "BOOKED",
        }
    }

    /// Validates a transition from this status to another.
    ///
    /// Valid transitions:
    /// - Available -> Booked
    /// - Booked -> Available
    pub fn can_transition_to(&self, target: &SeatStatus) -> bool {
        use SeatStatus::*;
        matches!((self, target), (Available, Booked) | (Booked, Available))
    }
}

impl fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SeatStatus {
    type Err = ValidationError;

    /// Parses a status name, ignoring surrounding whitespace and case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "AVAILABLE" => Ok(SeatStatus::Available),
            "BOOKED" => Ok(SeatStatus::Booked),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("unknown seat status '{}'", other),
            )),
        }
    }
}
