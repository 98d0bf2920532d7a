//! Flight aggregate entity.
//!
//! A flight owns its seats outright. Seats are kept in creation order,
//! which is also the order they are written to disk.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use super::Seat;
use crate::domain::foundation::{hash_key, keys_match, ValidationError};

/// Flight aggregate - a scheduled service and its seats.
///
/// # Invariants
///
/// - `id` is non-blank and never changes
/// - `flight_number` is non-blank
///
/// Seat numbers are not required to be unique; lookups return the first
/// match in creation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "FlightRecord")]
pub struct Flight {
    /// Stable identifier, e.g. "F001". Case-insensitive.
    id: String,

    /// Rider-facing number, e.g. "NU100".
    flight_number: String,

    seats: Vec<Seat>,
}

impl Flight {
    /// Create a flight with no seats.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if `id` or `flight_number` is blank
    pub fn new(
        id: impl AsRef<str>,
        flight_number: impl AsRef<str>,
    ) -> Result<Self, ValidationError> {
        Self::with_seats(id, flight_number, Vec::new())
    }

    /// Create a flight that starts out with `seats`.
    ///
    /// Both identifiers are trimmed.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if `id` or `flight_number` is blank
    pub fn with_seats(
        id: impl AsRef<str>,
        flight_number: impl AsRef<str>,
        seats: Vec<Seat>,
    ) -> Result<Self, ValidationError> {
        let id = id.as_ref().trim();
        if id.is_empty() {
            return Err(ValidationError::empty_field("id"));
        }
        let flight_number = Self::validate_flight_number(flight_number.as_ref())?;
        Ok(Self::reconstitute(id.to_string(), flight_number.to_string(), seats))
    }

    /// Rebuild a flight from trusted data (no validation).
    pub(crate) fn reconstitute(id: String, flight_number: String, seats: Vec<Seat>) -> Self {
        Self {
            id,
            flight_number,
            seats,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn flight_number(&self) -> &str {
        &self.flight_number
    }

    /// Seats in creation order.
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    pub fn booked_count(&self) -> usize {
        self.seats.iter().filter(|s| s.is_booked()).count()
    }

    pub fn available_count(&self) -> usize {
        self.seat_count() - self.booked_count()
    }

    /// Returns true if this flight is addressed by `id`, ignoring case.
    pub fn has_id(&self, id: &str) -> bool {
        keys_match(&self.id, id)
    }

    /// First seat addressed by `seat_number`, ignoring case.
    pub fn seat(&self, seat_number: &str) -> Option<&Seat> {
        self.seats.iter().find(|s| s.matches(seat_number))
    }

    pub fn seat_mut(&mut self, seat_number: &str) -> Option<&mut Seat> {
        self.seats.iter_mut().find(|s| s.matches(seat_number))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Change the rider-facing number. The number is trimmed.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the number is blank
    pub fn set_flight_number(
        &mut self,
        flight_number: impl AsRef<str>,
    ) -> Result<(), ValidationError> {
        let flight_number = Self::validate_flight_number(flight_number.as_ref())?;
        self.flight_number = flight_number.to_string();
        Ok(())
    }

    /// Append a seat. Passing `None` does nothing.
    pub fn add_seat(&mut self, seat: impl Into<Option<Seat>>) {
        if let Some(seat) = seat.into() {
            self.seats.push(seat);
        }
    }

    /// Remove the first seat addressed by `seat_number`.
    ///
    /// Returns false if no seat matched.
    pub fn remove_seat(&mut self, seat_number: &str) -> bool {
        match self.seats.iter().position(|s| s.matches(seat_number)) {
            Some(index) => {
                self.seats.remove(index);
                true
            }
            None => false,
        }
    }

    fn validate_flight_number(flight_number: &str) -> Result<&str, ValidationError> {
        let flight_number = flight_number.trim();
        if flight_number.is_empty() {
            return Err(ValidationError::empty_field("flight_number"));
        }
        Ok(flight_number)
    }
}

/// Deserialized shape of a [`Flight`], checked by [`Flight::with_seats`].
#[derive(Deserialize)]
struct FlightRecord {
    id: String,
    flight_number: String,
    #[serde(default)]
    seats: Vec<Seat>,
}

impl TryFrom<FlightRecord> for Flight {
    type Error = ValidationError;

    fn try_from(record: FlightRecord) -> Result<Self, Self::Error> {
        Flight::with_seats(record.id, record.flight_number, record.seats)
    }
}

impl PartialEq for Flight {
    fn eq(&self, other: &Self) -> bool {
        keys_match(&self.id, &other.id)
    }
}

impl Eq for Flight {}

impl Hash for Flight {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_key(&self.id, state);
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Flight{{id='{}', flightNumber='{}', seats={}}}",
            self.id,
            self.flight_number,
            self.seats.len()
        )
    }
}
