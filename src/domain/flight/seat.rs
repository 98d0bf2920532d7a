//! Seat entity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use super::Passenger;
use crate::domain::foundation::{hash_key, keys_match, SeatStatus, ValidationError};

/// A bookable seat on a flight, identified by a row+letter code such as "12A".
///
/// # Invariants
///
/// - `seat_number` is non-blank and trimmed
/// - `status` is `Booked` exactly when `passenger` is present
///
/// Equality and hashing only look at the seat number, ignoring case, so
/// a booked "12A" equals an empty "12a".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "SeatRecord")]
pub struct Seat {
    seat_number: String,
    status: SeatStatus,
    passenger: Option<Passenger>,
}

impl Seat {
    /// Create an available seat.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the seat number is blank
    pub fn new(seat_number: impl AsRef<str>) -> Result<Self, ValidationError> {
        Self::with_passenger(seat_number, None)
    }

    /// Create a seat, booked when a passenger is given.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the seat number is blank
    pub fn with_passenger(
        seat_number: impl AsRef<str>,
        passenger: Option<Passenger>,
    ) -> Result<Self, ValidationError> {
        let seat_number = seat_number.as_ref().trim();
        if seat_number.is_empty() {
            return Err(ValidationError::empty_field("seat_number"));
        }
        Ok(Self::reconstitute(seat_number.to_string(), passenger))
    }

    /// Build a seat from trusted data (no validation).
    pub(crate) fn reconstitute(seat_number: String, passenger: Option<Passenger>) -> Self {
        let status = match passenger {
            Some(_) => SeatStatus::Booked,
            None => SeatStatus::Available,
        };
        Self {
            seat_number,
            status,
            passenger,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn seat_number(&self) -> &str {
        &self.seat_number
    }

    pub fn status(&self) -> SeatStatus {
        self.status
    }

    pub fn passenger(&self) -> Option<&Passenger> {
        self.passenger.as_ref()
    }

    pub fn is_booked(&self) -> bool {
        self.status.is_booked()
    }

    /// Returns true if this seat is addressed by `seat_number`, ignoring case.
    pub fn matches(&self, seat_number: &str) -> bool {
        keys_match(&self.seat_number, seat_number)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Assign or clear the occupant. `Some` books the seat, `None` releases it.
    pub fn set_passenger(&mut self, passenger: Option<Passenger>) {
        self.status = match passenger {
            Some(_) => SeatStatus::Booked,
            None => SeatStatus::Available,
        };
        self.passenger = passenger;
    }

    /// Release the seat.
    pub fn clear_passenger(&mut self) {
        self.set_passenger(None);
    }

    /// Force the status.
    ///
    /// Setting `Available` drops any passenger. A seat only becomes
    /// `Booked` by receiving a passenger, so asking for `Booked` on an
    /// available seat is rejected.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` when booking without a passenger
    pub fn set_status(&mut self, status: SeatStatus) -> Result<(), ValidationError> {
        if status == self.status {
            return Ok(());
        }
        match status {
            SeatStatus::Available => {
                self.clear_passenger();
                Ok(())
            }
            SeatStatus::Booked => Err(ValidationError::invalid_format(
                "status",
                format!(
                    "seat {} can only be booked by assigning a passenger",
                    self.seat_number
                ),
            )),
        }
    }
}

/// Deserialized shape of a [`Seat`], checked by [`Seat::with_passenger`].
#[derive(Deserialize)]
struct SeatRecord {
    seat_number: String,
    #[serde(default)]
    status: Option<SeatStatus>,
    #[serde(default)]
    passenger: Option<Passenger>,
}

impl TryFrom<SeatRecord> for Seat {
    type Error = ValidationError;

    fn try_from(record: SeatRecord) -> Result<Self, Self::Error> {
        let seat = Seat::with_passenger(record.seat_number, record.passenger)?;
        match record.status {
            Some(status) if status != seat.status => Err(ValidationError::invalid_format(
                "status",
                format!(
                    "seat {} is {} but {}",
                    seat.seat_number,
                    status,
                    if seat.is_booked() { "has a passenger" } else { "has no passenger" }
                ),
            )),
            _ => Ok(seat),
        }
    }
}

impl PartialEq for Seat {
    fn eq(&self, other: &Self) -> bool {
        keys_match(&self.seat_number, &other.seat_number)
    }
}

impl Eq for Seat {}

impl Hash for Seat {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_key(&self.seat_number, state);
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.passenger {
            Some(p) => write!(
                f,
                "Seat{{{}, {}, {}}}",
                self.seat_number,
                self.status,
                p.full_name()
            ),
            None => write!(f, "Seat{{{}, {}}}", self.seat_number, self.status),
        }
    }
}
