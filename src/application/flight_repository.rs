//! FlightRepository - the in-memory authority over all flights.
//!
//! The repository owns the flight collection and is the only component
//! that talks to [`FlightStorage`]. Every mutation is followed by a full
//! rewrite of the collection (autosave) before the lock is released.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::domain::flight::{Flight, FlightError, Passenger, Seat, SeatGrid};
use crate::ports::FlightStorage;

/// Owns the flight collection and persists it after each change.
///
/// All reads and writes go through one mutex, so a mutation and its
/// autosave are never interleaved with another call.
pub struct FlightRepository {
    storage: Arc<dyn FlightStorage>,
    flights: Mutex<Vec<Flight>>,
}

impl FlightRepository {
    /// Create an empty repository. Call [`load`](Self::load) to populate it.
    pub fn new(storage: Arc<dyn FlightStorage>) -> Self {
        Self {
            storage,
            flights: Mutex::new(Vec::new()),
        }
    }

    /// Create a repository and load it from storage.
    pub async fn open(storage: Arc<dyn FlightStorage>) -> Self {
        let repository = Self::new(storage);
        repository.load().await;
        repository
    }

    /// Replace everything in memory with a fresh read from storage.
    pub async fn load(&self) {
        let mut flights = self.flights.lock().await;
        *flights = self.storage.read().await;
        info!(flights = flights.len(), "Flight repository loaded");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Snapshot of all flights in stored order.
    pub async fn list_flights(&self) -> Vec<Flight> {
        self.flights.lock().await.clone()
    }

    pub async fn flight_count(&self) -> usize {
        self.flights.lock().await.len()
    }

    /// Snapshot of the flight with `flight_id`, ignoring case.
    pub async fn find_flight(&self, flight_id: &str) -> Option<Flight> {
        let flights = self.flights.lock().await;
        find(&flights, flight_id).cloned()
    }

    /// Seats of the flight with `flight_id`, or an empty list if there is none.
    pub async fn seats_for(&self, flight_id: &str) -> Vec<Seat> {
        let flights = self.flights.lock().await;
        find(&flights, flight_id)
            .map(|f| f.seats().to_vec())
            .unwrap_or_default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Book (`Some`) or release (`None`) a seat, then autosave.
    ///
    /// Succeeds once the seat is found and returns the seat as it was left
    /// by this call. A failed autosave is logged and the change stays in
    /// memory.
    ///
    /// # Errors
    ///
    /// - `FlightNotFound` / `SeatNotFound` if the lookup fails; nothing changes
    pub async fn update_seat(
        &self,
        flight_id: &str,
        seat_number: &str,
        passenger: Option<Passenger>,
    ) -> Result<Seat, FlightError> {
        let mut flights = self.flights.lock().await;

        let flight = flights
            .iter_mut()
            .find(|f| f.has_id(flight_id))
            .ok_or_else(|| FlightError::flight_not_found(flight_id))?;
        let seat = flight
            .seat_mut(seat_number)
            .ok_or_else(|| FlightError::seat_not_found(flight_id, seat_number))?;

        seat.set_passenger(passenger);
        let updated = seat.clone();
        debug!(flight_id, seat_number, status = %updated.status(), "Seat updated");

        if self.persist(&flights).await.is_err() {
            warn!(flight_id, seat_number, "Seat change kept in memory but not saved");
        }
        Ok(updated)
    }

    /// Assign `passenger` to a seat.
    pub async fn book_seat(
        &self,
        flight_id: &str,
        seat_number: &str,
        passenger: Passenger,
    ) -> Result<Seat, FlightError> {
        self.update_seat(flight_id, seat_number, Some(passenger)).await
    }

    /// Clear a seat's passenger.
    pub async fn release_seat(
        &self,
        flight_id: &str,
        seat_number: &str,
    ) -> Result<Seat, FlightError> {
        self.update_seat(flight_id, seat_number, None).await
    }

    /// Create a flight with one available seat per (row, letter), then autosave.
    ///
    /// Identifiers are trimmed. Seat numbers are `{row}{LETTER}`, rows
    /// inclusive. The new flight is kept in memory even if the autosave fails.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` for a blank id/number, bad row range, no letters,
    ///   a letter outside A-Z, or more than 5000 seats
    /// - `DuplicateFlight` if the id is taken (ignoring case)
    /// - `Storage` if the autosave fails
    pub async fn add_flight(
        &self,
        flight_id: &str,
        flight_number: &str,
        start_row: u32,
        end_row: u32,
        seat_letters: &[char],
    ) -> Result<(), FlightError> {
        let mut flights = self.flights.lock().await;

        let mut flight = Flight::new(flight_id, flight_number)?;
        if find(&flights, flight.id()).is_some() {
            return Err(FlightError::duplicate(flight.id()));
        }
        let grid = SeatGrid::new(start_row, end_row, seat_letters)?;
        for seat in grid.build_seats() {
            flight.add_seat(seat);
        }

        info!(
            flight_id = flight.id(),
            flight_number = flight.flight_number(),
            seats = flight.seat_count(),
            "Flight added"
        );
        flights.push(flight);
        self.persist(&flights).await
    }

    /// Remove a flight and all its seats, then autosave.
    ///
    /// # Errors
    ///
    /// - `FlightNotFound` if no flight matches; nothing changes
    /// - `Storage` if the autosave fails (the flight stays removed)
    pub async fn delete_flight(&self, flight_id: &str) -> Result<(), FlightError> {
        let mut flights = self.flights.lock().await;

        let index = flights
            .iter()
            .position(|f| f.has_id(flight_id))
            .ok_or_else(|| FlightError::flight_not_found(flight_id))?;
        let removed = flights.remove(index);

        info!(flight_id = removed.id(), "Flight deleted");
        self.persist(&flights).await
    }

    /// Write the full collection to storage.
    ///
    /// # Errors
    ///
    /// - `Storage` if the write fails; memory is unchanged either way
    pub async fn save(&self) -> Result<(), FlightError> {
        let flights = self.flights.lock().await;
        self.persist(&flights).await
    }

    async fn persist(&self, flights: &[Flight]) -> Result<(), FlightError> {
        self.storage.write(flights).await.map_err(|e| {
            error!("Save failed: {}", e);
            FlightError::storage(e.to_string())
        })
    }
}

fn find<'a>(flights: &'a [Flight], flight_id: &str) -> Option<&'a Flight> {
    flights.iter().find(|f| f.has_id(flight_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryFlightStorage;
    use crate::domain::foundation::SeatStatus;

    async fn repository() -> (FlightRepository, InMemoryFlightStorage) {
        let storage = InMemoryFlightStorage::new();
        let repository = FlightRepository::open(Arc::new(storage.clone())).await;
        (repository, storage)
    }

    fn john() -> Passenger {
        Passenger::new("John", "Doe", "1990-01-01")
    }

    #[tokio::test]
    async fn open_loads_default_flights() {
        let (repository, _) = repository().await;
        assert_eq!(repository.flight_count().await, 2);
        assert_eq!(repository.seats_for("F001").await.len(), 30);
    }

    #[tokio::test]
    async fn new_repository_is_empty_until_loaded() {
        let repository = FlightRepository::new(Arc::new(InMemoryFlightStorage::new()));
        assert_eq!(repository.flight_count().await, 0);
        repository.load().await;
        assert_eq!(repository.flight_count().await, 2);
    }

    #[tokio::test]
    async fn seats_for_unknown_flight_is_empty() {
        let (repository, _) = repository().await;
        assert!(repository.seats_for("NOPE").await.is_empty());
    }

    #[tokio::test]
    async fn lookups_ignore_case() {
        let (repository, _) = repository().await;
        assert_eq!(repository.seats_for("f002").await.len(), 16);
        assert!(repository.find_flight("f001").await.is_some());
    }

    #[tokio::test]
    async fn book_and_release_round_trip() {
        let (repository, storage) = repository().await;

        repository.book_seat("F001", "1a", john()).await.unwrap();
        let flight = repository.find_flight("F001").await.unwrap();
        assert_eq!(flight.seat("1A").unwrap().status(), SeatStatus::Booked);
        assert_eq!(storage.write_count(), 1);

        repository.release_seat("F001", "1A").await.unwrap();
        let flight = repository.find_flight("F001").await.unwrap();
        let seat = flight.seat("1A").unwrap();
        assert_eq!(seat.status(), SeatStatus::Available);
        assert!(seat.passenger().is_none());
        assert_eq!(storage.write_count(), 2);
    }

    #[tokio::test]
    async fn update_seat_reports_missing_flight_or_seat() {
        let (repository, storage) = repository().await;

        assert_eq!(
            repository.book_seat("F999", "1A", john()).await,
            Err(FlightError::flight_not_found("F999"))
        );
        assert_eq!(
            repository.book_seat("F001", "99Z", john()).await,
            Err(FlightError::seat_not_found("F001", "99Z"))
        );
        assert_eq!(storage.write_count(), 0);
    }

    #[tokio::test]
    async fn update_seat_keeps_change_when_autosave_fails() {
        let (repository, storage) = repository().await;
        storage.set_fail_writes(true);

        let result = repository.book_seat("F001", "1A", john()).await;

        assert!(result.is_ok());
        let seats = repository.seats_for("F001").await;
        assert!(seats[0].is_booked());
    }

    #[tokio::test]
    async fn add_flight_builds_grid_and_saves() {
        let (repository, storage) = repository().await;

        repository
            .add_flight("T100", "NU100", 1, 3, &['a', 'b', 'c'])
            .await
            .unwrap();

        let flight = repository.find_flight("T100").await.unwrap();
        assert_eq!(flight.seat_count(), 9);
        for number in ["1A", "2B", "3C"] {
            assert!(flight.seat(number).is_some(), "missing seat {number}");
        }
        let stored = storage.stored().await.unwrap();
        assert_eq!(stored.len(), 3);
    }

    #[tokio::test]
    async fn add_flight_rejects_duplicates_ignoring_case() {
        let (repository, _) = repository().await;
        repository.add_flight("T100", "NU100", 1, 3, &['A', 'B', 'C']).await.unwrap();
        let before = repository.flight_count().await;

        let result = repository.add_flight("t100", "NU101", 1, 1, &['A']).await;

        assert_eq!(result, Err(FlightError::duplicate("t100")));
        assert_eq!(repository.flight_count().await, before);
    }

    #[tokio::test]
    async fn update_seat_returns_seat_as_left() {
        let (repository, _) = repository().await;

        let booked = repository.book_seat("F001", "2b", john()).await.unwrap();
        assert_eq!(booked.seat_number(), "2B");
        assert_eq!(booked.passenger(), Some(&john()));

        let released = repository.release_seat("F001", "2B").await.unwrap();
        assert_eq!(released.status(), SeatStatus::Available);
        assert!(released.passenger().is_none());
    }

    #[tokio::test]
    async fn add_flight_trims_identifiers_before_duplicate_check() {
        let (repository, storage) = repository().await;
        repository.add_flight("T100", "NU100", 1, 1, &['A']).await.unwrap();

        let result = repository.add_flight(" T100 ", "NU200", 1, 1, &['A']).await;

        assert_eq!(result, Err(FlightError::duplicate("T100")));
        assert_eq!(repository.flight_count().await, 3);

        repository.add_flight("  T200", " NU200 ", 1, 1, &['A']).await.unwrap();
        let stored = storage.stored().await.unwrap();
        let added = stored.iter().find(|f| f.has_id("T200")).unwrap();
        assert_eq!(added.id(), "T200");
        assert_eq!(added.flight_number(), "NU200");
    }

    #[tokio::test]
    async fn add_flight_rejects_delimiter_as_seat_letter() {
        let (repository, storage) = repository().await;

        let result = repository.add_flight("T100", "NU100", 1, 1, &[',']).await;

        match result {
            Err(FlightError::ValidationFailed { field, .. }) => assert_eq!(field, "seat_letters"),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(repository.find_flight("T100").await.is_none());
        assert_eq!(storage.write_count(), 0);
    }

    #[tokio::test]
    async fn add_flight_rejects_invalid_input() {
        let (repository, storage) = repository().await;
        let ab = ['A', 'B'];
        let six = ['A', 'B', 'C', 'D', 'E', 'F'];

        for result in [
            repository.add_flight("", "NU100", 1, 3, &ab).await,
            repository.add_flight("T100", " ", 1, 3, &ab).await,
            repository.add_flight("T100", "NU100", 0, 3, &ab).await,
            repository.add_flight("T100", "NU100", 3, 1, &ab).await,
            repository.add_flight("T100", "NU100", 1, 3, &[]).await,
            repository.add_flight("T100", "NU100", 1, 1000, &six).await,
        ] {
            assert!(matches!(result, Err(FlightError::ValidationFailed { .. })), "{result:?}");
        }
        assert_eq!(repository.flight_count().await, 2);
        assert_eq!(storage.write_count(), 0);
    }

    #[tokio::test]
    async fn add_flight_reports_failed_save_but_keeps_flight() {
        let (repository, storage) = repository().await;
        storage.set_fail_writes(true);

        let result = repository.add_flight("T100", "NU100", 1, 1, &['A']).await;

        assert!(matches!(result, Err(FlightError::Storage(_))));
        assert!(repository.find_flight("T100").await.is_some());
    }

    #[tokio::test]
    async fn delete_flight_removes_and_saves() {
        let (repository, storage) = repository().await;

        repository.delete_flight("f001").await.unwrap();

        assert_eq!(repository.flight_count().await, 1);
        assert!(repository.find_flight("F001").await.is_none());
        assert_eq!(storage.stored().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_unknown_flight_is_not_found() {
        let (repository, storage) = repository().await;

        let result = repository.delete_flight("NONEXISTENT").await;

        assert_eq!(result, Err(FlightError::flight_not_found("NONEXISTENT")));
        assert_eq!(repository.flight_count().await, 2);
        assert_eq!(storage.write_count(), 0);
    }

    #[tokio::test]
    async fn save_reports_failure_without_touching_memory() {
        let (repository, storage) = repository().await;
        storage.set_fail_writes(true);

        assert!(matches!(repository.save().await, Err(FlightError::Storage(_))));
        assert_eq!(repository.flight_count().await, 2);

        storage.set_fail_writes(false);
        assert!(repository.save().await.is_ok());
    }

    #[tokio::test]
    async fn load_discards_unsaved_state() {
        let (repository, storage) = repository().await;
        storage.set_fail_writes(true);
        repository.book_seat("F001", "1A", john()).await.unwrap();

        repository.load().await;

        assert!(!repository.seats_for("F001").await[0].is_booked());
    }

    #[tokio::test]
    async fn list_flights_is_a_snapshot() {
        let (repository, _) = repository().await;
        let mut snapshot = repository.list_flights().await;
        snapshot.clear();
        assert_eq!(repository.flight_count().await, 2);
    }
}
