//! Integration tests for the flight repository over the flat file.
//!
//! These tests verify the end-to-end flow:
//! 1. Repository opens a file (or builds the default dataset)
//! 2. Handlers and repository calls mutate flights
//! 3. Every mutation rewrites the file
//! 4. A fresh repository over the same file sees the same state

use std::path::Path;
use std::sync::Arc;

use proptest::prelude::*;
use tempfile::TempDir;

use seat_booking::adapters::storage::flat_file_codec::HEADER;
use seat_booking::adapters::{FileFlightStorage, InMemoryFlightStorage};
use seat_booking::application::{
    AddFlightCommand, AddFlightHandler, BookSeatCommand, BookSeatHandler, DeleteFlightCommand,
    DeleteFlightHandler, FlightRepository, ReleaseSeatCommand, ReleaseSeatHandler,
};
use seat_booking::domain::flight::{FlightError, Passenger};
use seat_booking::domain::foundation::SeatStatus;
use seat_booking::ports::FlightStorage;

// =============================================================================
// Test Infrastructure
// =============================================================================

async fn open(path: &Path) -> FlightRepository {
    FlightRepository::open(Arc::new(FileFlightStorage::new(path))).await
}

fn john() -> Passenger {
    Passenger::new("John", "Doe", "1990-01-01")
}

// =============================================================================
// Default dataset
// =============================================================================

#[tokio::test]
async fn missing_file_yields_default_dataset_and_leaves_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("database.txt");

    let repository = open(&path).await;

    let flights = repository.list_flights().await;
    assert_eq!(flights.len(), 2);
    assert_eq!((flights[0].id(), flights[0].flight_number()), ("F001", "NU100"));
    assert_eq!((flights[1].id(), flights[1].flight_number()), ("F002", "NU245"));
    assert_eq!(flights[0].seat_count(), 30);
    assert_eq!(flights[1].seat_count(), 16);
    assert!(path.exists());
    assert!(std::fs::read_to_string(&path).unwrap().starts_with(HEADER));
}

#[tokio::test]
async fn malformed_file_yields_same_dataset_as_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.txt");
    let malformed = temp_dir.path().join("malformed.txt");
    std::fs::write(&malformed, "# comment\n\nnot,enough\nF9,NU9,1A,HALF_BOOKED,,,\n").unwrap();

    let from_missing = FileFlightStorage::new(&missing).read().await;
    let from_malformed = FileFlightStorage::new(&malformed).read().await;

    assert_eq!(from_missing.len(), from_malformed.len());
    for (a, b) in from_missing.iter().zip(&from_malformed) {
        assert_eq!(a.id(), b.id());
        assert_eq!(a.flight_number(), b.flight_number());
        let a_seats: Vec<_> = a.seats().iter().map(|s| s.seat_number()).collect();
        let b_seats: Vec<_> = b.seats().iter().map(|s| s.seat_number()).collect();
        assert_eq!(a_seats, b_seats);
    }
    assert_eq!(
        std::fs::read_to_string(&missing).unwrap(),
        std::fs::read_to_string(&malformed).unwrap()
    );
}

// =============================================================================
// Mutations with autosave
// =============================================================================

#[tokio::test]
async fn add_flight_example_and_duplicate() {
    let temp_dir = TempDir::new().unwrap();
    let repository = open(&temp_dir.path().join("db.txt")).await;

    repository
        .add_flight("T100", "NU100", 1, 3, &['A', 'B', 'C'])
        .await
        .unwrap();

    let flight = repository.find_flight("T100").await.unwrap();
    assert_eq!(flight.seat_count(), 9);
    for number in ["1A", "2B", "3C"] {
        assert!(flight.seat(number).is_some());
    }

    let size = repository.flight_count().await;
    let again = repository.add_flight("T100", "NU100", 1, 3, &['A', 'B', 'C']).await;
    assert_eq!(again, Err(FlightError::duplicate("T100")));
    assert_eq!(repository.flight_count().await, size);
}

#[tokio::test]
async fn padded_ids_are_trimmed_and_survive_reopening() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("db.txt");
    let repository = open(&path).await;
    repository.add_flight("T100", "NU100", 1, 1, &['A']).await.unwrap();

    let duplicate = repository.add_flight(" T100", "NU200", 1, 1, &['A']).await;
    assert_eq!(duplicate, Err(FlightError::duplicate("T100")));

    repository.add_flight(" T200 ", " NU200", 1, 1, &['A']).await.unwrap();

    let reopened = open(&path).await;
    let summary: Vec<_> = reopened
        .list_flights()
        .await
        .iter()
        .map(|f| (f.id().to_string(), f.flight_number().to_string(), f.seat_count()))
        .collect();
    assert_eq!(
        summary[2..],
        [
            ("T100".to_string(), "NU100".to_string(), 1),
            ("T200".to_string(), "NU200".to_string(), 1),
        ]
    );
}

#[tokio::test]
async fn book_then_release_restores_seat() {
    let repository = FlightRepository::open(Arc::new(InMemoryFlightStorage::new())).await;
    repository.add_flight("T001", "NU1", 1, 1, &['A']).await.unwrap();

    repository.book_seat("T001", "1A", john()).await.unwrap();
    assert_eq!(
        repository.seats_for("T001").await[0].status(),
        SeatStatus::Booked
    );

    repository.release_seat("T001", "1A").await.unwrap();
    let seats = repository.seats_for("T001").await;
    assert_eq!(seats[0].status(), SeatStatus::Available);
    assert!(seats[0].passenger().is_none());
}

#[tokio::test]
async fn every_mutation_is_visible_to_a_fresh_repository() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("db.txt");
    let repository = Arc::new(open(&path).await);

    AddFlightHandler::new(repository.clone())
        .handle(AddFlightCommand {
            flight_id: "INTL-01".to_string(),
            flight_number: "NU310".to_string(),
            start_row: 10,
            end_row: 11,
            seat_letters: "ab".to_string(),
        })
        .await
        .unwrap();
    BookSeatHandler::new(repository.clone())
        .handle(BookSeatCommand {
            flight_id: "INTL-01".to_string(),
            seat_number: "11b".to_string(),
            first_name: "José María".to_string(),
            last_name: "O'Connor".to_string(),
            date_of_birth: "1975-03-09".to_string(),
        })
        .await
        .unwrap();
    BookSeatHandler::new(repository.clone())
        .handle(BookSeatCommand {
            flight_id: "F001".to_string(),
            seat_number: "1A".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            date_of_birth: "1990-01-01".to_string(),
        })
        .await
        .unwrap();
    ReleaseSeatHandler::new(repository.clone())
        .handle(ReleaseSeatCommand {
            flight_id: "F001".to_string(),
            seat_number: "1A".to_string(),
        })
        .await
        .unwrap();
    DeleteFlightHandler::new(repository.clone())
        .handle(DeleteFlightCommand {
            flight_id: "F002".to_string(),
        })
        .await
        .unwrap();

    let reopened = open(&path).await;
    let flights = reopened.list_flights().await;
    let ids: Vec<_> = flights.iter().map(|f| f.id()).collect();
    assert_eq!(ids, vec!["F001", "INTL-01"]);

    let intl = reopened.find_flight("intl-01").await.unwrap();
    assert_eq!(intl.flight_number(), "NU310");
    let numbers: Vec<_> = intl.seats().iter().map(|s| s.seat_number()).collect();
    assert_eq!(numbers, vec!["10A", "10B", "11A", "11B"]);
    let booked = intl.seat("11B").unwrap();
    assert_eq!(booked.passenger(), Some(&Passenger::new("José María", "O'Connor", "1975-03-09")));

    assert_eq!(reopened.find_flight("F001").await.unwrap().booked_count(), 0);
}

#[tokio::test]
async fn persistence_round_trip_preserves_every_field() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("db.txt");
    let repository = open(&path).await;
    repository.book_seat("F002", "3C", john()).await.unwrap();
    let before = repository.list_flights().await;

    let after = FileFlightStorage::new(&path).read().await;

    assert_eq!(before.len(), after.len());
    for (a, b) in before.iter().zip(&after) {
        assert_eq!(a.id(), b.id());
        assert_eq!(a.flight_number(), b.flight_number());
        assert_eq!(a.seat_count(), b.seat_count());
        for (sa, sb) in a.seats().iter().zip(b.seats()) {
            assert_eq!(sa.seat_number(), sb.seat_number());
            assert_eq!(sa.status(), sb.status());
            assert_eq!(sa.passenger(), sb.passenger());
        }
    }
}

#[tokio::test]
async fn unwritable_path_keeps_changes_in_memory() {
    let temp_dir = TempDir::new().unwrap();
    // A directory cannot be written as a file.
    let repository = open(temp_dir.path()).await;
    assert_eq!(repository.flight_count().await, 2);

    assert!(repository.book_seat("F001", "2B", john()).await.is_ok());
    assert!(matches!(
        repository.add_flight("T5", "NU5", 1, 1, &['A']).await,
        Err(FlightError::Storage(_))
    ));

    assert_eq!(repository.flight_count().await, 3);
    assert_eq!(repository.find_flight("F001").await.unwrap().booked_count(), 1);
    assert!(matches!(repository.save().await, Err(FlightError::Storage(_))));
}

#[tokio::test]
async fn concurrent_bookings_are_all_saved() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("db.txt");
    let repository = Arc::new(open(&path).await);

    let mut tasks = Vec::new();
    for row in 1..=5 {
        let repository = repository.clone();
        tasks.push(tokio::spawn(async move {
            repository
                .book_seat("F001", &format!("{row}A"), john())
                .await
        }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let reopened = open(&path).await;
    assert_eq!(reopened.find_flight("F001").await.unwrap().booked_count(), 5);
}

// =============================================================================
// Seat grid property
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn add_flight_creates_one_seat_per_row_and_letter(
        start in 1u32..20,
        span in 0u32..10,
        letters in proptest::sample::subsequence(vec!['A', 'B', 'C', 'D', 'E', 'F'], 1..=6),
    ) {
        let end = start + span;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let flight = runtime.block_on(async {
            let repository = FlightRepository::open(Arc::new(InMemoryFlightStorage::new())).await;
            repository.add_flight("P1", "NU1", start, end, &letters).await.unwrap();
            repository.find_flight("P1").await.unwrap()
        });

        prop_assert_eq!(flight.seat_count(), (span as usize + 1) * letters.len());
        for row in start..=end {
            for letter in &letters {
                let number = format!("{}{}", row, letter.to_ascii_lowercase());
                prop_assert!(flight.seat(&number).is_some());
            }
        }
    }
}
