//! In-Memory Flight Storage Adapter
//!
//! Keeps the flight collection in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::flat_file_codec::default_flights;
use crate::domain::flight::Flight;
use crate::ports::{FlightStorage, FlightStorageError};

/// In-memory storage for the flight collection
#[derive(Debug, Clone, Default)]
pub struct InMemoryFlightStorage {
    flights: Arc<RwLock<Option<Vec<Flight>>>>,
    fail_writes: Arc<AtomicBool>,
    writes: Arc<AtomicUsize>,
}

impl InMemoryFlightStorage {
    /// Create an empty storage; the first read yields the default flights
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage that already holds `flights`
    pub fn with_flights(flights: Vec<Flight>) -> Self {
        Self {
            flights: Arc::new(RwLock::new(Some(flights))),
            ..Self::default()
        }
    }

    /// Make subsequent writes fail (useful for tests)
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of what is currently stored
    pub async fn stored(&self) -> Option<Vec<Flight>> {
        self.flights.read().await.clone()
    }

    /// Number of successful writes
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FlightStorage for InMemoryFlightStorage {
    async fn read(&self) -> Vec<Flight> {
        let mut stored = self.flights.write().await;
        match stored.as_ref() {
            Some(flights) if !flights.is_empty() => flights.clone(),
            _ => {
                let defaults = default_flights();
                *stored = Some(defaults.clone());
                defaults
            }
        }
    }

    async fn write(&self, flights: &[Flight]) -> Result<(), FlightStorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(FlightStorageError::Unavailable(
                "simulated write failure".to_string(),
            ));
        }
        *self.flights.write().await = Some(flights.to_vec());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
