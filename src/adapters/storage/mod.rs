//! Storage Adapters
//!
//! Implementations of the FlightStorage port for persisting flights.
//!
//! ## Available Adapters
//!
//! - **FileFlightStorage** - Stores flights in a flat comma-separated text file
//! - **InMemoryFlightStorage** - Stores flights in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileFlightStorage, InMemoryFlightStorage};
//!
//! // Production: file-based storage
//! let storage = FileFlightStorage::new("database.txt");
//!
//! // Testing: in-memory storage
//! let storage = InMemoryFlightStorage::new();
//! ```

pub mod flat_file_codec;
mod file_flight_storage;
mod in_memory_flight_storage;

pub use file_flight_storage::FileFlightStorage;
pub use in_memory_flight_storage::InMemoryFlightStorage;
