//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `FlightStorage` - Whole-collection read/write of flights

mod flight_storage;

pub use flight_storage::{FlightStorage, FlightStorageError};
