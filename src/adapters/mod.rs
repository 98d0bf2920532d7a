//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Flight storage implementations (flat file, in-memory)

pub mod storage;

pub use storage::{FileFlightStorage, InMemoryFlightStorage};
