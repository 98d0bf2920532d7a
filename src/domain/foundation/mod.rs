//! Foundation module - Shared domain primitives.
//!
//! Contains the status enum, identity-key helpers and error types
//! that form the vocabulary of the seat booking domain.

mod errors;
mod identity_key;
mod seat_status;

pub use errors::{ErrorCode, ValidationError};
pub use identity_key::{hash_key, keys_match, normalized_key};
pub use seat_status::SeatStatus;
