//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (status enum, identity keys, errors)
//! - `flight` - Flight, seat and passenger entities, seat grids and input rules

pub mod flight;
pub mod foundation;
