//! Seat Booking - flight seat reservations over a flat file
//!
//! Flights own seats, seats own at most one passenger. A single
//! [`application::FlightRepository`] holds every flight in memory and
//! rewrites the backing file after each change.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
