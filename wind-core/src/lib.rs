//! Core library for the `wind` CLI.
//!
//! This crate defines:
//! - The clock capability and the NASA POWER hour key derived from it
//! - The wind provider abstraction and its NASA POWER implementation
//! - Shared domain models (coordinates, readings, fetch outcomes)
//! - Configuration handling
//!
//! It is used by `wind-cli`, but can also be reused by other binaries or services.

pub mod clock;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use error::WindError;
pub use model::{Coordinate, HourTimestamp, WindOutcome, WindReading};
pub use provider::{WindProvider, nasa_power::NasaPowerProvider, provider_from_config};
