//! Test utilities: seeded dataset generators and small fixtures.
//!
//! Shared between unit tests, integration tests and doc examples.

pub mod data;
pub mod fixtures;

pub use data::{RandomSpec, random_categorical, single_outcome};
pub use fixtures::{conflicting_weather, play_tennis, weather, xor};
