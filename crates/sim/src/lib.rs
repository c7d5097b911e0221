//! Collaborators of the quality update engine: sample inventory, item
//! validation, configuration, and the day-by-day driver loop.

pub mod config;
pub mod fixture;
pub mod simulation;
pub mod validation;

pub use config::{ConfigError, SimConfig};
pub use fixture::{FixtureOptions, generate_inventory};
pub use simulation::{DayReport, Simulation};
pub use validation::validate_item;
