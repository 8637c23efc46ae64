//! Schema module - Configuration types for the life simulation.

mod config;

pub use config::*;
