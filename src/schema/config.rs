//! Configuration types for the simulation surface.

use serde::{Deserialize, Serialize};

/// Top-level simulation configuration.
///
/// Dimensions are fixed for the engine's lifetime; the surface is never
/// resized after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Grid width in cells.
    pub width: usize,
    /// Grid height in cells.
    pub height: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        // A 1280x640 window at a 4x display scale.
        Self {
            width: 320,
            height: 160,
        }
    }
}

impl SimulationConfig {
    /// Get total cell count (width * height).
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid dimensions (width, height) must be non-zero")]
    InvalidDimensions,
}
