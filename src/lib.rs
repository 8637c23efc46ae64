//! Toroidal Life - Interactive Conway's Game of Life on a wrap-around surface.
//!
//! This crate provides the simulation core for an interactive "life" grid:
//! a double-buffered, pixel-encoded surface evolving under the standard
//! B3/S23 rules with toroidal neighbor wraparound. The host owns the window,
//! input polling, and frame cadence; the engine owns the grid state and the
//! generation transition.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Configuration types for the simulation surface
//! - `engine`: The surface buffer, rule evaluation, paint, and tick driver
//!
//! Once per frame the host drives the engine through [`LifeEngine::tick`]
//! (pause toggle, generation step, pointer paint, publish) and then uploads
//! [`LifeEngine::current_bytes`] unmodified to whatever rendering surface it
//! manages, at whatever scale it chooses.
//!
//! # Example
//!
//! ```rust
//! use toroidal_life::{
//!     engine::{Cell, LifeEngine, TickInput},
//!     schema::SimulationConfig,
//! };
//!
//! let config = SimulationConfig {
//!     width: 64,
//!     height: 64,
//! };
//! let mut engine = LifeEngine::new(config).unwrap();
//!
//! // Paint a blinker while paused, then publish it for display.
//! engine.paint(10, 10, Cell::Alive);
//! engine.paint(11, 10, Cell::Alive);
//! engine.paint(12, 10, Cell::Alive);
//! engine.publish();
//!
//! // Unpause and run one frame of the driver loop.
//! engine.set_paused(false);
//! engine.tick(&TickInput::default());
//!
//! assert_eq!(engine.current_bytes().len(), 64 * 64 * 4);
//! ```

pub mod engine;
pub mod schema;

// Re-export commonly used types
pub use engine::{Cell, EdgeTrigger, LifeEngine, SimulationStats, SurfaceBuffer, TickInput};
pub use schema::{ConfigError, SimulationConfig};
