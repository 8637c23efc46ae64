//! Engine module - Simulation core for the interactive life grid.

mod input;
mod life;
mod rules;
mod surface;

pub use input::*;
pub use life::*;
pub use rules::*;
pub use surface::*;
