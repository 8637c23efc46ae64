//! Life engine - owns the surface and drives one tick of the simulation.

use log::{debug, trace};

use crate::schema::{ConfigError, SimulationConfig};

use super::{Cell, PointerButton, SurfaceBuffer, TickInput, advance_generation};

/// Interactive Game of Life engine over a double-buffered surface.
///
/// One external driver calls, once per frame: pause toggle, [`step`]
/// (a no-op while paused), [`paint`] for the held pointer button,
/// [`publish`], then reads [`current_bytes`] for display. [`tick`] bundles
/// that exact order.
///
/// [`step`]: LifeEngine::step
/// [`paint`]: LifeEngine::paint
/// [`publish`]: LifeEngine::publish
/// [`current_bytes`]: LifeEngine::current_bytes
/// [`tick`]: LifeEngine::tick
pub struct LifeEngine {
    config: SimulationConfig,
    surface: SurfaceBuffer,
    paused: bool,
    generation: u64,
}

impl LifeEngine {
    /// Create an engine with both grids all-Dead, starting paused.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let surface = SurfaceBuffer::new(config.width, config.height)?;
        debug!(
            "life engine created: {}x{} cells, paused",
            config.width, config.height
        );

        Ok(Self {
            config,
            surface,
            paused: true,
            generation: 0,
        })
    }

    /// Compute the next generation from `current` into `staged`.
    ///
    /// Does nothing while paused.
    pub fn step(&mut self) {
        if self.paused {
            return;
        }

        let width = self.config.width;
        let height = self.config.height;
        let (current, staged) = self.surface.split();
        advance_generation(current, staged, width, height);
        self.generation += 1;
    }

    /// Set one staged cell directly, bypassing rule evaluation.
    ///
    /// Out-of-range coordinates are clamped to the nearest edge cell, so a
    /// cursor outside the surface still paints. Available whether paused or
    /// running; within a tick, paint lands after rule evaluation and
    /// overrides the computed value for that cell.
    pub fn paint(&mut self, x: i32, y: i32, cell: Cell) {
        let x = x.clamp(0, self.config.width as i32 - 1) as usize;
        let y = y.clamp(0, self.config.height as i32 - 1) as usize;
        self.surface.write_staged(x, y, cell);
    }

    /// Publish the staged grid for display.
    pub fn publish(&mut self) {
        self.surface.publish();
    }

    /// Run one frame of the driver contract: toggle, step, paint, publish.
    pub fn tick(&mut self, input: &TickInput) {
        if input.toggle_pause {
            self.toggle_pause();
        }

        self.step();

        if let Some(pointer) = input.pointer {
            let cell = match pointer.button {
                PointerButton::Primary => Cell::Alive,
                PointerButton::Secondary => Cell::Dead,
            };
            self.paint(pointer.x, pointer.y, cell);
        }

        self.publish();
    }

    /// Read-only view of the last published grid, `width * height * 4`
    /// bytes in the row-major encoding, ready for upload to a display
    /// surface.
    #[inline]
    pub fn current_bytes(&self) -> &[u8] {
        self.surface.current_bytes()
    }

    /// The owned surface, for hosts and tests that inspect buffers directly.
    #[inline]
    pub fn surface(&self) -> &SurfaceBuffer {
        &self.surface
    }

    #[inline]
    pub fn surface_mut(&mut self) -> &mut SurfaceBuffer {
        &mut self.surface
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.config.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.config.height
    }

    #[inline]
    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Flip the paused flag (the edge-triggered toggle input).
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        trace!("paused = {}", self.paused);
    }

    /// Number of generations computed since construction.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Get configuration reference.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
}

/// Simulation statistics for monitoring.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SimulationStats {
    pub generation: u64,
    pub alive_cells: usize,
    pub total_cells: usize,
}

impl SimulationStats {
    /// Compute statistics from the engine's published grid.
    pub fn from_engine(engine: &LifeEngine) -> Self {
        let alive_cells = engine
            .current_bytes()
            .chunks_exact(super::BYTES_PER_CELL)
            .filter(|pixel| Cell::from_intensity(pixel[0]).is_alive())
            .count();

        Self {
            generation: engine.generation(),
            alive_cells,
            total_cells: engine.config().cell_count(),
        }
    }
}
