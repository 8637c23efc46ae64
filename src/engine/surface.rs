//! Surface buffer - the double-buffered pixel grid.
//!
//! Owns the `current` and `staged` grids and the publish operation that
//! commits a fully-formed generation for display. Rendering only ever sees
//! a complete generation: all writes land in `staged`, and publish is one
//! full copy into `current`.

use crate::schema::ConfigError;

/// Bytes per cell in the pixel encoding: three intensity channels plus one
/// opacity channel.
pub const BYTES_PER_CELL: usize = 4;

/// Intensity byte of a live cell.
pub const ALIVE_INTENSITY: u8 = 0x00;

/// Intensity byte of a dead cell.
pub const DEAD_INTENSITY: u8 = 0x88;

const OPAQUE: u8 = 0xFF;

/// Binary state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Dead,
    Alive,
}

impl Cell {
    /// Pixel encoding of this state.
    ///
    /// Alive -> `(0x00, 0x00, 0x00, 0xFF)`, Dead -> `(0x88, 0x88, 0x88, 0xFF)`.
    #[inline]
    pub const fn encoding(self) -> [u8; BYTES_PER_CELL] {
        match self {
            Cell::Alive => [ALIVE_INTENSITY, ALIVE_INTENSITY, ALIVE_INTENSITY, OPAQUE],
            Cell::Dead => [DEAD_INTENSITY, DEAD_INTENSITY, DEAD_INTENSITY, OPAQUE],
        }
    }

    /// Decode a cell state from the first intensity byte of its pixel group.
    #[inline]
    pub const fn from_intensity(byte: u8) -> Self {
        if byte == ALIVE_INTENSITY {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }

    #[inline]
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }
}

/// Convert (x, y) cell coordinates to the offset of the first byte of its
/// pixel group.
///
/// Row-major with origin top-left: cell (x, y) occupies bytes
/// `[(y * width + x) * 4, +4)`.
#[inline]
pub const fn pixel_index(x: usize, y: usize, width: usize) -> usize {
    (y * width + x) * BYTES_PER_CELL
}

/// Double-buffered pixel surface.
///
/// `current` is the last published generation, read by the host for display.
/// `staged` is the in-progress grid written by rule evaluation and paint
/// operations. Both grids are allocated once at construction, always share
/// the same dimensions, and are never resized.
pub struct SurfaceBuffer {
    width: usize,
    height: usize,
    current: Vec<u8>,
    staged: Vec<u8>,
}

impl SurfaceBuffer {
    /// Allocate both grids, filled with the Dead encoding.
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidDimensions);
        }

        let mut staged = vec![0u8; width * height * BYTES_PER_CELL];
        for pixel in staged.chunks_exact_mut(BYTES_PER_CELL) {
            pixel.copy_from_slice(&Cell::Dead.encoding());
        }
        let current = staged.clone();

        Ok(Self {
            width,
            height,
            current,
            staged,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only view of the last published grid, `width * height * 4` bytes.
    #[inline]
    pub fn current_bytes(&self) -> &[u8] {
        &self.current
    }

    /// Read-only view of the in-progress grid.
    #[inline]
    pub fn staged_bytes(&self) -> &[u8] {
        &self.staged
    }

    /// Mutable view of the in-progress grid.
    #[inline]
    pub fn staged_mut(&mut self) -> &mut [u8] {
        &mut self.staged
    }

    /// Borrow the published grid and the in-progress grid together.
    ///
    /// Rule evaluation reads only the former and writes only the latter.
    #[inline]
    pub fn split(&mut self) -> (&[u8], &mut [u8]) {
        (&self.current, &mut self.staged)
    }

    /// Publish `staged` into `current` as one full byte copy.
    ///
    /// `staged` is left unmodified.
    pub fn publish(&mut self) {
        self.current.copy_from_slice(&self.staged);
    }

    /// Decode the cell at (x, y) from the published grid.
    #[inline]
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        Cell::from_intensity(self.current[pixel_index(x, y, self.width)])
    }

    /// Decode the cell at (x, y) from the staged grid.
    #[inline]
    pub fn staged_cell(&self, x: usize, y: usize) -> Cell {
        Cell::from_intensity(self.staged[pixel_index(x, y, self.width)])
    }

    /// Overwrite one staged cell with the encoding of `cell`.
    #[inline]
    pub fn write_staged(&mut self, x: usize, y: usize, cell: Cell) {
        let idx = pixel_index(x, y, self.width);
        self.staged[idx..idx + BYTES_PER_CELL].copy_from_slice(&cell.encoding());
    }
}
