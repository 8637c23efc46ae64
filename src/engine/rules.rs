//! Rule evaluation - the B3/S23 transition with toroidal wraparound.
//!
//! One generation is a pure function of the published grid: the pass reads
//! only `current` and writes only `staged`, so neighbor counts are never
//! taken from a half-updated surface.

use rayon::prelude::*;

use super::{BYTES_PER_CELL, Cell, pixel_index};

/// The 8 Moore-neighborhood offsets.
///
/// Offsets are applied independently. On a surface with width or height
/// below 3, distinct offsets can wrap to the same coordinate, and that
/// coordinate is counted once per offset.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Wrap `coord + delta` into `[0, extent)`, torus-style.
///
/// Holds for any `|delta| <= extent`, which covers the unit offsets used by
/// neighbor counting.
#[inline]
pub fn wrap_offset(coord: usize, delta: isize, extent: usize) -> usize {
    let mut n = coord as isize + delta;
    if n < 0 {
        n += extent as isize;
    } else if n >= extent as isize {
        n -= extent as isize;
    }
    n as usize
}

/// Count live cells over the 8 wrapped neighbor offsets of (x, y).
pub fn count_neighbors(current: &[u8], width: usize, height: usize, x: usize, y: usize) -> u8 {
    let mut count = 0;
    for (dx, dy) in NEIGHBOR_OFFSETS {
        let nx = wrap_offset(x, dx, width);
        let ny = wrap_offset(y, dy, height);
        if Cell::from_intensity(current[pixel_index(nx, ny, width)]).is_alive() {
            count += 1;
        }
    }
    count
}

/// B3/S23: a live cell survives with 2 or 3 live neighbors, a dead cell is
/// born with exactly 3.
#[inline]
pub const fn next_state(alive: bool, neighbors: u8) -> bool {
    if alive {
        neighbors == 2 || neighbors == 3
    } else {
        neighbors == 3
    }
}

/// Compute one generation: decode every cell of `current`, apply the rule,
/// and write the resulting encoding into `staged`.
///
/// Staged rows are processed in parallel; every worker reads only `current`
/// and writes only its own row.
pub fn advance_generation(current: &[u8], staged: &mut [u8], width: usize, height: usize) {
    debug_assert_eq!(current.len(), width * height * BYTES_PER_CELL);
    debug_assert_eq!(staged.len(), current.len());

    staged
        .par_chunks_exact_mut(width * BYTES_PER_CELL)
        .enumerate()
        .for_each(|(y, row)| {
            for x in 0..width {
                let alive = Cell::from_intensity(current[pixel_index(x, y, width)]).is_alive();
                let neighbors = count_neighbors(current, width, height, x, y);
                let next = if next_state(alive, neighbors) {
                    Cell::Alive
                } else {
                    Cell::Dead
                };

                let px = x * BYTES_PER_CELL;
                row[px..px + BYTES_PER_CELL].copy_from_slice(&next.encoding());
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a current-grid byte buffer from rows of '#' (alive) and '.' (dead).
    fn grid_from_rows(rows: &[&str]) -> (Vec<u8>, usize, usize) {
        let height = rows.len();
        let width = rows[0].len();
        let mut bytes = vec![0u8; width * height * BYTES_PER_CELL];

        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), width);
            for (x, ch) in row.chars().enumerate() {
                let cell = if ch == '#' { Cell::Alive } else { Cell::Dead };
                let idx = pixel_index(x, y, width);
                bytes[idx..idx + BYTES_PER_CELL].copy_from_slice(&cell.encoding());
            }
        }

        (bytes, width, height)
    }

    fn cell_at(bytes: &[u8], width: usize, x: usize, y: usize) -> Cell {
        Cell::from_intensity(bytes[pixel_index(x, y, width)])
    }

    #[test]
    fn test_next_state_table() {
        // Survival: exactly 2 or 3 neighbors.
        assert!(!next_state(true, 0));
        assert!(!next_state(true, 1));
        assert!(next_state(true, 2));
        assert!(next_state(true, 3));
        assert!(!next_state(true, 4));
        assert!(!next_state(true, 8));

        // Birth: exactly 3 neighbors.
        assert!(!next_state(false, 2));
        assert!(next_state(false, 3));
        assert!(!next_state(false, 4));
    }

    #[test]
    fn test_wrapped_corner_neighbor_counts() {
        // A single live cell at (0,0) on a 3x3 torus is within one wrapped
        // step of every other cell, so each of the 8 other cells counts
        // exactly one live neighbor, and (0,0) itself counts zero.
        let (current, width, height) = grid_from_rows(&["#..", "...", "..."]);

        for y in 0..height {
            for x in 0..width {
                let expected = if (x, y) == (0, 0) { 0 } else { 1 };
                assert_eq!(
                    count_neighbors(&current, width, height, x, y),
                    expected,
                    "neighbor count at ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn test_width_one_counts_coinciding_offsets_independently() {
        // On a 1-wide strip every horizontal offset wraps back to x = 0, so
        // a cell sees its vertical neighbors three times each and itself
        // twice. Live cell at (0,0) on 1x3:
        let (current, width, height) = grid_from_rows(&["#", ".", "."]);

        // (0,0): the two horizontal offsets wrap onto the cell itself.
        assert_eq!(count_neighbors(&current, width, height, 0, 0), 2);
        // (0,1): the three dy=-1 offsets all land on (0,0).
        assert_eq!(count_neighbors(&current, width, height, 0, 1), 3);
        // (0,2): the three dy=+1 offsets wrap to (0,0).
        assert_eq!(count_neighbors(&current, width, height, 0, 2), 3);
    }

    #[test]
    fn test_single_cell_grid_counts_itself_eight_times() {
        let (current, width, height) = grid_from_rows(&["#"]);
        assert_eq!(count_neighbors(&current, width, height, 0, 0), 8);

        // Eight neighbors is far outside S23, so the lone cell dies.
        let mut staged = vec![0u8; current.len()];
        advance_generation(&current, &mut staged, width, height);
        assert_eq!(cell_at(&staged, width, 0, 0), Cell::Dead);
    }

    #[test]
    fn test_lone_cell_dies() {
        let (current, width, height) = grid_from_rows(&[".....", "..#..", ".....", ".....", "....."]);
        let mut staged = vec![0u8; current.len()];

        advance_generation(&current, &mut staged, width, height);

        for y in 0..height {
            for x in 0..width {
                assert_eq!(cell_at(&staged, width, x, y), Cell::Dead);
            }
        }
    }

    #[test]
    fn test_block_still_life() {
        let (current, width, height) = grid_from_rows(&[
            ".....", //
            ".##..", //
            ".##..", //
            ".....", //
            ".....",
        ]);
        let mut staged = vec![0u8; current.len()];

        advance_generation(&current, &mut staged, width, height);

        assert_eq!(staged, current);
    }

    #[test]
    fn test_tromino_births_fourth_cell() {
        // L-tromino: the dead cell at (2,2) has exactly 3 live neighbors.
        let (current, width, height) = grid_from_rows(&[
            ".....", //
            ".##..", //
            ".#...", //
            ".....", //
            ".....",
        ]);
        let mut staged = vec![0u8; current.len()];

        advance_generation(&current, &mut staged, width, height);

        assert_eq!(cell_at(&staged, width, 2, 2), Cell::Alive);
        // The three live cells each have 2 neighbors and survive: a block.
        assert_eq!(cell_at(&staged, width, 1, 1), Cell::Alive);
        assert_eq!(cell_at(&staged, width, 2, 1), Cell::Alive);
        assert_eq!(cell_at(&staged, width, 1, 2), Cell::Alive);
    }

    #[test]
    fn test_blinker_oscillates() {
        let (current, width, height) = grid_from_rows(&[
            ".....", //
            "..#..", //
            "..#..", //
            "..#..", //
            ".....",
        ]);
        let (expected, _, _) = grid_from_rows(&[
            ".....", //
            ".....", //
            ".###.", //
            ".....", //
            ".....",
        ]);
        let mut staged = vec![0u8; current.len()];

        advance_generation(&current, &mut staged, width, height);

        assert_eq!(staged, expected);
    }

    #[test]
    fn test_output_ignores_prior_staged_contents() {
        // Pre-fill staged with all-alive garbage; the pass must produce the
        // same result as with a clean staged buffer, because it reads only
        // the current snapshot.
        let (current, width, height) = grid_from_rows(&[
            ".....", //
            "..#..", //
            "..#..", //
            "..#..", //
            ".....",
        ]);

        let mut clean = vec![0u8; current.len()];
        advance_generation(&current, &mut clean, width, height);

        let mut dirty = vec![0u8; current.len()];
        for pixel in dirty.chunks_exact_mut(BYTES_PER_CELL) {
            pixel.copy_from_slice(&Cell::Alive.encoding());
        }
        advance_generation(&current, &mut dirty, width, height);

        assert_eq!(dirty, clean);
    }

    #[test]
    fn test_glider_translates_across_wrap() {
        // A glider stepped 4 times moves one cell down-right; on a torus it
        // keeps going forever. 4 generations on a 5x5 wraps cleanly.
        let (mut current, width, height) = grid_from_rows(&[
            ".#...", //
            "..#..", //
            "###..", //
            ".....", //
            ".....",
        ]);
        let (expected, _, _) = grid_from_rows(&[
            ".....", //
            "..#..", //
            "...#.", //
            ".###.", //
            ".....",
        ]);

        let mut staged = vec![0u8; current.len()];
        for _ in 0..4 {
            advance_generation(&current, &mut staged, width, height);
            current.copy_from_slice(&staged);
        }

        assert_eq!(current, expected);
    }
}
