//! Wrapping N-dimensional summed-area table over a Karnaugh map.
//!
//! The table is one cell wider than the map along every axis; the extra slot
//! holds the wrap context so that a rectangular query crossing the map
//! boundary still resolves in a constant number of lookups. Cell `P[c]` is
//! the inclusion-exclusion sum of the map over the box `[0, c]`:
//!
//! ```text
//! P[c] = map[c wrapped]
//!      + Σ  P[c shifted back 1 on one axis]      (added)
//!      - Σ  P[c shifted back 1 on two axes]      (subtracted)
//!      + Σ  P[c shifted back 1 on three axes]
//!        ⋮
//! ```
//!
//! Prior cells outside the table read as 0: the recurrence is one-sided,
//! and only the base map lookup wraps.

use crate::grid::CubeGrid;
use crate::map::KarnaughMap;
use crate::utils::weighted_masks;

/// Summed-area table supporting rectangular truth-count queries. Built once
/// from a map, read-only afterwards.
#[derive(Debug, Clone)]
pub struct PrefixSum {
    grid: CubeGrid<i64>,
    n_dimensions: usize,
}

impl PrefixSum {
    /// One wrap slot past the map's 0..=3 coordinate range.
    const WIDTH: usize = 5;

    pub fn build(map: &KarnaughMap) -> Self {
        let d = map.n_dimensions();
        // The narrow final axis of an odd-bit map keeps its 2-wide range:
        // there is nothing past coordinate 1 to wrap into.
        let len = if d == 0 {
            1
        } else {
            Self::WIDTH.pow(d as u32 - 1) * if map.is_even() { Self::WIDTH } else { 2 }
        };

        let mut grid = CubeGrid::filled(Self::WIDTH, len, 0i64);

        // Increasing flat-index order: every shifted-back cell the
        // recurrence references has a smaller flat index, so it is already
        // computed by the time it is read.
        for index in 0..len {
            let coords = grid.index_to_coords(index, d);
            let mut sum = map.get_wrapping(&coords) as i64;

            for n_shifted in 1..=d {
                let sign = if n_shifted % 2 == 0 { -1 } else { 1 };
                for mask in weighted_masks(d, n_shifted) {
                    let target: Vec<i32> = coords
                        .iter()
                        .zip(&mask)
                        .map(|(&c, &shift)| if shift { c - 1 } else { c })
                        .collect();
                    sum += sign * grid.get_or(0, &target);
                }
            }

            grid.set(sum, &coords);
        }

        Self {
            grid,
            n_dimensions: d,
        }
    }

    pub fn n_dimensions(&self) -> usize {
        self.n_dimensions
    }

    /// Count of true map cells inside the axis-aligned box
    /// `[coords, far]`, both corners inclusive.
    ///
    /// The same inclusion-exclusion identity as the build recurrence, with
    /// the sign flipped and the shifted corner taken from `coords` rather
    /// than an adjacent cell. Absent cells read as 0.
    pub fn sample(&self, coords: &[i32], far: &[i32]) -> i64 {
        let d = self.n_dimensions;
        let mut total = self.grid.get_or(0, far);

        for n_shifted in 1..=d {
            let sign = if n_shifted % 2 == 0 { 1 } else { -1 };
            for mask in weighted_masks(d, n_shifted) {
                let target: Vec<i32> = (0..d)
                    .map(|axis| if mask[axis] { coords[axis] - 1 } else { far[axis] })
                    .collect();
                total += sign * self.grid.get_or(0, &target);
            }
        }

        total
    }
}
