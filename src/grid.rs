//! Flat-array grid with an arbitrary number of axes.
//!
//! Coordinates map to a flat index through a mixed-radix scheme: coordinate
//! `i` contributes `coord_i * width^i`. Two addressing modes exist: the
//! closed mode fails with `None` for any out-of-range coordinate, so callers
//! can substitute a default (a normal control-flow path, not an error), and
//! the wrapping mode reduces every coordinate by mathematical modulo so that
//! toroidal neighbours resolve correctly.

use crate::utils::wrap;

/// Matrix with an arbitrary number of axes, each at most `width` cells long.
///
/// The backing array may be shorter than `width^n`: a narrower final axis is
/// simply represented by the array ending early, and lookups past the end
/// report the cell as absent.
#[derive(Debug, Clone)]
pub struct CubeGrid<T> {
    cells: Vec<T>,
    width: usize,
}

impl<T: Clone> CubeGrid<T> {
    /// Creates a grid of `len` cells, all set to `value`.
    pub fn filled(width: usize, len: usize, value: T) -> Self {
        Self {
            cells: vec![value; len],
            width,
        }
    }
}

impl<T> CubeGrid<T> {
    /// Wraps an existing flat cell array.
    pub fn from_cells(width: usize, cells: Vec<T>) -> Self {
        Self { cells, width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Closed addressing: `None` when any coordinate falls outside
    /// `[0, width)`.
    pub fn coords_to_index(&self, coords: &[i32]) -> Option<usize> {
        let mut index = 0;
        let mut stride = 1;
        for &coord in coords {
            if coord < 0 || coord >= self.width as i32 {
                return None;
            }
            index += coord as usize * stride;
            stride *= self.width;
        }
        Some(index)
    }

    /// Wrapping addressing: every coordinate is reduced modulo `width`,
    /// negative values included.
    pub fn coords_to_index_wrapping(&self, coords: &[i32]) -> usize {
        let mut index = 0;
        let mut stride = 1;
        for &coord in coords {
            index += wrap(coord, self.width as i32) as usize * stride;
            stride *= self.width;
        }
        index
    }

    /// Inverse mixed-radix decode of a flat index.
    pub fn index_to_coords(&self, index: usize, n_dimensions: usize) -> Vec<i32> {
        let mut coords = Vec::with_capacity(n_dimensions);
        let mut rest = index;
        for _ in 0..n_dimensions {
            coords.push((rest % self.width) as i32);
            rest /= self.width;
        }
        coords
    }

    pub fn get(&self, coords: &[i32]) -> Option<&T> {
        self.coords_to_index(coords).and_then(|i| self.cells.get(i))
    }

    pub fn get_wrapping(&self, coords: &[i32]) -> Option<&T> {
        self.cells.get(self.coords_to_index_wrapping(coords))
    }

    /// Writes a cell. Out-of-range coordinates are ignored.
    pub fn set(&mut self, value: T, coords: &[i32]) {
        if let Some(index) = self.coords_to_index(coords) {
            if index < self.cells.len() {
                self.cells[index] = value;
            }
        }
    }
}

impl<T: Copy> CubeGrid<T> {
    /// Closed lookup with a default for absent cells.
    pub fn get_or(&self, default: T, coords: &[i32]) -> T {
        self.get(coords).copied().unwrap_or(default)
    }
}
