//! Karnaugh map construction from a truth table.
//!
//! The map is a grid over `ceil(n_input_bits / 2)` axes. Each axis encodes
//! two input bits (one bit on the final axis when the bit count is odd) and
//! is ordered by a 2-bit Gray code, so a unit step along any axis flips
//! exactly one input bit. That adjacency property is what makes a
//! rectangular region of true cells collapse into a short product term.

use crate::error::KmapError;
use crate::grid::CubeGrid;

/// Positions along an axis in Gray-code order: axis value `0,1,2,3` decodes
/// to input-bit pairs `00,01,11,10`. The low bit is the earlier input.
pub const GRAY_ORDER: [u8; 4] = [0b00, 0b01, 0b11, 0b10];

/// A truth table laid out on a Gray-code-ordered grid. Built once,
/// read-only afterwards.
#[derive(Debug, Clone)]
pub struct KarnaughMap {
    grid: CubeGrid<bool>,
    n_input_bits: usize,
    n_dimensions: usize,
}

impl KarnaughMap {
    /// Lays a truth table out on the map.
    ///
    /// Fails when the table length is not an exact power of two (that
    /// includes the empty table).
    pub fn build(truth_table: &[bool]) -> Result<Self, KmapError> {
        if !truth_table.len().is_power_of_two() {
            return Err(KmapError::TruthTableNotPowerOfTwo(truth_table.len()));
        }
        let n_input_bits = truth_table.len().trailing_zeros() as usize;
        let n_dimensions = (n_input_bits + 1) / 2;

        let mut cells = Vec::with_capacity(truth_table.len());
        for index in 0..truth_table.len() {
            // Decode the cell's base-4 coordinates, then each coordinate's
            // Gray code into two input bits of the truth-table index. On a
            // width-2 final axis the high bit is always zero.
            let mut table_index = 0;
            let mut rest = index;
            for axis in 0..n_dimensions {
                let gray = GRAY_ORDER[rest % 4] as usize;
                rest /= 4;
                table_index |= (gray & 0b1) << (2 * axis);
                table_index |= (gray >> 1 & 0b1) << (2 * axis + 1);
            }
            cells.push(truth_table[table_index]);
        }

        Ok(Self {
            grid: CubeGrid::from_cells(4, cells),
            n_input_bits,
            n_dimensions,
        })
    }

    pub fn n_input_bits(&self) -> usize {
        self.n_input_bits
    }

    pub fn n_dimensions(&self) -> usize {
        self.n_dimensions
    }

    /// Number of map cells (equals the truth-table length).
    pub fn len(&self) -> usize {
        self.grid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// Whether every axis carries two input bits. When false, the final
    /// axis has a single bit and is only 2 cells wide.
    pub fn is_even(&self) -> bool {
        self.n_input_bits % 2 == 0
    }

    pub fn axis_has_two_variables(&self, axis: usize) -> bool {
        self.is_even() || axis + 1 < self.n_dimensions
    }

    pub fn axis_width(&self, axis: usize) -> i32 {
        if self.axis_has_two_variables(axis) {
            4
        } else {
            2
        }
    }

    /// Closed lookup; absent cells read as false.
    pub fn is_true(&self, coords: &[i32]) -> bool {
        self.grid.get_or(false, coords)
    }

    /// Toroidal lookup; cells past the narrow final axis read as false.
    pub fn get_wrapping(&self, coords: &[i32]) -> bool {
        self.grid.get_wrapping(coords).copied().unwrap_or(false)
    }

    pub fn index_to_coords(&self, index: usize) -> Vec<i32> {
        self.grid.index_to_coords(index, self.n_dimensions)
    }

    /// Cells in flat-index order, with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (Vec<i32>, bool)> + '_ {
        self.grid
            .cells()
            .iter()
            .enumerate()
            .map(|(i, &value)| (self.index_to_coords(i), value))
    }
}
