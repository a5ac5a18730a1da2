//! Candidate rectangular groups of true cells.
//!
//! A group is a power-of-two-aligned, axis-aligned box on the map: an
//! `offset` per axis plus a `size` exponent per axis (true side length
//! `2^size`). A group whose end corner passes the axis boundary wraps
//! around toroidally. Groups compare structurally, so they can key hash
//! sets, and carry a total order so processing can be made deterministic.

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Group {
    offset: Vec<i32>,
    /// log2 of the true side length per axis, in `{0, 1, 2}`.
    size: Vec<u32>,
}

impl Group {
    pub fn new(offset: Vec<i32>, size: Vec<u32>) -> Self {
        debug_assert_eq!(offset.len(), size.len());
        Self { offset, size }
    }

    pub fn n_dimensions(&self) -> usize {
        self.offset.len()
    }

    pub fn offset(&self) -> &[i32] {
        &self.offset
    }

    pub fn size(&self) -> &[u32] {
        &self.size
    }

    /// log2 of the number of cells the group covers.
    pub fn volume(&self) -> u32 {
        self.size.iter().sum()
    }

    /// True side length along `axis`.
    pub fn length(&self, axis: usize) -> i32 {
        1 << self.size[axis]
    }

    pub fn lengths(&self) -> Vec<i32> {
        self.size.iter().map(|&s| 1 << s).collect()
    }

    /// One past the last covered coordinate along `axis`; greater than 4
    /// when the group wraps there.
    pub fn end_corner(&self, axis: usize) -> i32 {
        self.offset[axis] + self.length(axis)
    }

    /// Axes along which the group crosses the map boundary. Never includes
    /// a width-2 axis: spans there are at most 2 long starting at 0.
    pub fn wrapped_dimensions(&self) -> Vec<usize> {
        (0..self.n_dimensions())
            .filter(|&axis| self.end_corner(axis) > 4)
            .collect()
    }

    /// Whether every cell of `target` lies inside `self`, wrap-around
    /// spans included.
    ///
    /// Containment of axis-aligned boxes factors through the axes, so each
    /// axis is tested independently: first as plain intervals, then with
    /// either span renormalized a full width back when it crosses the
    /// boundary. A group never contains itself.
    pub fn contains(&self, target: &Group) -> bool {
        if self == target {
            return false;
        }
        (0..self.n_dimensions()).all(|axis| {
            self.axis_contains(
                axis,
                target.offset[axis],
                target.end_corner(axis),
                target.size[axis],
            )
        })
    }

    fn axis_contains(&self, axis: usize, t_offset: i32, t_end: i32, t_size: u32) -> bool {
        // Size 4 covers the whole axis and wraps indefinitely.
        if self.size[axis] == 2 {
            return true;
        }

        let interval_contains = |c_offset: i32, c_end: i32, t_offset: i32, t_end: i32| {
            t_offset >= c_offset && t_end <= c_end
        };

        let c_offset = self.offset[axis];
        let c_end = self.end_corner(axis);
        if interval_contains(c_offset, c_end, t_offset, t_end) {
            return true;
        }

        // Renormalize whichever spans wrap and compare again.
        let (c_offset, c_end) = if c_end > 4 {
            (c_offset - 4, c_end - 4)
        } else {
            (c_offset, c_end)
        };
        let (t_offset, t_end) = if t_end > 4 && t_size < 2 {
            (t_offset - 4, t_end - 4)
        } else {
            (t_offset, t_end)
        };
        interval_contains(c_offset, c_end, t_offset, t_end)
    }
}
