//! Axis-aligned boxes used as geometric bookkeeping during reduction.
//!
//! A cuboid stores a true (non-log) offset and length per axis and never
//! wraps: a wrapping group first decomposes into one cuboid per head/tail
//! choice along each of its wrapped axes. Reduction then expresses "which
//! cells are still uncovered" as a disjoint union of cuboids and shrinks it
//! by box subtraction.

use crate::group::Group;
use crate::map::KarnaughMap;
use crate::utils::all_masks;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cuboid {
    offset: Vec<i32>,
    /// True side lengths, not log2.
    length: Vec<i32>,
}

/// Which residual half of a split axis a slab covers.
enum Side {
    Low,
    High,
}

impl Cuboid {
    pub fn new(offset: Vec<i32>, length: Vec<i32>) -> Self {
        debug_assert_eq!(offset.len(), length.len());
        Self { offset, length }
    }

    pub fn n_dimensions(&self) -> usize {
        self.offset.len()
    }

    pub fn offset(&self) -> &[i32] {
        &self.offset
    }

    pub fn length(&self) -> &[i32] {
        &self.length
    }

    /// One past the last covered coordinate along `axis`.
    pub fn end_corner(&self, axis: usize) -> i32 {
        self.offset[axis] + self.length[axis]
    }

    /// A single cuboid spanning every cell of the map.
    pub fn covering(map: &KarnaughMap) -> Cuboid {
        let length = (0..map.n_dimensions()).map(|axis| map.axis_width(axis)).collect();
        Cuboid::new(vec![0; map.n_dimensions()], length)
    }

    /// Decomposes a possibly wrapping group into non-wrapping cuboids.
    ///
    /// A group wrapping `k` axes yields exactly `2^k` pairwise disjoint
    /// cuboids, one per choice of the head piece (up to the boundary) or
    /// the tail piece (wrapped past it) along each wrapped axis.
    pub fn for_group(group: &Group) -> Vec<Cuboid> {
        let wrapped = group.wrapped_dimensions();
        if wrapped.is_empty() {
            return vec![Cuboid::new(group.offset().to_vec(), group.lengths())];
        }

        let mut cuboids = Vec::with_capacity(1 << wrapped.len());
        for mask in all_masks(wrapped.len()) {
            let mut offset = group.offset().to_vec();
            let mut length = group.lengths();
            for (i, &axis) in wrapped.iter().enumerate() {
                let head_length = 4 - group.offset()[axis];
                if mask[i] {
                    offset[axis] = group.offset()[axis];
                    length[axis] = head_length;
                } else {
                    offset[axis] = 0;
                    length[axis] = group.length(axis) - head_length;
                }
            }
            cuboids.push(Cuboid::new(offset, length));
        }
        cuboids
    }

    /// Number of cells inside the cuboid.
    pub fn volume(&self) -> i64 {
        self.length.iter().map(|&l| l as i64).product()
    }

    pub fn total_volume<'a>(cuboids: impl IntoIterator<Item = &'a Cuboid>) -> i64 {
        cuboids.into_iter().map(Cuboid::volume).sum()
    }

    /// `self \ target` as a disjoint union of boxes.
    ///
    /// Returns `None` when the two cuboids do not intersect, leaving `self`
    /// as it was. Otherwise splits axis by axis: per axis, up to two
    /// residual slabs (before the target's start, after its end), each
    /// taking the intersected range on the axes already processed and the
    /// full original range on the axes still to come.
    pub fn subtract(&self, target: &Cuboid) -> Option<Vec<Cuboid>> {
        for axis in 0..self.n_dimensions() {
            if target.end_corner(axis) <= self.offset[axis]
                || self.end_corner(axis) <= target.offset[axis]
            {
                return None;
            }
        }

        let mut parts = Vec::new();
        for axis in 0..self.n_dimensions() {
            if self.offset[axis] < target.offset[axis] {
                parts.push(self.residual_slab(target, axis, Side::Low));
            }
            if target.end_corner(axis) < self.end_corner(axis) {
                parts.push(self.residual_slab(target, axis, Side::High));
            }
        }
        Some(parts)
    }

    fn residual_slab(&self, target: &Cuboid, split_axis: usize, side: Side) -> Cuboid {
        let mut offset = Vec::with_capacity(self.n_dimensions());
        let mut length = Vec::with_capacity(self.n_dimensions());
        for axis in 0..self.n_dimensions() {
            if axis < split_axis {
                offset.push(self.offset[axis].max(target.offset[axis]));
                length.push(
                    target.length[axis]
                        - (self.offset[axis] - target.offset[axis]).max(0)
                        - (target.end_corner(axis) - self.end_corner(axis)).max(0),
                );
            } else if axis == split_axis {
                match side {
                    Side::Low => {
                        offset.push(self.offset[axis]);
                        length.push(target.offset[axis] - self.offset[axis]);
                    }
                    Side::High => {
                        offset.push(target.end_corner(axis));
                        length.push(self.end_corner(axis) - target.end_corner(axis));
                    }
                }
            } else {
                offset.push(self.offset[axis]);
                length.push(self.length[axis]);
            }
        }
        Cuboid::new(offset, length)
    }
}
