//! Maximal group discovery.
//!
//! Every true cell is taken as the low corner of candidate groups. A cheap
//! per-axis probe first bounds how far a group starting at the cell could
//! extend along each axis alone; the nested scan then grows boxes inside
//! those bounds, checking each candidate with a single summed-area query.
//! Along the innermost axis the scan stops at the first failure, since a box
//! of all-true cells stays all-true when shrunk.

use std::collections::HashSet;

use log::debug;

use crate::group::Group;
use crate::map::KarnaughMap;
use crate::prefix::PrefixSum;

/// Finds, for every true cell, the locally maximal groups anchored at it.
///
/// The result is a superset of what the final cover needs; reduction prunes
/// contained and redundant groups afterwards.
pub fn discover_groups(map: &KarnaughMap, prefix: &PrefixSum) -> HashSet<Group> {
    let mut groups = HashSet::new();

    if map.n_dimensions() == 0 {
        // A constant function has a single cell; when it is true the whole
        // (empty) box covers it.
        if map.is_true(&[]) {
            groups.insert(Group::new(vec![], vec![]));
        }
        return groups;
    }

    for (coords, value) in map.iter() {
        if !value {
            continue;
        }
        let bounds = single_dimension_distances(map, &coords);
        debug!("cell {:?}: axis bounds {:?}", coords, bounds);

        let mut sizes = vec![0u32; map.n_dimensions()];
        scan_axis(prefix, &coords, &bounds, &mut sizes, 0, &mut groups);
    }

    groups
}

/// How many size doublings each axis supports on its own, starting from
/// `coords` and ignoring the other axes.
///
/// A step of +1 (wrapped) must hit a true cell for any extension at all.
/// Growing to the full width additionally needs the +2 and +3 cells, and is
/// only probed from coordinate 0 so each full-axis group is found once.
/// Width-2 axes can extend only from coordinate 0 and never past size 1.
fn single_dimension_distances(map: &KarnaughMap, coords: &[i32]) -> Vec<u32> {
    let mut bounds = vec![0u32; coords.len()];
    for axis in 0..coords.len() {
        let two_variables = map.axis_has_two_variables(axis);
        if !two_variables && coords[axis] != 0 {
            continue;
        }

        let probe = |distance: i32| {
            let mut target = coords.to_vec();
            target[axis] = (coords[axis] + distance) % 4;
            map.is_true(&target)
        };

        if !probe(1) {
            continue;
        }
        bounds[axis] = 1;

        if !two_variables || coords[axis] != 0 {
            continue;
        }
        if probe(2) && probe(3) {
            bounds[axis] = 2;
        }
    }
    bounds
}

fn scan_axis(
    prefix: &PrefixSum,
    coords: &[i32],
    bounds: &[u32],
    sizes: &mut Vec<u32>,
    axis: usize,
    groups: &mut HashSet<Group>,
) {
    if axis + 1 == coords.len() {
        // Innermost axis: keep the largest size that still holds, then
        // record one maximal group for this combination of outer sizes.
        let mut best = None;
        for size in 0..=bounds[axis] {
            sizes[axis] = size;
            if !covers_only_true(prefix, coords, sizes) {
                break;
            }
            best = Some(size);
        }
        if let Some(size) = best {
            sizes[axis] = size;
            groups.insert(Group::new(coords.to_vec(), sizes.clone()));
        }
        return;
    }

    for size in 0..=bounds[axis] {
        sizes[axis] = size;
        scan_axis(prefix, coords, bounds, sizes, axis + 1, groups);
    }
}

/// Whether the box at `coords` with the given size exponents contains true
/// cells only: its truth count must equal its cell count.
fn covers_only_true(prefix: &PrefixSum, coords: &[i32], sizes: &[u32]) -> bool {
    let far: Vec<i32> = coords
        .iter()
        .zip(sizes)
        .map(|(&c, &s)| c + (1 << s) - 1)
        .collect();
    prefix.sample(coords, &far) == 1i64 << sizes.iter().sum::<u32>()
}
