//! Redundant-group elimination.
//!
//! Two passes over the discovered groups. The first drops any group wholly
//! contained in another. The second walks the survivors from largest volume
//! down and keeps, per volume tier, the smallest subset of groups whose
//! removal from the still-uncovered region shrinks it as much as the whole
//! tier would; a group whose every piece lands on already-covered cells
//! contributes nothing and is dropped. Uncovered cells are tracked as a
//! disjoint union of cuboids.
//!
//! The tier walk is a greedy heuristic, not an exact set-cover solve: it
//! never revisits a tier once committed. It is deterministic and idempotent,
//! and in practice leaves no group that a later tier makes redundant.

use std::collections::{BTreeMap, HashMap, HashSet};

use log::debug;

use crate::cuboid::Cuboid;
use crate::group::Group;
use crate::map::KarnaughMap;
use crate::utils::subsets;

pub fn remove_redundant_groups(groups: &mut HashSet<Group>, map: &KarnaughMap) {
    prune_contained(groups);
    if groups.len() <= 2 {
        return;
    }
    prune_covered(groups, map);
}

/// Drops every group that lies entirely inside another group.
fn prune_contained(groups: &mut HashSet<Group>) {
    let snapshot: Vec<Group> = groups.iter().cloned().collect();
    for group in &snapshot {
        if !groups.contains(group) {
            continue;
        }
        for container in &snapshot {
            if container == group || !groups.contains(container) {
                continue;
            }
            if container.contains(group) {
                debug!("dropping {:?}: contained in {:?}", group, container);
                groups.remove(group);
                break;
            }
        }
    }
}

/// Drops groups whose cells other groups of the same or larger volume
/// already cover.
fn prune_covered(groups: &mut HashSet<Group>, map: &KarnaughMap) {
    let mut buckets: BTreeMap<u32, Vec<Group>> = BTreeMap::new();
    for group in groups.iter() {
        buckets.entry(group.volume()).or_default().push(group.clone());
    }

    let mut uncovered = vec![Cuboid::covering(map)];

    for (volume, mut bucket) in buckets.into_iter().rev() {
        bucket.sort();
        let pieces: HashMap<Group, Vec<Cuboid>> = bucket
            .iter()
            .map(|group| (group.clone(), Cuboid::for_group(group)))
            .collect();

        // Subtracting the whole tier gives the best uncovered volume any
        // subset of it can reach.
        let mut full_result = uncovered.clone();
        for cuboids in pieces.values() {
            for piece in cuboids {
                subtract_from_set(&mut full_result, piece);
            }
        }
        let optimal_volume = Cuboid::total_volume(&full_result);

        // Smallest subsets first; the first one matching the optimum wins.
        // Every group in the subset must change the uncovered region
        // through each of its pieces, otherwise part of it is redundant.
        let mut kept = None;
        'combos: for combo in subsets(&bucket) {
            let mut result = uncovered.clone();
            for group in &combo {
                for piece in &pieces[group] {
                    if !subtract_from_set(&mut result, piece) {
                        continue 'combos;
                    }
                }
            }
            if Cuboid::total_volume(&result) == optimal_volume {
                kept = Some(combo);
                break;
            }
        }
        let kept = kept.unwrap_or_else(|| bucket.clone());

        for group in &bucket {
            if !kept.contains(group) {
                debug!("dropping {:?}: volume-{} tier covers it", group, volume);
                groups.remove(group);
            }
        }
        uncovered = full_result;
    }
}

/// Subtracts `piece` from every cuboid in `set` it intersects. Returns
/// whether anything changed.
fn subtract_from_set(set: &mut Vec<Cuboid>, piece: &Cuboid) -> bool {
    let mut changed = false;
    let snapshot: Vec<Cuboid> = set.clone();
    for cuboid in snapshot {
        if let Some(parts) = cuboid.subtract(piece) {
            set.retain(|c| *c != cuboid);
            set.extend(parts);
            changed = true;
        }
    }
    changed
}
