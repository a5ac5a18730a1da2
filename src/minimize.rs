//! End-to-end minimization pipeline.
//!
//! Truth table -> Karnaugh map -> summed-area table -> maximal groups ->
//! redundancy pruning -> sum-of-products string.

use std::collections::HashSet;

use log::debug;

use crate::discover::discover_groups;
use crate::error::KmapError;
use crate::expr::generate_expression;
use crate::group::Group;
use crate::map::KarnaughMap;
use crate::prefix::PrefixSum;
use crate::reduce::remove_redundant_groups;

/// Runs the pipeline up to the pruned group set.
///
/// The table is indexed by the input assignment read as a binary number,
/// input `A` in the lowest bit. Its length must be a power of two.
pub fn find_groups(truth_table: &[bool]) -> Result<HashSet<Group>, KmapError> {
    let map = KarnaughMap::build(truth_table)?;
    let prefix = PrefixSum::build(&map);

    let mut groups = discover_groups(&map, &prefix);
    let discovered = groups.len();
    remove_redundant_groups(&mut groups, &map);
    debug!(
        "{} input bits: {} groups discovered, {} kept",
        map.n_input_bits(),
        discovered,
        groups.len()
    );

    Ok(groups)
}

/// Minimizes a truth table into a sum-of-products expression.
///
/// ```
/// use kmap_rs::minimize::minimize;
///
/// let or = minimize(&[false, true, true, true]).unwrap();
/// assert_eq!(or, "A + B");
/// ```
pub fn minimize(truth_table: &[bool]) -> Result<String, KmapError> {
    let groups = find_groups(truth_table)?;
    let n_input_bits = truth_table.len().trailing_zeros() as usize;
    Ok(generate_expression(&groups, n_input_bits))
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    use crate::cuboid::Cuboid;

    #[test]
    fn test_rejects_bad_table_length() {
        assert_eq!(
            minimize(&[true, true, true]),
            Err(KmapError::TruthTableNotPowerOfTwo(3))
        );
    }

    #[test]
    fn test_constant_functions() {
        assert_eq!(minimize(&[true]).unwrap(), "1");
        assert_eq!(minimize(&[false]).unwrap(), "0");
        assert_eq!(minimize(&[true; 16]).unwrap(), "1");
        assert_eq!(minimize(&[false; 16]).unwrap(), "0");
    }

    #[test]
    fn test_single_variable_functions() {
        // f = A over 2 inputs: table indices 1 and 3.
        assert_eq!(minimize(&[false, true, false, true]).unwrap(), "A");
        // f = A'.
        assert_eq!(minimize(&[true, false, true, false]).unwrap(), "A′");
        // f = B'.
        assert_eq!(minimize(&[true, true, false, false]).unwrap(), "B′");
    }

    #[test]
    fn test_or_and_xor() {
        assert_eq!(minimize(&[false, true, true, true]).unwrap(), "A + B");
        assert_eq!(minimize(&[false, true, true, false]).unwrap(), "AB′ + A′B");
        assert_eq!(minimize(&[false, false, false, true]).unwrap(), "AB");
    }

    #[test]
    fn test_three_input_projection() {
        // f = C: the top half of the 8-entry table.
        let table: Vec<bool> = (0..8).map(|i| i >= 4).collect();
        assert_eq!(minimize(&table).unwrap(), "C");
    }

    #[test]
    fn test_groups_cover_exactly_the_true_cells() {
        // The kept groups' footprints, decomposed into cuboids, must cover
        // every true map cell and no false one.
        let tables: Vec<Vec<bool>> = vec![
            (0..16).map(|i: u32| (i * 7 + 3) % 5 < 2).collect(),
            (0..16).map(|i: u32| i.count_ones() % 2 == 0).collect(),
            (0..8).map(|i: u32| i != 5).collect(),
            (0..64).map(|i: u32| (i * 13 + 1) % 7 < 3).collect(),
        ];

        for table in tables {
            let map = KarnaughMap::build(&table).unwrap();
            let groups = find_groups(&table).unwrap();
            let cuboids: Vec<Cuboid> =
                groups.iter().flat_map(|g| Cuboid::for_group(g)).collect();

            let covered = |coords: &[i32]| {
                cuboids.iter().any(|c| {
                    (0..c.n_dimensions()).all(|axis| {
                        coords[axis] >= c.offset()[axis] && coords[axis] < c.end_corner(axis)
                    })
                })
            };

            for (coords, value) in map.iter() {
                assert_eq!(covered(&coords), value, "cell {:?}", coords);
            }
        }
    }

    /// Evaluates a rendered sum-of-products string for one input
    /// assignment, letter `A` reading the assignment's lowest bit.
    fn eval_expression(expression: &str, assignment: usize) -> bool {
        if expression == "0" {
            return false;
        }
        if expression == "1" {
            return true;
        }
        expression.split(" + ").any(|term| {
            let mut result = true;
            let mut chars = term.chars().peekable();
            while let Some(letter) = chars.next() {
                let bit = (letter as u8 - b'A') as usize;
                let mut value = assignment >> bit & 1 == 1;
                if chars.peek() == Some(&'′') {
                    chars.next();
                    value = !value;
                }
                result &= value;
            }
            result
        })
    }

    #[test]
    fn test_expression_matches_every_small_table() {
        // Exhaustive over all 1-, 2- and 3-input truth tables: the emitted
        // expression must evaluate back to the table at every assignment.
        for n_input_bits in 1..=3usize {
            let len = 1 << n_input_bits;
            for bits in 0u32..1 << len {
                let table: Vec<bool> = (0..len).map(|i| bits >> i & 1 == 1).collect();
                let expression = minimize(&table).unwrap();
                for (assignment, &value) in table.iter().enumerate() {
                    assert_eq!(
                        eval_expression(&expression, assignment),
                        value,
                        "{n_input_bits} bits, table {bits:b}, assignment {assignment}: {expression}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_expression_matches_sampled_4bit_tables() {
        for seed in 0u32..64 {
            let table: Vec<bool> = (0..16).map(|i| (i * 31 + seed * 7) % 11 < 5).collect();
            let expression = minimize(&table).unwrap();
            for (assignment, &value) in table.iter().enumerate() {
                assert_eq!(
                    eval_expression(&expression, assignment),
                    value,
                    "seed {seed}, assignment {assignment}: {expression}"
                );
            }
        }
    }

    #[test]
    fn test_expression_is_deterministic() {
        let table: Vec<bool> = (0..16).map(|i: u32| i % 3 != 0).collect();
        let first = minimize(&table).unwrap();
        for _ in 0..5 {
            assert_eq!(minimize(&table).unwrap(), first);
        }
    }
}
