//! Sum-of-products rendering.
//!
//! Each group becomes one product term. Per axis, the group's span decides
//! what the input variables of that axis contribute: a single cell pins
//! them all, a 2-cell span pins the one variable that is constant across it
//! (which one depends on where the span sits in the Gray order), and a
//! full-axis span pins none. Inputs are lettered `A`, `B`, `C`, ... in
//! truth-table bit order, with a prime mark for negation.

use std::collections::HashSet;

use itertools::Itertools;

use crate::group::Group;
use crate::map::GRAY_ORDER;

// Literal codes, relative to an axis's base: the axis's first input bit
// asserted or negated, then its second.
const A: u8 = 0;
const NOT_A: u8 = 1;
const B: u8 = 2;
const NOT_B: u8 = 3;

/// The literal a 2-cell span starting at each offset pins. In Gray order
/// `00,01,11,10`, offsets 0 and 2 hold the second bit constant, offsets 1
/// and 3 the first.
const SPAN_TWO_CONSTANT: [u8; 4] = [NOT_B, A, B, NOT_A];

/// Renders a set of groups as a sum-of-products string, like `AB′ + A′B`.
///
/// The empty set renders as `0` and a term with no pinned literals (the
/// whole-map group) as `1`. Terms are emitted in the groups' natural order,
/// so equal sets always render identically.
pub fn generate_expression(groups: &HashSet<Group>, n_input_bits: usize) -> String {
    if groups.is_empty() {
        return "0".to_owned();
    }

    groups
        .iter()
        .sorted()
        .map(|group| render_term(&literals_for_group(group, n_input_bits)))
        .join(" + ")
}

fn render_term(literals: &[u8]) -> String {
    if literals.is_empty() {
        return "1".to_owned();
    }
    literals
        .iter()
        .map(|&code| {
            let letter = (b'A' + code / 2) as char;
            if code % 2 == 1 {
                format!("{letter}′")
            } else {
                letter.to_string()
            }
        })
        .collect()
}

/// The literal codes a group pins, in input-bit order.
///
/// A width-2 final axis carries one input instead of two: a single cell
/// there pins just that input, and its 2-cell span (the whole axis) pins
/// nothing.
fn literals_for_group(group: &Group, n_input_bits: usize) -> Vec<u8> {
    let n_dimensions = (n_input_bits + 1) / 2;
    let mut literals = Vec::new();
    for axis in 0..group.n_dimensions() {
        let base = (axis * 4) as u8;
        let offset = group.offset()[axis] as usize;
        let two_variables = n_input_bits % 2 == 0 || axis + 1 < n_dimensions;
        match group.size()[axis] {
            0 => {
                let gray = GRAY_ORDER[offset];
                literals.push(base + if gray & 0b1 == 1 { A } else { NOT_A });
                if two_variables {
                    literals.push(base + if gray >> 1 & 0b1 == 1 { B } else { NOT_B });
                }
            }
            1 if two_variables => literals.push(base + SPAN_TWO_CONSTANT[offset]),
            _ => {}
        }
    }
    literals
}
