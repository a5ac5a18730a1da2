//! Boolean function minimization through generalized Karnaugh maps.
//!
//! A truth table of any power-of-two length is laid out on an N-dimensional
//! Gray-code-ordered map, where every axis encodes two input bits (one on
//! the final axis when the bit count is odd). Rectangular boxes of true
//! cells with power-of-two side lengths, wrap-around included, correspond
//! to short product terms; the crate finds the maximal boxes with
//! summed-area queries, prunes the redundant ones, and prints the rest as a
//! sum-of-products expression.
//!
//! # Quick start
//!
//! ```
//! use kmap_rs::minimize::minimize;
//!
//! // f(A, B) = A OR B, table indexed with A in the low bit.
//! let expression = minimize(&[false, true, true, true]).unwrap();
//! assert_eq!(expression, "A + B");
//! ```
//!
//! The pipeline stages are usable on their own: [`map`] builds the grid,
//! [`prefix`] the wrapping summed-area table over it, [`discover`] the
//! candidate groups, [`reduce`] prunes them, and [`expr`] renders the
//! survivors. [`minimize`] wires the stages together.

pub mod cuboid;
pub mod discover;
pub mod error;
pub mod expr;
pub mod grid;
pub mod group;
pub mod map;
pub mod minimize;
pub mod prefix;
pub mod reduce;
pub mod utils;
