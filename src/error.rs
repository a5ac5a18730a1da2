//! Error types for kmap-rs.

use thiserror::Error;

/// Errors surfaced while building core structures from caller input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KmapError {
    /// A truth table lists one output per assignment of its input bits,
    /// so a valid table always has a length that is an exact power of two.
    /// The table is never truncated or padded to fit.
    #[error("truth table length {0} is not a power of two")]
    TruthTableNotPowerOfTwo(usize),
}
