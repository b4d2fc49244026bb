//! Composite (row, column) key for matrix-shaped dictionaries.

use std::hash::{Hash, Hasher};

/// An immutable (row, column) pair used as a `SparseMatrix` dictionary key.
///
/// Equality and ordering derive from the field values, never from identity.
/// Ordering is row-major so a B-tree backend enumerates matrix entries in
/// reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct IndexPair {
    /// Row coordinate.
    pub row: usize,
    /// Column coordinate.
    pub col: usize,
}

impl IndexPair {
    /// Creates the pair (row, col).
    pub fn new(row: usize, col: usize) -> Self {
        IndexPair { row, col }
    }
}

impl Hash for IndexPair {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Multiply-and-add combine over both fields: equal pairs always
        // produce equal hashes regardless of insertion history, and (r, c)
        // is kept distinct from (c, r).
        let combined = (self.row as u64)
            .wrapping_mul(31)
            .wrapping_add(self.col as u64);
        state.write_u64(combined);
    }
}
