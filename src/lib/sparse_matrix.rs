//! Fixed-size logical matrix storing only explicitly-set entries.

use crate::dictionary::Dictionary;
use crate::errors::{Error, Result};
use crate::index_pair::IndexPair;
use crate::metrics::DictMetrics;

/// A rows × columns matrix backed by an injected dictionary keyed by
/// [`IndexPair`].
///
/// Like [`SparseVector`](crate::SparseVector), the backend is injected once
/// at construction and exclusively owned. Coordinates without an explicit
/// entry read as `V::default()`.
pub struct SparseMatrix<V> {
    rows: usize,
    cols: usize,
    entries: Box<dyn Dictionary<IndexPair, V>>,
}

impl<V: Clone + Default> SparseMatrix<V> {
    /// Creates a `rows` × `cols` matrix over `entries`.
    pub fn new(rows: usize, cols: usize, entries: Box<dyn Dictionary<IndexPair, V>>) -> Self {
        SparseMatrix {
            rows,
            cols,
            entries,
        }
    }

    /// The fixed row count.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The fixed column count.
    pub fn columns(&self) -> usize {
        self.cols
    }

    /// Number of explicitly stored entries.
    pub fn stored_len(&self) -> usize {
        self.entries.len()
    }

    /// Stores `value` at (`row`, `col`).
    ///
    /// Out-of-range coordinates signal [`Error::OutOfRange`] naming the
    /// offending axis. Storing the type's default value still creates an
    /// explicit entry.
    pub fn set_element(&mut self, row: usize, col: usize, value: V) -> Result<()> {
        self.check_bounds(row, col)?;
        self.entries.set(IndexPair::new(row, col), value);
        Ok(())
    }

    /// Reads the value at (`row`, `col`), falling back to `V::default()`
    /// when no explicit entry exists.
    pub fn get_element(&self, row: usize, col: usize) -> Result<V> {
        self.check_bounds(row, col)?;
        Ok(self
            .entries
            .get(&IndexPair::new(row, col))
            .cloned()
            .unwrap_or_default())
    }

    /// Drops the explicit entry at (`row`, `col`), if any. Removing an
    /// absent coordinate is a no-op.
    pub fn remove_element(&mut self, row: usize, col: usize) -> Result<()> {
        self.check_bounds(row, col)?;
        self.entries.remove(&IndexPair::new(row, col));
        Ok(())
    }

    /// Metrics of the backing dictionary, for instrumentation harnesses.
    pub fn backend_metrics(&self) -> DictMetrics {
        self.entries.metrics()
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows {
            return Err(Error::OutOfRange {
                index: row,
                bound: self.rows,
            });
        }
        if col >= self.cols {
            return Err(Error::OutOfRange {
                index: col,
                bound: self.cols,
            });
        }
        Ok(())
    }
}
