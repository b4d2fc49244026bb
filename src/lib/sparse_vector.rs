//! Fixed-length logical vector storing only explicitly-set entries.

use crate::dictionary::Dictionary;
use crate::errors::{Error, Result};
use crate::metrics::DictMetrics;

/// A vector of fixed logical length backed by an injected dictionary keyed
/// by index.
///
/// The dictionary instance is chosen exactly once at construction and owned
/// exclusively by the vector for its whole lifetime, so the container works
/// unmodified over any backend. Indices without an explicit entry read as
/// `V::default()`.
pub struct SparseVector<V> {
    length: usize,
    entries: Box<dyn Dictionary<usize, V>>,
}

impl<V: Clone + Default> SparseVector<V> {
    /// Creates a vector of logical length `length` over `entries`.
    pub fn new(length: usize, entries: Box<dyn Dictionary<usize, V>>) -> Self {
        SparseVector { length, entries }
    }

    /// The fixed logical length.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of explicitly stored entries.
    pub fn stored_len(&self) -> usize {
        self.entries.len()
    }

    /// Stores `value` at `index`.
    ///
    /// Out-of-range indices signal [`Error::OutOfRange`]. Storing the
    /// type's default value still creates an explicit entry.
    pub fn set_element(&mut self, index: usize, value: V) -> Result<()> {
        self.check_bounds(index)?;
        self.entries.set(index, value);
        Ok(())
    }

    /// Reads the value at `index`, falling back to `V::default()` for
    /// indices without an explicit entry. Absence is never surfaced as an
    /// error; only out-of-range indices are.
    pub fn get_element(&self, index: usize) -> Result<V> {
        self.check_bounds(index)?;
        Ok(self.entries.get(&index).cloned().unwrap_or_default())
    }

    /// Drops the explicit entry at `index`, if any; the index reads as the
    /// default value afterwards. Removing an absent index is a no-op.
    pub fn remove_element(&mut self, index: usize) -> Result<()> {
        self.check_bounds(index)?;
        self.entries.remove(&index);
        Ok(())
    }

    /// Metrics of the backing dictionary, for instrumentation harnesses.
    pub fn backend_metrics(&self) -> DictMetrics {
        self.entries.metrics()
    }

    fn check_bounds(&self, index: usize) -> Result<()> {
        if index >= self.length {
            return Err(Error::OutOfRange {
                index,
                bound: self.length,
            });
        }
        Ok(())
    }
}
