//! The dictionary capability contract shared by all backends.

use crate::errors::{Error, Result};
use crate::metrics::DictMetrics;

/// A key-value mapping with unique keys and a substitutable backend.
///
/// Any conforming implementation is a drop-in replacement wherever a
/// dictionary is required; the sparse containers hold one as a
/// `Box<dyn Dictionary<K, V>>` chosen once at construction. Absent keys are
/// signalled with `None` rather than an error so callers can decide whether
/// absence is recoverable.
pub trait Dictionary<K, V> {
    /// Upserts `value` under `key`, returning the previous value if the key
    /// was already present.
    fn set(&mut self, key: K, value: V) -> Option<V>;

    /// Returns the stored value for `key`, or `None` if absent.
    fn get(&self, key: &K) -> Option<&V>;

    /// Deletes the entry for `key`, returning its value. Returns `None`
    /// (and leaves the size unchanged) if the key is absent.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Like [`get`](Self::get), but promotes absence into
    /// [`Error::NotFound`] for callers that treat it as a failure rather
    /// than a recoverable condition.
    fn try_get(&self, key: &K) -> Result<&V> {
        self.get(key).ok_or(Error::NotFound)
    }

    /// Returns true if `key` has a stored entry.
    fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Number of entries currently stored.
    fn len(&self) -> usize;

    /// Returns true if no entries are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A lazy, finite pass over all entries in backend-defined order.
    /// Each call starts a fresh pass. The hash table gives no ordering
    /// guarantee; the B-tree enumerates in ascending key order.
    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_>;

    /// Structural metrics for instrumentation harnesses: current size,
    /// height, and the comparison count of the most recent operation.
    fn metrics(&self) -> DictMetrics;
}
