//! Structural metrics reported by dictionary backends.

/// A point-in-time metrics record for one dictionary instance.
///
/// External benchmark harnesses read these on demand to tabulate
/// backend/size/metric rows; the core itself never writes any tabular or
/// file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DictMetrics {
    /// Number of entries currently stored.
    pub len: usize,
    /// Node levels in the backing structure. Zero for the flat hash table
    /// and for an empty tree.
    pub height: usize,
    /// Key comparisons performed by the most recent get/set/remove/contains.
    pub last_comparisons: u64,
}
