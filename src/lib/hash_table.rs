//! Chained hash-table implementation of the dictionary contract.

use std::cell::Cell;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::iter;
use std::mem;

use crate::dictionary::Dictionary;
use crate::metrics::DictMetrics;

const INITIAL_BUCKETS: usize = 16;

// Grow once len / buckets exceeds 3/4.
const LOAD_NUM: usize = 3;
const LOAD_DEN: usize = 4;

/// A hash table with separate chaining.
///
/// Each bucket is an ordered collision chain; removal splices the chain, so
/// no tombstone bookkeeping is needed. When the load factor passes 3/4 the
/// bucket array doubles and every entry is rehashed, keeping set/get/remove
/// amortized O(1).
pub struct HashTable<K, V> {
    buckets: Vec<Vec<(K, V)>>,
    len: usize,
    comparisons: Cell<u64>,
}

impl<K: Hash + Eq, V> HashTable<K, V> {
    /// Creates an empty table with the default bucket count.
    pub fn new() -> Self {
        Self::with_buckets(INITIAL_BUCKETS)
    }

    /// Creates an empty table with at least `buckets` buckets.
    pub fn with_buckets(buckets: usize) -> Self {
        let buckets = buckets.max(1);
        HashTable {
            buckets: iter::repeat_with(Vec::new).take(buckets).collect(),
            len: 0,
            comparisons: Cell::new(0),
        }
    }

    /// Current bucket count.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    fn bucket_index(&self, key: &K) -> usize {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        (hasher.finish() as usize) % self.buckets.len()
    }

    fn over_loaded(&self) -> bool {
        self.len * LOAD_DEN > self.buckets.len() * LOAD_NUM
    }

    fn grow(&mut self) {
        let doubled = self.buckets.len() * 2;
        let old = mem::replace(
            &mut self.buckets,
            iter::repeat_with(Vec::new).take(doubled).collect(),
        );
        for bucket in old {
            for (key, value) in bucket {
                let idx = self.bucket_index(&key);
                self.buckets[idx].push((key, value));
            }
        }
    }
}

impl<K: Hash + Eq, V> Default for HashTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V> Dictionary<K, V> for HashTable<K, V> {
    fn set(&mut self, key: K, value: V) -> Option<V> {
        let idx = self.bucket_index(&key);
        let mut cmp = 0u64;
        let bucket = &mut self.buckets[idx];
        for slot in bucket.iter_mut() {
            cmp += 1;
            if slot.0 == key {
                self.comparisons.set(cmp);
                return Some(mem::replace(&mut slot.1, value));
            }
        }
        bucket.push((key, value));
        self.len += 1;
        self.comparisons.set(cmp);
        if self.over_loaded() {
            self.grow();
        }
        None
    }

    fn get(&self, key: &K) -> Option<&V> {
        let idx = self.bucket_index(key);
        let mut cmp = 0u64;
        for (k, v) in &self.buckets[idx] {
            cmp += 1;
            if k == key {
                self.comparisons.set(cmp);
                return Some(v);
            }
        }
        self.comparisons.set(cmp);
        None
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        let idx = self.bucket_index(key);
        let mut cmp = 0u64;
        let bucket = &mut self.buckets[idx];
        let mut found = None;
        for (pos, (k, _)) in bucket.iter().enumerate() {
            cmp += 1;
            if k == key {
                found = Some(pos);
                break;
            }
        }
        self.comparisons.set(cmp);
        let pos = found?;
        let (_, value) = bucket.remove(pos);
        self.len -= 1;
        Some(value)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(
            self.buckets
                .iter()
                .flat_map(|bucket| bucket.iter().map(|(k, v)| (k, v))),
        )
    }

    fn metrics(&self) -> DictMetrics {
        DictMetrics {
            len: self.len,
            height: 0,
            last_comparisons: self.comparisons.get(),
        }
    }
}
