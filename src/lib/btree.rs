//! Order-t B-tree implementation of the dictionary contract.

use std::cell::Cell;
use std::collections::VecDeque;
use std::mem;

use crate::btree_iter::Iter;
use crate::btree_node::Node;
use crate::dictionary::Dictionary;
use crate::errors::{Error, Result};
use crate::metrics::DictMetrics;
use crate::snapshot::{NodeSnapshot, TreeSnapshot};

/// Minimum degree used by [`BTree::default`].
pub const DEFAULT_DEGREE: usize = 3;

/// A balanced search tree of minimum degree t.
///
/// Every non-root node holds between t − 1 and 2t − 1 keys, keys within a
/// node are strictly ascending, and all leaves sit at the same depth.
/// Insertion splits full nodes top-down on the way to the leaf; removal
/// rebalances minimal nodes (borrow from a sibling, else merge) before
/// descending, so both run in a single downward pass.
///
/// Nodes form an exclusive ownership tree: children are `Box`ed, created on
/// split and destroyed on merge, with no sharing or back-references.
pub struct BTree<K, V> {
    root: Option<Box<Node<K, V>>>,
    degree: usize,
    len: usize,
    comparisons: Cell<u64>,
}

impl<K: Ord, V> BTree<K, V> {
    /// Creates an empty tree of minimum degree `degree`.
    ///
    /// Signals [`Error::InvalidConfiguration`] when `degree < 2`; a tree of
    /// degree 1 could not satisfy the key-count invariants.
    pub fn new(degree: usize) -> Result<Self> {
        if degree < 2 {
            return Err(Error::InvalidConfiguration(format!(
                "minimum degree must be at least 2, got {}",
                degree
            )));
        }
        Ok(BTree {
            root: None,
            degree,
            len: 0,
            comparisons: Cell::new(0),
        })
    }

    /// The tree's minimum degree t.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Number of entries in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Node levels from root to leaf; 0 for the empty tree.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            height += 1;
            node = n.children.first().map(|child| &**child);
        }
        height
    }

    fn max_keys(&self) -> usize {
        2 * self.degree - 1
    }

    /// Upserts `value` under `key`, returning the previous value when the
    /// key was already present anywhere on the descent path.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        let t = self.degree;
        let max_keys = self.max_keys();
        let mut cmp = 0u64;

        let root = self.root.get_or_insert_with(|| Box::new(Node::leaf()));
        if root.len() == max_keys {
            // Full root: grow a new root above it before descending so the
            // entire path has room. This is the only way height increases.
            let old_root = mem::replace(root, Box::new(Node::leaf()));
            root.children.push(old_root);
            root.split_child(0, t);
        }

        let previous = Self::set_rec(root, key, value, t, &mut cmp);
        if previous.is_none() {
            self.len += 1;
        }
        self.comparisons.set(cmp);
        previous
    }

    // Every node entered here has room for one more key.
    fn set_rec(node: &mut Node<K, V>, key: K, value: V, t: usize, cmp: &mut u64) -> Option<V> {
        match node.find_slot(&key, cmp) {
            Ok(i) => Some(mem::replace(&mut node.values[i], value)),
            Err(i) => {
                if node.is_leaf() {
                    node.insert_at(i, key, value);
                    return None;
                }
                let mut idx = i;
                if node.children[i].len() == 2 * t - 1 {
                    node.split_child(i, t);
                    // The promoted median may equal or precede the key.
                    *cmp += 1;
                    match key.cmp(&node.keys[i]) {
                        std::cmp::Ordering::Less => {}
                        std::cmp::Ordering::Equal => {
                            return Some(mem::replace(&mut node.values[i], value));
                        }
                        std::cmp::Ordering::Greater => idx = i + 1,
                    }
                }
                Self::set_rec(&mut node.children[idx], key, value, t, cmp)
            }
        }
    }

    /// Returns a reference to the value stored under `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        let mut cmp = 0u64;
        let result = self
            .root
            .as_deref()
            .and_then(|root| Self::get_rec(root, key, &mut cmp));
        self.comparisons.set(cmp);
        result
    }

    fn get_rec<'a>(node: &'a Node<K, V>, key: &K, cmp: &mut u64) -> Option<&'a V> {
        match node.find_slot(key, cmp) {
            Ok(i) => Some(&node.values[i]),
            Err(i) => {
                if node.is_leaf() {
                    None
                } else {
                    Self::get_rec(&node.children[i], key, cmp)
                }
            }
        }
    }

    /// Returns true if `key` has an entry.
    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Deletes the entry for `key`, returning its value, or `None` when the
    /// key is absent from the whole path.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let t = self.degree;
        let mut cmp = 0u64;
        let removed = match self.root.as_deref_mut() {
            Some(root) => Self::remove_rec(root, key, t, &mut cmp),
            None => None,
        };
        self.comparisons.set(cmp);
        if removed.is_some() {
            self.len -= 1;
        }

        // A merge can leave the root keyless; its single remaining child
        // becomes the new root and height decreases by one. An emptied
        // leaf root leaves the tree empty.
        let root_drained = self.root.as_deref().map_or(false, |r| r.len() == 0);
        if root_drained {
            let mut old_root = self.root.take().unwrap();
            debug_assert!(old_root.children.len() <= 1);
            self.root = old_root.children.pop();
        }
        removed
    }

    fn remove_rec(node: &mut Node<K, V>, key: &K, t: usize, cmp: &mut u64) -> Option<V> {
        match node.find_slot(key, cmp) {
            Ok(i) => {
                if node.is_leaf() {
                    // Case 1: found in a leaf; delete directly.
                    let (_, value) = node.remove_at(i);
                    Some(value)
                } else if node.children[i].len() >= t {
                    // Case 2: replace with the predecessor (maximum of the
                    // left subtree), removed in the same downward pass.
                    let (pred_key, pred_value) = Self::remove_max(&mut node.children[i], t);
                    node.keys[i] = pred_key;
                    Some(mem::replace(&mut node.values[i], pred_value))
                } else if node.children[i + 1].len() >= t {
                    // Case 2, mirrored: successor from the right subtree.
                    let (succ_key, succ_value) = Self::remove_min(&mut node.children[i + 1], t);
                    node.keys[i] = succ_key;
                    Some(mem::replace(&mut node.values[i], succ_value))
                } else {
                    // Both subtrees minimal: merge them around the key and
                    // delete it from the merged child.
                    node.merge_children(i);
                    Self::remove_rec(&mut node.children[i], key, t, cmp)
                }
            }
            Err(i) => {
                if node.is_leaf() {
                    // Absent from the whole path.
                    return None;
                }
                // Case 3: rebalance a minimal child before descending.
                // Borrow through the parent from a sibling with surplus,
                // or merge with one and pull the separator down.
                let idx = node.ensure_child_capacity(i, t);
                Self::remove_rec(&mut node.children[idx], key, t, cmp)
            }
        }
    }

    fn remove_max(node: &mut Node<K, V>, t: usize) -> (K, V) {
        if node.is_leaf() {
            let last = node.len() - 1;
            return node.remove_at(last);
        }
        let idx = node.ensure_child_capacity(node.len(), t);
        Self::remove_max(&mut node.children[idx], t)
    }

    fn remove_min(node: &mut Node<K, V>, t: usize) -> (K, V) {
        if node.is_leaf() {
            return node.remove_at(0);
        }
        let idx = node.ensure_child_capacity(0, t);
        Self::remove_min(&mut node.children[idx], t)
    }

    /// Ascending in-order iterator over the entries.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.root.as_deref())
    }

    /// Exports the tree's shape for an external renderer: every node with a
    /// stable id, parent/child ids, depth, and its ordered entries. Ids are
    /// assigned breadth-first, so nodes of one level are contiguous.
    pub fn snapshot(&self) -> TreeSnapshot<K, V>
    where
        K: Clone,
        V: Clone,
    {
        let mut nodes: Vec<NodeSnapshot<K, V>> = Vec::new();
        let mut queue: VecDeque<(&Node<K, V>, Option<usize>, usize)> = VecDeque::new();
        if let Some(root) = self.root.as_deref() {
            queue.push_back((root, None, 0));
        }
        while let Some((node, parent, depth)) = queue.pop_front() {
            let id = nodes.len();
            if let Some(parent_id) = parent {
                nodes[parent_id].children.push(id);
            }
            nodes.push(NodeSnapshot {
                id,
                parent,
                depth,
                entries: node
                    .keys
                    .iter()
                    .cloned()
                    .zip(node.values.iter().cloned())
                    .collect(),
                children: Vec::new(),
            });
            for child in &node.children {
                queue.push_back((child.as_ref(), Some(id), depth + 1));
            }
        }
        TreeSnapshot { nodes }
    }
}

impl<K: Ord, V> Default for BTree<K, V> {
    fn default() -> Self {
        BTree {
            root: None,
            degree: DEFAULT_DEGREE,
            len: 0,
            comparisons: Cell::new(0),
        }
    }
}

impl<K: Ord, V> Extend<(K, V)> for BTree<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<'a, K: Ord, V> IntoIterator for &'a BTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Ord, V> Dictionary<K, V> for BTree<K, V> {
    fn set(&mut self, key: K, value: V) -> Option<V> {
        BTree::set(self, key, value)
    }

    fn get(&self, key: &K) -> Option<&V> {
        BTree::get(self, key)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        BTree::remove(self, key)
    }

    fn contains(&self, key: &K) -> bool {
        BTree::contains(self, key)
    }

    fn len(&self) -> usize {
        BTree::len(self)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(self.iter())
    }

    fn metrics(&self) -> DictMetrics {
        DictMetrics {
            len: self.len,
            height: self.height(),
            last_comparisons: self.comparisons.get(),
        }
    }
}
