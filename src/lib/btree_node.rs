use std::cmp::Ordering;
use std::mem;

// Parallel key/value arrays plus child links; `children` is empty for a
// leaf, and an internal node with n keys holds exactly n + 1 children.
pub(super) struct Node<K, V> {
    pub(super) keys: Vec<K>,
    pub(super) values: Vec<V>,
    pub(super) children: Vec<Box<Node<K, V>>>,
}

impl<K: Ord, V> Node<K, V> {
    pub(super) fn leaf() -> Self {
        Node {
            keys: Vec::new(),
            values: Vec::new(),
            children: Vec::new(),
        }
    }

    pub(super) fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub(super) fn len(&self) -> usize {
        self.keys.len()
    }

    /// Finds the key. Returns Ok(index) if found, Err(index) if not.
    /// The index in Err is the child slot to descend into. Every key
    /// comparison performed is tallied into `cmp`.
    pub(super) fn find_slot(&self, key: &K, cmp: &mut u64) -> Result<usize, usize> {
        for (i, k) in self.keys.iter().enumerate() {
            *cmp += 1;
            match key.cmp(k) {
                Ordering::Less => return Err(i),
                Ordering::Equal => return Ok(i),
                Ordering::Greater => {}
            }
        }
        Err(self.keys.len())
    }

    pub(super) fn insert_at(&mut self, idx: usize, key: K, value: V) {
        self.keys.insert(idx, key);
        self.values.insert(idx, value);
    }

    pub(super) fn remove_at(&mut self, idx: usize) -> (K, V) {
        (self.keys.remove(idx), self.values.remove(idx))
    }

    /// Splits the full child at `idx` (2t − 1 keys). The median key moves
    /// up into `self` at `idx`; the right t − 1 keys (and right t children
    /// of an internal child) move into a new sibling at `idx + 1`.
    pub(super) fn split_child(&mut self, idx: usize, t: usize) {
        let child = &mut self.children[idx];
        debug_assert_eq!(child.len(), 2 * t - 1);

        let mid_key = child.keys.remove(t - 1);
        let mid_value = child.values.remove(t - 1);
        let right = Box::new(Node {
            keys: child.keys.split_off(t - 1),
            values: child.values.split_off(t - 1),
            children: if child.is_leaf() {
                Vec::new()
            } else {
                child.children.split_off(t)
            },
        });

        self.keys.insert(idx, mid_key);
        self.values.insert(idx, mid_value);
        self.children.insert(idx + 1, right);
    }

    /// Guarantees `children[idx]` holds at least t keys before a removal
    /// descends into it: borrow through the parent from a sibling with
    /// surplus, or merge with a sibling otherwise. Returns the index the
    /// child's content ends up at.
    pub(super) fn ensure_child_capacity(&mut self, idx: usize, t: usize) -> usize {
        if self.children[idx].len() >= t {
            return idx;
        }
        if idx > 0 && self.children[idx - 1].len() >= t {
            self.rotate_from_left(idx);
            idx
        } else if idx < self.len() && self.children[idx + 1].len() >= t {
            self.rotate_from_right(idx);
            idx
        } else if idx > 0 {
            self.merge_children(idx - 1);
            idx - 1
        } else {
            self.merge_children(idx);
            idx
        }
    }

    /// Right rotation through the parent: the separator at `idx - 1` drops
    /// into the front of `children[idx]` and the left sibling's last entry
    /// replaces it.
    fn rotate_from_left(&mut self, idx: usize) {
        let left = &mut self.children[idx - 1];
        let up_key = left.keys.pop().unwrap();
        let up_value = left.values.pop().unwrap();
        let moved_child = left.children.pop();

        let sep_key = mem::replace(&mut self.keys[idx - 1], up_key);
        let sep_value = mem::replace(&mut self.values[idx - 1], up_value);

        let child = &mut self.children[idx];
        child.keys.insert(0, sep_key);
        child.values.insert(0, sep_value);
        if let Some(grandchild) = moved_child {
            child.children.insert(0, grandchild);
        }
    }

    /// Left rotation through the parent: the separator at `idx` drops onto
    /// the back of `children[idx]` and the right sibling's first entry
    /// replaces it.
    fn rotate_from_right(&mut self, idx: usize) {
        let right = &mut self.children[idx + 1];
        let up_key = right.keys.remove(0);
        let up_value = right.values.remove(0);
        let moved_child = if right.is_leaf() {
            None
        } else {
            Some(right.children.remove(0))
        };

        let sep_key = mem::replace(&mut self.keys[idx], up_key);
        let sep_value = mem::replace(&mut self.values[idx], up_value);

        let child = &mut self.children[idx];
        child.keys.push(sep_key);
        child.values.push(sep_value);
        if let Some(grandchild) = moved_child {
            child.children.push(grandchild);
        }
    }

    /// Merges `children[idx]`, the separator at `idx`, and
    /// `children[idx + 1]` into a single node at `idx`. The right node is
    /// destroyed here; the parent loses one key and one child link.
    pub(super) fn merge_children(&mut self, idx: usize) {
        let sep_key = self.keys.remove(idx);
        let sep_value = self.values.remove(idx);
        let mut right = self.children.remove(idx + 1);

        let left = &mut self.children[idx];
        left.keys.push(sep_key);
        left.values.push(sep_value);
        left.keys.append(&mut right.keys);
        left.values.append(&mut right.values);
        left.children.append(&mut right.children);
    }
}
