use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::InvariantViolation;

/// Disjoint sets over arbitrary keys, stored as a parent map.
///
/// A key whose parent is itself is the representative of its set.
#[derive(Clone, Debug)]
pub struct UnionFind<K> {
    parents: HashMap<K, K>,
}

impl<K> UnionFind<K>
where
    K: Copy + Eq + Hash + Debug,
{
    /// Every key starts out in a set of its own.
    pub fn new(keys: impl IntoIterator<Item = K>) -> Self {
        Self { parents: keys.into_iter().map(|key| (key, key)).collect() }
    }

    /// Adopt an existing `(key, parent)` mapping as is. Following parents from any key must reach a root.
    pub fn from_parents(parents: impl IntoIterator<Item = (K, K)>) -> Self {
        Self { parents: parents.into_iter().collect() }
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    fn parent_of(&self, key: K) -> Result<K, InvariantViolation> {
        self.parents
            .get(&key)
            .copied()
            .ok_or_else(|| InvariantViolation::MissingRepresentative(format!("{key:?}")))
    }

    /// The representative of `key`'s set.
    ///
    /// Every key visited on the way up is re-pointed straight at the root.
    pub fn find(&mut self, key: K) -> Result<K, InvariantViolation> {
        let mut root = key;
        loop {
            let parent = self.parent_of(root)?;
            if parent == root {
                break;
            }
            root = parent;
        }

        let mut current = key;
        while current != root {
            let next = self.parent_of(current)?;
            self.parents.insert(current, root);
            current = next;
        }

        Ok(root)
    }

    /// Merge the sets of `a` and `b` by pointing `b`'s representative at `a`'s.
    ///
    /// Returns `false` without changing anything if they already share a set.
    pub fn union(&mut self, a: K, b: K) -> Result<bool, InvariantViolation> {
        let root_a = self.find(a)?;
        let root_b = self.find(b)?;
        if root_a == root_b {
            return Ok(false);
        }

        self.parents.insert(root_b, root_a);
        Ok(true)
    }

    /// Number of distinct sets.
    pub fn set_count(&self) -> usize {
        self.parents.iter().filter(|(key, parent)| key == parent).count()
    }
}
