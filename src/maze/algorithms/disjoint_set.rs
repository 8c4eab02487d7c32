use std::hash::Hash;

use hashbrown::HashMap;

/// Union-find over arbitrary keys, without path compression or union by rank.
///
/// Two keys are in the same set exactly when [`find`](Self::find) returns the same
/// representative for both. `find` walks parent links, so it costs O(n) in the worst case.
#[derive(Debug, Clone)]
pub struct DisjointSet<K> {
    parents: HashMap<K, K>,
}

impl<K: Copy + Eq + Hash> DisjointSet<K> {
    pub fn new() -> Self {
        Self {
            parents: HashMap::new(),
        }
    }

    /// Every key starts as its own representative.
    pub fn from_keys(keys: impl IntoIterator<Item = K>) -> Self {
        Self {
            parents: keys.into_iter().map(|k| (k, k)).collect(),
        }
    }

    pub fn insert(&mut self, key: K) {
        self.parents.entry(key).or_insert(key);
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Follows parent links until a key that maps to itself. Unknown keys are their own
    /// representative.
    pub fn find(&self, key: K) -> K {
        let mut current = key;
        loop {
            match self.parents.get(&current) {
                Some(&parent) if parent != current => current = parent,
                _ => return current,
            }
        }
    }

    /// Points the representative of `a` at the representative of `b`.
    ///
    /// Returns `false` if both were already in the same set.
    pub fn union(&mut self, a: K, b: K) -> bool {
        let (root_a, root_b) = (self.find(a), self.find(b));
        if root_a == root_b {
            return false;
        }

        self.parents.insert(root_a, root_b);
        true
    }

    pub fn connected(&self, a: K, b: K) -> bool {
        self.find(a) == self.find(b)
    }
}

impl<K: Copy + Eq + Hash> Default for DisjointSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::DisjointSet;

    #[test]
    fn find_follows_links() {
        let mut sets = DisjointSet::from_keys([3, 4]);
        sets.union(4, 3);

        assert_eq!(sets.find(3), 3);
        assert_eq!(sets.find(4), 3);
    }

    #[test]
    fn find_is_idempotent() {
        let mut sets = DisjointSet::from_keys(0..10);
        sets.union(1, 2);
        sets.union(2, 5);
        sets.union(7, 1);

        for key in 0..10 {
            let root = sets.find(key);
            assert_eq!(sets.find(root), root);
        }
    }

    #[test]
    fn union_joins_sets() {
        let mut sets = DisjointSet::from_keys(0..6);
        assert!(!sets.connected(0, 5));

        assert!(sets.union(0, 1));
        assert!(sets.union(2, 3));
        assert!(sets.union(1, 3));
        assert!(!sets.union(0, 2));

        assert!(sets.connected(0, 3));
        assert_eq!(sets.find(0), sets.find(2));
        assert!(!sets.connected(0, 4));
        assert_eq!(sets.len(), 6);
    }

    #[test]
    fn unknown_keys_are_singletons() {
        let mut sets = DisjointSet::new();
        assert!(sets.is_empty());
        assert_eq!(sets.find('x'), 'x');

        sets.insert('x');
        sets.insert('y');
        sets.union('x', 'y');
        sets.insert('x');
        assert!(sets.connected('x', 'y'));
    }
}
