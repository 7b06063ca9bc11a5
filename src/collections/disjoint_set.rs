use ahash::RandomState;
use std::collections::HashMap;
use std::hash::Hash;

/// Union-find over arbitrary elements, with path compression.
///
/// Every element starts as the representative of its own set.
/// `union` hangs the root of the first set under the root of the second;
/// sets are not balanced by rank or size.
#[derive(Clone, Debug)]
pub struct DisjointSet<T>
where
    T: Hash + Eq,
{
    parent: HashMap<T, T, RandomState>,
}

impl<T> Default for DisjointSet<T>
where
    T: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DisjointSet<T>
where
    T: Hash + Eq + Clone,
{
    pub fn new() -> Self {
        Self {
            parent: HashMap::with_hasher(RandomState::new()),
        }
    }

    /// Makes `x` a singleton set, unless it is already known.
    pub fn make_set(&mut self, x: T) {
        if !self.parent.contains_key(&x) {
            self.parent.insert(x.clone(), x);
        }
    }

    /// Returns the representative of the set containing `x`,
    /// or `None` if `x` is unknown.
    ///
    /// Every element on the way up is re-parented directly to the representative.
    pub fn find(&mut self, x: &T) -> Option<T> {
        let mut root = self.parent.get(x)?.clone();
        let mut path = vec![x.clone()];
        loop {
            let up = self.parent.get(&root)?;
            if *up == root {
                break;
            }
            path.push(root);
            root = up.clone();
        }
        for node in path {
            self.parent.insert(node, root.clone());
        }
        Some(root)
    }

    /// Merges sets containing `x` and `y`, registering unknown elements first.
    ///
    /// Returns `false` if they were already in the same set.
    pub fn union(&mut self, x: &T, y: &T) -> bool {
        self.make_set(x.clone());
        self.make_set(y.clone());
        match (self.find(x), self.find(y)) {
            (Some(rx), Some(ry)) if rx != ry => {
                self.parent.insert(rx, ry);
                true
            }
            _ => false,
        }
    }

    /// Whether `x` and `y` are both known and in the same set.
    pub fn same_set(&mut self, x: &T, y: &T) -> bool {
        match (self.find(x), self.find(y)) {
            (Some(rx), Some(ry)) => rx == ry,
            _ => false,
        }
    }

    /// Number of known elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
