use crate::graph::*;
use std::hash::Hash;

/// An unweighted directed graph backed by adjacency lists.
///
/// | Operation       | Complexity                     |
/// | --------------- | ------------------------------ |
/// | `add_edge`      | amortized $O(1)$ plus hashing  |
/// | `neighbors`     | $O(1)$ plus hashing to start   |
/// | `out_edges`     | $O(1)$ to start                |
/// | `vertex_key`    | $O(1)$ expected                |
/// | `vertex_id`     | $O(1)$ expected                |
#[derive(Clone)]
pub struct Graph<K>
where
    K: Hash + Eq,
{
    storage: AdjacencyStorage<K, ()>,
}

impl<K: VertexKey> DirectedOrNot for Graph<K> {
    const DIRECTED_OR_NOT: bool = true;
}

impl<K: VertexKey> Default for Graph<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: VertexKey> Graph<K> {
    pub fn new() -> Self {
        Self {
            storage: AdjacencyStorage::new(),
        }
    }

    /// Adds an edge from `from` to `to`, registering both endpoints if they are new.
    pub fn add_edge(&mut self, from: K, to: K) -> Edge {
        let source = self.storage.register(from);
        let sink = self.storage.register(to);
        self.storage.add_arc(source, sink, ());
        self.storage.record_edge(source, sink, ()).unweighted()
    }

    /// Successors of `key` in insertion order.
    ///
    /// An unknown key is an isolated vertex, with no successors.
    pub fn neighbors<'a>(&'a self, key: &K) -> impl Iterator<Item = &'a K> + 'a {
        self.storage.neighbors(key).map(|(k, _)| k)
    }

    /// Keys in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.storage.registry().keys()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.storage.registry().contains_key(key)
    }
}

impl<K: VertexKey> QueryableGraph for Graph<K> {
    type Key = K;

    fn vertex_size(&self) -> usize {
        self.storage.vertex_size()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.storage.registry().ids())
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        self.storage.registry().contains_id(v)
    }

    fn vertex_key(&self, v: &VertexId) -> Option<&K> {
        self.storage.registry().key_of(v)
    }

    fn vertex_id(&self, key: &K) -> Option<VertexId> {
        self.storage.registry().id_of(key)
    }

    fn edge_size(&self) -> usize {
        self.storage.edge_size()
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        Box::new(self.storage.iter_edges().map(|e| e.unweighted()))
    }

    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        Box::new(self.storage.out_edges(v).map(|e| e.unweighted()))
    }
}

impl<K: VertexKey> Extend<(K, K)> for Graph<K> {
    fn extend<T: IntoIterator<Item = (K, K)>>(&mut self, iter: T) {
        for (from, to) in iter {
            self.add_edge(from, to);
        }
    }
}

impl<K: VertexKey> FromIterator<(K, K)> for Graph<K> {
    fn from_iter<T: IntoIterator<Item = (K, K)>>(iter: T) -> Self {
        let mut res = Self::new();
        res.extend(iter);
        res
    }
}

impl<K: VertexKey> std::fmt::Debug for Graph<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Graph {{")?;
        write!(f, "{:?}", self.debug().indent(2, 2))?;
        writeln!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_registered() {
        let mut g = Graph::new();
        g.add_edge("a", "b");
        g.add_edge("a", "c");
        g.add_edge("c", "a");
        assert_eq!(g.keys().collect::<Vec<_>>(), vec![&"a", &"b", &"c"]);
        assert_eq!(g.vertex_size(), 3);
        assert_eq!(g.edge_size(), 3);
        assert_eq!(g.neighbors(&"a").collect::<Vec<_>>(), vec![&"b", &"c"]);
        assert_eq!(g.neighbors(&"b").count(), 0);
    }

    #[test]
    fn unknown_key_has_no_neighbors() {
        let g: Graph<&str> = [("a", "b")].into_iter().collect();
        assert!(!g.contains(&"x"));
        assert_eq!(g.neighbors(&"x").count(), 0);
    }

    #[test]
    fn parallel_edges_are_kept() {
        let mut g = Graph::new();
        g.add_edge('a', 'b');
        g.add_edge('a', 'b');
        g.add_edge('a', 'a');
        assert_eq!(g.neighbors(&'a').collect::<Vec<_>>(), vec![&'b', &'b', &'a']);
        assert_eq!(g.edge_size(), 3);
    }

    #[test]
    fn successors_sorted_without_touching_insertion_order() {
        let mut g = Graph::new();
        g.add_edge("a", "d");
        g.add_edge("a", "b");
        g.add_edge("a", "c");
        let a = g.vertex_id(&"a").unwrap();
        assert_eq!(g.keys_of(g.successors_by_key(&a)), vec!["b", "c", "d"]);
        assert_eq!(g.neighbors(&"a").collect::<Vec<_>>(), vec![&"d", &"b", &"c"]);
    }

    #[test]
    fn debug() {
        let mut g = Graph::new();
        g.add_edge("a", "b");
        let trial = format!("{:?}", g);
        assert_eq!(trial, "Graph {\n  \"a\"\n    -> \"b\"\n  \"b\"\n}\n");
    }
}
