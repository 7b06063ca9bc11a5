use crate::graph::*;
use std::hash::Hash;

/// A weighted directed graph backed by adjacency lists.
///
/// Both endpoints of an edge are registered,
/// so sinks without out-edges still take part in "for every vertex" loops,
/// e.g., initializing distances in [crate::algorithm::ShortestPath::dijkstra].
#[derive(Clone)]
pub struct DirectedWeightedGraph<K, W>
where
    K: Hash + Eq,
{
    storage: AdjacencyStorage<K, W>,
}

impl<K: VertexKey, W: Weight> DirectedOrNot for DirectedWeightedGraph<K, W> {
    const DIRECTED_OR_NOT: bool = true;
}

impl<K: VertexKey, W: Weight> Default for DirectedWeightedGraph<K, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: VertexKey, W: Weight> DirectedWeightedGraph<K, W> {
    pub fn new() -> Self {
        Self {
            storage: AdjacencyStorage::new(),
        }
    }

    pub fn add_edge(&mut self, from: K, to: K, weight: W) -> WeightedEdge<W> {
        let source = self.storage.register(from);
        let sink = self.storage.register(to);
        self.storage.add_arc(source, sink, weight);
        self.storage.record_edge(source, sink, weight)
    }

    /// Successors of `key` and weights of edges leading to them, in insertion order.
    pub fn neighbors<'a>(&'a self, key: &K) -> impl Iterator<Item = (&'a K, W)> + 'a {
        self.storage.neighbors(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.storage.registry().keys()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.storage.registry().contains_key(key)
    }
}

impl<K: VertexKey, W: Weight> QueryableGraph for DirectedWeightedGraph<K, W> {
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

impl<K: VertexKey, W: Weight> WeightedQueryableGraph for DirectedWeightedGraph<K, W> {
    type Weight = W;

    fn iter_weighted_edges(&self) -> Box<dyn Iterator<Item = WeightedEdge<W>> + '_> {
        Box::new(self.storage.iter_edges())
    }

    fn weighted_out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = WeightedEdge<W>> + '_> {
        Box::new(self.storage.out_edges(v))
    }
}

impl<K: VertexKey, W: Weight> Extend<(K, K, W)> for DirectedWeightedGraph<K, W> {
    fn extend<T: IntoIterator<Item = (K, K, W)>>(&mut self, iter: T) {
        for (from, to, weight) in iter {
            self.add_edge(from, to, weight);
        }
    }
}

impl<K: VertexKey, W: Weight> FromIterator<(K, K, W)> for DirectedWeightedGraph<K, W> {
    fn from_iter<T: IntoIterator<Item = (K, K, W)>>(iter: T) -> Self {
        let mut res = Self::new();
        res.extend(iter);
        res
    }
}

impl<K: VertexKey, W: Weight> std::fmt::Debug for DirectedWeightedGraph<K, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "DirectedWeightedGraph {{")?;
        write!(f, "{:?}", self.debug().indent(2, 2))?;
        writeln!(f, "}}")
    }
}
