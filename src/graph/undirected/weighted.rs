use crate::graph::*;
use std::hash::Hash;

/// A weighted undirected graph backed by adjacency lists.
///
/// Adding an edge between `u` and `v` appends `v` to the adjacency of `u` and `u` to that of `v`,
/// both carrying the same weight.
/// So for every entry `u -> (v, w)` there is a matching `v -> (u, w)`.
#[derive(Clone)]
pub struct WeightedGraph<K, W>
where
    K: Hash + Eq,
{
    storage: AdjacencyStorage<K, W>,
}

impl<K: VertexKey, W: Weight> DirectedOrNot for WeightedGraph<K, W> {
    const DIRECTED_OR_NOT: bool = false;
}

impl<K: VertexKey, W: Weight> Default for WeightedGraph<K, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: VertexKey, W: Weight> WeightedGraph<K, W> {
    pub fn new() -> Self {
        Self {
            storage: AdjacencyStorage::new(),
        }
    }

    pub fn add_edge(&mut self, u: K, v: K, weight: W) -> WeightedEdge<W> {
        let source = self.storage.register(u);
        let sink = self.storage.register(v);
        self.storage.add_arc(source, sink, weight);
        self.storage.add_arc(sink, source, weight);
        self.storage.record_edge(source, sink, weight)
    }

    /// Neighbors of `key` and weights of edges connecting them, in insertion order.
    pub fn neighbors<'a>(&'a self, key: &K) -> impl Iterator<Item = (&'a K, W)> + 'a {
        self.storage.neighbors(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.storage.registry().keys()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.storage.registry().contains_key(key)
    }

    /// Sum of weights, counting each undirected edge once.
    ///
    /// [Distance::Infinite] if the sum does not fit in `W`.
    pub fn total_weight(&self) -> Distance<W> {
        Distance::sum(self.storage.iter_edges().map(|e| e.weight))
    }
}

impl<K: VertexKey, W: Weight> QueryableGraph for WeightedGraph<K, W> {
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

impl<K: VertexKey, W: Weight> WeightedQueryableGraph for WeightedGraph<K, W> {
    type Weight = W;

    fn iter_weighted_edges(&self) -> Box<dyn Iterator<Item = WeightedEdge<W>> + '_> {
        Box::new(self.storage.iter_edges())
    }

    fn weighted_out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = WeightedEdge<W>> + '_> {
        Box::new(self.storage.out_edges(v))
    }
}

impl<K: VertexKey, W: Weight> Extend<(K, K, W)> for WeightedGraph<K, W> {
    fn extend<T: IntoIterator<Item = (K, K, W)>>(&mut self, iter: T) {
        for (u, v, weight) in iter {
            self.add_edge(u, v, weight);
        }
    }
}

impl<K: VertexKey, W: Weight> FromIterator<(K, K, W)> for WeightedGraph<K, W> {
    fn from_iter<T: IntoIterator<Item = (K, K, W)>>(iter: T) -> Self {
        let mut res = Self::new();
        res.extend(iter);
        res
    }
}

impl<K: VertexKey, W: Weight> std::fmt::Debug for WeightedGraph<K, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "WeightedGraph {{")?;
        write!(f, "{:?}", self.debug().indent(2, 2))?;
        writeln!(f, "}}")
    }
}

/// One line per vertex, e.g., `a -> c(11), f(10)`.
impl<K, W> std::fmt::Display for WeightedGraph<K, W>
where
    K: VertexKey + std::fmt::Display,
    W: Weight + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for key in self.keys() {
            write!(f, "{} ->", key)?;
            for (i, (neighbor, weight)) in self.neighbors(key).enumerate() {
                let sep = if i == 0 { " " } else { ", " };
                write!(f, "{}{}({})", sep, neighbor, weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
