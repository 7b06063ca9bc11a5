use crate::graph::*;
use std::hash::Hash;

/// Identifiers of vertices.
///
/// Keys must be totally ordered since several algorithms visit neighbors in lexicographic order.
pub trait VertexKey: Hash + Eq + Ord + Clone + std::fmt::Debug {}

impl<T> VertexKey for T where T: Hash + Eq + Ord + Clone + std::fmt::Debug {}

/// Read-only access to a graph through [VertexId]'s.
pub trait QueryableGraph {
    type Key: VertexKey;

    fn vertex_size(&self) -> usize;
    /// Iterates over vertices in the order they are registered.
    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;
    fn contains_vertex(&self, v: &VertexId) -> bool;
    fn vertex_key(&self, v: &VertexId) -> Option<&Self::Key>;
    fn vertex_id(&self, key: &Self::Key) -> Option<VertexId>;

    /// Total number of edges added, parallel edges and self-loops included.
    fn edge_size(&self) -> usize;
    /// Iterates over edges in the order they are added.
    /// An undirected edge is reported once.
    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_>;
    /// Iterates over out-edges of a vertex in the order they are added.
    /// For undirected graphs, every edge touching the vertex is reported with the vertex as its source.
    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_>;

    /// Sinks of out-edges of `v`, sorted by their keys.
    ///
    /// Sinks with equal keys (parallel edges) keep their insertion order.
    fn successors_by_key(&self, v: &VertexId) -> Vec<VertexId> {
        let mut res: Vec<_> = self.out_edges(v).map(|e| e.sink).collect();
        res.sort_by(|a, b| self.vertex_key(a).cmp(&self.vertex_key(b)));
        res
    }

    /// Translates vertex ID's back to their keys.
    fn keys_of<I>(&self, vertices: I) -> Vec<Self::Key>
    where
        I: IntoIterator<Item = VertexId>,
        Self: Sized,
    {
        vertices
            .into_iter()
            .filter_map(|v| self.vertex_key(&v).cloned())
            .collect()
    }

    fn debug(&self) -> GraphDebug<'_, Self>
    where
        Self: Sized + DirectedOrNot,
    {
        GraphDebug::new(self)
    }
}

/// Read-only access to edge weights.
pub trait WeightedQueryableGraph: QueryableGraph {
    type Weight: Weight;

    /// Iterates over weighted edges in the order they are added.
    /// An undirected edge is reported once.
    fn iter_weighted_edges(&self) -> Box<dyn Iterator<Item = WeightedEdge<Self::Weight>> + '_>;
    /// Weighted version of [QueryableGraph::out_edges].
    fn weighted_out_edges(
        &self,
        v: &VertexId,
    ) -> Box<dyn Iterator<Item = WeightedEdge<Self::Weight>> + '_>;
}

pub trait DirectedOrNot {
    const DIRECTED_OR_NOT: bool;
}
