use crate::graph::*;
use std::hash::Hash;

/// Index-addressed adjacency lists shared by all graphs of this crate.
///
/// `arcs[v]` holds out-going arcs of `v` in insertion order.
/// `edges` records every edge once, as it is added.
/// An undirected edge owns two arcs but only one record.
#[derive(Clone)]
pub(crate) struct AdjacencyStorage<K, W>
where
    K: Hash + Eq,
{
    registry: VertexRegistry<K>,
    arcs: Vec<Vec<(VertexId, W)>>,
    edges: Vec<WeightedEdge<W>>,
}

impl<K, W> AdjacencyStorage<K, W>
where
    K: VertexKey,
    W: Copy,
{
    pub fn new() -> Self {
        Self {
            registry: VertexRegistry::new(),
            arcs: vec![],
            edges: vec![],
        }
    }

    pub fn register(&mut self, key: K) -> VertexId {
        let (vid, fresh) = self.registry.register(key);
        if fresh {
            self.arcs.push(vec![]);
        }
        vid
    }

    pub fn add_arc(&mut self, source: VertexId, sink: VertexId, weight: W) {
        self.arcs[source.to_raw()].push((sink, weight));
    }

    pub fn record_edge(&mut self, source: VertexId, sink: VertexId, weight: W) -> WeightedEdge<W> {
        let e = WeightedEdge {
            source,
            sink,
            weight,
        };
        self.edges.push(e);
        e
    }

    pub fn registry(&self) -> &VertexRegistry<K> {
        &self.registry
    }

    pub fn vertex_size(&self) -> usize {
        self.arcs.len()
    }

    pub fn edge_size(&self) -> usize {
        self.edges.len()
    }

    pub fn iter_edges(&self) -> impl Iterator<Item = WeightedEdge<W>> + '_ {
        self.edges.iter().copied()
    }

    pub fn out_edges(&self, v: &VertexId) -> impl Iterator<Item = WeightedEdge<W>> + '_ {
        let source = *v;
        self.arcs
            .get(v.to_raw())
            .into_iter()
            .flatten()
            .map(move |(sink, weight)| WeightedEdge {
                source,
                sink: *sink,
                weight: *weight,
            })
    }

    /// Neighbors of a key in insertion order, empty for unknown keys.
    pub fn neighbors<'a>(&'a self, key: &K) -> impl Iterator<Item = (&'a K, W)> + 'a {
        let vid = self.registry.id_of(key);
        vid.into_iter()
            .flat_map(move |v| self.out_edges(&v))
            .filter_map(move |e| self.registry.key_of(&e.sink).map(|k| (k, e.weight)))
    }
}
