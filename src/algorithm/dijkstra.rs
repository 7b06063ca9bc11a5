use crate::{collections::PriorityQueue, graph::*, Error, Result};
use ahash::RandomState;
use log::{debug, trace};
use std::collections::HashMap;

/// Single-source shortest paths, as computed by [ShortestPath::dijkstra].
#[derive(Debug, Clone)]
pub struct ShortestPaths<K, W>
where
    K: VertexKey,
{
    source: K,
    distances: HashMap<K, Distance<W>, RandomState>,
    predecessors: HashMap<K, K, RandomState>,
    finalized: Vec<K>,
    relax_attempts: usize,
    relax_changes: usize,
}

impl<K: VertexKey, W: Weight> ShortestPaths<K, W> {
    pub fn source(&self) -> &K {
        &self.source
    }

    /// Tentative distance from the source when the search ends.
    ///
    /// [Distance::Infinite] for unreachable vertices and `None` for unknown ones.
    pub fn distance(&self, key: &K) -> Option<Distance<W>> {
        self.distances.get(key).copied()
    }

    /// The vertex before `key` on a shortest path from the source.
    pub fn predecessor(&self, key: &K) -> Option<&K> {
        self.predecessors.get(key)
    }

    /// A shortest path from the source to `key`, both ends included.
    ///
    /// `None` if `key` is unknown or unreachable.
    pub fn path_to(&self, key: &K) -> Option<Vec<K>> {
        if !self.distance(key)?.is_finite() {
            return None;
        }
        let mut path = vec![key.clone()];
        let mut cur = key;
        // a predecessor chain never revisits a vertex
        while *cur != self.source && path.len() <= self.distances.len() {
            cur = self.predecessors.get(cur)?;
            path.push(cur.clone());
        }
        path.reverse();
        Some(path)
    }

    /// Vertices in the order they leave the queue.
    pub fn finalized(&self) -> &[K] {
        &self.finalized
    }

    /// Edges examined, including those into already finalized vertices.
    pub fn relax_attempts(&self) -> usize {
        self.relax_attempts
    }

    /// Edges whose relaxation shortened a distance.
    pub fn relax_changes(&self) -> usize {
        self.relax_changes
    }

    /// Iterates over all vertices and their distances, in no particular order.
    pub fn iter_distances(&self) -> impl Iterator<Item = (&K, Distance<W>)> + '_ {
        self.distances.iter().map(|(k, d)| (k, *d))
    }
}

pub trait ShortestPath
where
    Self: WeightedQueryableGraph + Sized,
{
    /// Dijkstra's algorithm from `source`.
    ///
    /// Every vertex is queued up front, in registration order, at its tentative distance.
    /// Out-edges of a dequeued vertex are all relaxed, even those into finalized vertices.
    /// Negative weights are not detected and give meaningless distances.
    fn dijkstra(&self, source: &Self::Key) -> Result<ShortestPaths<Self::Key, Self::Weight>> {
        let source_id = self
            .vertex_id(source)
            .ok_or_else(|| Error::vertex_not_found(source))?;
        let n = self.vertex_size();
        let mut dist = vec![Distance::Infinite; n];
        dist[source_id.to_raw()] = Distance::zero();
        let mut prev: Vec<Option<VertexId>> = vec![None; n];
        let mut queue = PriorityQueue::with_capacity(n);
        queue.extend(self.iter_vertices().map(|v| (v, dist[v.to_raw()])));
        let mut finalized = Vec::with_capacity(n);
        let mut relax_attempts = 0;
        let mut relax_changes = 0;
        while let Some(u) = queue.dequeue() {
            finalized.push(u);
            for e in self.weighted_out_edges(&u) {
                relax_attempts += 1;
                let candidate = dist[u.to_raw()].extend(e.weight);
                if candidate < dist[e.sink.to_raw()] {
                    trace!(
                        "{:?} -> {:?}: {:?} to {:?}",
                        self.vertex_key(&u),
                        self.vertex_key(&e.sink),
                        dist[e.sink.to_raw()],
                        candidate
                    );
                    dist[e.sink.to_raw()] = candidate;
                    prev[e.sink.to_raw()] = Some(u);
                    relax_changes += 1;
                    if queue.contains(&e.sink) {
                        queue.decrease_key(&e.sink, candidate)?;
                    }
                }
            }
        }
        debug!(
            "dijkstra from {:?}: {} relaxations attempted, {} changed a distance",
            source, relax_attempts, relax_changes
        );

        let mut distances = HashMap::with_capacity_and_hasher(n, RandomState::new());
        let mut predecessors = HashMap::with_hasher(RandomState::new());
        for v in self.iter_vertices() {
            let key = match self.vertex_key(&v) {
                Some(k) => k,
                None => continue,
            };
            distances.insert(key.clone(), dist[v.to_raw()]);
            if let Some(p) = prev[v.to_raw()].and_then(|p| self.vertex_key(&p)) {
                predecessors.insert(key.clone(), p.clone());
            }
        }
        Ok(ShortestPaths {
            source: source.clone(),
            distances,
            predecessors,
            finalized: self.keys_of(finalized),
            relax_attempts,
            relax_changes,
        })
    }
}

impl<G: WeightedQueryableGraph> ShortestPath for G {}
