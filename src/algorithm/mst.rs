use crate::{collections::DisjointSet, graph::undirected::WeightedGraph, graph::*, Error, Result};
use log::{debug, trace};

/// An edge of a spanning tree, from the vertex closer to the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningEdge<K, W> {
    pub from: K,
    pub to: K,
    pub weight: W,
}

/// Result of [MinimumSpanningTree::prims_mst].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimTree<K, W> {
    /// One edge per vertex other than roots, ordered by registration of the child.
    pub edges: Vec<SpanningEdge<K, W>>,
    /// Vertices in the order they are picked.
    pub order: Vec<K>,
}

impl<K, W: Weight> PrimTree<K, W> {
    /// [Distance::Infinite] if the sum does not fit in `W`.
    pub fn total_weight(&self) -> Distance<W> {
        Distance::sum(self.edges.iter().map(|e| e.weight))
    }
}

/// Result of [MinimumSpanningTree::kruskal_mst].
#[derive(Clone)]
pub struct KruskalForest<K, W>
where
    K: VertexKey,
    W: Weight,
{
    pub graph: WeightedGraph<K, W>,
    /// The first edge, in the order edges are considered, whose endpoints were already connected.
    ///
    /// Edges are considered by weight, and those of equal weight by their position in the adjacency.
    pub first_skipped_edge: Option<SpanningEdge<K, W>>,
}

impl<K: VertexKey, W: Weight> KruskalForest<K, W> {
    pub fn total_weight(&self) -> Distance<W> {
        self.graph.total_weight()
    }
}

pub trait MinimumSpanningTree
where
    Self: WeightedQueryableGraph + Sized,
{
    /// Grows a minimum spanning tree from `start`.
    ///
    /// Each round picks the unvisited vertex of the least tentative distance,
    /// after stably sorting the remaining vertices by distance.
    /// A vertex's distance is the lightest edge from any visited vertex to it.
    /// Vertices out of reach are still picked in turn, at infinite distance,
    /// so a disconnected graph yields a spanning forest.
    fn prims_mst(&self, start: &Self::Key) -> Result<PrimTree<Self::Key, Self::Weight>> {
        let start_id = self
            .vertex_id(start)
            .ok_or_else(|| Error::vertex_not_found(start))?;
        let n = self.vertex_size();
        let mut distance = vec![Distance::Infinite; n];
        distance[start_id.to_raw()] = Distance::zero();
        let mut parent: Vec<Option<VertexId>> = vec![None; n];
        let mut visited = vec![false; n];
        let mut remaining: Vec<VertexId> = self.iter_vertices().collect();
        let mut order = Vec::with_capacity(n);
        while !remaining.is_empty() {
            remaining.sort_by_key(|v| distance[v.to_raw()]);
            let closest = remaining.remove(0);
            trace!(
                "picking {:?} at {:?}",
                self.vertex_key(&closest),
                distance[closest.to_raw()]
            );
            visited[closest.to_raw()] = true;
            order.push(closest);
            for e in self.weighted_out_edges(&closest) {
                let v = e.sink.to_raw();
                if !visited[v] && Distance::Finite(e.weight) < distance[v] {
                    distance[v] = Distance::Finite(e.weight);
                    parent[v] = Some(closest);
                }
            }
        }
        let mut edges = vec![];
        for child in self.iter_vertices() {
            let c = child.to_raw();
            if let (Some(p), Distance::Finite(weight)) = (parent[c], distance[c]) {
                if let (Some(from), Some(to)) = (self.vertex_key(&p), self.vertex_key(&child)) {
                    edges.push(SpanningEdge {
                        from: from.clone(),
                        to: to.clone(),
                        weight,
                    });
                }
            }
        }
        Ok(PrimTree {
            edges,
            order: self.keys_of(order),
        })
    }

    /// Builds a minimum spanning forest by adding edges lightest first,
    /// skipping those which would close a cycle.
    ///
    /// Every undirected edge is taken once, from its lesser endpoint; self-loops are dropped.
    /// Edges of equal weight are considered in the order they appear in the adjacency.
    ///
    /// ```rust
    /// use graphkit::{algorithm::*, graph::{undirected::*, Distance}};
    ///
    /// let g: WeightedGraph<_, u32> = [("a", "b", 1), ("b", "c", 2), ("a", "c", 3)]
    ///     .into_iter()
    ///     .collect();
    /// let forest = g.kruskal_mst();
    /// assert_eq!(forest.total_weight(), Distance::Finite(3));
    /// assert_eq!(forest.first_skipped_edge.unwrap().weight, 3);
    /// ```
    fn kruskal_mst(&self) -> KruskalForest<Self::Key, Self::Weight> {
        let mut components = DisjointSet::new();
        let mut edges = vec![];
        for u in self.iter_vertices() {
            components.make_set(u);
            let ku = self.vertex_key(&u);
            for e in self.weighted_out_edges(&u) {
                if ku < self.vertex_key(&e.sink) {
                    edges.push(e);
                }
            }
        }
        edges.sort_by_key(|e| e.weight);

        let mut res = KruskalForest {
            graph: WeightedGraph::new(),
            first_skipped_edge: None,
        };
        for e in edges {
            let (from, to) = match (self.vertex_key(&e.source), self.vertex_key(&e.sink)) {
                (Some(from), Some(to)) => (from, to),
                _ => continue,
            };
            trace!("processing edge {:?} -- {:?} ({:?})", from, to, e.weight);
            if components.union(&e.source, &e.sink) {
                trace!("adding edge {:?} -- {:?}", from, to);
                res.graph.add_edge(from.clone(), to.clone(), e.weight);
            } else if res.first_skipped_edge.is_none() {
                res.first_skipped_edge = Some(SpanningEdge {
                    from: from.clone(),
                    to: to.clone(),
                    weight: e.weight,
                });
            }
        }
        debug!(
            "spanning forest of {} edges out of {}",
            res.graph.edge_size(),
            self.edge_size()
        );
        res
    }
}

impl<K: VertexKey, W: Weight> MinimumSpanningTree for WeightedGraph<K, W> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::Traversal;
    use crate::graph::directed::EdgeOps;
    use petgraph::data::FromElements;
    use quickcheck_macros::quickcheck;
    use std::collections::BTreeSet;

    fn prim_fixture() -> WeightedGraph<&'static str, u32> {
        [
            ("a", "c", 11),
            ("a", "f", 10),
            ("a", "h", 2),
            ("a", "i", 3),
            ("b", "c", 5),
            ("b", "d", 13),
            ("c", "h", 9),
            ("d", "h", 1),
            ("h", "i", 6),
            ("i", "g", 12),
            ("i", "f", 4),
            ("f", "e", 7),
            ("e", "g", 8),
        ]
        .into_iter()
        .collect()
    }

    fn kruskal_fixture() -> WeightedGraph<&'static str, u32> {
        [
            ("a", "e", 8),
            ("a", "c", 6),
            ("a", "g", 9),
            ("b", "g", 3),
            ("b", "h", 11),
            ("b", "d", 5),
            ("c", "d", 2),
            ("c", "f", 12),
            ("d", "g", 7),
            ("e", "f", 0),
            ("g", "h", 10),
        ]
        .into_iter()
        .collect()
    }

    /// Total weight of a minimum spanning forest, by brute force over subsets of edges.
    fn brute_force_minimum<K: VertexKey>(g: &WeightedGraph<K, u32>) -> u32 {
        let edges: Vec<_> = g.iter_weighted_edges().collect();
        let mut best = None;
        let mut most = 0;
        for mask in 0u32..(1 << edges.len()) {
            let mut ds = DisjointSet::new();
            let mut acyclic = true;
            let mut total = 0;
            let mut size = 0;
            for (i, e) in edges.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    acyclic &= ds.union(&e.source, &e.sink);
                    total += e.weight;
                    size += 1;
                }
            }
            if !acyclic || size < most {
                continue;
            }
            if size > most {
                most = size;
                best = None;
            }
            best = Some(best.map_or(total, |b: u32| b.min(total)));
        }
        best.unwrap_or(0)
    }

    #[test]
    fn prim_fixture_tree() {
        let g = prim_fixture();
        let trial = g.prims_mst(&"a").unwrap();
        assert_eq!(trial.order, vec!["a", "h", "d", "i", "f", "e", "g", "c", "b"]);
        assert_eq!(trial.edges.len(), g.vertex_size() - 1);
        assert_eq!(trial.total_weight(), Distance::Finite(39));
        assert_eq!(
            trial.edges[0],
            SpanningEdge {
                from: "h",
                to: "c",
                weight: 9
            }
        );
    }

    #[test]
    fn prim_unknown_start() {
        let g = prim_fixture();
        assert_eq!(
            g.prims_mst(&"z"),
            Err(Error::VertexNotFound("\"z\"".to_owned()))
        );
    }

    #[test]
    fn kruskal_fixture_forest() {
        let g = kruskal_fixture();
        let trial = g.kruskal_mst();
        assert_eq!(trial.graph.edge_size(), g.vertex_size() - 1);
        assert_eq!(trial.total_weight(), Distance::Finite(34));
        assert_eq!(trial.total_weight(), g.prims_mst(&"a").unwrap().total_weight());
        let skipped = trial.first_skipped_edge.clone().unwrap();
        assert_eq!(
            skipped,
            SpanningEdge {
                from: "d",
                to: "g",
                weight: 7
            }
        );
        // the skipped edge closes a cycle in the tree
        let reach: BTreeSet<_> = trial.graph.dfs(&skipped.from).into_iter().collect();
        assert!(reach.contains(&skipped.to));
    }

    #[test]
    fn forest_without_cycles_skips_nothing() {
        let g: WeightedGraph<_, i32> = [(1, 2, -5), (3, 4, 7)].into_iter().collect();
        let trial = g.kruskal_mst();
        assert_eq!(trial.first_skipped_edge, None);
        assert_eq!(trial.total_weight(), Distance::Finite(2));
        let prim = g.prims_mst(&1).unwrap();
        assert_eq!(prim.order, vec![1, 2, 3, 4]);
        assert_eq!(prim.total_weight(), Distance::Finite(2));
    }

    #[test]
    fn total_weight_out_of_range() {
        let g: WeightedGraph<_, u8> = [("a", "b", 200), ("b", "c", 100)].into_iter().collect();
        let prim = g.prims_mst(&"a").unwrap();
        assert_eq!(prim.edges.len(), 2);
        assert_eq!(prim.total_weight(), Distance::Infinite);
        assert_eq!(g.kruskal_mst().total_weight(), Distance::Infinite);
    }

    #[quickcheck]
    fn first_skipped_edge_closes_a_cycle(ops: EdgeOps) {
        let g = ops.weighted();
        let forest = g.kruskal_mst();
        let non_loops = ops.edges.iter().filter(|(src, snk, _)| src != snk).count();
        match forest.first_skipped_edge {
            Some(skipped) => {
                let reach: BTreeSet<_> = forest.graph.dfs(&skipped.from).into_iter().collect();
                assert!(reach.contains(&skipped.to), "{:?}", skipped);
                assert!(forest.graph.edge_size() < non_loops);
            }
            None => assert_eq!(forest.graph.edge_size(), non_loops),
        }
    }

    #[quickcheck]
    fn prim_and_kruskal_agree_with_petgraph(ops: EdgeOps) {
        let g = ops.weighted();
        let (pg, _) = ops.petgraph_undirected();
        let oracle: u32 = petgraph::graph::UnGraph::<char, u32>::from_elements(
            petgraph::algo::min_spanning_tree(&pg),
        )
        .edge_weights()
        .sum();
        let kruskal = g.kruskal_mst();
        assert_eq!(kruskal.total_weight(), Distance::Finite(oracle));
        if let Some(start) = ops.keys().first() {
            // every other component is grown from whichever vertex is picked first there
            let prim = g.prims_mst(start).unwrap();
            assert_eq!(prim.order.len(), g.vertex_size());
            assert_eq!(prim.edges.len(), kruskal.graph.edge_size());
            assert_eq!(prim.total_weight(), Distance::Finite(oracle));
        }
    }

    #[quickcheck]
    fn kruskal_is_minimal(ops: EdgeOps) {
        let mut ops = ops;
        ops.edges.truncate(12);
        let g = ops.weighted();
        assert_eq!(
            g.kruskal_mst().total_weight(),
            Distance::Finite(brute_force_minimum(&g))
        );
    }

    #[quickcheck]
    fn prim_matches_kruskal_on_connected_graphs(ops: EdgeOps) {
        let g = ops.weighted();
        let start = match ops.keys().first() {
            Some(k) => *k,
            None => return,
        };
        if g.dfs(&start).len() != g.vertex_size() {
            return;
        }
        let prim = g.prims_mst(&start).unwrap();
        assert_eq!(prim.total_weight(), g.kruskal_mst().total_weight());
        let tree: WeightedGraph<_, _> = prim
            .edges
            .iter()
            .map(|e| (e.from, e.to, e.weight))
            .collect();
        assert_eq!(tree.dfs(&start).len(), g.vertex_size());
    }
}
