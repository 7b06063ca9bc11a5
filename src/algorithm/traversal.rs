use crate::graph::*;
use std::collections::VecDeque;

/// Breadth-first and depth-first traversals.
///
/// Both visit successors in lexicographic order of their keys,
/// so that results are reproducible whatever order edges are added in.
/// A start key which is not in the graph is treated as an isolated vertex.
pub trait Traversal
where
    Self: QueryableGraph + Sized,
{
    /// Visits vertices reachable from `start`, level by level,
    /// and reports each with its depth, i.e., its distance in edges from `start`.
    ///
    /// ```rust
    /// use graphkit::{algorithm::*, graph::directed::*};
    ///
    /// let g: Graph<_> = [("a", "c"), ("a", "b"), ("b", "d"), ("c", "d")].into_iter().collect();
    /// assert_eq!(g.bfs(&"a"), vec![("a", 0), ("b", 1), ("c", 1), ("d", 2)]);
    /// ```
    fn bfs(&self, start: &Self::Key) -> Vec<(Self::Key, usize)> {
        let start_id = match self.vertex_id(start) {
            Some(v) => v,
            None => return vec![(start.clone(), 0)],
        };
        let mut visited = vec![false; self.vertex_size()];
        let mut queue = VecDeque::from([(start_id, 0)]);
        let mut order = vec![];
        while let Some((v, depth)) = queue.pop_front() {
            // a vertex can be queued more than once before it is visited
            if visited[v.to_raw()] {
                continue;
            }
            visited[v.to_raw()] = true;
            order.push((v, depth));
            for w in self.successors_by_key(&v) {
                if !visited[w.to_raw()] {
                    queue.push_back((w, depth + 1));
                }
            }
        }
        order
            .into_iter()
            .filter_map(|(v, depth)| self.vertex_key(&v).map(|k| (k.clone(), depth)))
            .collect()
    }

    /// Visits vertices reachable from `start` in depth-first preorder.
    fn dfs(&self, start: &Self::Key) -> Vec<Self::Key> {
        let start_id = match self.vertex_id(start) {
            Some(v) => v,
            None => return vec![start.clone()],
        };
        let mut visited = vec![false; self.vertex_size()];
        let mut order = vec![start_id];
        visited[start_id.to_raw()] = true;
        let mut stack = vec![Frame::sorted(self, start_id)];
        while let Some(frame) = stack.last_mut() {
            match frame.next_successor() {
                Some(w) => {
                    if !visited[w.to_raw()] {
                        visited[w.to_raw()] = true;
                        order.push(w);
                        stack.push(Frame::sorted(self, w));
                    }
                }
                None => {
                    stack.pop();
                }
            }
        }
        self.keys_of(order)
    }
}

impl<G: QueryableGraph> Traversal for G {}

/// A vertex under exploration on an explicit depth-first stack,
/// with a cursor over its successors.
pub(crate) struct Frame {
    pub vertex: VertexId,
    successors: Vec<VertexId>,
    cursor: usize,
}

impl Frame {
    /// Successors are ordered by their keys.
    pub fn sorted<G: QueryableGraph>(graph: &G, vertex: VertexId) -> Self {
        Self {
            vertex,
            successors: graph.successors_by_key(&vertex),
            cursor: 0,
        }
    }

    /// Successors are in the order their edges are added.
    pub fn unsorted<G: QueryableGraph>(graph: &G, vertex: VertexId) -> Self {
        Self {
            vertex,
            successors: graph.out_edges(&vertex).map(|e| e.sink).collect(),
            cursor: 0,
        }
    }

    pub fn next_successor(&mut self) -> Option<VertexId> {
        let res = self.successors.get(self.cursor).copied();
        if res.is_some() {
            self.cursor += 1;
        }
        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::directed::*;
    use petgraph::visit::{Bfs, Dfs};
    use quickcheck_macros::quickcheck;
    use std::collections::{BTreeMap, BTreeSet};

    fn bfs_fixture() -> Graph<&'static str> {
        let mut g = Graph::new();
        g.add_edge("a", "e");
        g.add_edge("e", "b");
        g.add_edge("e", "d");
        g.add_edge("e", "g");
        g.add_edge("b", "c");
        g.add_edge("c", "h");
        g.add_edge("c", "f");
        g.add_edge("h", "b");
        g.add_edge("f", "g");
        g.add_edge("g", "c");
        g.add_edge("d", "a");
        g.add_edge("d", "i");
        g.add_edge("d", "j");
        g.add_edge("i", "j");
        g
    }

    fn dfs_fixture() -> Graph<&'static str> {
        let mut g = Graph::new();
        g.add_edge("a", "d");
        g.add_edge("a", "b");
        g.add_edge("b", "c");
        g.add_edge("b", "e");
        g.add_edge("b", "d");
        g.add_edge("c", "f");
        g.add_edge("g", "c");
        g.add_edge("g", "f");
        g.add_edge("e", "f");
        g.add_edge("e", "d");
        g
    }

    #[test]
    fn bfs_levels() {
        let g = bfs_fixture();
        let trial = g.bfs(&"a");
        let oracle = vec![
            ("a", 0),
            ("e", 1),
            ("b", 2),
            ("d", 2),
            ("g", 2),
            ("c", 3),
            ("i", 3),
            ("j", 3),
            ("f", 4),
            ("h", 4),
        ];
        assert_eq!(trial, oracle);
    }

    #[test]
    fn dfs_preorder() {
        let g = dfs_fixture();
        assert_eq!(g.dfs(&"a"), vec!["a", "b", "c", "f", "d", "e"]);
        assert_eq!(g.dfs(&"g"), vec!["g", "c", "f"]);
    }

    #[test]
    fn unknown_start_is_isolated() {
        let g = dfs_fixture();
        assert_eq!(g.bfs(&"x"), vec![("x", 0)]);
        assert_eq!(g.dfs(&"x"), vec!["x"]);
    }

    #[test]
    fn deep_chain_does_not_overflow() {
        let g: Graph<u32> = (0..200_000u32).map(|i| (i, i + 1)).collect();
        assert_eq!(g.dfs(&0).len(), 200_001);
    }

    #[quickcheck]
    fn bfs_depth_is_shortest_hops(ops: EdgeOps) {
        let g = ops.graph();
        let (pg, vmap) = ops.petgraph_directed();
        for start in ops.keys() {
            let oracle: BTreeMap<char, usize> =
                petgraph::algo::dijkstra(&pg, vmap[&start], None, |_| 1usize)
                    .into_iter()
                    .map(|(n, d)| (pg[n], d))
                    .collect();
            let trial: Vec<_> = g.bfs(&start);
            assert_eq!(trial[0], (start, 0));
            let trial_map: BTreeMap<char, usize> = trial.iter().copied().collect();
            assert_eq!(trial_map.len(), trial.len());
            assert_eq!(trial_map, oracle);
            // levels never go back up
            assert!(trial.windows(2).all(|w| w[0].1 <= w[1].1));
        }
    }

    #[quickcheck]
    fn dfs_visits_reachable_once(ops: EdgeOps) {
        let g = ops.graph();
        let (pg, vmap) = ops.petgraph_directed();
        for start in ops.keys() {
            let mut oracle = BTreeSet::new();
            let mut walk = Dfs::new(&pg, vmap[&start]);
            while let Some(n) = walk.next(&pg) {
                oracle.insert(pg[n]);
            }
            let trial = g.dfs(&start);
            assert_eq!(trial[0], start);
            let trial_set: BTreeSet<_> = trial.iter().copied().collect();
            assert_eq!(trial_set.len(), trial.len());
            assert_eq!(trial_set, oracle);

            let mut reached = BTreeSet::new();
            let mut walk = Bfs::new(&pg, vmap[&start]);
            while let Some(n) = walk.next(&pg) {
                reached.insert(pg[n]);
            }
            assert_eq!(trial_set, reached);
        }
    }
}
