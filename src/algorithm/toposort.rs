use super::traversal::Frame;
use crate::{graph::*, Error, Result};
use log::debug;

pub trait TopologicalSort
where
    Self: QueryableGraph + Sized,
{
    /// Orders vertices so that every edge goes from an earlier vertex to a later one.
    ///
    /// Vertices are appended after all their successors finish in a depth-first search,
    /// with roots in registration order and successors in lexicographic order,
    /// and the result is that order reversed.
    ///
    /// Fails with [Error::NotAcyclic] if the search runs into a vertex still on its path.
    fn topological_sort(&self) -> Result<Vec<Self::Key>> {
        let n = self.vertex_size();
        let mut marks = vec![Mark::Unvisited; n];
        let mut post_order = Vec::with_capacity(n);
        let mut stack = vec![];
        for root in self.iter_vertices() {
            if marks[root.to_raw()] != Mark::Unvisited {
                continue;
            }
            marks[root.to_raw()] = Mark::OnPath;
            stack.push(Frame::sorted(self, root));
            while let Some(frame) = stack.last_mut() {
                let v = frame.vertex;
                match frame.next_successor() {
                    Some(w) => match marks[w.to_raw()] {
                        Mark::Unvisited => {
                            marks[w.to_raw()] = Mark::OnPath;
                            stack.push(Frame::sorted(self, w));
                        }
                        Mark::OnPath => {
                            debug!("cycle found at {:?}", self.vertex_key(&w));
                            return Err(cycle_through(self, &w));
                        }
                        Mark::Done => {}
                    },
                    None => {
                        marks[v.to_raw()] = Mark::Done;
                        post_order.push(v);
                        stack.pop();
                    }
                }
            }
        }
        post_order.reverse();
        Ok(self.keys_of(post_order))
    }

    /// Enumerates every topological order of the graph.
    ///
    /// Vertices of in-degree 0 are tried in registration order at every step,
    /// so orders come out in that lexicographic order.
    /// This takes exponential time in general and is meant for small graphs.
    ///
    /// Fails with [Error::NotAcyclic] if some vertices can never be placed.
    ///
    /// ```rust
    /// use graphkit::{algorithm::*, graph::directed::*};
    ///
    /// let g: Graph<_> = [("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")].into_iter().collect();
    /// assert_eq!(
    ///     g.all_topological_sorts().unwrap(),
    ///     vec![vec!["a", "b", "c", "d"], vec!["a", "c", "b", "d"]],
    /// );
    /// ```
    fn all_topological_sorts(&self) -> Result<Vec<Vec<Self::Key>>> {
        let n = self.vertex_size();
        let mut in_degree = vec![0usize; n];
        for v in self.iter_vertices() {
            for e in self.out_edges(&v) {
                in_degree[e.sink.to_raw()] += 1;
            }
        }
        let mut walker = LinearExtensions {
            graph: self,
            in_degree,
            placed: vec![false; n],
            path: Vec::with_capacity(n),
            orders: vec![],
        };
        walker.extend();
        let mut res = Vec::with_capacity(walker.orders.len());
        for order in walker.orders {
            if order.len() < n {
                let mut placed = vec![false; n];
                for v in order.iter() {
                    placed[v.to_raw()] = true;
                }
                if let Some(v) = cycle_among_unplaced(self, &placed) {
                    debug!("{:?} can never be placed", self.vertex_key(&v));
                    return Err(cycle_through(self, &v));
                }
            }
            res.push(self.keys_of(order));
        }
        Ok(res)
    }
}

impl<G: QueryableGraph> TopologicalSort for G {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    Done,
}

fn cycle_through<G: QueryableGraph>(graph: &G, v: &VertexId) -> Error {
    match graph.vertex_key(v) {
        Some(key) => Error::not_acyclic(key),
        None => Error::not_acyclic(v),
    }
}

/// Finds a vertex on a cycle among vertices not yet placed.
///
/// When no unplaced vertex has in-degree 0 among the unplaced,
/// walking back along unplaced predecessors must run into a vertex twice,
/// and that vertex lies on a cycle.
fn cycle_among_unplaced<G: QueryableGraph>(graph: &G, placed: &[bool]) -> Option<VertexId> {
    let mut predecessor: Vec<Option<VertexId>> = vec![None; placed.len()];
    for u in graph.iter_vertices().filter(|u| !placed[u.to_raw()]) {
        for e in graph.out_edges(&u) {
            let slot = &mut predecessor[e.sink.to_raw()];
            if !placed[e.sink.to_raw()] && slot.is_none() {
                *slot = Some(u);
            }
        }
    }
    let mut seen = vec![false; placed.len()];
    let mut cur = graph.iter_vertices().find(|v| !placed[v.to_raw()])?;
    while !seen[cur.to_raw()] {
        seen[cur.to_raw()] = true;
        cur = predecessor[cur.to_raw()]?;
    }
    Some(cur)
}

/// Backtracking state to enumerate linear extensions.
struct LinearExtensions<'a, G> {
    graph: &'a G,
    in_degree: Vec<usize>,
    placed: Vec<bool>,
    path: Vec<VertexId>,
    orders: Vec<Vec<VertexId>>,
}

impl<'a, G> LinearExtensions<'a, G>
where
    G: QueryableGraph,
{
    fn extend(&mut self) {
        let mut extended = false;
        for v in self.graph.iter_vertices() {
            if self.placed[v.to_raw()] || self.in_degree[v.to_raw()] > 0 {
                continue;
            }
            extended = true;
            self.place(v);
            self.extend();
            self.unplace(v);
        }
        if !extended {
            self.orders.push(self.path.clone());
        }
    }

    fn place(&mut self, v: VertexId) {
        self.placed[v.to_raw()] = true;
        self.path.push(v);
        for e in self.graph.out_edges(&v) {
            self.in_degree[e.sink.to_raw()] -= 1;
        }
    }

    fn unplace(&mut self, v: VertexId) {
        for e in self.graph.out_edges(&v) {
            self.in_degree[e.sink.to_raw()] += 1;
        }
        self.path.pop();
        self.placed[v.to_raw()] = false;
    }
}
