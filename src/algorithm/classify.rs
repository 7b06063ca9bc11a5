use super::traversal::Frame;
use crate::graph::*;

/// Numbers of edges of each kind in a depth-first forest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeClassification {
    /// Edges along which undiscovered vertices are discovered.
    pub tree: usize,
    /// Edges to an ancestor still under exploration, other than the parent.
    pub back: usize,
    /// Edges to an already finished descendant.
    pub forward: usize,
    /// All other edges, between unrelated subtrees.
    pub cross: usize,
}

impl EdgeClassification {
    pub fn total(&self) -> usize {
        self.tree + self.back + self.forward + self.cross
    }
}

pub trait ClassifyEdges
where
    Self: QueryableGraph + Sized,
{
    /// Classifies edges while building a depth-first forest.
    ///
    /// Roots are tried in registration order and successors in lexicographic order.
    /// Discovery and finish share one clock.
    /// An edge back to the DFS parent of a vertex is counted nowhere,
    /// as the edge from the parent is already counted as a tree edge.
    fn classify_edges(&self) -> EdgeClassification {
        let n = self.vertex_size();
        let mut discovery: Vec<Option<usize>> = vec![None; n];
        let mut finish: Vec<Option<usize>> = vec![None; n];
        let mut time = 0;
        let mut res = EdgeClassification::default();
        let mut stack: Vec<(Frame, Option<VertexId>)> = vec![];
        for root in self.iter_vertices() {
            if discovery[root.to_raw()].is_some() {
                continue;
            }
            time += 1;
            discovery[root.to_raw()] = Some(time);
            stack.push((Frame::sorted(self, root), None));
            while let Some((frame, parent)) = stack.last_mut() {
                let u = frame.vertex;
                let parent = *parent;
                match frame.next_successor() {
                    Some(v) => match (discovery[v.to_raw()], finish[v.to_raw()]) {
                        (None, _) => {
                            res.tree += 1;
                            time += 1;
                            discovery[v.to_raw()] = Some(time);
                            stack.push((Frame::sorted(self, v), Some(u)));
                        }
                        (Some(_), None) => {
                            if parent != Some(v) {
                                res.back += 1;
                            }
                        }
                        (Some(dv), Some(_)) => {
                            if discovery[u.to_raw()] < Some(dv) {
                                res.forward += 1;
                            } else {
                                res.cross += 1;
                            }
                        }
                    },
                    None => {
                        time += 1;
                        finish[u.to_raw()] = Some(time);
                        stack.pop();
                    }
                }
            }
        }
        res
    }
}

impl<G: QueryableGraph> ClassifyEdges for G {}
