use super::traversal::Frame;
use crate::graph::*;
use log::debug;

pub trait StronglyConnectedComponents
where
    Self: QueryableGraph + Sized,
{
    /// Partitions vertices into strongly connected components by Tarjan's algorithm.
    ///
    /// Roots are tried in registration order and successors in the order their edges are added.
    /// A component is emitted as soon as its root finishes,
    /// so components come out in reverse topological order of the condensation.
    /// Members of a component are listed in the order they are popped off the component stack.
    ///
    /// ```rust
    /// use graphkit::{algorithm::*, graph::directed::*};
    ///
    /// let g: Graph<_> = [(1, 2), (2, 1), (2, 3)].into_iter().collect();
    /// assert_eq!(g.find_sccs(), vec![vec![3], vec![2, 1]]);
    /// ```
    fn find_sccs(&self) -> Vec<Vec<Self::Key>> {
        let n = self.vertex_size();
        let mut tarjan = Tarjan {
            counter: 0,
            index: vec![None; n],
            low_link: vec![0; n],
            on_stack: vec![false; n],
            stack: vec![],
            components: vec![],
        };
        for root in self.iter_vertices() {
            if tarjan.index[root.to_raw()].is_none() {
                tarjan.strong_connect(self, root);
            }
        }
        debug!(
            "{} strongly connected components over {} vertices",
            tarjan.components.len(),
            n
        );
        tarjan
            .components
            .into_iter()
            .map(|c| self.keys_of(c))
            .collect()
    }
}

impl<G: QueryableGraph> StronglyConnectedComponents for G {}

struct Tarjan {
    counter: usize,
    index: Vec<Option<usize>>,
    low_link: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<VertexId>,
    components: Vec<Vec<VertexId>>,
}

impl Tarjan {
    fn visit(&mut self, v: VertexId) {
        self.index[v.to_raw()] = Some(self.counter);
        self.low_link[v.to_raw()] = self.counter;
        self.counter += 1;
        self.stack.push(v);
        self.on_stack[v.to_raw()] = true;
    }

    fn strong_connect<G: QueryableGraph>(&mut self, graph: &G, root: VertexId) {
        self.visit(root);
        let mut frames = vec![Frame::unsorted(graph, root)];
        while let Some(frame) = frames.last_mut() {
            let v = frame.vertex;
            match frame.next_successor() {
                Some(w) => match self.index[w.to_raw()] {
                    None => {
                        self.visit(w);
                        frames.push(Frame::unsorted(graph, w));
                    }
                    Some(iw) => {
                        if self.on_stack[w.to_raw()] {
                            let low = &mut self.low_link[v.to_raw()];
                            *low = (*low).min(iw);
                        }
                    }
                },
                None => {
                    frames.pop();
                    if let Some(parent) = frames.last() {
                        let low_v = self.low_link[v.to_raw()];
                        let low = &mut self.low_link[parent.vertex.to_raw()];
                        *low = (*low).min(low_v);
                    }
                    if Some(self.low_link[v.to_raw()]) == self.index[v.to_raw()] {
                        self.pop_component(v);
                    }
                }
            }
        }
    }

    fn pop_component(&mut self, root: VertexId) {
        let mut component = vec![];
        while let Some(w) = self.stack.pop() {
            self.on_stack[w.to_raw()] = false;
            component.push(w);
            if w == root {
                break;
            }
        }
        self.components.push(component);
    }
}
