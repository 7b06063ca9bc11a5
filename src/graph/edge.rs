use super::VertexId;

/// Information about an edge between two registered vertices.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub source: VertexId,
    pub sink: VertexId,
}

/// An [Edge] carrying a weight.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct WeightedEdge<W> {
    pub source: VertexId,
    pub sink: VertexId,
    pub weight: W,
}

impl<W> WeightedEdge<W> {
    pub fn unweighted(&self) -> Edge {
        Edge {
            source: self.source,
            sink: self.sink,
        }
    }
}
