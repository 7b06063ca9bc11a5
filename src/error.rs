use thiserror::Error;

/// Errors reported by graphs, algorithms and the supporting collections.
///
/// Identifiers are carried in their `Debug` rendering,
/// so that the error type does not depend on the key type of a graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A vertex given by the caller was never added to the graph.
    #[error("vertex {0} is not in the graph")]
    VertexNotFound(String),
    /// A topological order was requested for a graph with a cycle through this vertex.
    #[error("graph is not acyclic: a cycle passes through {0}")]
    NotAcyclic(String),
    /// `decrease_key` on a value which is not queued.
    #[error("value is not in the priority queue")]
    NotQueued,
    /// `decrease_key` with a priority greater than the current one.
    #[error("new priority is greater than the current one")]
    PriorityIncreased,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn vertex_not_found<K: std::fmt::Debug>(key: &K) -> Self {
        Self::VertexNotFound(format!("{:?}", key))
    }

    pub(crate) fn not_acyclic<K: std::fmt::Debug>(key: &K) -> Self {
        Self::NotAcyclic(format!("{:?}", key))
    }
}
