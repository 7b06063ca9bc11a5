//! Traits and implementations for directed and undirected graphs.
//!
//! # Keys and `VertexId`'s
//!
//! Users name vertices by keys of their own choice, e.g., strings.
//! But for algorithm authors, keys are hard to deal with.
//! Can we copy a key?
//! What is the cost of hashing it?
//!
//! Therefore every graph in this crate registers each key the first time it shows up as an endpoint,
//! and assigns it a [VertexId], which is essentially a dense `usize`.
//! Adjacency lists are indexed by these ID's,
//! and algorithms translate ID's back into keys only when they report results.
//!
//! # Graphs
//!
//! | Graph                                | Directed | Weighted |
//! | ------------------------------------ | -------- | -------- |
//! | [directed::Graph]                    | yes      | no       |
//! | [directed::DirectedWeightedGraph]    | yes      | yes      |
//! | [undirected::WeightedGraph]          | no       | yes      |
//!
//! None of them removes edges or vertices.
//! Parallel edges and self-loops are kept as they are added.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod weight;
pub use self::weight::*;
mod r#trait;
pub use self::r#trait::*;
mod registry;
pub use self::registry::*;
mod storage;
pub(crate) use self::storage::*;
mod graph_debug;
pub use self::graph_debug::*;

pub mod directed;
pub mod undirected;
