//! Directed and undirected graphs keyed by arbitrary identifiers, and classic algorithms on them.
//!
//! Graphs are grown edge by edge through `add_edge`.
//! Every identifier seen as an endpoint is registered and gets a dense [graph::VertexId].
//! Algorithms work on these ID's internally and translate back to identifiers in their results.
//!
//! Algorithms are provided as extension traits:
//!
//! | Trait                                    | Algorithms                                    | Graphs                     |
//! | ---------------------------------------- | --------------------------------------------- | -------------------------- |
//! | [algorithm::Traversal]                   | `bfs`, `dfs`                                  | all                        |
//! | [algorithm::ClassifyEdges]               | `classify_edges`                              | all                        |
//! | [algorithm::TopologicalSort]             | `topological_sort`, `all_topological_sorts`   | all                        |
//! | [algorithm::StronglyConnectedComponents] | `find_sccs`                                   | all                        |
//! | [algorithm::ShortestPath]                | `dijkstra`                                    | weighted                   |
//! | [algorithm::MinimumSpanningTree]         | `prims_mst`, `kruskal_mst`                    | [graph::undirected::WeightedGraph] |
//!
//! # Examples
//!
//! ```rust
//! use graphkit::{algorithm::*, graph::{directed::*, Distance}};
//!
//! let mut g = DirectedWeightedGraph::new();
//! g.add_edge("a", "b", 4u32);
//! g.add_edge("a", "c", 1);
//! g.add_edge("c", "b", 2);
//! let paths = g.dijkstra(&"a").unwrap();
//! assert_eq!(paths.distance(&"b"), Some(Distance::Finite(3)));
//! assert_eq!(paths.path_to(&"b"), Some(vec!["a", "c", "b"]));
//!
//! let mut dag = Graph::new();
//! dag.add_edge("shirt", "tie");
//! dag.add_edge("tie", "jacket");
//! dag.add_edge("trousers", "jacket");
//! let order = dag.topological_sort().unwrap();
//! assert_eq!(order, vec!["trousers", "shirt", "tie", "jacket"]);
//! ```
pub mod algorithm;
pub mod collections;
mod error;
pub use self::error::*;
pub mod graph;
