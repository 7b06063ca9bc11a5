//! Supporting collections for graph algorithms.
//!
//! *   [PriorityQueue]: a min-priority queue with decrease-key, driving [crate::algorithm::ShortestPath::dijkstra].
//! *   [DisjointSet]: union-find, driving [crate::algorithm::MinimumSpanningTree::kruskal_mst].
mod priority_queue;
pub use self::priority_queue::*;
mod disjoint_set;
pub use self::disjoint_set::*;
