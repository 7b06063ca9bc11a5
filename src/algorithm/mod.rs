//! Graph algorithms
mod traversal;
pub use self::traversal::Traversal;
mod classify;
pub use self::classify::*;
mod toposort;
pub use self::toposort::*;
mod scc;
pub use self::scc::*;
mod mst;
pub use self::mst::*;
mod dijkstra;
pub use self::dijkstra::*;
