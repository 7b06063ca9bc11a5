//! Undirected graphs.

mod weighted;
pub use self::weighted::*;
