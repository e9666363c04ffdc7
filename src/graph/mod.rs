//! Graph primitives used by the spanning-tree approximation.
//!
//! - [`maximum_spanning_tree`]: Prim's algorithm maximizing total affinity
//! - [`dfs`]: stack-based depth-first linearization of an adjacency list
//!
//! Both take an explicit random source for their start node.
//!
//! # References
//!
//! - Prim, R. C. (1957). "Shortest connection networks and some generalizations",
//!   *Bell System Technical Journal* 36(6), 1389-1401.

mod dfs;
mod spanning;

pub use dfs::{dfs, AdjacencyList};
pub use spanning::maximum_spanning_tree;
