//! Greedy double-ended insertion.
//!
//! [`GreedySolver`] starts from the strongest pair and repeatedly extends
//! whichever end of the arrangement has the stronger unplaced neighbor,
//! using the [`SortedNeighbors`](crate::matrix::SortedNeighbors)
//! projection to find candidates without rescanning the matrix.

mod runner;
mod shelf;

pub use runner::GreedySolver;
