//! Spanning-tree approximation.
//!
//! [`ApproximateSolver`] adapts the tree-doubling heuristic for metric
//! TSP to the maximization objective: a maximum spanning tree is walked
//! depth first and the first-visit order becomes the arrangement.
//!
//! # References
//!
//! - Rosenkrantz, Stearns & Lewis (1977), "An Analysis of Several Heuristics
//!   for the Traveling Salesman Problem", *SIAM Journal on Computing* 6(3), 563-581.

mod runner;

pub use runner::ApproximateSolver;
