//! Circular arrangement optimization.
//!
//! Arranges N items on a cycle (a shelf whose last slot neighbors its
//! first) so that the summed affinity of adjacent items is as large as
//! possible: a maximization variant of the Hamiltonian-cycle problem.
//!
//! - **Exact search**: permutation enumeration and branch-and-bound,
//!   both optimal and factorial in the worst case.
//! - **Greedy**: double-ended insertion driven by per-item neighbor lists
//!   sorted by affinity.
//! - **Approximation**: maximum spanning tree walked depth first.
//!
//! Shared primitives live in [`cost`] (cycle cost, bounded cost for
//! pruning), [`graph`] (DFS, maximum spanning tree) and [`matrix`] (the
//! validated affinity matrix and its sorted-neighbor projection).
//!
//! # Example
//!
//! ```
//! use u_arrange::matrix::AffinityMatrix;
//! use u_arrange::solver::{ArrangementSolver, SolverConfig, SolverKind};
//!
//! let matrix = AffinityMatrix::new(vec![
//!     vec![-1, 80, 10, 60],
//!     vec![80, -1, 70, 5],
//!     vec![10, 70, -1, 90],
//!     vec![60, 5, 90, -1],
//! ]).unwrap();
//!
//! let mut solver = SolverKind::BranchAndBound.build(&SolverConfig::default()).unwrap();
//! solver.set_affinity_matrix(matrix);
//! assert_eq!(solver.cost().unwrap(), 80 + 70 + 90 + 60);
//! ```
//!
//! # Architecture
//!
//! Solvers are plain values implementing [`solver::ArrangementSolver`];
//! each owns one matrix and lazily caches one solution. Nothing is
//! global, so independent solves never interfere.

pub mod approx;
pub mod cost;
pub mod error;
pub mod exact;
pub mod graph;
pub mod greedy;
pub mod matrix;
pub mod solver;

pub use error::{ArrangeError, Result};
