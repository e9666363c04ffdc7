//! Solver contract, configuration and selection.
//!
//! # Core Trait
//!
//! - [`ArrangementSolver`]: install a matrix (and, for greedy, its sorted
//!   neighbors), then ask for the arrangement or its cost
//!
//! # Key Types
//!
//! - [`Solution`]: arrangement plus cost, cached inside each solver
//! - [`SolverConfig`]: seed, exact-size warning threshold, batch parallelism
//! - [`SolverKind`]: strategy selector that builds boxed solvers
//!
//! [`solve`] and [`solve_batch`] wrap the set-then-solve sequence.

mod batch;
mod config;
mod kind;
pub(crate) mod types;

pub use batch::{solve, solve_batch};
pub use config::SolverConfig;
pub use kind::SolverKind;
pub use types::{ArrangementSolver, Solution};
