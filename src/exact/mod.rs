//! Exact solvers.
//!
//! Both fix item 0 as the anchor of the cycle and return a maximum-cost
//! arrangement. Run time grows factorially with the item count; there is
//! no time limit or cancellation.
//!
//! - [`ExactPermutationSolver`]: enumerates every arrangement
//! - [`BranchAndBoundSolver`]: prunes partial arrangements with an
//!   optimistic bound, usually far faster

mod branch_bound;
mod permutation;

pub use branch_bound::BranchAndBoundSolver;
pub use permutation::ExactPermutationSolver;
