//! Spanning-tree approximation.
//!
//! # Algorithm
//!
//! 1. Build a maximum spanning tree of the affinity graph.
//! 2. Walk it depth first from a random node.
//! 3. Keep the first visit of every item; the walk order is the
//!    arrangement.
//!
//! When affinities come from a bounded metric (`100 - d(i, j)`), the
//! walk loses at most twice the tree's distance, which keeps the cost at
//! or above half the optimum.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::Rng;
use tracing::debug;

use crate::cost::cycle_cost;
use crate::error::{ArrangeError, Result};
use crate::graph::{dfs, maximum_spanning_tree};
use crate::matrix::AffinityMatrix;
use crate::solver::types::{missing_matrix, SolutionCache};
use crate::solver::{ArrangementSolver, Solution, SolverConfig};

const NAME: &str = "approximate";

/// Spanning-tree + depth-first-walk heuristic.
///
/// The random source picks the start node of the tree and of the walk;
/// seed it for reproducible output.
///
/// # Examples
///
/// ```
/// use u_arrange::approx::ApproximateSolver;
/// use u_arrange::matrix::AffinityMatrix;
/// use u_arrange::solver::ArrangementSolver;
///
/// let mut solver = ApproximateSolver::with_seed(42);
/// solver.set_affinity_matrix(AffinityMatrix::uniform(5, 100).unwrap());
/// assert_eq!(solver.cost().unwrap(), 500);
/// ```
#[derive(Debug, Clone)]
pub struct ApproximateSolver<R = StdRng> {
    matrix: Option<AffinityMatrix>,
    cache: SolutionCache,
    rng: R,
}

impl ApproximateSolver<StdRng> {
    /// Creates a solver seeded from entropy.
    pub fn new() -> Self {
        Self::with_rng(SolverConfig::default().rng())
    }

    /// Creates a solver with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SolverConfig::default().with_seed(seed).rng())
    }

    /// Creates a solver using the seed in `config`, rejecting an invalid
    /// config.
    pub fn with_config(config: &SolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_rng(config.rng()))
    }
}

impl Default for ApproximateSolver<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ApproximateSolver<R> {
    /// Creates a solver drawing start nodes from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self {
            matrix: None,
            cache: SolutionCache::default(),
            rng,
        }
    }
}

impl<R: Rng + Send> ArrangementSolver for ApproximateSolver<R> {
    fn name(&self) -> &'static str {
        NAME
    }

    fn set_affinity_matrix(&mut self, matrix: AffinityMatrix) {
        self.matrix = Some(matrix);
        self.cache.invalidate();
    }

    fn solution(&mut self) -> Result<&Solution> {
        let matrix = self.matrix.as_ref().ok_or_else(|| missing_matrix(NAME))?;
        let rng = &mut self.rng;
        self.cache.get_or_solve(NAME, || solve(matrix, rng))
    }

    fn is_ready(&self) -> bool {
        self.cache.is_ready()
    }

    fn reset(&mut self) {
        self.matrix = None;
        self.cache.invalidate();
    }
}

fn solve<R: Rng + ?Sized>(matrix: &AffinityMatrix, rng: &mut R) -> Result<Solution> {
    let tree = maximum_spanning_tree(matrix, rng);
    let walk = dfs(&tree, rng)?;

    let mut seen = HashSet::with_capacity(walk.len());
    let arrangement: Vec<usize> = walk.into_iter().filter(|&item| seen.insert(item)).collect();
    if arrangement.len() != matrix.len() {
        return Err(ArrangeError::state(format!(
            "{NAME}: walk reached {} of {} items",
            arrangement.len(),
            matrix.len()
        )));
    }

    let total = cycle_cost(&arrangement, matrix);
    debug!(solver = NAME, n = matrix.len(), cost = total, "arrangement built");
    Ok(Solution {
        arrangement,
        cost: total,
    })
}
