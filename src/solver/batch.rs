//! One-shot and batch solving.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::config::SolverConfig;
use super::kind::SolverKind;
use super::types::Solution;
use crate::error::Result;
use crate::matrix::AffinityMatrix;

/// Solves `matrix` with a fresh solver of the given kind.
///
/// Supplies the sorted-neighbor projection when the strategy needs it.
///
/// # Examples
///
/// ```
/// use u_arrange::matrix::AffinityMatrix;
/// use u_arrange::solver::{solve, SolverConfig, SolverKind};
///
/// let m = AffinityMatrix::uniform(4, 0).unwrap();
/// let solution = solve(SolverKind::Greedy, &m, &SolverConfig::default()).unwrap();
/// assert_eq!(solution.cost, 0);
/// ```
pub fn solve(kind: SolverKind, matrix: &AffinityMatrix, config: &SolverConfig) -> Result<Solution> {
    let mut solver = kind.build(config)?;
    solver.set_affinity_matrix(matrix.clone());
    if kind.needs_sorted_neighbors() {
        solver.set_sorted_neighbors(matrix.sorted_neighbors())?;
    }
    solver.solution().cloned()
}

/// Solves independent instances, one solver per instance.
///
/// With a seed set, instance `i` is solved with seed `seed + i`, so the
/// results do not depend on scheduling. Instances run on the rayon pool
/// when `config.parallel` is set and the `parallel` feature is enabled.
pub fn solve_batch(
    kind: SolverKind,
    matrices: &[AffinityMatrix],
    config: &SolverConfig,
) -> Vec<Result<Solution>> {
    let solve_one = |(i, matrix): (usize, &AffinityMatrix)| {
        let config = match config.seed {
            Some(seed) => config.clone().with_seed(seed.wrapping_add(i as u64)),
            None => config.clone(),
        };
        solve(kind, matrix, &config)
    };

    #[cfg(feature = "parallel")]
    if config.parallel {
        return matrices.par_iter().enumerate().map(solve_one).collect();
    }

    matrices.iter().enumerate().map(solve_one).collect()
}
