//! Exhaustive permutation search.
//!
//! # Algorithm
//!
//! 1. Fix item 0 as the anchor; rotations of a cycle are equivalent.
//! 2. Enumerate every ordering of items `1..N` in lexicographic order,
//!    skipping a choice equal to the one just before it.
//! 3. Score each complete ordering with [`cost_with_bound`] against the
//!    best cost so far (starting at `-1`) and keep strict improvements.
//!
//! Visits `(N - 1)!` orderings.

use tracing::{debug, warn};

use crate::cost::{bounded_cycle_cost, PRUNED};
use crate::error::Result;
use crate::matrix::AffinityMatrix;
use crate::solver::types::{missing_matrix, SolutionCache};
use crate::solver::{ArrangementSolver, Solution, SolverConfig};

const NAME: &str = "exact";

/// Exact solver enumerating every arrangement up to rotation.
#[derive(Debug, Clone)]
pub struct ExactPermutationSolver {
    matrix: Option<AffinityMatrix>,
    cache: SolutionCache,
    warn_threshold: usize,
}

impl ExactPermutationSolver {
    /// Creates a solver with the default configuration.
    pub fn new() -> Self {
        Self::with_warn_threshold(SolverConfig::default().exact_warn_threshold)
    }

    /// Creates a solver from `config`, rejecting an invalid one.
    pub fn with_config(config: &SolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_warn_threshold(config.exact_warn_threshold))
    }

    fn with_warn_threshold(warn_threshold: usize) -> Self {
        Self {
            matrix: None,
            cache: SolutionCache::default(),
            warn_threshold,
        }
    }
}

impl Default for ExactPermutationSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ArrangementSolver for ExactPermutationSolver {
    fn name(&self) -> &'static str {
        NAME
    }

    fn set_affinity_matrix(&mut self, matrix: AffinityMatrix) {
        self.matrix = Some(matrix);
        self.cache.invalidate();
    }

    fn solution(&mut self) -> Result<&Solution> {
        let matrix = self.matrix.as_ref().ok_or_else(|| missing_matrix(NAME))?;
        let warn_threshold = self.warn_threshold;
        self.cache
            .get_or_solve(NAME, || Ok(solve(matrix, warn_threshold)))
    }

    fn is_ready(&self) -> bool {
        self.cache.is_ready()
    }

    fn reset(&mut self) {
        self.matrix = None;
        self.cache.invalidate();
    }
}

fn solve(matrix: &AffinityMatrix, warn_threshold: usize) -> Solution {
    let n = matrix.len();
    if n > warn_threshold {
        warn!(solver = NAME, n, "exhaustive search over {} items may take very long", n);
    }

    let mut search = PermutationSearch {
        matrix,
        best_cost: PRUNED,
        best: Vec::new(),
        evaluated: 0,
    };
    let mut remaining: Vec<usize> = (1..n).collect();
    let mut current = Vec::with_capacity(n);
    current.push(0);
    search.visit(&mut remaining, &mut current);

    debug!(
        solver = NAME,
        n,
        cost = search.best_cost,
        evaluated = search.evaluated,
        "search finished"
    );
    Solution {
        arrangement: search.best,
        cost: search.best_cost,
    }
}

struct PermutationSearch<'a> {
    matrix: &'a AffinityMatrix,
    best_cost: i64,
    best: Vec<usize>,
    evaluated: u64,
}

impl PermutationSearch<'_> {
    fn visit(&mut self, remaining: &mut Vec<usize>, current: &mut Vec<usize>) {
        if remaining.is_empty() {
            self.evaluated += 1;
            let candidate = bounded_cycle_cost(current, self.matrix, self.best_cost);
            if candidate > self.best_cost {
                self.best_cost = candidate;
                self.best.clone_from(current);
            }
            return;
        }

        for i in 0..remaining.len() {
            if i > 0 && remaining[i] == remaining[i - 1] {
                continue;
            }
            let item = remaining.remove(i);
            current.push(item);
            self.visit(remaining, current);
            current.pop();
            remaining.insert(i, item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::cost;
    use crate::error::ArrangeError;

    #[test]
    fn test_requires_matrix() {
        let mut solver = ExactPermutationSolver::new();
        assert!(matches!(solver.solution(), Err(ArrangeError::State(_))));
        assert!(!solver.is_ready());
    }

    #[test]
    fn test_rejects_sorted_neighbors() {
        let mut solver = ExactPermutationSolver::new();
        let m = AffinityMatrix::uniform(3, 1).unwrap();
        assert!(matches!(
            solver.set_sorted_neighbors(m.sorted_neighbors()),
            Err(ArrangeError::Unsupported { .. })
        ));
    }

    #[test]
    fn test_single_item() {
        let mut solver = ExactPermutationSolver::new();
        solver.set_affinity_rows(vec![vec![-1]]).unwrap();
        assert_eq!(solver.arrangement().unwrap(), vec![0]);
        assert_eq!(solver.cost().unwrap(), 0);
    }

    #[test]
    fn test_two_items() {
        let mut solver = ExactPermutationSolver::new();
        solver.set_affinity_rows(vec![vec![-1, 35], vec![35, -1]]).unwrap();
        assert_eq!(solver.cost().unwrap(), 70);
        assert_eq!(solver.arrangement().unwrap(), vec![0, 1]);
    }

    #[test]
    fn test_finds_optimum() {
        // two strong "clusters": {0, 2, 4} and {1, 3}
        let m = AffinityMatrix::from_fn(5, |i, j| if i % 2 == j % 2 { 90 } else { 10 }).unwrap();
        let mut solver = ExactPermutationSolver::new();
        solver.set_affinity_matrix(m.clone());
        let solution = solver.solution().unwrap().clone();
        assert_eq!(solution.arrangement[0], 0, "item 0 anchors the cycle");
        // best cycle: 0-2-4 (2 edges of 90), 1-3 (1 edge of 90), two crossings of 10
        assert_eq!(solution.cost, 90 * 3 + 10 * 2);
        assert_eq!(cost(&solution.arrangement, &m).unwrap(), solution.cost);
    }

    #[test]
    fn test_first_best_in_lexicographic_order_wins() {
        let m = AffinityMatrix::uniform(4, 7).unwrap();
        let mut solver = ExactPermutationSolver::new();
        solver.set_affinity_matrix(m);
        assert_eq!(solver.arrangement().unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(solver.cost().unwrap(), 28);
    }

    #[test]
    fn test_reset_clears_state() {
        let mut solver = ExactPermutationSolver::new();
        solver.set_affinity_rows(vec![vec![-1, 1], vec![1, -1]]).unwrap();
        solver.cost().unwrap();
        assert!(solver.is_ready());
        solver.reset();
        assert!(!solver.is_ready());
        assert!(solver.cost().is_err());
    }

    #[test]
    fn test_with_config_validates() {
        let config = SolverConfig::default().with_exact_warn_threshold(0);
        assert!(matches!(
            ExactPermutationSolver::with_config(&config),
            Err(ArrangeError::Validation(_))
        ));
        assert!(ExactPermutationSolver::with_config(&SolverConfig::default()).is_ok());
    }
}
