//! Depth-first branch-and-bound.
//!
//! # Algorithm
//!
//! Item 0 is fixed as the first element. From a partial sequence ending
//! in `last`, with `k` items still unused and partial cost `c`, a
//! candidate `i` is explored only if
//!
//! ```text
//! c + affinity(last, i) + MAX_AFFINITY * k > best
//! ```
//!
//! After choosing `i`, `k - 1` items and the closing edge remain, i.e.
//! `k` edges worth at most `MAX_AFFINITY` each, so the bound never
//! underestimates a completion. A full sequence is closed with the edge
//! back to item 0 and kept if it strictly improves the best cost.
//!
//! # Reference
//!
//! Land, A. H. & Doig, A. G. (1960). "An automatic method of solving discrete
//! programming problems", *Econometrica* 28(3), 497-520.

use tracing::{debug, warn};

use crate::cost::PRUNED;
use crate::error::Result;
use crate::matrix::{AffinityMatrix, MAX_AFFINITY};
use crate::solver::types::{missing_matrix, SolutionCache};
use crate::solver::{ArrangementSolver, Solution, SolverConfig};

const NAME: &str = "branch-and-bound";

/// Exact solver pruning partial sequences that cannot beat the best cycle.
#[derive(Debug, Clone)]
pub struct BranchAndBoundSolver {
    matrix: Option<AffinityMatrix>,
    cache: SolutionCache,
    warn_threshold: usize,
}

impl BranchAndBoundSolver {
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

impl Default for BranchAndBoundSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ArrangementSolver for BranchAndBoundSolver {
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
    if n == 1 {
        return Solution {
            arrangement: vec![0],
            cost: 0,
        };
    }
    if n > warn_threshold {
        warn!(solver = NAME, n, "branch-and-bound over {} items may take very long", n);
    }

    let mut search = Search {
        matrix,
        used: vec![false; n],
        unused: n - 1,
        current: Vec::with_capacity(n),
        best: Vec::new(),
        best_cost: PRUNED,
        nodes: 0,
        pruned: 0,
    };
    search.used[0] = true;
    search.current.push(0);
    search.extend(0);

    debug!(
        solver = NAME,
        n,
        cost = search.best_cost,
        nodes = search.nodes,
        pruned = search.pruned,
        "search finished"
    );
    Solution {
        arrangement: search.best,
        cost: search.best_cost,
    }
}

struct Search<'a> {
    matrix: &'a AffinityMatrix,
    used: Vec<bool>,
    unused: usize,
    current: Vec<usize>,
    best: Vec<usize>,
    best_cost: i64,
    nodes: u64,
    pruned: u64,
}

impl Search<'_> {
    fn extend(&mut self, partial_cost: i64) {
        self.nodes += 1;
        let last = self.current[self.current.len() - 1];

        if self.unused == 0 {
            let total = partial_cost + i64::from(self.matrix.affinity(last, 0));
            if total > self.best_cost {
                self.best_cost = total;
                self.best.clone_from(&self.current);
            }
            return;
        }

        let optimistic_rest = i64::from(MAX_AFFINITY) * self.unused as i64;
        for next in 1..self.used.len() {
            if self.used[next] {
                continue;
            }
            let step = partial_cost + i64::from(self.matrix.affinity(last, next));
            if step + optimistic_rest <= self.best_cost {
                self.pruned += 1;
                continue;
            }
            self.used[next] = true;
            self.unused -= 1;
            self.current.push(next);

            self.extend(step);

            self.current.pop();
            self.unused += 1;
            self.used[next] = false;
        }
    }
}
