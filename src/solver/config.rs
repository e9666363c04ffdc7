//! Solver configuration.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{ArrangeError, Result};

/// Configuration shared by all solvers.
///
/// # Examples
///
/// ```
/// use u_arrange::solver::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_seed(7)
///     .with_exact_warn_threshold(9)
///     .with_parallel(false);
/// assert_eq!(config.seed, Some(7));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Seed for the random start node of the spanning tree and DFS
    /// (None for fresh entropy on every run).
    pub seed: Option<u64>,
    /// Exact solvers log a warning above this many items.
    pub exact_warn_threshold: usize,
    /// Whether batch solving spreads instances across threads.
    pub parallel: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            seed: None,
            exact_warn_threshold: 11,
            parallel: true,
        }
    }
}

impl SolverConfig {
    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the item count above which exact solvers warn.
    pub fn with_exact_warn_threshold(mut self, n: usize) -> Self {
        self.exact_warn_threshold = n;
        self
    }

    /// Enables or disables parallel batch solving.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.exact_warn_threshold == 0 {
            return Err(ArrangeError::validation(
                "exact_warn_threshold must be positive",
            ));
        }
        Ok(())
    }

    /// Random source seeded from `seed`, or from entropy when unset.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        }
    }
}
