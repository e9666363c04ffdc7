//! The capability contract shared by every arrangement solver.

use crate::error::{ArrangeError, Result};
use crate::matrix::{AffinityMatrix, SortedNeighbors};

/// A circular arrangement and its total affinity.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Item indices in shelf order; the last item neighbors the first.
    pub arrangement: Vec<usize>,
    /// Sum of affinities between cyclically adjacent items.
    pub cost: i64,
}

/// A solver that arranges the items of an [`AffinityMatrix`] on a cycle.
///
/// Solvers are stateful: each holds at most one matrix and one cached
/// [`Solution`]. The solution is computed on the first request and
/// reused until a new matrix is installed or the solver is reset.
///
/// # Examples
///
/// ```
/// use u_arrange::matrix::AffinityMatrix;
/// use u_arrange::solver::ArrangementSolver;
/// use u_arrange::exact::BranchAndBoundSolver;
///
/// let mut solver = BranchAndBoundSolver::new();
/// solver.set_affinity_rows(vec![
///     vec![-1, 9, 1],
///     vec![9, -1, 4],
///     vec![1, 4, -1],
/// ]).unwrap();
/// assert_eq!(solver.cost().unwrap(), 14);
/// ```
pub trait ArrangementSolver: Send {
    /// Short identifier used in logs and errors.
    fn name(&self) -> &'static str;

    /// Installs a matrix, discarding any cached solution.
    fn set_affinity_matrix(&mut self, matrix: AffinityMatrix);

    /// Installs a sorted-neighbor projection.
    ///
    /// Only solvers that need one accept it; the default rejects the
    /// call with [`ArrangeError::Unsupported`].
    fn set_sorted_neighbors(&mut self, _neighbors: SortedNeighbors) -> Result<()> {
        Err(ArrangeError::Unsupported {
            solver: self.name(),
            operation: "sorted neighbors",
        })
    }

    /// Returns the cached solution, computing it first if needed.
    ///
    /// Fails with [`ArrangeError::State`] if required input is missing.
    fn solution(&mut self) -> Result<&Solution>;

    /// True when a solution is cached.
    fn is_ready(&self) -> bool;

    /// Drops all inputs and the cached solution.
    fn reset(&mut self);

    /// Validates `rows` and installs them as the matrix.
    fn set_affinity_rows(&mut self, rows: Vec<Vec<i32>>) -> Result<()> {
        let matrix = AffinityMatrix::new(rows)?;
        self.set_affinity_matrix(matrix);
        Ok(())
    }

    /// The arrangement of the (possibly cached) solution.
    fn arrangement(&mut self) -> Result<Vec<usize>> {
        Ok(self.solution()?.arrangement.clone())
    }

    /// The cost of the (possibly cached) solution.
    fn cost(&mut self) -> Result<i64> {
        Ok(self.solution()?.cost)
    }
}

/// Lazily filled solution slot.
#[derive(Debug, Clone, Default)]
pub(crate) struct SolutionCache(Option<Solution>);

impl SolutionCache {
    pub(crate) fn invalidate(&mut self) {
        self.0 = None;
    }

    pub(crate) fn is_ready(&self) -> bool {
        self.0.is_some()
    }

    /// Returns the cached solution or stores the result of `solve`.
    ///
    /// A failing `solve` leaves the slot empty.
    pub(crate) fn get_or_solve<F>(&mut self, solver: &'static str, solve: F) -> Result<&Solution>
    where
        F: FnOnce() -> Result<Solution>,
    {
        let solution = match self.0.take() {
            Some(cached) => {
                tracing::trace!(solver, "reusing cached solution");
                cached
            }
            None => solve()?,
        };
        Ok(self.0.insert(solution))
    }
}

pub(crate) fn missing_matrix(solver: &'static str) -> ArrangeError {
    ArrangeError::state(format!("{solver}: affinity matrix not set"))
}
