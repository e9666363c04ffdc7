//! Double-ended greedy insertion.
//!
//! # Algorithm
//!
//! 1. Place the two items of the strongest pair next to each other.
//! 2. Keep one pointer into the sorted neighbor list of each end of the
//!    placed arc. Take whichever end offers the higher affinity (ties go
//!    left). An unplaced candidate is appended to that end and the end's
//!    pointer restarts at the new item's list; a placed one is skipped.
//! 3. Stop when the two cursors meet, with `N - 1` items placed.
//! 4. The last item fills the remaining slot and closes the cycle,
//!    gaining its affinity with both ends.
//!
//! Pointers only move forward within a list, so most of the work is a
//! linear walk over already-sorted lists.

use tracing::{debug, trace};

use super::shelf::Shelf;
use crate::error::{ArrangeError, Result};
use crate::matrix::{AffinityMatrix, SortedNeighbors};
use crate::solver::types::{missing_matrix, SolutionCache};
use crate::solver::{ArrangementSolver, Solution};

const NAME: &str = "greedy";

/// Greedy heuristic growing the arrangement from both ends.
///
/// Needs both an [`AffinityMatrix`] and its [`SortedNeighbors`].
///
/// # Examples
///
/// ```
/// use u_arrange::greedy::GreedySolver;
/// use u_arrange::matrix::AffinityMatrix;
/// use u_arrange::solver::ArrangementSolver;
///
/// let m = AffinityMatrix::from_fn(6, |i, j| ((i * 7 + j * 3) % 101) as i32).unwrap();
/// let mut solver = GreedySolver::for_matrix(m);
/// let arrangement = solver.arrangement().unwrap();
/// assert_eq!(arrangement.len(), 6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedySolver {
    matrix: Option<AffinityMatrix>,
    neighbors: Option<SortedNeighbors>,
    cache: SolutionCache,
}

impl GreedySolver {
    /// Creates an empty solver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solver holding `matrix` and its derived projection.
    pub fn for_matrix(matrix: AffinityMatrix) -> Self {
        let neighbors = matrix.sorted_neighbors();
        Self {
            matrix: Some(matrix),
            neighbors: Some(neighbors),
            cache: SolutionCache::default(),
        }
    }
}

impl ArrangementSolver for GreedySolver {
    fn name(&self) -> &'static str {
        NAME
    }

    fn set_affinity_matrix(&mut self, matrix: AffinityMatrix) {
        self.matrix = Some(matrix);
        self.cache.invalidate();
    }

    fn set_sorted_neighbors(&mut self, neighbors: SortedNeighbors) -> Result<()> {
        self.neighbors = Some(neighbors);
        self.cache.invalidate();
        Ok(())
    }

    fn solution(&mut self) -> Result<&Solution> {
        let matrix = self.matrix.as_ref().ok_or_else(|| missing_matrix(NAME))?;
        let neighbors = self
            .neighbors
            .as_ref()
            .ok_or_else(|| ArrangeError::state(format!("{NAME}: sorted neighbors not set")))?;
        self.cache.get_or_solve(NAME, || solve(matrix, neighbors))
    }

    fn is_ready(&self) -> bool {
        self.cache.is_ready()
    }

    fn reset(&mut self) {
        self.matrix = None;
        self.neighbors = None;
        self.cache.invalidate();
    }
}

fn inconsistent() -> ArrangeError {
    ArrangeError::state(format!("{NAME}: sorted neighbors do not describe the matrix"))
}

fn solve(matrix: &AffinityMatrix, neighbors: &SortedNeighbors) -> Result<Solution> {
    let n = matrix.len();
    if neighbors.len() != n {
        return Err(ArrangeError::state(format!(
            "{NAME}: sorted neighbors cover {} items but the matrix has {n}",
            neighbors.len()
        )));
    }
    match n {
        1 => {
            return Ok(Solution {
                arrangement: vec![0],
                cost: 0,
            })
        }
        // the single edge is walked in both directions around the cycle
        2 => {
            return Ok(Solution {
                arrangement: vec![0, 1],
                cost: 2 * i64::from(matrix.affinity(0, 1)),
            })
        }
        _ => {}
    }

    let (_, first, second) = neighbors.strongest_pair().ok_or_else(inconsistent)?;
    let mut shelf = Shelf::new(n);
    shelf.place_left(first);
    shelf.place_right(second);
    let mut total = i64::from(matrix.affinity(first, second));

    let mut left_pos = 0;
    let mut right_pos = 0;
    while !shelf.cursors_met() {
        let left_end = shelf.leftmost().ok_or_else(inconsistent)?;
        let right_end = shelf.rightmost().ok_or_else(inconsistent)?;
        let left = neighbors.of(left_end).get(left_pos).copied();
        let right = neighbors.of(right_end).get(right_pos).copied();

        // ties go left
        let take_right = match (left, right) {
            (left, Some(cand)) => left.map_or(true, |l| cand.affinity > l.affinity),
            (Some(_), None) => false,
            (None, None) => return Err(inconsistent()),
        };

        match (take_right, left, right) {
            (true, _, Some(cand)) => {
                if shelf.is_placed(cand.item) {
                    right_pos += 1;
                } else {
                    shelf.place_right(cand.item);
                    total += i64::from(matrix.affinity(right_end, cand.item));
                    right_pos = 0;
                    trace!(solver = NAME, item = cand.item, side = "right", "placed");
                }
            }
            (false, Some(cand), _) => {
                if shelf.is_placed(cand.item) {
                    left_pos += 1;
                } else {
                    shelf.place_left(cand.item);
                    total += i64::from(matrix.affinity(left_end, cand.item));
                    left_pos = 0;
                    trace!(solver = NAME, item = cand.item, side = "left", "placed");
                }
            }
            _ => return Err(inconsistent()),
        }
    }

    let last = shelf.first_unplaced().ok_or_else(inconsistent)?;
    let left_end = shelf.leftmost().ok_or_else(inconsistent)?;
    let right_end = shelf.rightmost().ok_or_else(inconsistent)?;
    shelf.place_left(last);
    total += i64::from(matrix.affinity(last, left_end)) + i64::from(matrix.affinity(last, right_end));

    let arrangement = shelf.into_arrangement().ok_or_else(inconsistent)?;
    debug!(solver = NAME, n, cost = total, "arrangement built");
    Ok(Solution {
        arrangement,
        cost: total,
    })
}
