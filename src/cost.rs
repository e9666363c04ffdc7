//! Cycle cost evaluation.
//!
//! The cost of an arrangement is the sum of affinities between every
//! item and its successor, where the last item's successor is the first.

use crate::error::{ArrangeError, Result};
use crate::matrix::{AffinityMatrix, MAX_AFFINITY};

/// Returned by [`cost_with_bound`] when a candidate cannot beat the bound.
pub const PRUNED: i64 = -1;

/// Total affinity around the cycle described by `arrangement`.
///
/// Arrangements of zero or one item cost 0. Fails with
/// [`ArrangeError::Validation`] if an item is out of range for `matrix`.
///
/// # Examples
///
/// ```
/// use u_arrange::cost::cost;
/// use u_arrange::matrix::AffinityMatrix;
///
/// let m = AffinityMatrix::new(vec![
///     vec![-1, 2, 0],
///     vec![2, -1, 1],
///     vec![0, 1, -1],
/// ]).unwrap();
/// assert_eq!(cost(&[0, 1, 2], &m).unwrap(), 3);
/// assert!(cost(&[0, 3], &m).is_err());
/// ```
pub fn cost(arrangement: &[usize], matrix: &AffinityMatrix) -> Result<i64> {
    check_items(arrangement, matrix)?;
    Ok(cycle_cost(arrangement, matrix))
}

/// Like [`cost`], but gives up as soon as the candidate provably cannot
/// exceed `bound`.
///
/// After each edge the partial sum plus `MAX_AFFINITY` for every edge
/// still to come is compared with `bound`; once it is `<= bound` the
/// function returns [`PRUNED`]. An arrangement of zero or one item
/// returns [`PRUNED`] when `bound == 0` and 0 otherwise, so a best-cost
/// tracker starting at `-1` still initializes.
pub fn cost_with_bound(arrangement: &[usize], matrix: &AffinityMatrix, bound: i64) -> Result<i64> {
    check_items(arrangement, matrix)?;
    Ok(bounded_cycle_cost(arrangement, matrix, bound))
}

fn check_items(arrangement: &[usize], matrix: &AffinityMatrix) -> Result<()> {
    match arrangement.iter().find(|&&item| item >= matrix.len()) {
        Some(item) => Err(ArrangeError::validation(format!(
            "item {item} is out of range for {} items",
            matrix.len()
        ))),
        None => Ok(()),
    }
}

/// [`cost`] for arrangements already known to be in range.
pub(crate) fn cycle_cost(arrangement: &[usize], matrix: &AffinityMatrix) -> i64 {
    if arrangement.len() <= 1 {
        return 0;
    }
    let closing = i64::from(matrix.affinity(arrangement[arrangement.len() - 1], arrangement[0]));
    arrangement
        .windows(2)
        .map(|w| i64::from(matrix.affinity(w[0], w[1])))
        .sum::<i64>()
        + closing
}

/// [`cost_with_bound`] for arrangements already known to be in range.
pub(crate) fn bounded_cycle_cost(arrangement: &[usize], matrix: &AffinityMatrix, bound: i64) -> i64 {
    let len = arrangement.len();
    if len <= 1 {
        return if bound == 0 { PRUNED } else { 0 };
    }
    let mut acc = i64::from(matrix.affinity(arrangement[len - 1], arrangement[0]));
    for i in 1..len {
        acc += i64::from(matrix.affinity(arrangement[i - 1], arrangement[i]));
        let remaining = (len - i - 1) as i64;
        if acc + remaining * i64::from(MAX_AFFINITY) <= bound {
            return PRUNED;
        }
    }
    acc
}

/// True if `arrangement` is a permutation of `0..n`.
pub fn is_valid_arrangement(arrangement: &[usize], n: usize) -> bool {
    if arrangement.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &item in arrangement {
        if item >= n || seen[item] {
            return false;
        }
        seen[item] = true;
    }
    true
}
