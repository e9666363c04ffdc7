//! The symmetric affinity matrix.

use rand::Rng;

use crate::error::{ArrangeError, Result};

/// Highest affinity two items can have.
pub const MAX_AFFINITY: i32 = 100;

/// Diagonal sentinel: an item has no affinity with itself.
pub const NO_AFFINITY: i32 = -1;

/// An N×N symmetric matrix of pairwise affinity scores.
///
/// Off-diagonal cells lie in `0..=MAX_AFFINITY` and satisfy
/// `m[i][j] == m[j][i]`; every diagonal cell is [`NO_AFFINITY`].
/// A value of this type always holds at least one item.
///
/// # Examples
///
/// ```
/// use u_arrange::matrix::AffinityMatrix;
///
/// let m = AffinityMatrix::new(vec![
///     vec![-1, 2, 0],
///     vec![2, -1, 1],
///     vec![0, 1, -1],
/// ]).unwrap();
/// assert_eq!(m.len(), 3);
/// assert_eq!(m.affinity(0, 1), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<i32>>", into = "Vec<Vec<i32>>")
)]
pub struct AffinityMatrix {
    n: usize,
    cells: Vec<i32>,
}

impl AffinityMatrix {
    /// Validates `rows` and builds the matrix.
    ///
    /// Fails with [`ArrangeError::Validation`] if the input is empty,
    /// not square, asymmetric, has a score outside `0..=100`, or a
    /// diagonal cell other than `-1`.
    pub fn new(rows: Vec<Vec<i32>>) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(ArrangeError::validation("affinity matrix must not be empty"));
        }
        let mut cells = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(ArrangeError::validation(format!(
                    "affinity matrix must be square: row {i} has {} entries, expected {n}",
                    row.len()
                )));
            }
            cells.extend(row);
        }
        let matrix = Self { n, cells };
        matrix.check()?;
        Ok(matrix)
    }

    /// Builds a matrix from a scoring function over the upper triangle.
    ///
    /// `affinity(i, j)` is called once for every `i < j`; the result is
    /// mirrored to `(j, i)` and the diagonal is filled with the sentinel.
    pub fn from_fn<F>(n: usize, mut affinity: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> i32,
    {
        if n == 0 {
            return Err(ArrangeError::validation("affinity matrix must not be empty"));
        }
        let mut cells = vec![NO_AFFINITY; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let value = affinity(i, j);
                check_score(i, j, value)?;
                cells[i * n + j] = value;
                cells[j * n + i] = value;
            }
        }
        Ok(Self { n, cells })
    }

    /// Every pair of distinct items has the same affinity.
    pub fn uniform(n: usize, affinity: i32) -> Result<Self> {
        Self::from_fn(n, |_, _| affinity)
    }

    /// Uniformly random affinities in `0..=MAX_AFFINITY`.
    pub fn random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Self> {
        Self::from_fn(n, |_, _| rng.random_range(0..=MAX_AFFINITY))
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Always false: a matrix holds at least one item.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Affinity between items `i` and `j` (`-1` when `i == j`).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn affinity(&self, i: usize, j: usize) -> i32 {
        assert!(i < self.n && j < self.n, "item index out of range");
        self.cells[i * self.n + j]
    }

    /// Row `i` of the matrix.
    pub fn row(&self, i: usize) -> &[i32] {
        &self.cells[i * self.n..(i + 1) * self.n]
    }

    /// Iterates over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[i32]> {
        self.cells.chunks(self.n)
    }

    /// Changes the affinity of the pair `(i, j)`, keeping the matrix symmetric.
    pub fn set_affinity(&mut self, i: usize, j: usize, affinity: i32) -> Result<()> {
        if i >= self.n || j >= self.n {
            return Err(ArrangeError::validation(format!(
                "item pair ({i}, {j}) out of range for {} items",
                self.n
            )));
        }
        if i == j {
            return Err(ArrangeError::validation(format!(
                "item {i} cannot have an affinity with itself"
            )));
        }
        check_score(i, j, affinity)?;
        self.cells[i * self.n + j] = affinity;
        self.cells[j * self.n + i] = affinity;
        Ok(())
    }

    /// Copies the matrix into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        self.rows().map(<[i32]>::to_vec).collect()
    }

    fn check(&self) -> Result<()> {
        let n = self.n;
        for i in 0..n {
            let diagonal = self.cells[i * n + i];
            if diagonal != NO_AFFINITY {
                return Err(ArrangeError::validation(format!(
                    "diagonal cell ({i}, {i}) must be {NO_AFFINITY}, got {diagonal}"
                )));
            }
            for j in (i + 1)..n {
                let upper = self.cells[i * n + j];
                let lower = self.cells[j * n + i];
                if upper != lower {
                    return Err(ArrangeError::validation(format!(
                        "affinity matrix must be symmetric: ({i}, {j}) = {upper} but ({j}, {i}) = {lower}"
                    )));
                }
                check_score(i, j, upper)?;
            }
        }
        Ok(())
    }
}

fn check_score(i: usize, j: usize, value: i32) -> Result<()> {
    if (0..=MAX_AFFINITY).contains(&value) {
        Ok(())
    } else {
        Err(ArrangeError::validation(format!(
            "affinity ({i}, {j}) = {value} outside 0..={MAX_AFFINITY}"
        )))
    }
}

impl TryFrom<Vec<Vec<i32>>> for AffinityMatrix {
    type Error = ArrangeError;

    fn try_from(rows: Vec<Vec<i32>>) -> Result<Self> {
        Self::new(rows)
    }
}

impl From<AffinityMatrix> for Vec<Vec<i32>> {
    fn from(matrix: AffinityMatrix) -> Self {
        matrix.to_rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn three() -> Vec<Vec<i32>> {
        vec![vec![-1, 2, 0], vec![2, -1, 1], vec![0, 1, -1]]
    }

    #[test]
    fn test_new_valid() {
        let m = AffinityMatrix::new(three()).unwrap();
        assert_eq!(m.len(), 3);
        assert!(!m.is_empty());
        assert_eq!(m.affinity(1, 2), 1);
        assert_eq!(m.affinity(2, 2), NO_AFFINITY);
        assert_eq!(m.row(0), &[-1, 2, 0]);
        assert_eq!(m.to_rows(), three());
    }

    #[test]
    fn test_single_item() {
        let m = AffinityMatrix::new(vec![vec![-1]]).unwrap();
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            AffinityMatrix::new(vec![]),
            Err(ArrangeError::Validation(_))
        ));
        assert!(AffinityMatrix::from_fn(0, |_, _| 0).is_err());
    }

    #[test]
    fn test_rejects_ragged() {
        let rows = vec![vec![-1, 2, 0], vec![2, -1], vec![0, 1, -1]];
        assert!(matches!(
            AffinityMatrix::new(rows),
            Err(ArrangeError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_asymmetric() {
        let rows = vec![vec![-1, 2], vec![3, -1]];
        assert!(AffinityMatrix::new(rows).is_err());
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(AffinityMatrix::new(vec![vec![-1, 101], vec![101, -1]]).is_err());
        assert!(AffinityMatrix::new(vec![vec![-1, -5], vec![-5, -1]]).is_err());
        assert!(AffinityMatrix::uniform(3, 200).is_err());
    }

    #[test]
    fn test_rejects_bad_diagonal() {
        assert!(AffinityMatrix::new(vec![vec![0, 1], vec![1, -1]]).is_err());
    }

    #[test]
    fn test_from_fn_is_symmetric() {
        let m = AffinityMatrix::from_fn(5, |i, j| (i * 10 + j) as i32).unwrap();
        for i in 0..5 {
            assert_eq!(m.affinity(i, i), NO_AFFINITY);
            for j in 0..5 {
                assert_eq!(m.affinity(i, j), m.affinity(j, i));
            }
        }
        assert_eq!(m.affinity(3, 1), 13);
    }

    #[test]
    fn test_random_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = AffinityMatrix::random(8, &mut rng).unwrap();
        for i in 0..8 {
            for j in 0..8 {
                if i != j {
                    assert!((0..=MAX_AFFINITY).contains(&m.affinity(i, j)));
                }
            }
        }
    }

    #[test]
    fn test_set_affinity() {
        let mut m = AffinityMatrix::new(three()).unwrap();
        m.set_affinity(2, 0, 40).unwrap();
        assert_eq!(m.affinity(0, 2), 40);
        assert_eq!(m.affinity(2, 0), 40);
        assert!(m.set_affinity(1, 1, 5).is_err());
        assert!(m.set_affinity(0, 3, 5).is_err());
        assert!(m.set_affinity(0, 1, 101).is_err());
        assert_eq!(m.affinity(0, 1), 2, "failed update must not change the matrix");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_validates() {
        let m = AffinityMatrix::new(three()).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "[[-1,2,0],[2,-1,1],[0,1,-1]]");
        let back: AffinityMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
        assert!(serde_json::from_str::<AffinityMatrix>("[[-1,2],[3,-1]]").is_err());
        assert!(serde_json::from_str::<AffinityMatrix>("[[-1,2,0]]").is_err());
    }
}
