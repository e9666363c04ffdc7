//! Sorted-neighbor projection of an affinity matrix.

use super::types::AffinityMatrix;
use crate::error::{ArrangeError, Result};

/// One entry of a sorted neighbor list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Neighbor {
    /// Affinity with the owning item.
    pub affinity: i32,
    /// Index of the neighboring item.
    pub item: usize,
}

/// For every item, all other items ordered by affinity, highest first.
///
/// Ties keep ascending item order, so the projection of a given matrix
/// is always the same.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<Neighbor>>", into = "Vec<Vec<Neighbor>>")
)]
pub struct SortedNeighbors {
    lists: Vec<Vec<Neighbor>>,
}

impl SortedNeighbors {
    /// Derives the projection from `matrix`.
    pub fn from_matrix(matrix: &AffinityMatrix) -> Self {
        let lists = (0..matrix.len())
            .map(|i| {
                let mut list: Vec<Neighbor> = matrix
                    .row(i)
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .map(|(item, &affinity)| Neighbor { affinity, item })
                    .collect();
                // stable: equal affinities stay in index order
                list.sort_by(|a, b| b.affinity.cmp(&a.affinity));
                list
            })
            .collect();
        Self { lists }
    }

    /// Validates a precomputed projection.
    ///
    /// Each list must name every other item exactly once, in
    /// non-increasing affinity order.
    pub fn new(lists: Vec<Vec<Neighbor>>) -> Result<Self> {
        let n = lists.len();
        if n == 0 {
            return Err(ArrangeError::validation("sorted neighbors must not be empty"));
        }
        for (i, list) in lists.iter().enumerate() {
            if list.len() != n - 1 {
                return Err(ArrangeError::validation(format!(
                    "item {i} lists {} neighbors, expected {}",
                    list.len(),
                    n - 1
                )));
            }
            let mut seen = vec![false; n];
            for nb in list {
                if nb.item >= n || nb.item == i || seen[nb.item] {
                    return Err(ArrangeError::validation(format!(
                        "item {i} has an invalid or repeated neighbor {}",
                        nb.item
                    )));
                }
                seen[nb.item] = true;
            }
            if list.windows(2).any(|w| w[0].affinity < w[1].affinity) {
                return Err(ArrangeError::validation(format!(
                    "neighbors of item {i} are not sorted by descending affinity"
                )));
            }
        }
        Ok(Self { lists })
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// True when the projection describes no items.
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Neighbors of `item`, best first.
    pub fn of(&self, item: usize) -> &[Neighbor] {
        &self.lists[item]
    }

    /// The globally strongest pair `(affinity, a, b)`.
    ///
    /// The first maximum in scan order wins. `None` for a single item.
    pub fn strongest_pair(&self) -> Option<(i32, usize, usize)> {
        let mut best: Option<(i32, usize, usize)> = None;
        for (i, list) in self.lists.iter().enumerate() {
            for nb in list {
                if best.map_or(true, |(affinity, _, _)| nb.affinity > affinity) {
                    best = Some((nb.affinity, i, nb.item));
                }
            }
        }
        best
    }
}

impl TryFrom<Vec<Vec<Neighbor>>> for SortedNeighbors {
    type Error = ArrangeError;

    fn try_from(lists: Vec<Vec<Neighbor>>) -> Result<Self> {
        Self::new(lists)
    }
}

impl From<SortedNeighbors> for Vec<Vec<Neighbor>> {
    fn from(neighbors: SortedNeighbors) -> Self {
        neighbors.lists
    }
}

impl AffinityMatrix {
    /// Shorthand for [`SortedNeighbors::from_matrix`].
    pub fn sorted_neighbors(&self) -> SortedNeighbors {
        SortedNeighbors::from_matrix(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AffinityMatrix {
        AffinityMatrix::new(vec![
            vec![-1, 5, 9, 5],
            vec![5, -1, 3, 7],
            vec![9, 3, -1, 0],
            vec![5, 7, 0, -1],
        ])
        .unwrap()
    }

    #[test]
    fn test_from_matrix_ordering() {
        let proj = sample().sorted_neighbors();
        assert_eq!(proj.len(), 4);
        let items: Vec<usize> = proj.of(0).iter().map(|nb| nb.item).collect();
        // ties (items 1 and 3, both 5) keep index order
        assert_eq!(items, vec![2, 1, 3]);
        let affinities: Vec<i32> = proj.of(0).iter().map(|nb| nb.affinity).collect();
        assert_eq!(affinities, vec![9, 5, 5]);
        assert!(proj.of(2).iter().all(|nb| nb.item != 2));
    }

    #[test]
    fn test_from_matrix_deterministic() {
        let m = sample();
        assert_eq!(m.sorted_neighbors(), m.sorted_neighbors());
    }

    #[test]
    fn test_strongest_pair() {
        let proj = sample().sorted_neighbors();
        assert_eq!(proj.strongest_pair(), Some((9, 0, 2)));
        let single = AffinityMatrix::new(vec![vec![-1]]).unwrap().sorted_neighbors();
        assert_eq!(single.strongest_pair(), None);
    }

    #[test]
    fn test_new_accepts_derived() {
        let derived = sample().sorted_neighbors();
        let rebuilt = SortedNeighbors::new(derived.lists.clone()).unwrap();
        assert_eq!(rebuilt, derived);
    }

    #[test]
    fn test_new_rejects_bad_lists() {
        assert!(SortedNeighbors::new(vec![]).is_err());

        let unsorted = vec![
            vec![Neighbor { affinity: 1, item: 1 }, Neighbor { affinity: 4, item: 2 }],
            vec![Neighbor { affinity: 1, item: 0 }, Neighbor { affinity: 0, item: 2 }],
            vec![Neighbor { affinity: 4, item: 0 }, Neighbor { affinity: 0, item: 1 }],
        ];
        assert!(matches!(
            SortedNeighbors::new(unsorted),
            Err(ArrangeError::Validation(_))
        ));

        let self_loop = vec![
            vec![Neighbor { affinity: 1, item: 0 }],
            vec![Neighbor { affinity: 1, item: 0 }],
        ];
        assert!(SortedNeighbors::new(self_loop).is_err());

        let short = vec![vec![], vec![Neighbor { affinity: 1, item: 0 }]];
        assert!(SortedNeighbors::new(short).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_validates() {
        let derived = sample().sorted_neighbors();
        let json = serde_json::to_string(&derived).unwrap();
        let back: SortedNeighbors = serde_json::from_str(&json).unwrap();
        assert_eq!(back, derived);

        let out_of_range = r#"[[{"affinity":9,"item":7}],[{"affinity":9,"item":0}]]"#;
        assert!(serde_json::from_str::<SortedNeighbors>(out_of_range).is_err());
        let unsorted = r#"[[{"affinity":1,"item":1},{"affinity":5,"item":2}],
            [{"affinity":1,"item":0},{"affinity":3,"item":2}],
            [{"affinity":5,"item":0},{"affinity":3,"item":1}]]"#;
        assert!(serde_json::from_str::<SortedNeighbors>(unsorted).is_err());
    }
}
