//! Circular buffer filled from both ends.

/// A ring of `n` slots filled outward from an initial adjacent pair.
///
/// `left` moves backwards and `right` forwards, both wrapping. The
/// filled region is always the contiguous arc strictly between them;
/// when they meet, exactly one slot is still empty.
#[derive(Debug, Clone)]
pub(super) struct Shelf {
    slots: Vec<Option<usize>>,
    placed: Vec<bool>,
    left: usize,
    right: usize,
}

impl Shelf {
    pub(super) fn new(n: usize) -> Self {
        Self {
            slots: vec![None; n],
            placed: vec![false; n],
            left: 0,
            right: 1 % n,
        }
    }

    fn len(&self) -> usize {
        self.slots.len()
    }

    pub(super) fn place_left(&mut self, item: usize) {
        self.slots[self.left] = Some(item);
        self.placed[item] = true;
        self.left = (self.left + self.len() - 1) % self.len();
    }

    pub(super) fn place_right(&mut self, item: usize) {
        self.slots[self.right] = Some(item);
        self.placed[item] = true;
        self.right = (self.right + 1) % self.len();
    }

    /// Item at the left end of the filled arc.
    pub(super) fn leftmost(&self) -> Option<usize> {
        self.slots[(self.left + 1) % self.len()]
    }

    /// Item at the right end of the filled arc.
    pub(super) fn rightmost(&self) -> Option<usize> {
        self.slots[(self.right + self.len() - 1) % self.len()]
    }

    pub(super) fn is_placed(&self, item: usize) -> bool {
        self.placed[item]
    }

    pub(super) fn cursors_met(&self) -> bool {
        self.left == self.right
    }

    pub(super) fn first_unplaced(&self) -> Option<usize> {
        self.placed.iter().position(|&p| !p)
    }

    /// Slot contents in ring order, or `None` while a slot is empty.
    pub(super) fn into_arrangement(self) -> Option<Vec<usize>> {
        self.slots.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_from_both_ends() {
        let mut shelf = Shelf::new(5);
        shelf.place_left(3);
        shelf.place_right(1);
        assert_eq!(shelf.leftmost(), Some(3));
        assert_eq!(shelf.rightmost(), Some(1));

        shelf.place_right(4);
        shelf.place_left(0);
        assert_eq!(shelf.leftmost(), Some(0));
        assert_eq!(shelf.rightmost(), Some(4));
        assert!(shelf.cursors_met(), "four of five slots filled");
        assert_eq!(shelf.first_unplaced(), Some(2));

        shelf.place_left(2);
        assert_eq!(shelf.into_arrangement(), Some(vec![3, 1, 4, 2, 0]));
    }

    #[test]
    fn test_incomplete_arrangement() {
        let mut shelf = Shelf::new(3);
        shelf.place_left(0);
        assert!(shelf.is_placed(0));
        assert!(!shelf.is_placed(1));
        assert_eq!(shelf.into_arrangement(), None);
    }
}
