//! The three item slots of the board.

use crate::item::{Item, ItemPair};

/// Left and right visible items plus the staged `next` item.
///
/// Invariants upheld by the state machine:
/// - `left` and `right` are either both populated or both empty;
/// - `next` is populated only while a transition is in flight.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    left: Option<Item>,
    right: Option<Item>,
    next: Option<Item>,
}

impl Board {
    pub fn new(pair: ItemPair) -> Self {
        Self {
            left: Some(pair.left),
            right: Some(pair.right),
            next: None,
        }
    }

    pub fn left(&self) -> Option<&Item> {
        self.left.as_ref()
    }

    pub fn right(&self) -> Option<&Item> {
        self.right.as_ref()
    }

    pub fn next(&self) -> Option<&Item> {
        self.next.as_ref()
    }

    pub fn is_populated(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.right.is_none() && self.next.is_none()
    }

    /// Metrics of the visible pair, if the board is populated.
    pub fn metrics(&self) -> Option<(Option<u64>, Option<u64>)> {
        match (&self.left, &self.right) {
            (Some(left), Some(right)) => Some((left.metric, right.metric)),
            _ => None,
        }
    }

    /// Stages the item that will enter the right slot once the slide ends.
    pub fn stage_next(&mut self, item: Item) {
        self.next = Some(item);
    }

    /// Moves right into left and next into right in one step.
    ///
    /// Returns false and leaves the board untouched unless both the right and
    /// the staged item are present.
    pub fn commit_transition(&mut self) -> bool {
        if self.right.is_none() || self.next.is_none() {
            return false;
        }
        self.left = self.right.take();
        self.right = self.next.take();
        true
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> ItemPair {
        ItemPair::new(
            Item::new("a", "Alpha", Some(100)),
            Item::new("b", "Beta", Some(250)),
        )
    }

    #[test]
    fn commit_slides_right_into_left() {
        let mut board = Board::new(pair());
        board.stage_next(Item::new("c", "Gamma", Some(40)));

        assert!(board.commit_transition());
        assert_eq!(board.left().map(|i| i.id.as_str()), Some("b"));
        assert_eq!(board.right().map(|i| i.id.as_str()), Some("c"));
        assert!(board.next().is_none());
        assert_eq!(board.metrics(), Some((Some(250), Some(40))));
    }

    #[test]
    fn commit_without_staged_item_is_noop() {
        let mut board = Board::new(pair());
        let before = board.clone();
        assert!(!board.commit_transition());
        assert_eq!(board, before);
    }

    #[test]
    fn clear_empties_every_slot() {
        let mut board = Board::new(pair());
        board.stage_next(Item::new("c", "Gamma", None));
        board.clear();
        assert!(board.is_empty());
        assert_eq!(board.metrics(), None);
    }
}
