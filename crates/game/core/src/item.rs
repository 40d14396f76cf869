//! Item records placed on the board.

use core::fmt;

use crate::error::GameError;

/// Identifier assigned to an item by the item provider.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A comparable item with a hidden popularity metric.
///
/// Items are immutable once fetched. A board slot owns the item it shows and
/// hands it over (by move) when the item slides from the right to the left.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: ItemId,
    pub display_name: String,
    /// Hidden metric. `None` when the provider has no figure for this item.
    pub metric: Option<u64>,
    /// Image location, already resolved to something a preloader can fetch.
    pub image_ref: Option<String>,
}

impl Item {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, metric: Option<u64>) -> Self {
        Self {
            id: ItemId::new(id),
            display_name: display_name.into(),
            metric,
            image_ref: None,
        }
    }

    #[must_use]
    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = Some(image_ref.into());
        self
    }

    /// Checks the fields every item must carry (identity and name).
    pub fn validate(&self) -> Result<(), GameError> {
        if self.id.as_str().trim().is_empty() {
            return Err(GameError::data_unavailable("item is missing an id"));
        }
        if self.display_name.trim().is_empty() {
            return Err(GameError::data_unavailable(format!(
                "item {} is missing a display name",
                self.id
            )));
        }
        Ok(())
    }
}

/// The two items that open a game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemPair {
    pub left: Item,
    pub right: Item,
}

impl ItemPair {
    pub fn new(left: Item, right: Item) -> Self {
        Self { left, right }
    }

    pub fn validate(&self) -> Result<(), GameError> {
        self.left.validate()?;
        self.right.validate()
    }
}

/// One of the two visible board positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Slot {
    Left,
    Right,
}

impl Slot {
    pub const fn index(self) -> usize {
        match self {
            Slot::Left => 0,
            Slot::Right => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_blank_identity_and_name() {
        assert!(Item::new("1", "Cricket", Some(10)).validate().is_ok());
        assert!(matches!(
            Item::new(" ", "Cricket", Some(10)).validate(),
            Err(GameError::DataUnavailable(_))
        ));
        assert!(matches!(
            Item::new("1", "", None).validate(),
            Err(GameError::DataUnavailable(_))
        ));
    }

    #[test]
    fn absent_metric_is_valid() {
        let item = Item::new("7", "Kabaddi", None).with_image("/media/kabaddi.jpg");
        assert!(item.validate().is_ok());
        assert_eq!(item.image_ref.as_deref(), Some("/media/kabaddi.jpg"));
    }

    #[test]
    fn slot_labels() {
        assert_eq!(Slot::Left.to_string(), "left");
        assert_eq!(Slot::Right.index(), 1);
    }
}
