//! Item reference entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ItemId, ValidationError};

/// A listable item.
///
/// Items are owned by an external catalog collaborator; auctions
/// reference them by id only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    title: String,
}

impl Item {
    /// Creates a new item.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the title is empty or whitespace
    pub fn new(id: ItemId, title: impl Into<String>) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        Ok(Self { id, title })
    }

    /// Returns the item id.
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Returns the item title.
    pub fn title(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_keeps_supplied_values() {
        let id = ItemId::new();
        let item = Item::new(id, "lamp").unwrap();
        assert_eq!(item.id(), &id);
        assert_eq!(item.title(), "lamp");
    }

    #[test]
    fn new_item_rejects_empty_title() {
        let result = Item::new(ItemId::new(), "");
        assert!(result.is_err());
    }
}
