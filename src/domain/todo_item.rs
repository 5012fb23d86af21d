//! Todo Item Entity
//!
//! A single task record as served by the remote collection.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Reserved id of an item that has not been persisted yet
pub const NEW_ITEM_ID: u32 = 0;

/// A todo item
///
/// Serialized as `{ "id", "description", "isDone" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Unique identifier, `NEW_ITEM_ID` until the server assigns one
    pub id: u32,
    /// Free text
    pub description: String,
    /// Completion flag
    pub is_done: bool,
}

impl TodoItem {
    pub fn new(id: u32, description: impl Into<String>, is_done: bool) -> Self {
        Self {
            id,
            description: description.into(),
            is_done,
        }
    }

    /// Blank item used to seed the append form
    pub fn empty() -> Self {
        Self::new(NEW_ITEM_ID, String::new(), false)
    }

    /// Check if this item still carries the new-item sentinel
    pub fn is_new(&self) -> bool {
        self.id == NEW_ITEM_ID
    }

    /// Copy of this item with the sentinel id, as sent on append
    pub fn as_new(&self) -> Self {
        Self {
            id: NEW_ITEM_ID,
            ..self.clone()
        }
    }
}

impl Default for TodoItem {
    fn default() -> Self {
        Self::empty()
    }
}

impl Entity for TodoItem {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
