//! Domain Layer
//!
//! Todo entities, the edit-mode selector and the transport error type.
//! This layer has NO network dependencies (serde and thiserror only).

mod entity;
mod todo_item;
mod edit_mode;

pub use entity::{Entity, TransportError, TransportResult};
pub use todo_item::{TodoItem, NEW_ITEM_ID};
pub use edit_mode::{EditMode, EditTarget};
