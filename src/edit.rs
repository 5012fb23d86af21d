//! Edit Session
//!
//! The edit-mode selector together with the draft buffer of the item
//! being composed. The draft is a copy taken when edit mode is entered;
//! later changes to the list snapshot do not reach it.

use log::warn;

use crate::domain::{EditMode, EditTarget, TodoItem};
use crate::store::TodoListState;

/// Selector plus draft. `draft` is `Some` exactly when `mode` is not `ReadOnly`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditSession {
    mode: EditMode,
    draft: Option<TodoItem>,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Draft of the item being edited, if any
    pub fn draft(&self) -> Option<&TodoItem> {
        self.draft.as_ref()
    }

    /// Enter edit mode, discarding any unsaved draft.
    ///
    /// Returns `false` (leaving the session untouched) when `target` names
    /// an item that is not in the current snapshot.
    pub fn begin(&mut self, target: EditTarget, state: &TodoListState) -> bool {
        let draft = match target {
            EditTarget::Append => TodoItem::empty(),
            EditTarget::Item(id) => match state.find_item(id) {
                Some(item) => item.clone(),
                None => {
                    warn!("Cannot edit todo {}: not in the current list", id);
                    return false;
                }
            },
        };
        self.mode = target.into();
        self.draft = Some(draft);
        true
    }

    /// Back to read-only; the draft is dropped
    pub fn reset(&mut self) {
        self.mode = EditMode::ReadOnly;
        self.draft = None;
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> bool {
        match self.draft.as_mut() {
            Some(draft) => {
                draft.description = description.into();
                true
            }
            None => false,
        }
    }

    pub fn set_done(&mut self, is_done: bool) -> bool {
        match self.draft.as_mut() {
            Some(draft) => {
                draft.is_done = is_done;
                true
            }
            None => false,
        }
    }

    pub fn toggle_done(&mut self) -> bool {
        match self.draft.as_mut() {
            Some(draft) => {
                draft.is_done = !draft.is_done;
                true
            }
            None => false,
        }
    }
}
