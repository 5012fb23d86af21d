//! Row Views
//!
//! Which variant each row of the list shows, derived from the
//! edit-mode selector: an item row switches to its edit form when the
//! selector names its id, the append slot switches from its button to
//! an editor when the selector is `Append`.

use crate::domain::{EditMode, TodoItem};
use crate::edit::EditSession;

/// What a single list row shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemView<'a> {
    /// Read-only display of the snapshot item
    Display(&'a TodoItem),
    /// Edit form bound to the draft
    Edit(&'a TodoItem),
}

impl<'a> ItemView<'a> {
    /// Item shown by the row (the draft for `Edit`)
    pub fn item(&self) -> &'a TodoItem {
        match self {
            ItemView::Display(item) | ItemView::Edit(item) => item,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, ItemView::Edit(_))
    }
}

/// What the append slot below the list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendView<'a> {
    /// "Add Item" button
    Button,
    /// Editor bound to the draft of the new item
    Editor(&'a TodoItem),
}

/// Rows of an editable list in display order
pub fn item_views<'a>(items: &'a [TodoItem], session: &'a EditSession) -> Vec<ItemView<'a>> {
    items
        .iter()
        .map(|item| match (session.mode(), session.draft()) {
            (mode, Some(draft)) if mode.is_editing(item.id) => ItemView::Edit(draft),
            _ => ItemView::Display(item),
        })
        .collect()
}

/// Rows of a list that is never edited (the archived list)
pub fn read_only_views(items: &[TodoItem]) -> Vec<ItemView<'_>> {
    items.iter().map(ItemView::Display).collect()
}

pub fn append_view(session: &EditSession) -> AppendView<'_> {
    match (session.mode(), session.draft()) {
        (EditMode::Append, Some(draft)) => AppendView::Editor(draft),
        _ => AppendView::Button,
    }
}
