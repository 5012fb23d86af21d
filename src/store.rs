//! List Snapshot Store
//!
//! The last successfully fetched copy of each remote list. Snapshots are
//! only ever replaced wholesale; there is no client-side merge.

use crate::domain::{Entity, TodoItem};

/// Snapshots of the remote collections
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoListState {
    /// Active list, as of the last successful `GET /todos`
    pub todo_list: Vec<TodoItem>,
    /// Archived list, as of the last successful `GET /archived-todos`
    pub archived_todo_list: Vec<TodoItem>,
}

impl TodoListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find an item of the active list by ID
    pub fn find_item(&self, id: u32) -> Option<&TodoItem> {
        find_by_id(&self.todo_list, id)
    }
}

/// Look up an entity by ID in a snapshot
pub fn find_by_id<T: Entity>(items: &[T], id: T::Id) -> Option<&T> {
    items.iter().find(|item| item.id() == id)
}

// ========================
// Snapshot Helpers
// ========================

/// Replace the active list with a freshly fetched one
pub fn store_replace_todo_list(state: &mut TodoListState, items: Vec<TodoItem>) {
    state.todo_list = items;
}

/// Replace the archived list with a freshly fetched one
pub fn store_replace_archived_list(state: &mut TodoListState, items: Vec<TodoItem>) {
    state.archived_todo_list = items;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_items() -> Vec<TodoItem> {
        vec![TodoItem::new(1, "Lemons", true), TodoItem::new(2, "Oranges", false)]
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = TodoListState::new();
        assert!(state.todo_list.is_empty());
        assert!(state.archived_todo_list.is_empty());
    }

    #[test]
    fn test_find_item() {
        let mut state = TodoListState::new();
        store_replace_todo_list(&mut state, make_items());

        assert_eq!(state.find_item(2).map(|i| i.description.as_str()), Some("Oranges"));
        assert!(state.find_item(3).is_none());
    }

    #[test]
    fn test_replace_is_wholesale() {
        let mut state = TodoListState::new();
        store_replace_todo_list(&mut state, make_items());
        store_replace_todo_list(&mut state, vec![TodoItem::new(7, "Tuna", false)]);

        assert_eq!(state.todo_list, vec![TodoItem::new(7, "Tuna", false)]);
    }

    #[test]
    fn test_archived_list_is_independent() {
        let mut state = TodoListState::new();
        store_replace_todo_list(&mut state, make_items());
        store_replace_archived_list(&mut state, vec![TodoItem::new(3, "Eggs", true)]);

        assert_eq!(state.todo_list.len(), 2);
        assert_eq!(state.archived_todo_list.len(), 1);
        // Archived ids are not visible through the active-list lookup
        assert!(state.find_item(3).is_none());
    }
}
