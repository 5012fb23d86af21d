//! Todo Store Client
//!
//! Owns the list snapshots and the edit session, and drives the remote
//! collection. Every successful mutation is followed by a full re-fetch
//! of the active list before the selector returns to read-only; the
//! client never merges server responses into its snapshot.

use log::{debug, info, warn};

use crate::api::TodoApi;
use crate::domain::{EditMode, EditTarget, TodoItem, TransportResult};
use crate::edit::EditSession;
use crate::store::{store_replace_archived_list, store_replace_todo_list, TodoListState};
use crate::view::{self, AppendView, ItemView};

/// Client-side state of one todo list page.
///
/// Network operations take `&mut self`, so at most one request is in
/// flight per client.
pub struct TodoStoreClient<A: TodoApi> {
    api: A,
    state: TodoListState,
    session: EditSession,
}

impl<A: TodoApi> TodoStoreClient<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: TodoListState::new(),
            session: EditSession::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    // ========================
    // Loading
    // ========================

    /// Initial load of both lists.
    ///
    /// Failures are logged and leave the affected snapshot as it was.
    pub async fn mount(&mut self) {
        if let Err(e) = self.fetch_list().await {
            warn!("Initial todo list load failed: {}", e);
        }
        if let Err(e) = self.fetch_archived_list().await {
            warn!("Initial archived list load failed: {}", e);
        }
    }

    /// Re-fetch the active list; on error the previous snapshot stays
    pub async fn fetch_list(&mut self) -> TransportResult<&[TodoItem]> {
        let items = self.api.get_todo_list().await.map_err(|e| {
            warn!("Keeping previous todo list ({} items): {}", self.state.todo_list.len(), e);
            e
        })?;
        debug!("Loaded {} todo items", items.len());
        store_replace_todo_list(&mut self.state, items);
        Ok(&self.state.todo_list)
    }

    /// Re-fetch the archived list; on error the previous snapshot stays
    pub async fn fetch_archived_list(&mut self) -> TransportResult<&[TodoItem]> {
        let items = self.api.get_archived_todo_list().await.map_err(|e| {
            warn!(
                "Keeping previous archived list ({} items): {}",
                self.state.archived_todo_list.len(),
                e
            );
            e
        })?;
        debug!("Loaded {} archived items", items.len());
        store_replace_archived_list(&mut self.state, items);
        Ok(&self.state.archived_todo_list)
    }

    // ========================
    // Edit Mode
    // ========================

    pub fn edit_mode(&self) -> EditMode {
        self.session.mode()
    }

    pub fn draft(&self) -> Option<&TodoItem> {
        self.session.draft()
    }

    /// Enter edit mode for an item of the active list, or for a new item.
    ///
    /// Returns `false` if the item is not in the current snapshot.
    pub fn begin_edit(&mut self, target: EditTarget) -> bool {
        self.session.begin(target, &self.state)
    }

    /// Drop the draft and return to read-only. No network call.
    pub fn cancel_edit(&mut self) {
        self.session.reset();
    }

    pub fn set_draft_description(&mut self, description: impl Into<String>) -> bool {
        self.session.set_description(description)
    }

    pub fn set_draft_done(&mut self, is_done: bool) -> bool {
        self.session.set_done(is_done)
    }

    pub fn toggle_draft_done(&mut self) -> bool {
        self.session.toggle_done()
    }

    // ========================
    // Saving
    // ========================

    /// Persist `item`: append when it carries the new-item sentinel,
    /// update otherwise.
    ///
    /// On success the active list is re-fetched and only then does the
    /// selector go back to read-only. If the mutation fails, the error is
    /// returned and the edit session is left open for a retry.
    pub async fn save_edit(&mut self, item: TodoItem) -> TransportResult<()> {
        let saved = if item.is_new() {
            info!("Appending todo {:?}", item.description);
            self.api.append_todo_item(&item).await
        } else {
            info!("Updating todo {}", item.id);
            self.api.update_todo_item(&item).await
        };
        saved.map_err(|e| {
            warn!("Save failed, edit stays open: {}", e);
            e
        })?;

        // The mutation went through; a failed refresh only costs freshness
        if let Err(e) = self.fetch_list().await {
            warn!("Refresh after save failed: {}", e);
        }
        self.session.reset();
        Ok(())
    }

    /// `save_edit` with the current draft; nothing to do in read-only mode
    pub async fn save_draft(&mut self) -> TransportResult<()> {
        match self.session.draft().cloned() {
            Some(draft) => self.save_edit(draft).await,
            None => Ok(()),
        }
    }

    // ========================
    // Snapshot Access
    // ========================

    pub fn state(&self) -> &TodoListState {
        &self.state
    }

    pub fn todo_list(&self) -> &[TodoItem] {
        &self.state.todo_list
    }

    pub fn archived_todo_list(&self) -> &[TodoItem] {
        &self.state.archived_todo_list
    }

    /// Rows of the active list, with the selected one in edit form
    pub fn rows(&self) -> Vec<ItemView<'_>> {
        view::item_views(&self.state.todo_list, &self.session)
    }

    /// Rows of the archived list, always read-only
    pub fn archived_rows(&self) -> Vec<ItemView<'_>> {
        view::read_only_views(&self.state.archived_todo_list)
    }

    pub fn append_view(&self) -> AppendView<'_> {
        view::append_view(&self.session)
    }
}
