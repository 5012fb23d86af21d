//! Remote Collection Layer
//!
//! Abstract interface to the remote todo collection and its
//! implementations. HTTP is the production backend; the in-memory one
//! serves offline embedding and tests.

mod http;
mod memory;


use std::sync::Arc;

use async_trait::async_trait;
use crate::domain::{TodoItem, TransportResult};

pub use http::HttpTodoApi;
pub use memory::InMemoryTodoApi;

/// Remote todo collection
///
/// Mutations only report whether the server accepted them. Whatever the
/// server answers in the body is ignored; callers re-fetch the list.
#[async_trait]
pub trait TodoApi: Send + Sync {
    /// Fetch the active list (`GET /todos`)
    async fn get_todo_list(&self) -> TransportResult<Vec<TodoItem>>;

    /// Fetch the archived list (`GET /archived-todos`)
    async fn get_archived_todo_list(&self) -> TransportResult<Vec<TodoItem>>;

    /// Create an item (`POST /todos`), sent with the new-item sentinel id
    async fn append_todo_item(&self, item: &TodoItem) -> TransportResult<()>;

    /// Replace an existing item (`PUT /todos/{id}`)
    async fn update_todo_item(&self, item: &TodoItem) -> TransportResult<()>;
}

#[async_trait]
impl<T: TodoApi + ?Sized> TodoApi for Arc<T> {
    async fn get_todo_list(&self) -> TransportResult<Vec<TodoItem>> {
        (**self).get_todo_list().await
    }

    async fn get_archived_todo_list(&self) -> TransportResult<Vec<TodoItem>> {
        (**self).get_archived_todo_list().await
    }

    async fn append_todo_item(&self, item: &TodoItem) -> TransportResult<()> {
        (**self).append_todo_item(item).await
    }

    async fn update_todo_item(&self, item: &TodoItem) -> TransportResult<()> {
        (**self).update_todo_item(item).await
    }
}
