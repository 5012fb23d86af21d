//! In-Memory Implementation
//!
//! A remote collection living in process memory. Ids are assigned the
//! way a json-server backend does it: one past the current maximum.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{TodoItem, TransportError, TransportResult, NEW_ITEM_ID};
use super::TodoApi;

const TODOS_URL: &str = "memory:/todos";

/// `TodoApi` backed by two in-process lists
#[derive(Debug, Default)]
pub struct InMemoryTodoApi {
    todos: Mutex<Vec<TodoItem>>,
    archived: Mutex<Vec<TodoItem>>,
}

impl InMemoryTodoApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed both collections
    pub fn with_items(todos: Vec<TodoItem>, archived: Vec<TodoItem>) -> Self {
        Self {
            todos: Mutex::new(todos),
            archived: Mutex::new(archived),
        }
    }

    /// Current contents of the active list
    pub async fn todos(&self) -> Vec<TodoItem> {
        self.todos.lock().await.clone()
    }
}

#[async_trait]
impl TodoApi for InMemoryTodoApi {
    async fn get_todo_list(&self) -> TransportResult<Vec<TodoItem>> {
        Ok(self.todos.lock().await.clone())
    }

    async fn get_archived_todo_list(&self) -> TransportResult<Vec<TodoItem>> {
        Ok(self.archived.lock().await.clone())
    }

    async fn append_todo_item(&self, item: &TodoItem) -> TransportResult<()> {
        let mut todos = self.todos.lock().await;
        let next_id = todos.iter().map(|t| t.id).max().unwrap_or(NEW_ITEM_ID) + 1;
        todos.push(TodoItem {
            id: next_id,
            ..item.clone()
        });
        Ok(())
    }

    async fn update_todo_item(&self, item: &TodoItem) -> TransportResult<()> {
        let mut todos = self.todos.lock().await;
        match todos.iter_mut().find(|t| t.id == item.id) {
            Some(existing) => {
                *existing = item.clone();
                Ok(())
            }
            None => Err(TransportError::Status {
                method: "PUT",
                url: format!("{}/{}", TODOS_URL, item.id),
                status: 404,
            }),
        }
    }
}
