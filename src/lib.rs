//! Todo List Store Client
//!
//! Layered architecture:
//! - domain: Todo items, the edit-mode selector, transport errors
//! - config: Location of the remote collection
//! - api: Remote collection interface (HTTP and in-memory)
//! - store: Snapshots of the fetched lists
//! - edit: Edit session (selector + draft)
//! - view: Display/edit row variants
//! - client: The store client tying them together

pub mod domain;
pub mod config;
pub mod api;
pub mod store;
pub mod edit;
pub mod view;
pub mod client;

pub use api::{HttpTodoApi, InMemoryTodoApi, TodoApi};
pub use client::TodoStoreClient;
pub use config::{ApiConfig, DEFAULT_BASE_URL};
pub use domain::{EditMode, EditTarget, TodoItem, TransportError, TransportResult, NEW_ITEM_ID};
pub use view::{AppendView, ItemView};
