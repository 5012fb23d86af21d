//! API Configuration
//!
//! Base URL of the remote todo collection and endpoint construction.

/// Base URL used when none is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

const TODOS_PATH: &str = "todos";
const ARCHIVED_TODOS_PATH: &str = "archived-todos";

/// Location of the remote collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Trailing slashes of `base_url` are dropped
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET`/`POST` endpoint of the active list
    pub fn todos_url(&self) -> String {
        format!("{}/{}", self.base_url, TODOS_PATH)
    }

    /// `PUT` endpoint of a single item
    pub fn todo_url(&self, id: u32) -> String {
        format!("{}/{}/{}", self.base_url, TODOS_PATH, id)
    }

    pub fn archived_todos_url(&self) -> String {
        format!("{}/{}", self.base_url, ARCHIVED_TODOS_PATH)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
