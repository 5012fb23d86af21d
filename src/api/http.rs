//! HTTP Implementation
//!
//! `reqwest` bindings for the REST todo endpoints.

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response};

use crate::config::ApiConfig;
use crate::domain::{TodoItem, TransportError, TransportResult};
use super::TodoApi;

/// REST implementation of `TodoApi`
#[derive(Debug, Clone)]
pub struct HttpTodoApi {
    client: Client,
    config: ApiConfig,
}

impl HttpTodoApi {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Reuse an existing client (connection pool, proxies, headers)
    pub fn with_client(client: Client, config: ApiConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn get_list(&self, url: String) -> TransportResult<Vec<TodoItem>> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| network_error(&url, e))?;
        let response = check_status("GET", &url, response)?;

        let body = response.bytes().await.map_err(|e| network_error(&url, e))?;
        serde_json::from_slice(&body).map_err(|e| TransportError::Decode {
            url,
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl TodoApi for HttpTodoApi {
    async fn get_todo_list(&self) -> TransportResult<Vec<TodoItem>> {
        self.get_list(self.config.todos_url()).await
    }

    async fn get_archived_todo_list(&self) -> TransportResult<Vec<TodoItem>> {
        self.get_list(self.config.archived_todos_url()).await
    }

    async fn append_todo_item(&self, item: &TodoItem) -> TransportResult<()> {
        let url = self.config.todos_url();
        debug!("POST {} ({:?})", url, item.description);
        let response = self
            .client
            .post(&url)
            .json(&item.as_new())
            .send()
            .await
            .map_err(|e| network_error(&url, e))?;
        // Body may be the created item or empty; the list is re-fetched anyway
        check_status("POST", &url, response).map(|_| ())
    }

    async fn update_todo_item(&self, item: &TodoItem) -> TransportResult<()> {
        let url = self.config.todo_url(item.id);
        debug!("PUT {}", url);
        let response = self
            .client
            .put(&url)
            .json(item)
            .send()
            .await
            .map_err(|e| network_error(&url, e))?;
        check_status("PUT", &url, response).map(|_| ())
    }
}

fn network_error(url: &str, err: reqwest::Error) -> TransportError {
    TransportError::Network {
        url: url.to_string(),
        message: err.to_string(),
    }
}

fn check_status(method: &'static str, url: &str, response: Response) -> TransportResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(TransportError::Status {
            method,
            url: url.to_string(),
            status: status.as_u16(),
        })
    }
}
