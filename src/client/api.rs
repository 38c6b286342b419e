use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::api::ErrorBody;
use crate::error::{ErrorCode, TaskError};
use crate::models::{Deleted, Task, TaskFields};

/// Remote operations the client performs against the task store.
#[async_trait]
pub trait TaskApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Task>, TaskError>;
    async fn create(&self, fields: &TaskFields) -> Result<Task, TaskError>;
    async fn update(&self, id: i64, fields: &TaskFields) -> Result<Task, TaskError>;
    async fn delete(&self, id: i64) -> Result<Deleted, TaskError>;
}

/// [`TaskApi`] over HTTP/JSON.
#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    client: Client,
    base_url: String,
}

impl HttpTaskApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, TaskError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("server responded with {status}"),
    };
    let code = if status == reqwest::StatusCode::NOT_FOUND {
        ErrorCode::TaskNotFound
    } else {
        ErrorCode::TransportError
    };
    Err(TaskError::new(code, message))
}

#[async_trait]
impl TaskApi for HttpTaskApi {
    async fn list(&self) -> Result<Vec<Task>, TaskError> {
        let response = self.client.get(self.url("/tasks")).send().await?;
        decode(response).await
    }

    async fn create(&self, fields: &TaskFields) -> Result<Task, TaskError> {
        let response = self
            .client
            .post(self.url("/tasks"))
            .json(fields)
            .send()
            .await?;
        decode(response).await
    }

    async fn update(&self, id: i64, fields: &TaskFields) -> Result<Task, TaskError> {
        let response = self
            .client
            .put(self.url(&format!("/tasks/{id}")))
            .json(fields)
            .send()
            .await?;
        decode(response).await
    }

    async fn delete(&self, id: i64) -> Result<Deleted, TaskError> {
        let response = self
            .client
            .delete(self.url(&format!("/tasks/{id}")))
            .send()
            .await?;
        decode(response).await
    }
}
