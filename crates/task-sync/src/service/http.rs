//! HTTP Task Service
//!
//! reqwest client for the remote collection resource. Works natively and in
//! the browser (reqwest uses `fetch` on wasm32).

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::{ServiceConfig, ServiceError, ServiceResult, TaskService};
use crate::domain::{NewTask, Task, TaskChanges, TaskId};

/// Unreserved characters stay as-is in the `{id}` path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Remote task service over HTTP
#[derive(Debug, Clone)]
pub struct HttpTaskService {
    http_client: Client,
    config: ServiceConfig,
}

impl HttpTaskService {
    /// Create a service for the given collection endpoint
    pub fn new(config: ServiceConfig) -> ServiceResult<Self> {
        let http_client = Client::builder().build()?;
        Ok(Self { http_client, config })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    fn item_url(&self, id: &TaskId) -> String {
        format!(
            "{}/{}",
            self.config.base_url,
            utf8_percent_encode(id.as_str(), PATH_SEGMENT)
        )
    }

    fn collection_request(&self, method: Method) -> RequestBuilder {
        self.http_client.request(method, &self.config.base_url)
    }

    fn item_request(&self, method: Method, id: &TaskId) -> RequestBuilder {
        self.http_client.request(method, self.item_url(id))
    }

    /// Send and reject any non-2xx status
    async fn send(builder: RequestBuilder) -> ServiceResult<Response> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Status(status));
        }
        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> ServiceResult<T> {
        let response = Self::send(builder).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait(?Send)]
impl TaskService for HttpTaskService {
    async fn list(&self) -> ServiceResult<Vec<Task>> {
        Self::send_json(self.collection_request(Method::GET)).await
    }

    async fn create(&self, task: &NewTask) -> ServiceResult<Task> {
        Self::send_json(self.collection_request(Method::POST).json(task)).await
    }

    async fn replace(&self, id: &TaskId, changes: &TaskChanges) -> ServiceResult<Task> {
        Self::send_json(self.item_request(Method::PUT, id).json(changes)).await
    }

    async fn delete(&self, id: &TaskId) -> ServiceResult<()> {
        Self::send(self.item_request(Method::DELETE, id)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_url_encodes_id() {
        let service = HttpTaskService::new(ServiceConfig::new("http://localhost/api/todos")).unwrap();
        assert_eq!(
            service.item_url(&TaskId::from("65f0-ab_c")),
            "http://localhost/api/todos/65f0-ab_c"
        );
        assert_eq!(
            service.item_url(&TaskId::from("a/b c")),
            "http://localhost/api/todos/a%2Fb%20c"
        );
    }
}
