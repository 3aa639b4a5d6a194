//! Service Layer - Remote Task Service
//!
//! Defines the contract of the remote task collection.
//! Implementations can use HTTP, in-memory fakes, etc.

mod config;
mod error;
mod http;

use async_trait::async_trait;

use crate::domain::{NewTask, Task, TaskChanges, TaskId};

pub use config::{ServiceConfig, DEFAULT_API_URL};
pub use error::{ServiceError, ServiceResult};
pub use http::HttpTaskService;

/// Remote task collection: list, create, replace, delete
///
/// Futures are not required to be `Send`; the store runs on a single
/// event-driven thread (the browser's in the UI build).
#[async_trait(?Send)]
pub trait TaskService {
    /// Fetch the whole collection in server order
    async fn list(&self) -> ServiceResult<Vec<Task>>;

    /// Create a task; the response carries the server-assigned id
    async fn create(&self, task: &NewTask) -> ServiceResult<Task>;

    /// Replace every mutable field of an existing task
    async fn replace(&self, id: &TaskId, changes: &TaskChanges) -> ServiceResult<Task>;

    /// Delete a task; any response body is ignored
    async fn delete(&self, id: &TaskId) -> ServiceResult<()>;
}
