//! Task Sync
//!
//! Layered architecture:
//! - domain: Task record and request payloads
//! - service: Remote task service contract and its HTTP implementation
//! - store: Local task list, edit session and reconciliation rules

pub mod domain;
pub mod service;
pub mod store;

pub use domain::{format_due, NewTask, Task, TaskChanges, TaskId};
pub use service::{HttpTaskService, ServiceConfig, ServiceError, ServiceResult, TaskService};
pub use store::{
    local_today, DeletePlan, ListStatus, SubmitPlan, TaskFailure, TaskInput, TaskState,
    TaskStore, TogglePlan,
};
