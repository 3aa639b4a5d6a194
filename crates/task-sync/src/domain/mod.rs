//! Domain Layer
//!
//! Task entity as owned by the remote service, plus the payloads sent to it.
//! This layer has NO external dependencies (except serde and chrono).

mod due_date;
mod task;

pub use due_date::format_due;
pub use task::{NewTask, Task, TaskChanges, TaskId};
