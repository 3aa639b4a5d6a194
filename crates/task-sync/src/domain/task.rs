//! Task Entity
//!
//! A single to-do record. The remote service owns it; the client only caches
//! what the service returns.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::due_date;

/// Server-assigned task identifier, opaque to the client
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TaskId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Task record (matches the remote JSON shape)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,
    /// Display text, never empty
    pub text: String,
    /// Optional due date
    pub date: Option<NaiveDate>,
    /// Completion status
    pub completed: bool,
}

/// Wire form of a task. Document stores send the id as `_id`, and some send
/// an `id` virtual next to it; `_id` wins when both are present.
#[derive(Deserialize)]
struct TaskRecord {
    #[serde(default, rename = "_id")]
    document_id: Option<TaskId>,
    #[serde(default)]
    id: Option<TaskId>,
    text: String,
    #[serde(default, deserialize_with = "due_date::deserialize_optional")]
    date: Option<NaiveDate>,
    #[serde(default)]
    completed: bool,
}

impl TryFrom<TaskRecord> for Task {
    type Error = String;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let id = record
            .document_id
            .or(record.id)
            .ok_or_else(|| "task record has neither `_id` nor `id`".to_string())?;
        Ok(Self {
            id,
            text: record.text,
            date: record.date,
            completed: record.completed,
        })
    }
}

impl Task {
    /// Replacement body that flips completion and keeps everything else
    pub fn toggled(&self) -> TaskChanges {
        TaskChanges {
            text: self.text.clone(),
            date: self.date,
            completed: !self.completed,
        }
    }
}

/// Body of a create request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTask {
    pub text: String,
    pub date: NaiveDate,
}

/// Body of a replace request: every mutable field of a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskChanges {
    pub text: String,
    pub date: Option<NaiveDate>,
    pub completed: bool,
}
