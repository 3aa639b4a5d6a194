use std::fmt;

/// User-visible failure of a store operation
///
/// Only one is shown at a time; a newer failure replaces the older one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFailure {
    Fetch,
    Create,
    Update,
    Delete,
}

impl TaskFailure {
    /// Static banner text for this failure
    pub fn message(&self) -> &'static str {
        match self {
            TaskFailure::Fetch => "Failed to fetch todos",
            TaskFailure::Create => "Failed to create todo",
            TaskFailure::Update => "Failed to update todo",
            TaskFailure::Delete => "Failed to delete todo",
        }
    }
}

impl fmt::Display for TaskFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for TaskFailure {}
