//! Task State
//!
//! Local task list, edit session, form input and current failure, with the
//! reconciliation rules for every remote call.
//!
//! Networked operations are split in two: a `plan_*` step that reads the
//! state and decides which request to send (or nothing), and an `apply_*`
//! step that reconciles the *current* state with the result. Whoever drives
//! the state (`TaskStore`, or the reactive view) runs the request in between,
//! so overlapping requests resolve as "last response wins".

use chrono::NaiveDate;
use log::{debug, info, warn};

use super::TaskFailure;
use crate::domain::{NewTask, Task, TaskChanges, TaskId};
use crate::service::{ServiceError, ServiceResult, TaskService};

/// Form contents: the text field and the due-date picker
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskInput {
    pub text: String,
    pub date: Option<NaiveDate>,
}

/// What the list area should render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    /// Initial fetch still in flight
    Loading,
    /// Loaded, no tasks
    Empty,
    /// Loaded, at least one task
    Ready,
}

/// Request decided by a submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitPlan {
    /// No edit session: create a new task
    Create(NewTask),
    /// Edit session on `id`: replace that task
    Update { id: TaskId, changes: TaskChanges },
}

impl SubmitPlan {
    pub async fn send<S: TaskService + ?Sized>(&self, service: &S) -> ServiceResult<Task> {
        match self {
            SubmitPlan::Create(task) => service.create(task).await,
            SubmitPlan::Update { id, changes } => service.replace(id, changes).await,
        }
    }

    fn failure(&self) -> TaskFailure {
        match self {
            SubmitPlan::Create(_) => TaskFailure::Create,
            SubmitPlan::Update { .. } => TaskFailure::Update,
        }
    }
}

/// Completion flip of one task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TogglePlan {
    pub id: TaskId,
    pub changes: TaskChanges,
}

impl TogglePlan {
    pub async fn send<S: TaskService + ?Sized>(&self, service: &S) -> ServiceResult<Task> {
        service.replace(&self.id, &self.changes).await
    }
}

/// Removal of one task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePlan {
    pub id: TaskId,
}

impl DeletePlan {
    pub async fn send<S: TaskService + ?Sized>(&self, service: &S) -> ServiceResult<()> {
        service.delete(&self.id).await
    }
}

/// Client-side task state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskState {
    tasks: Vec<Task>,
    editing: Option<Task>,
    input: TaskInput,
    loading: bool,
    error: Option<TaskFailure>,
}

impl Default for TaskState {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskState {
    /// Fresh session state: nothing loaded yet
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            editing: None,
            input: TaskInput::default(),
            loading: true,
            error: None,
        }
    }

    // ========================
    // Queries
    // ========================

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Snapshot of the task under edit, if any
    pub fn editing(&self) -> Option<&Task> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self, id: &TaskId) -> bool {
        self.editing.as_ref().is_some_and(|task| &task.id == id)
    }

    /// Stored completion of `id`, as last confirmed by the service
    pub fn is_completed(&self, id: &TaskId) -> Option<bool> {
        self.tasks
            .iter()
            .find(|task| &task.id == id)
            .map(|task| task.completed)
    }

    pub fn input(&self) -> &TaskInput {
        &self.input
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<TaskFailure> {
        self.error
    }

    pub fn list_status(&self) -> ListStatus {
        if self.loading {
            ListStatus::Loading
        } else if self.tasks.is_empty() {
            ListStatus::Empty
        } else {
            ListStatus::Ready
        }
    }

    // ========================
    // Local transitions
    // ========================

    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.input.text = text.into();
    }

    pub fn set_input_date(&mut self, date: Option<NaiveDate>) {
        self.input.date = date;
    }

    /// Start editing `task`; completed tasks cannot be edited
    pub fn begin_edit(&mut self, task: &Task) {
        if task.completed {
            debug!("[STORE] Ignoring edit of completed task {}", task.id);
            return;
        }
        debug!("[STORE] Editing task {}", task.id);
        self.input = TaskInput {
            text: task.text.clone(),
            date: task.date,
        };
        self.editing = Some(task.clone());
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.input = TaskInput::default();
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    fn fail(&mut self, failure: TaskFailure, err: &ServiceError) {
        warn!("[STORE] {}: {}", failure, err);
        self.error = Some(failure);
    }

    /// Replace the entry with `id` in place; false if it is gone
    fn replace_entry(&mut self, id: &TaskId, updated: Task) -> bool {
        match self.tasks.iter_mut().find(|task| &task.id == id) {
            Some(slot) => {
                *slot = updated;
                true
            }
            None => false,
        }
    }

    // ========================
    // Load
    // ========================

    pub fn apply_loaded(&mut self, result: ServiceResult<Vec<Task>>) {
        self.loading = false;
        match result {
            Ok(tasks) => {
                info!("[STORE] Loaded {} tasks", tasks.len());
                self.tasks = tasks;
            }
            Err(err) => self.fail(TaskFailure::Fetch, &err),
        }
    }

    // ========================
    // Submit (create or update)
    // ========================

    /// Decide the request for a form submission; `None` for blank text
    pub fn plan_submit(
        &self,
        raw_text: &str,
        raw_date: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Option<SubmitPlan> {
        let text = raw_text.trim();
        if text.is_empty() {
            debug!("[STORE] Ignoring blank submission");
            return None;
        }
        let plan = match &self.editing {
            Some(task) => SubmitPlan::Update {
                id: task.id.clone(),
                changes: TaskChanges {
                    text: text.to_string(),
                    date: raw_date.or(task.date),
                    completed: task.completed,
                },
            },
            None => SubmitPlan::Create(NewTask {
                text: text.to_string(),
                date: raw_date.unwrap_or(today),
            }),
        };
        debug!("[STORE] Submit plan: {:?}", plan);
        Some(plan)
    }

    pub fn apply_submit(&mut self, plan: &SubmitPlan, result: ServiceResult<Task>) {
        let task = match result {
            Ok(task) => task,
            Err(err) => return self.fail(plan.failure(), &err),
        };
        match plan {
            SubmitPlan::Create(_) => {
                info!("[STORE] Created task {}", task.id);
                self.tasks.insert(0, task);
            }
            SubmitPlan::Update { id, .. } => {
                info!("[STORE] Updated task {}", id);
                if !self.replace_entry(id, task) {
                    debug!("[STORE] Task {} left the list before its update landed", id);
                }
                self.editing = None;
            }
        }
        self.input = TaskInput::default();
    }

    // ========================
    // Toggle completion
    // ========================

    /// Decide the completion flip for `id`; `None` if it is not in the list
    pub fn plan_toggle(&self, id: &TaskId) -> Option<TogglePlan> {
        let Some(task) = self.tasks.iter().find(|task| &task.id == id) else {
            debug!("[STORE] Ignoring toggle of unknown task {}", id);
            return None;
        };
        Some(TogglePlan {
            id: task.id.clone(),
            changes: task.toggled(),
        })
    }

    pub fn apply_toggle(&mut self, plan: &TogglePlan, result: ServiceResult<Task>) {
        match result {
            Ok(task) => {
                info!("[STORE] Task {} completed={}", plan.id, task.completed);
                self.replace_entry(&plan.id, task);
            }
            Err(err) => self.fail(TaskFailure::Update, &err),
        }
    }

    // ========================
    // Delete
    // ========================

    pub fn plan_delete(&self, id: &TaskId) -> DeletePlan {
        DeletePlan { id: id.clone() }
    }

    pub fn apply_delete(&mut self, plan: &DeletePlan, result: ServiceResult<()>) {
        if let Err(err) = result {
            return self.fail(TaskFailure::Delete, &err);
        }
        info!("[STORE] Deleted task {}", plan.id);
        self.tasks.retain(|task| task.id != plan.id);
        if self.is_editing(&plan.id) {
            self.cancel_edit();
        }
    }
}
