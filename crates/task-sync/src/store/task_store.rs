//! Task Store
//!
//! Sequential driver: each operation performs at most one call on the
//! service, then reconciles `TaskState` from the result.

use chrono::{Local, NaiveDate};

use super::{TaskFailure, TaskState};
use crate::domain::{Task, TaskId};
use crate::service::TaskService;

/// Today's date in the local time zone (default date for new tasks)
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Task state bound to a remote service
pub struct TaskStore<S> {
    service: S,
    state: TaskState,
    today: fn() -> NaiveDate,
}

impl<S: TaskService> TaskStore<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: TaskState::new(),
            today: local_today,
        }
    }

    /// Override the clock used to date new tasks
    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn state(&self) -> &TaskState {
        &self.state
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn tasks(&self) -> &[Task] {
        self.state.tasks()
    }

    pub fn error(&self) -> Option<TaskFailure> {
        self.state.error()
    }

    /// Fetch the whole collection, replacing the local list
    pub async fn load(&mut self) {
        let result = self.service.list().await;
        self.state.apply_loaded(result);
    }

    /// Create a task, or update the one under edit
    pub async fn submit(&mut self, raw_text: &str, raw_date: Option<NaiveDate>) {
        let Some(plan) = self.state.plan_submit(raw_text, raw_date, (self.today)()) else {
            return;
        };
        let result = plan.send(&self.service).await;
        self.state.apply_submit(&plan, result);
    }

    /// Submit whatever the form currently holds
    pub async fn submit_input(&mut self) {
        let input = self.state.input().clone();
        self.submit(&input.text, input.date).await;
    }

    pub fn begin_edit(&mut self, task: &Task) {
        self.state.begin_edit(task);
    }

    pub fn cancel_edit(&mut self) {
        self.state.cancel_edit();
    }

    pub async fn toggle_complete(&mut self, id: &TaskId) {
        let Some(plan) = self.state.plan_toggle(id) else {
            return;
        };
        let result = plan.send(&self.service).await;
        self.state.apply_toggle(&plan, result);
    }

    pub async fn delete(&mut self, id: &TaskId) {
        let plan = self.state.plan_delete(id);
        let result = plan.send(&self.service).await;
        self.state.apply_delete(&plan, result);
    }

    pub fn dismiss_error(&mut self) {
        self.state.dismiss_error();
    }

    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.state.set_input_text(text);
    }

    pub fn set_input_date(&mut self, date: Option<NaiveDate>) {
        self.state.set_input_date(date);
    }
}
