//! Task Context
//!
//! The session's task store, provided to every component via the Leptos
//! Context API. Network calls run in spawned local tasks and reconcile the
//! shared state when they land, so overlapping calls resolve as "last
//! response wins".

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use task_sync::{local_today, HttpTaskService, Task, TaskId, TaskService, TaskState};

/// Reactive task store shared through context
#[derive(Clone, Copy)]
pub struct TaskContext {
    /// Task list, edit session, form input and current failure
    pub state: RwSignal<TaskState>,
    service: StoredValue<HttpTaskService, LocalStorage>,
}

impl TaskContext {
    pub fn new(service: HttpTaskService) -> Self {
        Self {
            state: RwSignal::new(TaskState::new()),
            service: StoredValue::new_local(service),
        }
    }

    /// Fetch the collection (once, at startup)
    pub fn load(&self) {
        let state = self.state;
        let service = self.service.get_value();
        spawn_local(async move {
            let result = service.list().await;
            state.update(|s| s.apply_loaded(result));
        });
    }

    /// Submit the form: create, or update the task under edit
    pub fn submit(&self) {
        let plan = self.state.with_untracked(|s| {
            let input = s.input();
            s.plan_submit(&input.text, input.date, local_today())
        });
        let Some(plan) = plan else {
            return;
        };
        let state = self.state;
        let service = self.service.get_value();
        spawn_local(async move {
            let result = plan.send(&service).await;
            state.update(|s| s.apply_submit(&plan, result));
        });
    }

    pub fn toggle(&self, id: TaskId) {
        let Some(plan) = self.state.with_untracked(|s| s.plan_toggle(&id)) else {
            return;
        };
        let state = self.state;
        let service = self.service.get_value();
        spawn_local(async move {
            let result = plan.send(&service).await;
            state.update(|s| s.apply_toggle(&plan, result));
        });
    }

    pub fn delete(&self, id: TaskId) {
        let plan = self.state.with_untracked(|s| s.plan_delete(&id));
        let state = self.state;
        let service = self.service.get_value();
        spawn_local(async move {
            let result = plan.send(&service).await;
            state.update(|s| s.apply_delete(&plan, result));
        });
    }

    pub fn begin_edit(&self, task: &Task) {
        self.state.update(|s| s.begin_edit(task));
    }

    pub fn cancel_edit(&self) {
        self.state.update(|s| s.cancel_edit());
    }

    pub fn dismiss_error(&self) {
        self.state.update(|s| s.dismiss_error());
    }

    pub fn set_input_text(&self, text: String) {
        self.state.update(|s| s.set_input_text(text));
    }

    pub fn set_input_date(&self, date: Option<NaiveDate>) {
        self.state.update(|s| s.set_input_date(date));
    }

    pub fn is_editing_any(&self) -> bool {
        self.state.with(|s| s.editing().is_some())
    }
}

/// Get the task store from context
pub fn use_tasks() -> TaskContext {
    expect_context::<TaskContext>()
}
