//! Task Manager App
//!
//! Single card: header, error banner, task form and task list.

use leptos::prelude::*;
use log::{error, info};
use task_sync::{HttpTaskService, ServiceConfig};

use crate::components::{ErrorBanner, TaskForm, TaskList};
use crate::context::TaskContext;

#[component]
pub fn App() -> impl IntoView {
    let config = ServiceConfig::default();
    let service = match HttpTaskService::new(config) {
        Ok(service) => service,
        Err(err) => {
            error!("[APP] Could not build HTTP client: {}", err);
            return view! {
                <div class="app-shell">
                    <p class="fatal">"Task Manager could not start."</p>
                </div>
            }
            .into_any();
        }
    };
    info!("[APP] Using task service at {}", service.config().base_url);

    // One store per session, provided to all children
    let tasks = TaskContext::new(service);
    provide_context(tasks);

    // Load tasks once on mount
    Effect::new(move |_| tasks.load());

    view! {
        <div class="app-shell">
            <div class="task-card">
                <header class="task-card-header">
                    <h1>"✔ Task Manager"</h1>
                </header>

                <ErrorBanner />

                <div class="task-card-body">
                    <TaskForm />
                    <TaskList />
                </div>
            </div>
        </div>
    }
    .into_any()
}
