//! Task List Component
//!
//! Loading indicator, empty message, or one row per task in store order.

use leptos::prelude::*;
use task_sync::ListStatus;

use crate::components::TaskRow;
use crate::context::use_tasks;

#[component]
pub fn TaskList() -> impl IntoView {
    let tasks = use_tasks();

    // Typing in the form must not re-render the rows
    let status = Memo::new(move |_| tasks.state.with(|s| s.list_status()));
    let rows = Memo::new(move |_| tasks.state.with(|s| s.tasks().to_vec()));

    view! {
        <div class="task-list">
            {move || match status.get() {
                ListStatus::Loading => view! {
                    <div class="loading" role="status">
                        <span class="spinner"></span>
                        <span class="visually-hidden">"Loading..."</span>
                    </div>
                }.into_any(),
                ListStatus::Empty => view! {
                    <div class="empty-list">
                        <p>"Your task list is empty. Time to be productive!"</p>
                    </div>
                }.into_any(),
                ListStatus::Ready => rows
                    .get()
                    .into_iter()
                    .map(|task| view! { <TaskRow task=task /> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}
