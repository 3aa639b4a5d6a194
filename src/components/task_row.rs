//! Task Row Component
//!
//! One task: completion checkbox, text, due date, edit and delete buttons.

use leptos::prelude::*;
use task_sync::{format_due, Task};

use crate::context::use_tasks;

#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let tasks = use_tasks();

    let completed = task.completed;
    let text = task.text.clone();
    let due = task.date.map(format_due);
    let toggle_id = task.id.clone();
    let checked_id = task.id.clone();
    let checkbox = NodeRef::<leptos::html::Input>::new();
    let delete_id = task.id.clone();
    let row_id = task.id.clone();
    let is_editing = move || tasks.state.with(|s| s.is_editing(&row_id));

    // Controlled checkbox: shows the stored state, which only a successful
    // toggle response changes
    let stored_completed =
        move || tasks.state.with(|s| s.is_completed(&checked_id)).unwrap_or(completed);

    let row_class = move || {
        let mut class = String::from("task-row");
        if completed {
            class.push_str(" completed");
        }
        if is_editing() {
            class.push_str(" editing");
        }
        class
    };

    view! {
        <div class=row_class>
            <input
                type="checkbox"
                class="task-check"
                node_ref=checkbox
                prop:checked=stored_completed.clone()
                on:change=move |_| {
                    if let Some(input) = checkbox.get_untracked() {
                        input.set_checked(stored_completed());
                    }
                    tasks.toggle(toggle_id.clone());
                }
            />

            <div class="task-body">
                <span class="task-text">{text}</span>
                {due.map(|due| view! {
                    <small class="task-due">"📅 Due: " {due}</small>
                })}
            </div>

            <div class="task-actions">
                <button
                    class="edit-btn"
                    title="Edit task"
                    disabled=completed
                    on:click=move |_| tasks.begin_edit(&task)
                >
                    "✎"
                </button>
                <button
                    class="delete-btn"
                    title="Delete task"
                    on:click=move |_| tasks.delete(delete_id.clone())
                >
                    "🗑"
                </button>
            </div>
        </div>
    }
}
