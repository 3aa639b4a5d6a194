//! Task Form Component
//!
//! Text and due-date inputs; submits a new task, or saves the task under edit.

use chrono::NaiveDate;
use leptos::prelude::*;
use task_sync::local_today;

use crate::context::use_tasks;

/// Value format of `<input type="date">`
const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

fn parse_date_input(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_INPUT_FORMAT).ok()
}

/// Earliest pickable due date. An edited task may already be overdue, so
/// editing lifts the bound instead of blocking the save.
fn date_input_min(editing: bool, today: NaiveDate) -> Option<String> {
    (!editing).then(|| today.format(DATE_INPUT_FORMAT).to_string())
}

#[component]
pub fn TaskForm() -> impl IntoView {
    let tasks = use_tasks();

    let editing = move || tasks.is_editing_any();
    let min_date = move || date_input_min(editing(), local_today());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        tasks.submit();
    };

    view! {
        <form class="task-form" novalidate=true on:submit=on_submit>
            <input
                type="text"
                class="task-input"
                placeholder="What needs to be done?"
                prop:value=move || tasks.state.with(|s| s.input().text.clone())
                on:input=move |ev| tasks.set_input_text(event_target_value(&ev))
            />
            <input
                type="date"
                class="task-date"
                title="Select due date"
                min=min_date
                prop:value=move || tasks.state.with(|s| {
                    s.input()
                        .date
                        .map(|date| date.format(DATE_INPUT_FORMAT).to_string())
                        .unwrap_or_default()
                })
                on:input=move |ev| tasks.set_input_date(parse_date_input(&event_target_value(&ev)))
            />
            <button type="submit" class="submit-btn">
                {move || if editing() { "✔ Save" } else { "+ Add" }}
            </button>
            <Show when=editing>
                <button
                    type="button"
                    class="cancel-btn"
                    title="Cancel edit"
                    on:click=move |_| tasks.cancel_edit()
                >
                    "✕"
                </button>
            </Show>
        </form>
    }
}
