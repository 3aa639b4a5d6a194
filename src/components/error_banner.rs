//! Error Banner Component
//!
//! Shows the current failure with a dismiss button.

use leptos::prelude::*;

use crate::context::use_tasks;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let tasks = use_tasks();

    move || {
        tasks.state.with(|s| s.error()).map(|failure| {
            view! {
                <div class="error-banner" role="alert">
                    <span class="error-icon">"!"</span>
                    <span class="error-text">{failure.message()}</span>
                    <button
                        type="button"
                        class="close-btn"
                        title="Dismiss"
                        on:click=move |_| tasks.dismiss_error()
                    >
                        "×"
                    </button>
                </div>
            }
        })
    }
}
