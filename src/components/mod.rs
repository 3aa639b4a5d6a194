//! UI Components
//!
//! Leptos components for the task card.

mod error_banner;
mod task_form;
mod task_list;
mod task_row;

pub use error_banner::ErrorBanner;
pub use task_form::TaskForm;
pub use task_list::TaskList;
pub use task_row::TaskRow;
