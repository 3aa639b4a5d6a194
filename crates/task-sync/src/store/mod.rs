//! Store Layer
//!
//! Local cache of the remote collection plus the transient edit session.
//! Mutated only in response to service results.

mod failure;
mod state;
mod task_store;


pub use failure::TaskFailure;
pub use state::{DeletePlan, ListStatus, SubmitPlan, TaskInput, TaskState, TogglePlan};
pub use task_store::{local_today, TaskStore};
