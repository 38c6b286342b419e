//! Client side of the task board: state container, derived views and the
//! controller that keeps them in step with the store.

pub mod api;
pub mod controller;
pub mod state;
pub mod view;

pub use api::{HttpTaskApi, TaskApi};
pub use controller::TaskClient;
pub use state::{EditBuffer, TaskDraft, TaskState};
pub use view::{derive_view, SortOrder, StatusFilter, ViewParams};
