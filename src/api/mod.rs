//! HTTP surface of the task store.
//!
//! Four routes over the `tasks` table:
//! - `GET /tasks`, `POST /tasks`
//! - `PUT /tasks/:id`, `DELETE /tasks/:id`

pub mod error;
pub mod handlers;
pub mod routes;

pub use error::ErrorBody;
pub use routes::{create_router, AppState};
