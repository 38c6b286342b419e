//! Route handlers. Each one is a thin passthrough to [`TaskStore`].

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};

use crate::api::routes::AppState;
use crate::error::TaskError;
use crate::models::{Deleted, Task, TaskFields};

pub type ApiResult<T> = Result<Json<T>, TaskError>;

/// GET /tasks
pub async fn list_tasks(State(state): State<AppState>) -> ApiResult<Vec<Task>> {
    let tasks = state.store.list().await?;
    tracing::debug!(count = tasks.len(), "listed tasks");
    Ok(Json(tasks))
}

/// POST /tasks
pub async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<TaskFields>, JsonRejection>,
) -> ApiResult<Task> {
    let Json(fields) = payload?;
    let created = state.store.create(&fields).await?;
    tracing::info!(id = created.id, "created task");
    Ok(Json(created))
}

/// PUT /tasks/:id
///
/// Responds with the row as read back after the write.
pub async fn update_task(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<TaskFields>, JsonRejection>,
) -> ApiResult<Task> {
    let Path(id) = id?;
    let Json(fields) = payload?;
    let updated = state.store.update(id, &fields).await?;
    tracing::info!(id, status = updated.status().as_str(), "updated task");
    Ok(Json(updated))
}

/// DELETE /tasks/:id
pub async fn delete_task(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Deleted> {
    let Path(id) = id?;
    state.store.delete(id).await?;
    tracing::info!(id, "deleted task");
    Ok(Json(Deleted::new(id)))
}
