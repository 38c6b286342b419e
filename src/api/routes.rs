use axum::{
    routing::{get, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::api::handlers;
use crate::db::TaskStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: TaskStore,
}

pub fn create_router(store: TaskStore) -> Router {
    Router::new()
        .route(
            "/tasks",
            get(handlers::list_tasks).post(handlers::create_task),
        )
        .route(
            "/tasks/:id",
            put(handlers::update_task).delete(handlers::delete_task),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState { store })
}
