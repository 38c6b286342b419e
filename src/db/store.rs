use std::path::Path;
use std::sync::Arc;

use rusqlite::Connection;
use tokio::sync::Mutex;

use crate::error::TaskError;
use crate::models::{Task, TaskFields};

use super::{connection, task_repo};

/// Shared handle on the task table.
///
/// A single connection sits behind an async mutex, so table operations run
/// one at a time in arrival order. Cloning shares the same connection.
#[derive(Clone)]
pub struct TaskStore {
    conn: Arc<Mutex<Connection>>,
}

impl TaskStore {
    /// Open the database file and make sure the schema exists.
    pub fn open(path: &Path) -> Result<Self, TaskError> {
        let conn = connection::open_db(path)?;
        tracing::info!(path = %path.display(), "task store ready");
        Ok(Self::from_connection(conn))
    }

    pub fn in_memory() -> Result<Self, TaskError> {
        Ok(Self::from_connection(connection::open_in_memory()?))
    }

    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    pub async fn list(&self) -> Result<Vec<Task>, TaskError> {
        let conn = self.conn.lock().await;
        task_repo::list_tasks(&conn)
    }

    pub async fn create(&self, fields: &TaskFields) -> Result<Task, TaskError> {
        let conn = self.conn.lock().await;
        task_repo::create_task(&conn, fields)
    }

    pub async fn update(&self, id: i64, fields: &TaskFields) -> Result<Task, TaskError> {
        let conn = self.conn.lock().await;
        task_repo::update_task(&conn, id, fields)
    }

    pub async fn delete(&self, id: i64) -> Result<(), TaskError> {
        let conn = self.conn.lock().await;
        task_repo::delete_task(&conn, id)
    }
}
