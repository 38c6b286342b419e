use std::fs;
use std::path::Path;

use rusqlite::Connection;

use crate::error::TaskError;

use super::migrations;

/// Open (creating if needed) the database at `path` and ensure the schema.
pub fn open_db(path: &Path) -> Result<Connection, TaskError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| TaskError::database(e.to_string()))?;
    }
    let conn = Connection::open(path)?;
    configure_connection(&conn)?;
    migrations::run_migrations(&conn)?;
    Ok(conn)
}

/// Throwaway database, mostly for tests.
pub fn open_in_memory() -> Result<Connection, TaskError> {
    let conn = Connection::open_in_memory()?;
    migrations::run_migrations(&conn)?;
    Ok(conn)
}

fn configure_connection(conn: &Connection) -> Result<(), TaskError> {
    // journal_mode returns a row, so it cannot go through execute_batch.
    conn.query_row("PRAGMA journal_mode=WAL", [], |_| Ok(()))?;
    conn.execute_batch("PRAGMA busy_timeout=5000;")?;
    Ok(())
}
