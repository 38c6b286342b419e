use rusqlite::Connection;

use crate::error::TaskError;

/// Idempotent; safe to call on every start.
pub fn run_migrations(conn: &Connection) -> Result<(), TaskError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS tasks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            desc TEXT,
            category TEXT,
            priority TEXT,
            dueDate TEXT,
            status TEXT
        );
        ",
    )?;
    Ok(())
}
