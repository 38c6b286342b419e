use rusqlite::{params, Connection};

use crate::error::TaskError;
use crate::models::{parse_date, Category, Priority, Task, TaskFields, TaskStatus, DATE_FORMAT};

pub fn list_tasks(conn: &Connection) -> Result<Vec<Task>, TaskError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, desc, category, priority, dueDate, status FROM tasks ORDER BY id",
    )?;
    let tasks = stmt
        .query_map([], row_to_task)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(tasks)
}

pub fn get_task_by_id(conn: &Connection, id: i64) -> Result<Task, TaskError> {
    conn.query_row(
        "SELECT id, name, desc, category, priority, dueDate, status FROM tasks WHERE id = ?1",
        params![id],
        row_to_task,
    )
    .map_err(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => TaskError::task_not_found(id),
        _ => TaskError::from(e),
    })
}

pub fn create_task(conn: &Connection, fields: &TaskFields) -> Result<Task, TaskError> {
    conn.execute(
        "INSERT INTO tasks (name, desc, category, priority, dueDate, status)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            fields.name,
            fields.desc,
            fields.category.as_str(),
            fields.priority.as_str(),
            format_date(fields),
            fields.status.as_str(),
        ],
    )?;
    get_task_by_id(conn, conn.last_insert_rowid())
}

/// Overwrite every editable column, then read the row back.
pub fn update_task(conn: &Connection, id: i64, fields: &TaskFields) -> Result<Task, TaskError> {
    let changed = conn.execute(
        "UPDATE tasks
         SET name = ?1, desc = ?2, category = ?3, priority = ?4, dueDate = ?5, status = ?6
         WHERE id = ?7",
        params![
            fields.name,
            fields.desc,
            fields.category.as_str(),
            fields.priority.as_str(),
            format_date(fields),
            fields.status.as_str(),
            id,
        ],
    )?;
    if changed == 0 {
        return Err(TaskError::task_not_found(id));
    }
    get_task_by_id(conn, id)
}

pub fn delete_task(conn: &Connection, id: i64) -> Result<(), TaskError> {
    let changed = conn.execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
    if changed == 0 {
        return Err(TaskError::task_not_found(id));
    }
    Ok(())
}

fn format_date(fields: &TaskFields) -> Option<String> {
    fields.due_date.map(|d| d.format(DATE_FORMAT).to_string())
}

fn row_to_task(row: &rusqlite::Row) -> rusqlite::Result<Task> {
    let text = |idx: usize| -> rusqlite::Result<String> {
        Ok(row.get::<_, Option<String>>(idx)?.unwrap_or_default())
    };
    Ok(Task {
        id: row.get(0)?,
        fields: TaskFields {
            name: text(1)?,
            desc: text(2)?,
            category: Category::from_str(&text(3)?).unwrap_or_default(),
            priority: Priority::from_str(&text(4)?).unwrap_or_default(),
            due_date: parse_date(&text(5)?),
            status: TaskStatus::from_str(&text(6)?).unwrap_or_default(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::open_in_memory;

    fn fields(name: &str, due: &str) -> TaskFields {
        TaskFields {
            name: name.to_string(),
            desc: format!("{name} details"),
            due_date: parse_date(due),
            ..TaskFields::default()
        }
    }

    #[test]
    fn create_assigns_increasing_ids() {
        let conn = open_in_memory().unwrap();
        let a = create_task(&conn, &fields("a", "2024-01-01")).unwrap();
        let b = create_task(&conn, &fields("b", "2024-01-02")).unwrap();
        assert!(b.id > a.id);
        assert_eq!(a.fields, fields("a", "2024-01-01"));
    }

    #[test]
    fn created_task_appears_in_list() {
        let conn = open_in_memory().unwrap();
        let created = create_task(&conn, &fields("listed", "2024-03-09")).unwrap();
        let all = list_tasks(&conn).unwrap();
        assert_eq!(all, vec![created]);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let conn = open_in_memory().unwrap();
        let first = create_task(&conn, &fields("first", "2024-01-01")).unwrap();
        delete_task(&conn, first.id).unwrap();
        let second = create_task(&conn, &fields("second", "2024-01-01")).unwrap();
        assert!(second.id > first.id);
    }

    #[test]
    fn update_overwrites_every_field() {
        let conn = open_in_memory().unwrap();
        let created = create_task(&conn, &fields("old", "2024-01-01")).unwrap();
        let replacement = TaskFields {
            name: "new".into(),
            desc: "".into(),
            category: Category::Personal,
            priority: Priority::Low,
            due_date: None,
            status: TaskStatus::Completed,
        };
        let updated = update_task(&conn, created.id, &replacement).unwrap();
        assert_eq!(updated, Task::new(created.id, replacement.clone()));
        assert_eq!(get_task_by_id(&conn, created.id).unwrap().fields, replacement);
    }

    #[test]
    fn update_and_delete_of_missing_id_are_not_found() {
        let conn = open_in_memory().unwrap();
        let err = update_task(&conn, 99, &fields("x", "2024-01-01")).unwrap_err();
        assert!(err.is_not_found());
        let err = delete_task(&conn, 99).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn delete_removes_row() {
        let conn = open_in_memory().unwrap();
        let keep = create_task(&conn, &fields("keep", "2024-01-01")).unwrap();
        let gone = create_task(&conn, &fields("gone", "2024-01-01")).unwrap();
        delete_task(&conn, gone.id).unwrap();
        let ids: Vec<i64> = list_tasks(&conn).unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![keep.id]);
    }

    #[test]
    fn null_and_unknown_columns_read_as_defaults() {
        let conn = open_in_memory().unwrap();
        conn.execute(
            "INSERT INTO tasks (name, category, dueDate, status) VALUES ('raw', 'Hobby', 'soon', NULL)",
            [],
        )
        .unwrap();
        let task = &list_tasks(&conn).unwrap()[0];
        assert_eq!(task.name(), "raw");
        assert_eq!(task.desc(), "");
        assert_eq!(task.fields.category, Category::Work);
        assert_eq!(task.due_date(), None);
        assert_eq!(task.status(), TaskStatus::InProgress);
    }
}
