//! Session state held by the task client.

use std::time::Instant;

use chrono::NaiveDate;

use crate::client::view::{derive_view, ViewParams};
use crate::config::NOTICE_TTL;
use crate::error::TaskError;
use crate::models::{Category, Priority, Task, TaskFields, TaskStatus};

/// Contents of the create form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub name: String,
    pub desc: String,
    pub category: Category,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
}

impl TaskDraft {
    /// Trimmed fields for a new task, or a validation error if a required
    /// field is blank.
    pub fn to_fields(&self) -> Result<TaskFields, TaskError> {
        let (name, desc, due_date) = required(&self.name, &self.desc, self.due_date)?;
        Ok(TaskFields {
            name,
            desc,
            category: self.category,
            priority: self.priority,
            due_date: Some(due_date),
            status: TaskStatus::InProgress,
        })
    }
}

/// Copy of the task being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    pub id: i64,
    pub fields: TaskFields,
}

impl EditBuffer {
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: task.id,
            fields: task.fields.clone(),
        }
    }

    /// Same presence rule as the create form; status is carried over as is.
    pub fn to_fields(&self) -> Result<TaskFields, TaskError> {
        let (name, desc, due_date) =
            required(&self.fields.name, &self.fields.desc, self.fields.due_date)?;
        Ok(TaskFields {
            name,
            desc,
            due_date: Some(due_date),
            ..self.fields.clone()
        })
    }
}

fn required(
    name: &str,
    desc: &str,
    due_date: Option<NaiveDate>,
) -> Result<(String, String, NaiveDate), TaskError> {
    let (name, desc) = (name.trim(), desc.trim());
    match due_date {
        Some(due) if !name.is_empty() && !desc.is_empty() => {
            Ok((name.to_string(), desc.to_string(), due))
        }
        _ => Err(TaskError::missing_fields()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub expires_at: Instant,
}

#[derive(Debug, Default)]
pub struct TaskState {
    tasks: Vec<Task>,
    pub loading: bool,
    pub error: Option<String>,
    notice: Option<Notice>,
    pub draft: TaskDraft,
    editing: Option<EditBuffer>,
    pub view: ViewParams,
}

impl TaskState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn find(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    pub fn insert(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Swap in `task` for the entry with the same id. Returns false when no
    /// such entry exists.
    pub fn replace(&mut self, task: Task) -> bool {
        self.mutate(task.id, |slot| *slot = task)
    }

    pub fn mutate(&mut self, id: i64, f: impl FnOnce(&mut Task)) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                f(task);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: i64) -> Option<Task> {
        let idx = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(idx))
    }

    pub fn visible(&self) -> Vec<Task> {
        derive_view(&self.tasks, &self.view)
    }

    pub fn editing(&self) -> Option<&EditBuffer> {
        self.editing.as_ref()
    }

    pub fn editing_mut(&mut self) -> Option<&mut EditBuffer> {
        self.editing.as_mut()
    }

    /// Entering edit mode replaces any edit already in progress.
    pub fn begin_edit(&mut self, task: &Task) {
        self.editing = Some(EditBuffer::from_task(task));
        self.clear_messages();
    }

    pub fn end_edit(&mut self) {
        self.editing = None;
    }

    pub fn reset_draft(&mut self) {
        self.draft = TaskDraft::default();
    }

    pub fn flash(&mut self, message: impl Into<String>) {
        self.flash_at(message, Instant::now());
    }

    /// A new notice simply replaces the previous one.
    pub fn flash_at(&mut self, message: impl Into<String>, now: Instant) {
        self.notice = Some(Notice {
            message: message.into(),
            expires_at: now + NOTICE_TTL,
        });
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success_message_at(Instant::now())
    }

    pub fn success_message_at(&self, now: Instant) -> Option<&str> {
        self.notice
            .as_ref()
            .filter(|n| now < n.expires_at)
            .map(|n| n.message.as_str())
    }

    pub fn clear_messages(&mut self) {
        self.error = None;
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_date;
    use std::time::Duration;

    fn task(id: i64, name: &str) -> Task {
        Task::new(
            id,
            TaskFields {
                name: name.into(),
                desc: "d".into(),
                due_date: parse_date("2024-01-01"),
                ..TaskFields::default()
            },
        )
    }

    #[test]
    fn draft_requires_trimmed_fields() {
        let mut draft = TaskDraft {
            name: "  ".into(),
            desc: "something".into(),
            due_date: parse_date("2024-01-01"),
            ..TaskDraft::default()
        };
        assert!(draft.to_fields().is_err());

        draft.name = "  Plan trip ".into();
        let fields = draft.to_fields().unwrap();
        assert_eq!(fields.name, "Plan trip");
        assert_eq!(fields.status, TaskStatus::InProgress);

        draft.due_date = None;
        assert_eq!(draft.to_fields().unwrap_err().message, "Please fill in all required fields.");
    }

    #[test]
    fn edit_buffer_keeps_status() {
        let mut t = task(1, "x");
        t.fields.status = TaskStatus::Completed;
        let mut buf = EditBuffer::from_task(&t);
        buf.fields.desc = " padded ".into();
        let fields = buf.to_fields().unwrap();
        assert_eq!(fields.desc, "padded");
        assert_eq!(fields.status, TaskStatus::Completed);
    }

    #[test]
    fn mutate_insert_remove() {
        let mut state = TaskState::new();
        state.insert(task(1, "a"));
        state.insert(task(2, "b"));

        assert!(state.mutate(2, |t| t.fields.name = "B".into()));
        assert!(!state.mutate(9, |_| panic!("no such task")));
        assert_eq!(state.find(2).unwrap().name(), "B");

        assert!(state.replace(task(1, "A")));
        assert_eq!(state.find(1).unwrap().name(), "A");

        assert_eq!(state.remove(1).map(|t| t.id), Some(1));
        assert!(state.remove(1).is_none());
        assert_eq!(state.tasks().len(), 1);
    }

    #[test]
    fn only_one_task_is_edited_at_a_time() {
        let mut state = TaskState::new();
        state.begin_edit(&task(1, "a"));
        state.begin_edit(&task(2, "b"));
        assert_eq!(state.editing().map(|e| e.id), Some(2));
        state.end_edit();
        assert!(state.editing().is_none());
    }

    #[test]
    fn notice_expires_after_ttl_and_is_replaced() {
        let mut state = TaskState::new();
        let t0 = Instant::now();
        state.flash_at("first", t0);
        state.flash_at("second", t0 + Duration::from_secs(2));
        assert_eq!(state.success_message_at(t0 + Duration::from_secs(4)), Some("second"));
        assert_eq!(state.success_message_at(t0 + Duration::from_secs(5)), None);
    }
}
