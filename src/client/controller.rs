use crate::client::api::TaskApi;
use crate::client::state::TaskState;
use crate::error::TaskError;
use crate::models::{Task, TaskFields};

/// Drives user actions: validate locally, call the store, merge the result
/// into [`TaskState`].
///
/// Failed calls leave a generic message in `state.error`; the underlying
/// error is logged and returned to the caller.
pub struct TaskClient<A> {
    api: A,
    pub state: TaskState,
}

impl<A: TaskApi> TaskClient<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: TaskState::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn load(&mut self) -> Result<(), TaskError> {
        self.state.loading = true;
        let result = self.api.list().await;
        self.state.loading = false;

        match result {
            Ok(tasks) => {
                tracing::debug!(count = tasks.len(), "loaded tasks");
                self.state.replace_all(tasks);
                self.state.error = None;
                Ok(())
            }
            Err(e) => {
                self.state.replace_all(Vec::new());
                Err(self.fail("Failed to load tasks.", e))
            }
        }
    }

    /// Create a task from the draft form.
    pub async fn submit_create(&mut self) -> Result<Task, TaskError> {
        let fields = self.validated(self.state.draft.to_fields())?;

        match self.api.create(&fields).await {
            Ok(created) => {
                self.state.insert(created.clone());
                self.state.reset_draft();
                self.state.error = None;
                self.state.flash("Task added successfully!");
                Ok(created)
            }
            Err(e) => Err(self.fail("Failed to add task.", e)),
        }
    }

    /// Returns false if the id is not in the current list.
    pub fn begin_edit(&mut self, id: i64) -> bool {
        match self.state.find(id).cloned() {
            Some(task) => {
                self.state.begin_edit(&task);
                true
            }
            None => false,
        }
    }

    pub fn cancel_edit(&mut self) {
        self.state.end_edit();
        self.state.clear_messages();
        self.state.reset_draft();
    }

    pub async fn submit_edit(&mut self) -> Result<Task, TaskError> {
        let Some(buffer) = self.state.editing().cloned() else {
            return Err(TaskError::validation("No task is being edited."));
        };
        let fields = self.validated(buffer.to_fields())?;

        match self.api.update(buffer.id, &fields).await {
            Ok(updated) => {
                self.merge(updated.clone());
                self.state.end_edit();
                self.state.error = None;
                self.state.flash("Task updated successfully!");
                Ok(updated)
            }
            Err(e) => Err(self.fail("Failed to update task.", e)),
        }
    }

    /// Delete after `confirm` agrees. Returns whether a delete was issued.
    pub async fn delete(
        &mut self,
        id: i64,
        confirm: impl FnOnce(i64) -> bool,
    ) -> Result<bool, TaskError> {
        if !confirm(id) {
            return Ok(false);
        }

        match self.api.delete(id).await {
            Ok(_) => {
                self.state.remove(id);
                self.state.error = None;
                self.state.flash("Task deleted successfully!");
                Ok(true)
            }
            Err(e) => Err(self.fail("Failed to delete task.", e)),
        }
    }

    /// Flip in-progress and completed, sending the full record.
    pub async fn toggle_status(&mut self, id: i64) -> Result<Option<Task>, TaskError> {
        let Some(current) = self.state.find(id).cloned() else {
            return Ok(None);
        };
        let fields = TaskFields {
            status: current.status().toggled(),
            ..current.fields
        };

        match self.api.update(id, &fields).await {
            Ok(updated) => {
                self.merge(updated.clone());
                self.state.error = None;
                self.state.flash("Task status updated!");
                Ok(Some(updated))
            }
            Err(e) => Err(self.fail("Failed to update task status.", e)),
        }
    }

    pub fn visible(&self) -> Vec<Task> {
        self.state.visible()
    }

    fn merge(&mut self, task: Task) {
        if !self.state.replace(task) {
            tracing::warn!("store returned a task missing from the local list");
        }
    }

    fn validated(&mut self, fields: Result<TaskFields, TaskError>) -> Result<TaskFields, TaskError> {
        fields.map_err(|e| {
            self.state.error = Some(e.message.clone());
            e
        })
    }

    fn fail(&mut self, message: &str, cause: TaskError) -> TaskError {
        tracing::error!(code = cause.code.as_str(), "{message} {}", cause.message);
        self.state.error = Some(message.to_string());
        cause
    }
}
