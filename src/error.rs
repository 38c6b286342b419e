use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    TaskNotFound,
    ValidationError,
    DatabaseError,
    TransportError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TaskNotFound => "TASK_NOT_FOUND",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::TransportError => "TRANSPORT_ERROR",
        }
    }
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct TaskError {
    pub code: ErrorCode,
    pub message: String,
}

impl TaskError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn task_not_found(id: i64) -> Self {
        Self::new(ErrorCode::TaskNotFound, format!("Task not found: {id}"))
    }

    /// Presence check failure on a create or edit form.
    pub fn missing_fields() -> Self {
        Self::validation("Please fill in all required fields.")
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::TransportError, message)
    }

    pub fn is_not_found(&self) -> bool {
        self.code == ErrorCode::TaskNotFound
    }
}

impl From<rusqlite::Error> for TaskError {
    fn from(e: rusqlite::Error) -> Self {
        Self::database(e.to_string())
    }
}

impl From<reqwest::Error> for TaskError {
    fn from(e: reqwest::Error) -> Self {
        Self::transport(e.to_string())
    }
}
