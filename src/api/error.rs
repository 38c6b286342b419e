//! Conversion of store errors into HTTP responses.
//!
//! Every failure carries a `{ "error": message }` body. A missing task id
//! answers 404; anything else is reported as 500 with the underlying message.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::TaskError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl TaskError {
    pub fn status_code(&self) -> StatusCode {
        if self.is_not_found() {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for TaskError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::error!(code = self.code.as_str(), status = %status, "request failed: {}", self.message);
        (status, Json(ErrorBody { error: self.message })).into_response()
    }
}

impl From<JsonRejection> for TaskError {
    fn from(rejection: JsonRejection) -> Self {
        TaskError::validation(rejection.body_text())
    }
}

impl From<PathRejection> for TaskError {
    fn from(rejection: PathRejection) -> Self {
        TaskError::validation(rejection.body_text())
    }
}
