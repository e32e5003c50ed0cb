//! Mapping from task service failures to HTTP responses.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::ApiEnvelope;
use crate::task::services::TaskServiceError;

/// Message returned whenever a task lookup misses.
pub const TASK_NOT_FOUND: &str = "task not found";

/// Failure response carrying a status code and envelope message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Creates an error response.
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// 404 response for a task that does not exist.
    #[must_use]
    pub fn task_not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, TASK_NOT_FOUND)
    }

    /// 400 response for a body that is not valid JSON for the endpoint.
    #[must_use]
    pub fn invalid_body(rejection: &JsonRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, rejection.body_text())
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the envelope message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<TaskServiceError> for ApiError {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::Validation(domain) => {
                Self::new(StatusCode::BAD_REQUEST, domain.to_string())
            }
            TaskServiceError::NotFound(_) => Self::task_not_found(),
            TaskServiceError::Storage(storage) => {
                tracing::error!(error = %storage, "task storage failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, storage.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiEnvelope::<()>::failure(self.message);
        (self.status, Json(body)).into_response()
    }
}
