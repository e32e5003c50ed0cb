//! Handlers for the task endpoints.

use axum::{
    Extension, Json,
    extract::{Path, rejection::JsonRejection},
    http::StatusCode,
};

use super::{
    ApiEnvelope, ApiError, SharedTaskUseCases,
    bodies::{CreateTaskBody, UpdateTaskBody},
};
use crate::task::{domain::TaskId, services::TaskResponse};

/// Message returned after a successful deletion.
pub const TASK_DELETED: &str = "task deleted successfully";

type Reply<T> = Result<(StatusCode, Json<ApiEnvelope<T>>), ApiError>;

/// Liveness probe.
pub async fn health() -> (StatusCode, Json<ApiEnvelope<()>>) {
    (StatusCode::OK, Json(ApiEnvelope::message("ok")))
}

/// `POST /tasks`
pub async fn create_task(
    Extension(use_cases): Extension<SharedTaskUseCases>,
    body: Result<Json<CreateTaskBody>, JsonRejection>,
) -> Reply<TaskResponse> {
    let Json(body) = body.map_err(|rejection| ApiError::invalid_body(&rejection))?;
    let task = use_cases.create_task(body.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiEnvelope::data(task))))
}

/// `GET /tasks`
pub async fn list_tasks(
    Extension(use_cases): Extension<SharedTaskUseCases>,
) -> Reply<Vec<TaskResponse>> {
    let tasks = use_cases.get_all_tasks().await?;
    Ok((StatusCode::OK, Json(ApiEnvelope::list(tasks))))
}

/// `GET /tasks/:id`
pub async fn get_task(
    Extension(use_cases): Extension<SharedTaskUseCases>,
    Path(id): Path<String>,
) -> Reply<TaskResponse> {
    let task = use_cases.get_task_by_id(parse_task_id(&id)?).await?;
    Ok((StatusCode::OK, Json(ApiEnvelope::data(task))))
}

/// `PATCH /tasks/:id`
pub async fn update_task(
    Extension(use_cases): Extension<SharedTaskUseCases>,
    Path(id): Path<String>,
    body: Result<Json<UpdateTaskBody>, JsonRejection>,
) -> Reply<TaskResponse> {
    let task_id = parse_task_id(&id)?;
    let Json(body) = body.map_err(|rejection| ApiError::invalid_body(&rejection))?;
    let task = use_cases.update_task(task_id, body.into()).await?;
    Ok((StatusCode::OK, Json(ApiEnvelope::data(task))))
}

/// `DELETE /tasks/:id`
pub async fn delete_task(
    Extension(use_cases): Extension<SharedTaskUseCases>,
    Path(id): Path<String>,
) -> Reply<()> {
    use_cases.delete_task(parse_task_id(&id)?).await?;
    Ok((StatusCode::OK, Json(ApiEnvelope::message(TASK_DELETED))))
}

/// Task identifiers are opaque to clients, so one that cannot be parsed
/// cannot name a stored task.
fn parse_task_id(raw: &str) -> Result<TaskId, ApiError> {
    raw.parse().map_err(|_| ApiError::task_not_found())
}
