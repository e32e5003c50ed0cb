//! Service layer for task creation, lookup, update, and deletion.

use super::{CreateTaskRequest, TaskResponse, UpdateTaskRequest};
use crate::task::{
    domain::{Task, TaskDomainError, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};
use async_trait::async_trait;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task use cases.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Input failed task validation.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// No task exists for the identifier.
    #[error("task not found")]
    NotFound(TaskId),

    /// The repository failed.
    #[error(transparent)]
    Storage(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskServiceError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Storage(other),
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task use cases, as consumed by boundary adapters.
#[async_trait]
pub trait TaskUseCases: Send + Sync {
    /// Creates a new, incomplete task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] for invalid input or
    /// [`TaskServiceError::Storage`] when persistence fails.
    async fn create_task(&self, request: CreateTaskRequest) -> TaskServiceResult<TaskResponse>;

    /// Lists every task, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Storage`] when persistence fails.
    async fn get_all_tasks(&self) -> TaskServiceResult<Vec<TaskResponse>>;

    /// Fetches one task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist.
    async fn get_task_by_id(&self, id: TaskId) -> TaskServiceResult<TaskResponse>;

    /// Applies a partial update to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist or
    /// [`TaskServiceError::Validation`] when a supplied field is invalid.
    async fn update_task(
        &self,
        id: TaskId,
        request: UpdateTaskRequest,
    ) -> TaskServiceResult<TaskResponse>;

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist.
    async fn delete_task(&self, id: TaskId) -> TaskServiceResult<()>;
}

/// Task use-case orchestration service.
#[derive(Clone)]
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    fn apply_update(&self, task: &mut Task, request: UpdateTaskRequest) -> TaskServiceResult<()> {
        let clock = &*self.clock;
        if let Some(title) = request.title {
            task.update_title(title, clock)?;
        }
        if let Some(description) = request.description {
            task.update_description(description, clock)?;
        }
        match request.completed {
            Some(true) => task.mark_completed(clock),
            Some(false) => task.mark_incomplete(clock),
            None => {}
        }
        Ok(())
    }
}

#[async_trait]
impl<R, C> TaskUseCases for TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    async fn create_task(&self, request: CreateTaskRequest) -> TaskServiceResult<TaskResponse> {
        let task = Task::new(
            &request.title,
            request.description.as_deref(),
            &*self.clock,
        )?;
        let saved = self.repository.save(&task).await?;
        tracing::info!(task_id = %saved.id(), "task created");
        Ok(TaskResponse::from(&saved))
    }

    async fn get_all_tasks(&self) -> TaskServiceResult<Vec<TaskResponse>> {
        let tasks = self.repository.find_all().await?;
        tracing::debug!(count = tasks.len(), "tasks listed");
        Ok(tasks.iter().map(TaskResponse::from).collect())
    }

    async fn get_task_by_id(&self, id: TaskId) -> TaskServiceResult<TaskResponse> {
        let task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))?;
        Ok(TaskResponse::from(&task))
    }

    async fn update_task(
        &self,
        id: TaskId,
        request: UpdateTaskRequest,
    ) -> TaskServiceResult<TaskResponse> {
        let mut task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))?;

        self.apply_update(&mut task, request)?;
        let updated = self.repository.update(&task).await?;
        tracing::info!(
            task_id = %updated.id(),
            completed = updated.is_completed(),
            "task updated"
        );
        Ok(TaskResponse::from(&updated))
    }

    async fn delete_task(&self, id: TaskId) -> TaskServiceResult<()> {
        if !self.repository.exists(id).await? {
            return Err(TaskServiceError::NotFound(id));
        }
        if !self.repository.delete(id).await? {
            return Err(TaskServiceError::NotFound(id));
        }
        tracing::info!(task_id = %id, "task deleted");
        Ok(())
    }
}
