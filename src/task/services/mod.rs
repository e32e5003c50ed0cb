//! Application services for task use cases.

mod dto;
mod task_service;

pub use dto::{CreateTaskRequest, TaskResponse, UpdateTaskRequest};
pub use task_service::{TaskService, TaskServiceError, TaskServiceResult, TaskUseCases};
