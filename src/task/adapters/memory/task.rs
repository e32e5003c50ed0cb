//! In-memory repository for task records.

use async_trait::async_trait;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{PersistedTaskData, Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Contents are lost when the last clone is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every stored task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the lock is poisoned.
    pub fn clear(&self) -> TaskRepositoryResult<()> {
        self.write()?.clear();
        Ok(())
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, HashMap<TaskId, Task>>> {
        self.tasks.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, HashMap<TaskId, Task>>> {
        self.tasks.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn save(&self, task: &Task) -> TaskRepositoryResult<Task> {
        let mut tasks = self.write()?;
        if tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        tasks.insert(task.id(), task.clone());
        Ok(task.clone())
    }

    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.read()?;
        let mut all: Vec<Task> = tasks.values().cloned().collect();
        all.sort_by_key(|task| Reverse((task.created_at(), task.id())));
        Ok(all)
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        Ok(self.read()?.get(&id).cloned())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<Task> {
        let mut tasks = self.write()?;
        let stored = tasks
            .get_mut(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        let updated = Task::from_persisted(PersistedTaskData {
            id: task.id(),
            title: task.title().as_str().to_owned(),
            description: task.description().as_str().to_owned(),
            completed: task.is_completed(),
            created_at: stored.created_at(),
            updated_at: task.updated_at(),
        })
        .map_err(TaskRepositoryError::persistence)?;
        *stored = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        Ok(self.write()?.remove(&id).is_some())
    }

    async fn exists(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        Ok(self.read()?.contains_key(&id))
    }
}
