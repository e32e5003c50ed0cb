//! Clocks and repository doubles shared by task unit tests.

use async_trait::async_trait;
use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;
use std::sync::Mutex;

use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Clock that advances by a fixed step every time it is read.
#[derive(Debug)]
pub struct StepClock {
    next: Mutex<DateTime<Utc>>,
    step: TimeDelta,
}

impl StepClock {
    pub fn starting_at(start: DateTime<Utc>, step: TimeDelta) -> Self {
        Self {
            next: Mutex::new(start),
            step,
        }
    }

    /// A clock that never advances.
    pub fn frozen(at: DateTime<Utc>) -> Self {
        Self::starting_at(at, TimeDelta::zero())
    }
}

impl Default for StepClock {
    fn default() -> Self {
        Self::starting_at(epoch(), TimeDelta::seconds(1))
    }
}

impl Clock for StepClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let mut next = self
            .next
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let current = *next;
        *next = current + self.step;
        current
    }
}

/// Fixed reference instant used by test clocks.
pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 0)
        .single()
        .expect("valid reference timestamp")
}

/// Repository whose record disappears between lookup and update.
pub struct VanishingRepository {
    pub task: Task,
}

#[async_trait]
impl TaskRepository for VanishingRepository {
    async fn save(&self, task: &Task) -> TaskRepositoryResult<Task> {
        Ok(task.clone())
    }

    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        Ok(vec![self.task.clone()])
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        Ok((id == self.task.id()).then(|| self.task.clone()))
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<Task> {
        Err(TaskRepositoryError::NotFound(task.id()))
    }

    async fn delete(&self, _id: TaskId) -> TaskRepositoryResult<bool> {
        Ok(false)
    }

    async fn exists(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        Ok(id == self.task.id())
    }
}

/// Repository that fails every call with a persistence error.
pub struct FailingRepository;

fn unavailable() -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other("store unavailable"))
}

#[async_trait]
impl TaskRepository for FailingRepository {
    async fn save(&self, _task: &Task) -> TaskRepositoryResult<Task> {
        Err(unavailable())
    }

    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        Err(unavailable())
    }

    async fn update(&self, _task: &Task) -> TaskRepositoryResult<Task> {
        Err(unavailable())
    }

    async fn delete(&self, _id: TaskId) -> TaskRepositoryResult<bool> {
        Err(unavailable())
    }

    async fn exists(&self, _id: TaskId) -> TaskRepositoryResult<bool> {
        Err(unavailable())
    }
}
