//! Task entity and its persistence reconstruction record.

use super::{TaskDescription, TaskDomainError, TaskId, TaskTitle};
use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;

/// Task entity.
///
/// Every mutation re-validates its input before assigning it, so a failed
/// call leaves the task unchanged, and refreshes `updated_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: TaskDescription,
    completed: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title, validated on reconstruction.
    pub title: String,
    /// Persisted description, validated on reconstruction.
    pub description: String,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new, incomplete task with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when the title is blank or too long, or the
    /// description is too long.
    pub fn new(
        title: impl AsRef<str>,
        description: Option<&str>,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let timestamp = clock.utc();
        Ok(Self {
            id: TaskId::new(),
            title: TaskTitle::new(title)?,
            description: TaskDescription::from_optional(description)?,
            completed: false,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a task from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when the stored title or description no
    /// longer satisfies the task invariants.
    pub fn from_persisted(data: PersistedTaskData) -> Result<Self, TaskDomainError> {
        Ok(Self {
            id: data.id,
            title: TaskTitle::new(data.title)?,
            description: TaskDescription::new(data.description)?,
            completed: data.completed,
            created_at: data.created_at,
            updated_at: data.updated_at,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub const fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns `true` when both title and description hold no text.
    ///
    /// A task built through [`Task::new`] or [`Task::from_persisted`] always
    /// has a title, so this only reports `true` for values that bypassed
    /// validation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.as_str().trim().is_empty() && self.description.as_str().trim().is_empty()
    }

    /// Marks the task as completed.
    pub fn mark_completed(&mut self, clock: &impl Clock) {
        self.completed = true;
        self.touch(clock);
    }

    /// Marks the task as not completed.
    pub fn mark_incomplete(&mut self, clock: &impl Clock) {
        self.completed = false;
        self.touch(clock);
    }

    /// Replaces the task title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] or
    /// [`TaskDomainError::TitleTooLong`]; the task is left unchanged.
    pub fn update_title(
        &mut self,
        title: impl AsRef<str>,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        self.title = TaskTitle::new(title)?;
        self.touch(clock);
        Ok(())
    }

    /// Replaces the task description. An empty value clears it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DescriptionTooLong`]; the task is left
    /// unchanged.
    pub fn update_description(
        &mut self,
        description: impl AsRef<str>,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        self.description = TaskDescription::new(description)?;
        self.touch(clock);
        Ok(())
    }

    /// Refreshes `updated_at`, keeping it strictly later than its previous
    /// value at microsecond resolution.
    fn touch(&mut self, clock: &impl Clock) {
        let floor = self.updated_at + TimeDelta::microseconds(1);
        self.updated_at = clock.utc().max(floor);
    }
}
