//! JSON request bodies for task endpoints.

use serde::{Deserialize, Deserializer};

use crate::task::services::{CreateTaskRequest, UpdateTaskRequest};

/// Body of `POST /tasks`.
///
/// A missing or `null` title is treated as empty so that it fails task
/// validation rather than body parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateTaskBody {
    /// Task title.
    #[serde(default)]
    pub title: Option<String>,
    /// Optional task description.
    #[serde(default)]
    pub description: Option<String>,
}

impl From<CreateTaskBody> for CreateTaskRequest {
    fn from(body: CreateTaskBody) -> Self {
        let mut request = Self::new(body.title.unwrap_or_default());
        if let Some(description) = body.description {
            request = request.with_description(description);
        }
        request
    }
}

/// Body of `PATCH /tasks/:id`.
///
/// The outer `Option` records whether a member was present; an explicit
/// `null` title or description is read as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateTaskBody {
    /// Replacement title.
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Option<String>>,
    /// Replacement description.
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    /// Replacement completion flag; `null` leaves it unchanged.
    #[serde(default)]
    pub completed: Option<bool>,
}

impl From<UpdateTaskBody> for UpdateTaskRequest {
    fn from(body: UpdateTaskBody) -> Self {
        let mut request = Self::new();
        if let Some(title) = body.title {
            request = request.with_title(title.unwrap_or_default());
        }
        if let Some(description) = body.description {
            request = request.with_description(description.unwrap_or_default());
        }
        if let Some(completed) = body.completed {
            request = request.with_completed(completed);
        }
        request
    }
}

/// Marks a member as present, keeping `null` distinguishable from absence.
fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}
