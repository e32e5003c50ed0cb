//! Domain model for task records.
//!
//! The domain owns task identity and the title/description invariants while
//! keeping all infrastructure concerns outside of the domain boundary.

mod error;
mod fields;
mod ids;
mod task;

pub use error::{ParseTaskIdError, TaskDomainError};
pub use fields::{TaskDescription, TaskTitle};
pub use ids::TaskId;
pub use task::{PersistedTaskData, Task};
