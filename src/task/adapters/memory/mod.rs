//! In-memory task persistence.

mod task;

pub use task::InMemoryTaskRepository;
