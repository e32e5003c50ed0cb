//! Step definitions for the task CRUD scenarios.


mod given;
mod then;
