//! Diesel schema for task persistence.

diesel::table! {
    /// One record per task, keyed by task identifier.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Trimmed task title.
        #[max_length = 200]
        title -> Varchar,
        /// Trimmed task description; empty when unset.
        #[max_length = 1000]
        description -> Varchar,
        /// Completion flag.
        completed -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
