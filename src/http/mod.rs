//! HTTP surface for task use cases (axum router and handlers).
//!
//! - `routes`: handlers, one per use case
//! - `bodies`: JSON request bodies and their mapping to service requests
//! - `envelope`: the `{success, data?, count?, message?}` response envelope
//! - `errors`: service error to status code mapping

use std::sync::Arc;

use axum::{
    Extension, Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::task::services::TaskUseCases;

pub mod bodies;
pub mod envelope;
pub mod errors;
pub mod routes;


pub use envelope::ApiEnvelope;
pub use errors::ApiError;

/// Shared handle to the task use cases injected into every handler.
pub type SharedTaskUseCases = Arc<dyn TaskUseCases>;

/// Builds the full HTTP router around the given task use cases.
#[must_use]
pub fn router(use_cases: SharedTaskUseCases) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/tasks", post(routes::create_task).get(routes::list_tasks))
        .route(
            "/tasks/:id",
            get(routes::get_task)
                .patch(routes::update_task)
                .delete(routes::delete_task),
        )
        .layer(Extension(use_cases))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
