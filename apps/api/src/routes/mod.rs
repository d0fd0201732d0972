pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post, put},
    Router,
};

use crate::state::AppState;
use crate::workflow::handlers;

/// Headroom above the file limit for multipart boundaries and headers.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(handlers::handle_get_session).delete(handlers::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/resume",
            post(handlers::handle_upload_resume).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            "/api/v1/sessions/:id/job-description",
            put(handlers::handle_set_job_description),
        )
        .route(
            "/api/v1/sessions/:id/optimize",
            post(handlers::handle_optimize),
        )
        .route(
            "/api/v1/sessions/:id/resume-data",
            patch(handlers::handle_edit_resume),
        )
        .route("/api/v1/sessions/:id/reset", post(handlers::handle_reset))
        .route(
            "/api/v1/sessions/:id/notice",
            axum::routing::delete(handlers::handle_dismiss_notice),
        )
        .with_state(state)
}
