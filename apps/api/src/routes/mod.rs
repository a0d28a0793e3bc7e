pub mod form;
pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers::handle_analyze_job;
use crate::assistant::handlers::{
    handle_generate_cover_letter, handle_interview_prep, handle_optimize_resume,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/analyze-job", post(handle_analyze_job))
        .route("/optimize-resume", post(handle_optimize_resume))
        .route("/generate-cover-letter", post(handle_generate_cover_letter))
        .route("/interview-prep", post(handle_interview_prep))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
