use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct JobStatusResponse {
    pub run_id: Option<String>,
    pub phase: String,
    pub running: bool,
    pub target: u64,
    pub current: u64,
    pub progress: f64,
    pub error: Option<String>,
}

#[tracing::instrument(skip(state))]
pub async fn status_handler(State(state): State<AppState>) -> impl IntoResponse {
    let job = state.controller.job();
    (
        StatusCode::OK,
        Json(JobStatusResponse {
            run_id: job.run_id.map(|id| id.to_string()),
            phase: job.phase.to_string(),
            running: job.is_running(),
            target: job.target,
            current: job.current,
            progress: job.progress_ratio(),
            error: job.last_error.clone(),
        }),
    )
}
