use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct CancelResponse {
    pub phase: String,
}

#[tracing::instrument(skip(state))]
pub async fn cancel_handler(State(state): State<AppState>) -> impl IntoResponse {
    state.controller.cancel();
    let job = state.controller.job();
    (
        StatusCode::ACCEPTED,
        Json(CancelResponse {
            phase: job.phase.to_string(),
        }),
    )
}
