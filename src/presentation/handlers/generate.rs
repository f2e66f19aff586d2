use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::services::StartError;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Requested total record count, as entered by the caller.
    pub count: String,
}

#[derive(Serialize)]
pub struct GenerateResponse {
    pub run_id: String,
    pub target: u64,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state))]
pub async fn generate_handler(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> impl IntoResponse {
    match state.controller.start(&request.count) {
        Ok(run_id) => {
            let job = state.controller.job();
            (
                StatusCode::ACCEPTED,
                Json(GenerateResponse {
                    run_id: run_id.to_string(),
                    target: job.target,
                }),
            )
                .into_response()
        }
        Err(e @ StartError::InvalidTarget(_)) => {
            tracing::warn!(error = %e, "Rejected generate request");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
        Err(e @ StartError::RunInProgress) => (
            StatusCode::CONFLICT,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}
