use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use uuid::Uuid;

use crate::core::{
    domain::{ExecutionResult, SubmissionRequest, SubmissionToken},
    errors::RelayError,
    pipeline::{polling::PollPolicy, polling::poll_result, running::run, submitting::submit},
    traits::judge::JudgeApi,
};

#[derive(Clone, Debug)]
pub struct AppState {
    api: Arc<dyn JudgeApi>,
    policy: PollPolicy,
}

impl AppState {
    pub fn new(api: Arc<dyn JudgeApi>, policy: PollPolicy) -> Self {
        Self { api, policy }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/submit", post(submit_code))
        .route("/api/result/{token}", get(get_result))
        .route("/api/run", post(run_code))
        .with_state(state)
}

#[tracing::instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
async fn submit_code(
    State(state): State<AppState>,
    Json(request): Json<SubmissionRequest>,
) -> Result<Json<SubmissionToken>, RelayError> {
    tracing::info!("Received submission for language {}", request.language_id);
    submit(state.api.as_ref(), &request).await.map(Json)
}

#[tracing::instrument(skip_all, fields(request_id = %Uuid::new_v4(), token = %token))]
async fn get_result(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<ExecutionResult>, RelayError> {
    tracing::info!("Received result request");
    poll_result(state.api.as_ref(), &token, &state.policy)
        .await
        .map(Json)
}

/// Any failure collapses into a bare 500; the cause only goes to the log.
#[tracing::instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
async fn run_code(
    State(state): State<AppState>,
    Json(request): Json<SubmissionRequest>,
) -> Result<Json<ExecutionResult>, StatusCode> {
    tracing::info!("Received run request for language {}", request.language_id);
    run(state.api.as_ref(), &request, &state.policy)
        .await
        .map(Json)
        .map_err(|e| {
            tracing::error!("Run failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}
