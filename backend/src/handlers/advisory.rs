//! HTTP handlers for the advisory pipeline

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::advisory::{AdvisorySession, QueryRouting};
use crate::AppState;
use shared::{FertilizerAdvice, UserContext};

/// Create a new advisory session
pub async fn create_session(State(state): State<AppState>) -> Json<AdvisorySession> {
    Json(state.advisory.start_session().await)
}

/// Get the current state of a session
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<Json<AdvisorySession>> {
    let session = state.advisory.get_session(session_id).await?;
    Ok(Json(session))
}

/// Body for a query submission
#[derive(Debug, Deserialize)]
pub struct SubmitQueryInput {
    pub query: String,
}

/// Classify a problem statement and return the routing decision
pub async fn submit_query(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(input): Json<SubmitQueryInput>,
) -> AppResult<Json<QueryRouting>> {
    let routing = state.advisory.submit_query(session_id, &input.query).await?;
    Ok(Json(routing))
}

/// Run computation and explanation for a submitted context
pub async fn submit_context(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(context): Json<UserContext>,
) -> AppResult<Json<FertilizerAdvice>> {
    let advice = state.advisory.submit_context(session_id, context).await?;
    Ok(Json(advice))
}

/// Reset a session to idle, clearing submitted images only
pub async fn reset_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<Json<AdvisorySession>> {
    let session = state.advisory.reset(session_id).await?;
    Ok(Json(session))
}
