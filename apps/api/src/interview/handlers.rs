//! Axum route handlers for the interview generation endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::interview::generator::generate_interview;
use crate::interview::models::InterviewRequest;
use crate::state::AppState;

/// POST /generate
///
/// Body is either `{conversationText, userid}` or
/// `{role, type, level, techstack, amount, userid}`.
/// Responds `{"success": true}` once the interview is stored. A body axum
/// cannot read as JSON gets the same 500 error shape as every other failure.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(body) = payload.map_err(|rejection| AppError::InvalidRequest(rejection.body_text()))?;
    let request = InterviewRequest::from_body(&body)?;
    generate_interview(&state, request).await?;
    Ok(Json(json!({ "success": true })))
}

/// GET /generate
pub async fn handle_generate_ack() -> Json<Value> {
    Json(json!({ "success": true, "data": "Thank you!" }))
}
