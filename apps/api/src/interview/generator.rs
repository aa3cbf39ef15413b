//! Interview generation: orchestrates the request pipeline.
//!
//! Flow: (extract details) → build question prompt → LLM generate →
//!       parse questions → build record → persist.
//!
//! Strictly forward: the first failing step aborts the request and nothing
//! after it runs. Persistence is last, so a failure never leaves a partial record.

use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::models::{
    scalar_text, InterviewParams, InterviewRecord, InterviewRequest,
};
use crate::interview::prompts::QUESTION_SYSTEM;
use crate::interview::questions::{build_question_prompt, parse_questions};
use crate::state::AppState;

/// Runs the full pipeline for one request and returns the stored document id.
///
/// Steps:
/// 1. extractor.extract() → InterviewDetails (conversation requests only)
/// 2. generator.generate_text() with the question prompt
/// 3. parse_questions() → Vec<String>
/// 4. InterviewRecord::new() with a random cover and the current timestamp
/// 5. store.insert()
pub async fn generate_interview(
    state: &AppState,
    request: InterviewRequest,
) -> Result<Uuid, AppError> {
    let (params, user_id) = match request {
        InterviewRequest::Conversation {
            conversation_text,
            user_id,
        } => {
            info!("Extracting interview details from conversation for user {user_id}");
            let details = state.extractor.extract(&conversation_text).await?;
            (InterviewParams::from(details), user_id)
        }
        InterviewRequest::Direct { params, user_id } => {
            info!("Using direct interview parameters for user {user_id}");
            (params, user_id)
        }
    };

    let questions = generate_questions(state, &params).await?;

    let cover_image = state.covers.select();
    let record = InterviewRecord::new(params, questions, user_id, cover_image);

    let id = state.store.insert(&record).await?;
    info!(
        "Generated interview {} ({} questions, role={}) for user {}",
        id,
        record.questions.len(),
        scalar_text(&record.role),
        record.user_id
    );
    Ok(id)
}

async fn generate_questions(
    state: &AppState,
    params: &InterviewParams,
) -> Result<Vec<String>, AppError> {
    let prompt = build_question_prompt(params);
    let text = state
        .generator
        .generate_text(&prompt, QUESTION_SYSTEM)
        .await
        .map_err(|e| AppError::Generation(format!("question generation failed: {e}")))?;

    let questions = parse_questions(&text)?;

    if let Some(requested) = params.requested_amount() {
        if requested != questions.len() {
            warn!(
                "Requested {} questions, model returned {}",
                requested,
                questions.len()
            );
        }
    }
    Ok(questions)
}
