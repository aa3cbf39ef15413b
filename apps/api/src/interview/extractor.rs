//! Detail extraction: turns a free-form conversation transcript into
//! schema-checked `InterviewDetails` via the LLM.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::interview::models::InterviewDetails;
use crate::interview::prompts::EXTRACTION_PROMPT_TEMPLATE;
use crate::llm_client::prompts::{fill_template, JSON_ONLY_SYSTEM};
use crate::llm_client::{strip_json_fences, TextGenerator};

/// Structured extraction seam. Carried in `AppState` as `Arc<dyn DetailsExtractor>`.
#[async_trait]
pub trait DetailsExtractor: Send + Sync {
    async fn extract(&self, conversation_text: &str) -> Result<InterviewDetails, AppError>;
}

/// Prompts the model with the extraction schema and validates what comes back.
/// A non-conforming answer is an error; it is not retried here.
pub struct LlmDetailsExtractor {
    llm: Arc<dyn TextGenerator>,
}

impl LlmDetailsExtractor {
    pub fn new(llm: Arc<dyn TextGenerator>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl DetailsExtractor for LlmDetailsExtractor {
    async fn extract(&self, conversation_text: &str) -> Result<InterviewDetails, AppError> {
        let prompt = build_extraction_prompt(conversation_text);
        let text = self
            .llm
            .generate_text(&prompt, JSON_ONLY_SYSTEM)
            .await
            .map_err(|e| AppError::Extraction(format!("extraction call failed: {e}")))?;

        debug!("Extraction response: {text}");
        let details = parse_details(&text)?;
        info!(
            "Extracted interview details: role={}, type={}, level={}, amount={}",
            details.role,
            details.interview_type.as_str(),
            details.level.as_str(),
            details.amount
        );
        Ok(details)
    }
}

pub fn build_extraction_prompt(conversation_text: &str) -> String {
    fill_template(
        EXTRACTION_PROMPT_TEMPLATE,
        &[("conversation_text", conversation_text)],
    )
}

/// Deserializes and validates the model's answer against the details schema.
pub fn parse_details(text: &str) -> Result<InterviewDetails, AppError> {
    let details: InterviewDetails = serde_json::from_str(strip_json_fences(text))
        .map_err(|e| AppError::Extraction(format!("response did not match schema: {e}")))?;
    details.validate()?;
    Ok(details)
}
