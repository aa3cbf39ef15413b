//! Question generation: prompt construction and the fallible parse of the
//! model's answer.

use crate::errors::AppError;
use crate::interview::models::{scalar_text, InterviewParams};
use crate::interview::prompts::QUESTION_PROMPT_TEMPLATE;
use crate::llm_client::prompts::{fill_template, VOICE_SAFE_INSTRUCTION};
use crate::llm_client::strip_json_fences;

pub fn build_question_prompt(params: &InterviewParams) -> String {
    let role = scalar_text(&params.role);
    let level = scalar_text(&params.level);
    let interview_type = scalar_text(&params.interview_type);
    let amount = scalar_text(&params.amount);

    fill_template(
        QUESTION_PROMPT_TEMPLATE,
        &[
            ("role", role.as_str()),
            ("level", level.as_str()),
            ("techstack", params.techstack.as_str()),
            ("type", interview_type.as_str()),
            ("amount", amount.as_str()),
            ("voice_safe_instruction", VOICE_SAFE_INSTRUCTION),
        ],
    )
}

/// Parses model output that is supposed to be a JSON array of strings.
///
/// A surrounding code fence is tolerated. Commentary around the array is not.
pub fn parse_questions(text: &str) -> Result<Vec<String>, AppError> {
    serde_json::from_str::<Vec<String>>(strip_json_fences(text))
        .map_err(|e| AppError::Parse(format!("questions are not a JSON array of strings: {e}")))
}
