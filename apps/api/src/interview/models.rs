//! Interview data models: the incoming request shapes, the extracted details,
//! and the persisted record.

use std::ops::RangeInclusive;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;

/// Valid question counts for conversation-derived interviews.
pub const AMOUNT_RANGE: RangeInclusive<u32> = 5..=15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterviewType {
    Technical,
    Behavioral,
    Mixed,
}

impl InterviewType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewType::Technical => "Technical",
            InterviewType::Behavioral => "Behavioral",
            InterviewType::Mixed => "Mixed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Junior,
    #[serde(rename = "Mid-level")]
    MidLevel,
    Senior,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Junior => "Junior",
            ExperienceLevel::MidLevel => "Mid-level",
            ExperienceLevel::Senior => "Senior",
        }
    }
}

/// Structured fields extracted from a conversation transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewDetails {
    pub role: String,
    #[serde(rename = "type")]
    pub interview_type: InterviewType,
    pub level: ExperienceLevel,
    /// Comma-separated, e.g. "React, Node.js, MongoDB".
    pub techstack: String,
    pub amount: u32,
}

impl InterviewDetails {
    /// Enum fields are checked by deserialization; this covers the numeric bound.
    pub fn validate(&self) -> Result<(), AppError> {
        if !AMOUNT_RANGE.contains(&self.amount) {
            return Err(AppError::Extraction(format!(
                "amount must be between {} and {}, got {}",
                AMOUNT_RANGE.start(),
                AMOUNT_RANGE.end(),
                self.amount
            )));
        }
        Ok(())
    }
}

/// How the comma-separated techstack is turned into a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TechstackSplit {
    /// Split on commas and trim each entry.
    Trimmed,
    /// Split on commas only. Legacy webhook callers rely on this.
    Raw,
}

impl TechstackSplit {
    pub fn split(self, techstack: &str) -> Vec<String> {
        techstack
            .split(',')
            .map(|tech| match self {
                TechstackSplit::Trimmed => tech.trim().to_string(),
                TechstackSplit::Raw => tech.to_string(),
            })
            .collect()
    }
}

/// Everything needed to prompt for questions and build the record. Both
/// request paths converge on this.
///
/// `role`, `interview_type`, `level` and `amount` hold the caller's JSON
/// scalars untouched; they are rendered to text only for the prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct InterviewParams {
    pub role: Value,
    pub interview_type: Value,
    pub level: Value,
    pub techstack: String,
    pub amount: Value,
    pub techstack_split: TechstackSplit,
}

impl InterviewParams {
    /// The question count the caller asked for, if it reads as a whole number.
    pub fn requested_amount(&self) -> Option<usize> {
        match &self.amount {
            Value::Number(n) => n.as_u64().map(|n| n as usize),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl From<InterviewDetails> for InterviewParams {
    fn from(details: InterviewDetails) -> Self {
        Self {
            role: Value::String(details.role),
            interview_type: Value::from(details.interview_type.as_str()),
            level: Value::from(details.level.as_str()),
            techstack: details.techstack,
            amount: Value::from(details.amount),
            techstack_split: TechstackSplit::Trimmed,
        }
    }
}

/// A parsed POST body.
#[derive(Debug, Clone, PartialEq)]
pub enum InterviewRequest {
    /// Details are extracted from the transcript by the model.
    Conversation {
        conversation_text: String,
        user_id: String,
    },
    /// Details are taken from the body as-is.
    Direct {
        params: InterviewParams,
        user_id: String,
    },
}

impl InterviewRequest {
    /// Routes on the truthiness of `conversationText`; anything falsy or absent
    /// falls through to the direct-parameter shape.
    pub fn from_body(body: &Value) -> Result<Self, AppError> {
        let user_id = required_scalar(body, "userid")
            .or_else(|_| required_scalar(body, "userId"))
            .map(|v| scalar_text(&v))
            .map_err(|_| AppError::InvalidRequest("userid is required".to_string()))?;

        if let Some(text) = body.get("conversationText").filter(|v| is_truthy(v)) {
            ensure_scalar(text, "conversationText")?;
            return Ok(InterviewRequest::Conversation {
                conversation_text: scalar_text(text),
                user_id,
            });
        }

        let techstack = match body.get("techstack") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => {
                return Err(AppError::InvalidRequest("techstack is required".to_string()))
            }
            Some(_) => {
                return Err(AppError::InvalidRequest(
                    "techstack must be a comma-separated string".to_string(),
                ))
            }
        };

        Ok(InterviewRequest::Direct {
            params: InterviewParams {
                role: required_scalar(body, "role")?,
                interview_type: required_scalar(body, "type")?,
                level: required_scalar(body, "level")?,
                techstack,
                amount: required_scalar(body, "amount")?,
                techstack_split: TechstackSplit::Raw,
            },
            user_id,
        })
    }
}

/// The persisted interview document. Keys are camelCase on the wire and in storage.
///
/// `role`, `type` and `level` are stored exactly as received, so a direct
/// request with `"level": 3` keeps the number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewRecord {
    pub role: Value,
    #[serde(rename = "type")]
    pub interview_type: Value,
    pub level: Value,
    pub techstack: Vec<String>,
    pub questions: Vec<String>,
    pub user_id: String,
    pub finalized: bool,
    pub cover_image: String,
    pub created_at: String,
}

impl InterviewRecord {
    pub fn new(
        params: InterviewParams,
        questions: Vec<String>,
        user_id: String,
        cover_image: String,
    ) -> Self {
        Self {
            techstack: params.techstack_split.split(&params.techstack),
            role: params.role,
            interview_type: params.interview_type,
            level: params.level,
            questions,
            user_id,
            finalized: true,
            cover_image,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Prompt text for a JSON scalar: strings verbatim, anything else as its JSON text.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// JavaScript-style truthiness for loosely typed webhook payloads.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn required_scalar(body: &Value, field: &str) -> Result<Value, AppError> {
    match body.get(field) {
        None | Some(Value::Null) => Err(AppError::InvalidRequest(format!("{field} is required"))),
        Some(value) => {
            ensure_scalar(value, field)?;
            Ok(value.clone())
        }
    }
}

fn ensure_scalar(value: &Value, field: &str) -> Result<(), AppError> {
    match value {
        Value::String(_) | Value::Number(_) | Value::Bool(_) => Ok(()),
        _ => Err(AppError::InvalidRequest(format!(
            "{field} must be a string, number or boolean"
        ))),
    }
}
