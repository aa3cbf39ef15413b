// All LLM prompt constants for the interview module.

/// Extraction prompt template. Replace `{conversation_text}` before sending.
pub const EXTRACTION_PROMPT_TEMPLATE: &str = r#"Analyze the following conversation between an AI assistant and a user who is setting up a mock interview. Extract the interview details:

Conversation:
{conversation_text}

Extract:
- role: The job role/position (e.g., "Frontend Developer")
- type: The interview type - must be one of: "Technical", "Behavioral", or "Mixed"
- level: The experience level - must be one of: "Junior", "Mid-level", or "Senior"
- techstack: Comma-separated list of technologies (e.g., "React, Node.js, MongoDB")
- amount: Number of questions (between 5 and 15)

If any information is missing or unclear, use reasonable defaults:
- type: "Mixed"
- level: "Mid-level"
- amount: 10

Return a JSON object with this EXACT schema (no extra fields):
{
  "role": "Frontend Developer",
  "type": "Mixed",
  "level": "Mid-level",
  "techstack": "React, Node.js, MongoDB",
  "amount": 10
}"#;

/// System prompt for question generation.
pub const QUESTION_SYSTEM: &str = "You are an experienced hiring manager preparing a mock job interview.";

/// Question prompt template. Placeholders: `{role}`, `{level}`, `{techstack}`,
/// `{type}`, `{amount}`, `{voice_safe_instruction}`.
pub const QUESTION_PROMPT_TEMPLATE: &str = r#"Prepare questions for a job interview.
The job role is {role}.
The job experience level is {level}.
The tech stack used in the job is: {techstack}.
The focus between behavioural and technical questions should lean towards: {type}.
The amount of questions required is: {amount}.
Please return only the questions, without any additional text.
{voice_safe_instruction}
Return the questions formatted like this:
["Question 1", "Question 2", "Question 3"]"#;
