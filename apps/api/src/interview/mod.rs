// Interview generation: conversation or direct parameters in, persisted
// interview record out. All LLM calls go through llm_client.

pub mod cover;
pub mod extractor;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod questions;
pub mod store;

#[cfg(test)]
pub mod testing;
