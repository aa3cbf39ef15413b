use std::sync::Arc;

use crate::interview::cover::CoverSelector;
use crate::interview::extractor::DetailsExtractor;
use crate::interview::store::InterviewStore;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Every collaborator is built once at startup; nothing here is mutated per request.
#[derive(Clone)]
pub struct AppState {
    /// Structured extraction of interview details from a transcript.
    pub extractor: Arc<dyn DetailsExtractor>,
    /// Free-text question generation. Default: the shared `LlmClient`.
    pub generator: Arc<dyn TextGenerator>,
    pub store: Arc<dyn InterviewStore>,
    pub covers: Arc<dyn CoverSelector>,
}
