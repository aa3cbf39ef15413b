//! In-memory fakes for the interview collaborators, shared by the test suites.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::cover::CoverSelector;
use crate::interview::extractor::DetailsExtractor;
use crate::interview::models::{InterviewDetails, InterviewRecord};
use crate::interview::store::InterviewStore;
use crate::llm_client::{LlmError, TextGenerator};
use crate::state::AppState;

/// A JSON array of `n` distinct questions.
pub fn questions_json(n: usize) -> String {
    let questions: Vec<String> = (1..=n).map(|i| format!("Question number {i}?")).collect();
    serde_json::to_string(&questions).unwrap()
}

/// Builds state around the given extractor and generator, with an in-memory
/// store and a fixed cover.
pub fn test_state(
    extractor: Arc<dyn DetailsExtractor>,
    generator: Arc<dyn TextGenerator>,
) -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let state = AppState {
        extractor,
        generator,
        store: store.clone(),
        covers: Arc::new(FixedCover),
    };
    (state, store)
}

pub struct FixedExtractor {
    details: InterviewDetails,
    calls: AtomicUsize,
}

impl FixedExtractor {
    pub fn new(details: InterviewDetails) -> Self {
        Self {
            details,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DetailsExtractor for FixedExtractor {
    async fn extract(&self, _conversation_text: &str) -> Result<InterviewDetails, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.details.clone())
    }
}

pub struct FailingExtractor;

#[async_trait]
impl DetailsExtractor for FailingExtractor {
    async fn extract(&self, _conversation_text: &str) -> Result<InterviewDetails, AppError> {
        Err(AppError::Extraction("response did not match schema".to_string()))
    }
}

/// Replies with queued responses in order, repeating the last one once the
/// queue runs dry. Records every prompt it sees.
pub struct ScriptedGenerator {
    responses: Mutex<VecDeque<String>>,
    last: Mutex<String>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn new<S: Into<String>>(responses: Vec<S>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into_iter().map(Into::into).collect()),
            last: Mutex::new(String::new()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub async fn prompts(&self) -> Vec<String> {
        self.prompts.lock().await.clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate_text(&self, prompt: &str, _system: &str) -> Result<String, LlmError> {
        self.prompts.lock().await.push(prompt.to_string());
        let mut last = self.last.lock().await;
        if let Some(next) = self.responses.lock().await.pop_front() {
            *last = next;
        }
        Ok(last.clone())
    }
}

pub struct FailingGenerator;

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate_text(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
        Err(LlmError::Api {
            status: 429,
            message: "quota exceeded".to_string(),
        })
    }
}

#[derive(Default)]
pub struct MemoryStore {
    documents: Mutex<Vec<(Uuid, InterviewRecord)>>,
}

impl MemoryStore {
    pub async fn records(&self) -> Vec<InterviewRecord> {
        self.documents
            .lock()
            .await
            .iter()
            .map(|(_, record)| record.clone())
            .collect()
    }

    pub async fn ids(&self) -> Vec<Uuid> {
        self.documents.lock().await.iter().map(|(id, _)| *id).collect()
    }
}

#[async_trait]
impl InterviewStore for MemoryStore {
    async fn insert(&self, record: &InterviewRecord) -> Result<Uuid, AppError> {
        let id = Uuid::new_v4();
        self.documents.lock().await.push((id, record.clone()));
        Ok(id)
    }
}

pub struct FailingStore;

#[async_trait]
impl InterviewStore for FailingStore {
    async fn insert(&self, _record: &InterviewRecord) -> Result<Uuid, AppError> {
        Err(AppError::Persistence(sqlx::Error::PoolTimedOut))
    }
}

pub struct FixedCover;

impl CoverSelector for FixedCover {
    fn select(&self) -> String {
        "/covers/test.png".to_string()
    }
}
