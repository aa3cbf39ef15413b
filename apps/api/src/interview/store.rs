//! Interview persistence. Records are added once to the `interviews`
//! collection and never updated.

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::models::InterviewRecord;
use crate::models::document::DocumentRow;

pub const INTERVIEWS_COLLECTION: &str = "interviews";

/// Append-only store seam. Carried in `AppState` as `Arc<dyn InterviewStore>`.
#[async_trait]
pub trait InterviewStore: Send + Sync {
    /// Adds the record as a new document and returns its id.
    /// No idempotency key: the same record inserted twice yields two documents.
    async fn insert(&self, record: &InterviewRecord) -> Result<Uuid, AppError>;
}

/// Document collection backed by a JSONB column in PostgreSQL.
pub struct PgInterviewStore {
    pool: PgPool,
}

impl PgInterviewStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InterviewStore for PgInterviewStore {
    async fn insert(&self, record: &InterviewRecord) -> Result<Uuid, AppError> {
        let row = sqlx::query_as::<_, DocumentRow>(
            r#"
            INSERT INTO documents (id, collection, data)
            VALUES ($1, $2, $3)
            RETURNING id, collection, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(INTERVIEWS_COLLECTION)
        .bind(Json(record))
        .fetch_one(&self.pool)
        .await?;

        info!(
            "Stored interview {} in '{}' for user {} at {}",
            row.id, row.collection, record.user_id, row.created_at
        );
        Ok(row.id)
    }
}
