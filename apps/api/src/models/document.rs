use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Header of a row in the append-only `documents` table. The JSONB body is
/// write-only from this service.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DocumentRow {
    pub id: Uuid,
    pub collection: String,
    pub created_at: DateTime<Utc>,
}
