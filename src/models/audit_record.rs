use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One immutable entry in the change log. Never updated or deleted once
/// written; read back in creation order via the history endpoint.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct AuditRecord {
    pub id: Uuid,
    pub entity_name: String,
    pub action: String,
    pub change_summary: String,
    pub created_at: DateTime<Local>,
}
