use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::audit::Audited;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

// Users flow through the same unit-of-work as everything else, but "User"
// is not on the tracked allow-list, so the recorder drops these at commit.
impl Audited for User {
    const ENTITY: &'static str = "User";

    fn audit_fields(&self) -> Vec<(&'static str, String)> {
        vec![("email", self.email.clone()), ("role", self.role.clone())]
    }
}
