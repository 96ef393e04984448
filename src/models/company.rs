use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::audit::Audited;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Company {
    pub id: Uuid,
    pub company_name: String,
    pub email: Option<String>,
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Audited for Company {
    const ENTITY: &'static str = "Company";

    fn audit_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("company_name", self.company_name.clone()),
            ("email", self.email.clone().unwrap_or_default()),
        ]
    }
}
