use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::audit::Audited;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub booking_date: DateTime<Utc>,
    pub attend_date: DateTime<Utc>,
    pub is_deleted: bool,
}

impl Audited for Appointment {
    const ENTITY: &'static str = "Appointment";

    fn audit_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("customer_id", self.customer_id.to_string()),
            ("booking_date", self.booking_date.to_rfc3339()),
            ("attend_date", self.attend_date.to_rfc3339()),
            ("is_deleted", self.is_deleted.to_string()),
        ]
    }
}
