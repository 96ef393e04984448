use chrono::{DateTime, Local};
use sqlx::PgPool;

use crate::models::AuditRecord;

/// Insert one audit row. Only ever called by the unit-of-work recorder,
/// through the transaction of the commit being audited.
pub async fn insert<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    entity_name: &str,
    action: &str,
    change_summary: &str,
    created_at: DateTime<Local>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO audit_records (entity_name, action, change_summary, created_at)
         VALUES ($1, $2, $3, $4)",
    )
    .bind(entity_name)
    .bind(action)
    .bind(change_summary)
    .bind(created_at)
    .execute(executor)
    .await?;
    Ok(())
}

/// All audit records in creation order.
pub async fn list_all(pool: &PgPool) -> Result<Vec<AuditRecord>, sqlx::Error> {
    sqlx::query_as::<_, AuditRecord>("SELECT * FROM audit_records ORDER BY seq")
        .fetch_all(pool)
        .await
}
