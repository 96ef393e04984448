use axum::extract::State;
use axum::Json;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::models::AuditRecord;
use crate::state::SharedState;

/// The full change log, oldest first. Admin only.
pub async fn list(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<Vec<AuditRecord>>, AppError> {
    auth.require_admin()?;
    let records = db::audit::list_all(&state.pool).await?;
    Ok(Json(records))
}
