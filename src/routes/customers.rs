use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::audit::UnitOfWork;
use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::models::Customer;
use crate::state::SharedState;
use crate::week;

#[derive(Deserialize)]
pub struct CustomerRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub user_id: Option<Uuid>,
}

pub async fn list(
    _auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<Vec<Customer>>, AppError> {
    let customers = db::customers::list_all(&state.pool).await?;
    Ok(Json(customers))
}

pub async fn get(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Customer>, AppError> {
    let customer = db::customers::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Customer with ID {id} does not exist")))?;
    Ok(Json(customer))
}

pub async fn create(
    auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<CustomerRequest>,
) -> Result<Json<Customer>, AppError> {
    auth.require_admin_or_company()?;
    validate_names(&req)?;

    let mut uow = UnitOfWork::begin(&state.pool).await?;
    let customer = db::customers::insert(
        uow.executor(),
        &req.first_name,
        &req.last_name,
        req.email.as_deref(),
        req.phone.as_deref(),
        req.user_id,
    )
    .await?;
    uow.record_added(&customer);
    uow.commit().await?;

    Ok(Json(customer))
}

pub async fn update(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<CustomerRequest>,
) -> Result<Json<Customer>, AppError> {
    auth.require_admin_or_company()?;
    validate_names(&req)?;

    let before = db::customers::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Customer with ID {id} does not exist")))?;

    let mut uow = UnitOfWork::begin(&state.pool).await?;
    let after = db::customers::update(
        uow.executor(),
        id,
        &req.first_name,
        &req.last_name,
        req.email.as_deref(),
        req.phone.as_deref(),
    )
    .await?;
    uow.record_modified(&before, &after);
    uow.commit().await?;

    Ok(Json(after))
}

pub async fn delete(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Customer>, AppError> {
    auth.require_admin_or_company()?;

    let customer = db::customers::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Customer with ID {id} does not exist and therefore cannot be deleted"
            ))
        })?;

    let mut uow = UnitOfWork::begin(&state.pool).await?;
    db::customers::delete(uow.executor(), id).await?;
    uow.record_deleted(&customer);
    uow.commit().await?;

    Ok(Json(customer))
}

/// The customer together with their non-deleted appointments.
pub async fn appointments(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let customer = db::customers::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Customer with ID {id} does not exist")))?;

    let appointments = db::appointments::list_active_for_customer(&state.pool, id).await?;
    if appointments.is_empty() {
        return Err(AppError::NotFound(format!(
            "Customer with ID {id} does not have any active appointments"
        )));
    }

    Ok(Json(serde_json::json!({
        "customer": customer,
        "appointments": appointments,
    })))
}

/// Count of the customer's appointments attending in the given ISO week.
pub async fn appointments_in_week(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Path((id, year, week)): Path<(Uuid, i32, u32)>,
) -> Result<Json<i64>, AppError> {
    let (start, end) = week::week_range(year, week)
        .ok_or_else(|| AppError::BadRequest(format!("Week {week} of {year} does not exist")))?;

    let count = db::customers::count_appointments_in_range(&state.pool, id, start, end).await?;
    Ok(Json(count))
}

fn validate_names(req: &CustomerRequest) -> Result<(), AppError> {
    if req.first_name.is_empty() || req.first_name.chars().count() > 25 {
        return Err(AppError::BadRequest(
            "First name must be between 1 and 25 characters".to_string(),
        ));
    }
    if req.last_name.is_empty() || req.last_name.chars().count() > 50 {
        return Err(AppError::BadRequest(
            "Last name must be between 1 and 50 characters".to_string(),
        ));
    }
    Ok(())
}
