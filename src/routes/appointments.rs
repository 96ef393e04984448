use axum::extract::{Path, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::audit::UnitOfWork;
use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::models::{Appointment, Customer};
use crate::state::SharedState;
use crate::week;

#[derive(Deserialize)]
pub struct CreateAppointmentRequest {
    pub customer_id: Uuid,
    pub attend_date: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct UpdateAppointmentRequest {
    pub attend_date: DateTime<Utc>,
    pub is_deleted: Option<bool>,
}

pub async fn list(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    auth.require_admin_or_company()?;
    let appointments = db::appointments::list_all(&state.pool).await?;
    Ok(Json(appointments))
}

pub async fn get(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Appointment>, AppError> {
    auth.require_admin_or_company()?;
    let appointment = db::appointments::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Appointment with ID {id} does not exist")))?;
    Ok(Json(appointment))
}

/// Distinct customers with an appointment attending this week.
pub async fn current_week_customers(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<Vec<Customer>>, AppError> {
    auth.require_admin_or_company()?;
    let (start, end) = week::current_week_range();
    let customers =
        db::appointments::customers_with_appointments_in_range(&state.pool, start, end).await?;
    Ok(Json(customers))
}

pub async fn create(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<CreateAppointmentRequest>,
) -> Result<Json<Appointment>, AppError> {
    let customer_id = req.customer_id;
    db::customers::find_by_id(&state.pool, customer_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Customer with ID {customer_id} does not exist"))
        })?;

    let mut uow = UnitOfWork::begin(&state.pool).await?;
    let appointment =
        db::appointments::insert(uow.executor(), req.customer_id, req.attend_date).await?;
    uow.record_added(&appointment);
    uow.commit().await?;

    Ok(Json(appointment))
}

pub async fn update(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateAppointmentRequest>,
) -> Result<Json<Appointment>, AppError> {
    let before = db::appointments::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Appointment with ID {id} does not exist")))?;

    let customer = db::customers::find_by_id(&state.pool, before.customer_id)
        .await?
        .ok_or_else(|| AppError::Internal("Appointment has no customer".to_string()))?;
    auth.require_staff_or_owner(customer.user_id)?;

    let mut uow = UnitOfWork::begin(&state.pool).await?;
    let after = db::appointments::update(
        uow.executor(),
        id,
        req.attend_date,
        req.is_deleted.unwrap_or(before.is_deleted),
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
) -> Result<Json<Appointment>, AppError> {
    let appointment = db::appointments::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Appointment with ID {id} does not exist and therefore cannot be deleted"
            ))
        })?;

    let customer = db::customers::find_by_id(&state.pool, appointment.customer_id)
        .await?
        .ok_or_else(|| AppError::Internal("Appointment has no customer".to_string()))?;
    auth.require_staff_or_owner(customer.user_id)?;

    let mut uow = UnitOfWork::begin(&state.pool).await?;
    db::appointments::delete(uow.executor(), id).await?;
    uow.record_deleted(&appointment);
    uow.commit().await?;

    Ok(Json(appointment))
}
