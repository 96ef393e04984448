use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::audit::UnitOfWork;
use crate::auth::extractor::AuthUser;
use crate::auth::password;
use crate::db;
use crate::error::AppError;
use crate::models::{Appointment, Company};
use crate::state::SharedState;
use crate::week;

#[derive(Deserialize)]
pub struct CreateAccountRequest {
    pub email: String,
    pub password: String,
    pub company_name: String,
}

#[derive(Deserialize)]
pub struct UpdateCompanyRequest {
    pub company_name: String,
}

pub async fn list(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<Vec<Company>>, AppError> {
    auth.require_admin_or_company()?;
    let companies = db::companies::list_all(&state.pool).await?;
    Ok(Json(companies))
}

pub async fn get(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Company>, AppError> {
    auth.require_admin_or_company()?;
    let company = db::companies::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Company with ID {id} does not exist")))?;
    Ok(Json(company))
}

/// Provision a company: its login account (role `company`) and the company
/// row, created in one unit-of-work.
pub async fn create_account(
    auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<CreateAccountRequest>,
) -> Result<Json<Company>, AppError> {
    auth.require_admin_or_company()?;
    validate_name(&req.company_name)?;

    if req.password.len() < 8 {
        return Err(AppError::BadRequest(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    if db::users::find_by_email(&state.pool, &req.email)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict(
            "A user with this email already exists".to_string(),
        ));
    }

    let pw_hash = password::hash(&req.password)?;

    let mut uow = UnitOfWork::begin(&state.pool).await?;
    let user = db::users::create(uow.executor(), &req.email, &pw_hash, "company").await?;
    let company = db::companies::insert(
        uow.executor(),
        &req.company_name,
        Some(&req.email),
        Some(user.id),
    )
    .await?;
    uow.record_added(&user);
    uow.record_added(&company);
    uow.commit().await?;

    Ok(Json(company))
}

pub async fn update(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateCompanyRequest>,
) -> Result<Json<Company>, AppError> {
    auth.require_admin_or_company()?;
    validate_name(&req.company_name)?;

    let before = db::companies::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Company with ID {id} does not exist")))?;
    auth.require_admin_or_owner(before.user_id)?;

    let mut uow = UnitOfWork::begin(&state.pool).await?;
    let after = db::companies::update(uow.executor(), id, &req.company_name).await?;
    uow.record_modified(&before, &after);
    uow.commit().await?;

    Ok(Json(after))
}

/// Delete a company and its linked login account together.
pub async fn delete(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Company>, AppError> {
    auth.require_admin_or_company()?;

    let company = db::companies::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Company with ID {id} does not exist and therefore cannot be deleted"
            ))
        })?;
    auth.require_admin_or_owner(company.user_id)?;

    let mut uow = UnitOfWork::begin(&state.pool).await?;
    db::companies::delete(uow.executor(), id).await?;
    uow.record_deleted(&company);
    if let Some(user_id) = company.user_id {
        if let Some(user) = db::users::find_by_id(&state.pool, user_id).await? {
            db::users::delete(uow.executor(), user_id).await?;
            uow.record_deleted(&user);
        }
    }
    uow.commit().await?;

    Ok(Json(company))
}

/// Appointments attending in the given ISO week.
pub async fn bookings_in_week(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path((year, week)): Path<(i32, u32)>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    auth.require_admin_or_company()?;
    let (start, end) = week::week_range(year, week)
        .ok_or_else(|| AppError::BadRequest(format!("Week {week} of {year} does not exist")))?;

    let bookings = db::appointments::list_in_range(&state.pool, start, end).await?;
    Ok(Json(bookings))
}

/// Appointments attending in the given calendar month.
pub async fn bookings_in_month(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path((year, month)): Path<(i32, u32)>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    auth.require_admin_or_company()?;
    let (start, end) = week::month_range(year, month)
        .ok_or_else(|| AppError::BadRequest(format!("Month {month} of {year} does not exist")))?;

    let bookings = db::appointments::list_in_range(&state.pool, start, end).await?;
    Ok(Json(bookings))
}

fn validate_name(name: &str) -> Result<(), AppError> {
    if name.is_empty() || name.chars().count() > 50 {
        return Err(AppError::BadRequest(
            "Company name must be between 1 and 50 characters".to_string(),
        ));
    }
    Ok(())
}
