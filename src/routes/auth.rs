use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::audit::UnitOfWork;
use crate::auth::jwt::{encode_token, Claims};
use crate::auth::password;
use crate::db;
use crate::error::AppError;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub token: String,
}

/// Bootstrap registration: the first account becomes the admin. Once any
/// user exists, registration is closed and accounts are provisioned by
/// admins or through the company account endpoint.
pub async fn register(
    State(state): State<SharedState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    if req.email.is_empty() || req.password.is_empty() {
        return Err(AppError::BadRequest("All fields are required".to_string()));
    }

    if req.password.len() < 8 {
        return Err(AppError::BadRequest(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    let pw_hash = password::hash(&req.password)?;

    // Advisory lock prevents concurrent bootstrap registrations
    let mut uow = UnitOfWork::begin(&state.pool).await?;
    sqlx::query("SELECT pg_advisory_xact_lock(1)")
        .execute(uow.executor())
        .await?;

    let count = db::users::count_all(uow.executor()).await?;
    if count > 0 {
        return Err(AppError::Forbidden(
            "Registration is disabled. Contact your administrator.".to_string(),
        ));
    }

    let user = db::users::create(uow.executor(), &req.email, &pw_hash, "admin").await?;
    uow.record_added(&user);
    uow.commit().await?;

    let claims = Claims::new(user.id, user.role);
    let token = encode_token(&claims, &state.config.jwt_secret).map_err(AppError::Internal)?;

    Ok(Json(AuthResponse { token }))
}

pub async fn login(
    State(state): State<SharedState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let user = db::users::find_by_email(&state.pool, &req.email)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?;

    let valid = password::verify(&req.password, &user.password_hash)?;
    if !valid {
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    }

    let claims = Claims::new(user.id, user.role);
    let token = encode_token(&claims, &state.config.jwt_secret).map_err(AppError::Internal)?;

    Ok(Json(AuthResponse { token }))
}
