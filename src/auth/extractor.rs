use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use crate::auth::jwt;
use crate::error::AppError;
use crate::state::SharedState;

#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub role: String,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }

    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::Forbidden("Admin access required".to_string()))
        }
    }

    pub fn require_admin_or_company(&self) -> Result<(), AppError> {
        if self.is_admin() || self.role == "company" {
            Ok(())
        } else {
            Err(AppError::Forbidden(
                "Admin or company access required".to_string(),
            ))
        }
    }

    /// Company mutations: admins pass, everyone else must own the row.
    pub fn require_admin_or_owner(&self, owner_user_id: Option<Uuid>) -> Result<(), AppError> {
        if self.is_admin() || owner_user_id == Some(self.user_id) {
            Ok(())
        } else {
            Err(AppError::Forbidden(
                "You can only modify your own records".to_string(),
            ))
        }
    }

    /// Appointment mutations: admin and company roles pass outright,
    /// customers must own the linked customer row.
    pub fn require_staff_or_owner(&self, owner_user_id: Option<Uuid>) -> Result<(), AppError> {
        if self.is_admin() || self.role == "company" || owner_user_id == Some(self.user_id) {
            Ok(())
        } else {
            Err(AppError::Forbidden(
                "You can only modify your own appointments".to_string(),
            ))
        }
    }
}

impl FromRequestParts<SharedState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .ok_or_else(|| AppError::Unauthorized("Missing authentication token".to_string()))?;

        let auth_str = auth_header
            .to_str()
            .map_err(|_| AppError::Unauthorized("Invalid authorization header".to_string()))?;

        let token = auth_str
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::Unauthorized("Missing authentication token".to_string()))?;

        let claims = jwt::decode_token(token, &state.config.jwt_secret)
            .map_err(|_| AppError::Unauthorized("Invalid or expired token".to_string()))?;

        Ok(AuthUser {
            user_id: claims.sub,
            role: claims.role,
        })
    }
}
