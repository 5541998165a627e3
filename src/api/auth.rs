//! Admin registration and login endpoints.

use axum::{extract::State, Json};

use super::{error, success, ApiResult};
use crate::auth::{hash_password, verify_password};
use crate::errors::AppError;
use crate::models::{Admin, LoginRequest, RegisterRequest};
use crate::AppState;

/// POST /api/auth/register - Create an admin account.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> ApiResult<Admin> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    if request.full_name.trim().is_empty() {
        return error(
            AppError::Validation("Full name is required".to_string()),
            revision_id,
        );
    }
    if request.username.trim().is_empty() {
        return error(
            AppError::Validation("Username is required".to_string()),
            revision_id,
        );
    }
    if request.password.len() < 6 {
        return error(
            AppError::Validation("Password must be at least 6 characters".to_string()),
            revision_id,
        );
    }

    let hash = hash_password(&request.password);

    match state
        .repo
        .create_admin(request.full_name.trim(), request.username.trim(), &hash)
        .await
    {
        Ok(admin) => {
            let new_revision = state.repo.get_revision_id().await.unwrap_or(revision_id);
            success(admin, new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}

/// POST /api/auth/login - Verify credentials and return the account.
///
/// A wrong username and a wrong password produce the same error, so the
/// response does not leak which accounts exist.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Admin> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    let credentials = match state.repo.find_credentials(&request.username).await {
        Ok(Some(c)) => c,
        Ok(None) => return error(AppError::InvalidCredentials, revision_id),
        Err(e) => return error(e, revision_id),
    };

    match verify_password(&request.password, &credentials.password_hash) {
        Ok(true) => success(credentials.admin, revision_id),
        Ok(false) => error(AppError::InvalidCredentials, revision_id),
        Err(e) => error(e, revision_id),
    }
}
