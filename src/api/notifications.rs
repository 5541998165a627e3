//! Notification endpoints.

use axum::{extract::State, Json};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::{Notification, SendNotificationRequest};
use crate::AppState;

/// GET /api/notifications - List notifications, newest first.
pub async fn list_notifications(State(state): State<AppState>) -> ApiResult<Vec<Notification>> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.list_notifications().await {
        Ok(items) => success(items, revision_id),
        Err(e) => error(e, revision_id),
    }
}

/// POST /api/notifications - Record a notification. Timestamps come from
/// the server clock; a missing sport scope means "All Sports".
pub async fn send_notification(
    State(state): State<AppState>,
    Json(request): Json<SendNotificationRequest>,
) -> ApiResult<Notification> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    if request.message.trim().is_empty() {
        return error(
            AppError::Validation("Message is required".to_string()),
            revision_id,
        );
    }
    if request.kind.trim().is_empty() {
        return error(
            AppError::Validation("Type is required".to_string()),
            revision_id,
        );
    }

    match state.repo.create_notification(&request).await {
        Ok(item) => {
            let new_revision = state.repo.get_revision_id().await.unwrap_or(revision_id);
            success(item, new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}
