//! Media upload and listing endpoints.

use axum::{extract::State, Json};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::{human_size, MediaItem, MediaKind, UploadMediaRequest};
use crate::AppState;

/// GET /api/media - List all media items, newest first.
pub async fn list_media(State(state): State<AppState>) -> ApiResult<Vec<MediaItem>> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.list_media().await {
        Ok(items) => success(items, revision_id),
        Err(e) => error(e, revision_id),
    }
}

/// POST /api/media - Store an uploaded image or video.
///
/// The payload is an inline `data:` URL; anything over the configured cap
/// is rejected before touching the database.
pub async fn upload_media(
    State(state): State<AppState>,
    Json(request): Json<UploadMediaRequest>,
) -> ApiResult<MediaItem> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    if request.title.trim().is_empty() {
        return error(
            AppError::Validation("Title is required".to_string()),
            revision_id,
        );
    }
    let expected_prefix = match request.kind {
        MediaKind::Image => "data:image/",
        MediaKind::Video => "data:video/",
    };
    if !request.data.starts_with(expected_prefix) {
        return error(
            AppError::Validation(format!(
                "Media data must be a {} data URL",
                request.kind.as_str()
            )),
            revision_id,
        );
    }
    if request.data.len() > state.config.max_media_bytes {
        return error(
            AppError::PayloadTooLarge(format!(
                "Media payload exceeds the {} limit",
                human_size(state.config.max_media_bytes)
            )),
            revision_id,
        );
    }

    let size = human_size(request.data.len());

    match state.repo.create_media(&request, &size).await {
        Ok(item) => {
            let new_revision = state.repo.get_revision_id().await.unwrap_or(revision_id);
            success(item, new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}
