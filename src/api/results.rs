//! Result recording endpoints.

use axum::{extract::State, Json};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::{MatchResult, RecordResultRequest};
use crate::AppState;

/// GET /api/results - List all results, newest first.
pub async fn list_results(State(state): State<AppState>) -> ApiResult<Vec<MatchResult>> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.list_results().await {
        Ok(results) => success(results, revision_id),
        Err(e) => error(e, revision_id),
    }
}

/// POST /api/results - Record the final score of a match.
pub async fn record_result(
    State(state): State<AppState>,
    Json(request): Json<RecordResultRequest>,
) -> ApiResult<MatchResult> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    if request.match_id.trim().is_empty() {
        return error(
            AppError::Validation("Match id is required".to_string()),
            revision_id,
        );
    }
    if request.score_a < 0 || request.score_b < 0 {
        return error(
            AppError::Validation("Scores must be non-negative".to_string()),
            revision_id,
        );
    }

    match state.repo.create_result(&request).await {
        Ok(result) => {
            let new_revision = state.repo.get_revision_id().await.unwrap_or(revision_id);
            success(result, new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}
