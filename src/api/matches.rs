//! Match scheduling endpoints. List views attach the derived phase.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{Duration, Utc};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateMatchRequest, Match, MatchView};
use crate::AppState;

/// GET /api/matches - List all matches with their derived phase.
pub async fn list_matches(State(state): State<AppState>) -> ApiResult<Vec<MatchView>> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    let matches = match state.repo.list_matches().await {
        Ok(m) => m,
        Err(e) => return error(e, revision_id),
    };
    let resulted = match state.repo.resulted_match_ids().await {
        Ok(ids) => ids,
        Err(e) => return error(e, revision_id),
    };

    let now = Utc::now().naive_utc();
    let window = Duration::minutes(state.config.live_window_minutes);
    let views = matches
        .into_iter()
        .map(|m| {
            let phase = m.phase_at(now, resulted.contains(&m.id), window);
            MatchView { record: m, phase }
        })
        .collect();

    success(views, revision_id)
}

/// POST /api/matches - Schedule a new match.
pub async fn create_match(
    State(state): State<AppState>,
    Json(request): Json<CreateMatchRequest>,
) -> ApiResult<Match> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    for (value, label) in [
        (&request.sport, "Sport"),
        (&request.team_a, "Team A"),
        (&request.team_b, "Team B"),
        (&request.date, "Date"),
        (&request.time, "Time"),
        (&request.venue, "Venue"),
    ] {
        if value.trim().is_empty() {
            return error(
                AppError::Validation(format!("{} is required", label)),
                revision_id,
            );
        }
    }
    if request.team_a.trim() == request.team_b.trim() {
        return error(
            AppError::Validation("A team cannot play against itself".to_string()),
            revision_id,
        );
    }

    match state.repo.create_match(&request).await {
        Ok(m) => {
            let new_revision = state.repo.get_revision_id().await.unwrap_or(revision_id);
            success(m, new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}

/// DELETE /api/matches/:id - Delete a match.
pub async fn delete_match(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.delete_match(&id).await {
        Ok(()) => {
            let new_revision = state.repo.get_revision_id().await.unwrap_or(revision_id);
            success((), new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}
