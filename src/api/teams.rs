//! Team endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateTeamRequest, Team};
use crate::AppState;

/// GET /api/teams - List all teams.
pub async fn list_teams(State(state): State<AppState>) -> ApiResult<Vec<Team>> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.list_teams().await {
        Ok(teams) => success(teams, revision_id),
        Err(e) => error(e, revision_id),
    }
}

/// POST /api/teams - Create a new team.
pub async fn create_team(
    State(state): State<AppState>,
    Json(request): Json<CreateTeamRequest>,
) -> ApiResult<Team> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    for (value, label) in [
        (&request.name, "Name"),
        (&request.org, "Organization"),
        (&request.primary_sport, "Primary sport"),
    ] {
        if value.trim().is_empty() {
            return error(
                AppError::Validation(format!("{} is required", label)),
                revision_id,
            );
        }
    }

    match state.repo.create_team(&request).await {
        Ok(team) => {
            let new_revision = state.repo.get_revision_id().await.unwrap_or(revision_id);
            success(team, new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}

/// DELETE /api/teams/:id - Delete a team.
pub async fn delete_team(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.delete_team(&id).await {
        Ok(()) => {
            let new_revision = state.repo.get_revision_id().await.unwrap_or(revision_id);
            success((), new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}
