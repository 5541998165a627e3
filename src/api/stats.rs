//! Stat endpoints, including CSV export.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::{error, success, ApiResult, CsvFile, CsvResult};
use crate::csv;
use crate::errors::{AppError, AppErrorWithRevision};
use crate::models::{CreateStatRequest, Stat, StatFilter, StatKind, UpdateStatRequest};
use crate::AppState;

/// GET /api/stats - List stats, with optional `q`, `college` and `sport`
/// filters.
pub async fn list_stats(
    State(state): State<AppState>,
    Query(filter): Query<StatFilter>,
) -> ApiResult<Vec<Stat>> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.list_stats(&filter).await {
        Ok(stats) => success(stats, revision_id),
        Err(e) => error(e, revision_id),
    }
}

/// POST /api/stats - Create a stat entry.
pub async fn create_stat(
    State(state): State<AppState>,
    Json(request): Json<CreateStatRequest>,
) -> ApiResult<Stat> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    for (value, label) in [
        (&request.sport, "Sport"),
        (&request.college, "College"),
        (&request.stat_name, "Stat name"),
        (&request.stat_value, "Stat value"),
    ] {
        if value.trim().is_empty() {
            return error(
                AppError::Validation(format!("{} is required", label)),
                revision_id,
            );
        }
    }
    if request.kind == StatKind::Player
        && request.player_id.as_deref().unwrap_or("").trim().is_empty()
    {
        return error(
            AppError::Validation("Player stats require a playerId".to_string()),
            revision_id,
        );
    }

    match state.repo.create_stat(&request).await {
        Ok(stat) => {
            let new_revision = state.repo.get_revision_id().await.unwrap_or(revision_id);
            success(stat, new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}

/// PUT /api/stats/:id - Patch a stat entry. Absent fields keep their prior
/// value.
pub async fn update_stat(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateStatRequest>,
) -> ApiResult<Stat> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.update_stat(&id, &request).await {
        Ok(stat) => {
            let new_revision = state.repo.get_revision_id().await.unwrap_or(revision_id);
            success(stat, new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}

/// DELETE /api/stats/:id - Delete a stat entry.
pub async fn delete_stat(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.delete_stat(&id).await {
        Ok(()) => {
            let new_revision = state.repo.get_revision_id().await.unwrap_or(revision_id);
            success((), new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}

/// GET /api/stats/export - Download all stats as CSV.
pub async fn export_stats(State(state): State<AppState>) -> CsvResult {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    let stats = state
        .repo
        .list_stats(&StatFilter::default())
        .await
        .map_err(|e| AppErrorWithRevision {
            error: e,
            revision_id,
        })?;

    let rows: Vec<Vec<String>> = stats
        .into_iter()
        .map(|s| {
            vec![
                s.id,
                s.kind.as_str().to_string(),
                s.sport,
                s.college,
                s.player_id.unwrap_or_default(),
                s.stat_name,
                s.stat_value,
                s.created_at,
            ]
        })
        .collect();

    Ok(CsvFile {
        file_name: "stats.csv",
        body: csv::render(
            &[
                "id", "type", "sport", "college", "playerId", "statName", "statValue", "createdAt",
            ],
            &rows,
        ),
    })
}
