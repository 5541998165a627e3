//! Player roster endpoints, including CSV export and import.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::{error, success, ApiResult, CsvFile, CsvResult};
use crate::csv;
use crate::errors::{AppError, AppErrorWithRevision};
use crate::models::{CreatePlayerRequest, ImportReport, Player, PlayerFilter};
use crate::AppState;

/// GET /api/players - List players, with optional `q`, `college` and
/// `sport` filters.
pub async fn list_players(
    State(state): State<AppState>,
    Query(filter): Query<PlayerFilter>,
) -> ApiResult<Vec<Player>> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.list_players(&filter).await {
        Ok(players) => success(players, revision_id),
        Err(e) => error(e, revision_id),
    }
}

/// POST /api/players - Add a player to the roster.
pub async fn create_player(
    State(state): State<AppState>,
    Json(request): Json<CreatePlayerRequest>,
) -> ApiResult<Player> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    for (value, label) in [
        (&request.name, "Name"),
        (&request.college, "College"),
        (&request.sport, "Sport"),
        (&request.position, "Position"),
    ] {
        if value.trim().is_empty() {
            return error(
                AppError::Validation(format!("{} is required", label)),
                revision_id,
            );
        }
    }
    if request.jersey < 0 {
        return error(
            AppError::Validation("Jersey number must be non-negative".to_string()),
            revision_id,
        );
    }

    match state.repo.create_player(&request).await {
        Ok(player) => {
            let new_revision = state.repo.get_revision_id().await.unwrap_or(revision_id);
            success(player, new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}

/// DELETE /api/players/:id - Remove a player.
pub async fn delete_player(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.delete_player(&id).await {
        Ok(()) => {
            let new_revision = state.repo.get_revision_id().await.unwrap_or(revision_id);
            success((), new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}

/// DELETE /api/players - Remove every player. Returns the count removed.
pub async fn delete_all_players(State(state): State<AppState>) -> ApiResult<u64> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.delete_all_players().await {
        Ok(removed) => {
            let new_revision = state.repo.get_revision_id().await.unwrap_or(revision_id);
            success(removed, new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}

/// GET /api/players/export - Download the roster as CSV. Photos are not
/// exported.
pub async fn export_players(State(state): State<AppState>) -> CsvResult {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    let players = state
        .repo
        .list_players(&PlayerFilter::default())
        .await
        .map_err(|e| AppErrorWithRevision {
            error: e,
            revision_id,
        })?;

    let rows: Vec<Vec<String>> = players
        .into_iter()
        .map(|p| {
            vec![
                p.id,
                p.name,
                p.college,
                p.sport,
                p.position,
                p.jersey.to_string(),
                p.created_at,
            ]
        })
        .collect();

    Ok(CsvFile {
        file_name: "players.csv",
        body: csv::render(
            &["id", "name", "college", "sport", "position", "jersey", "createdAt"],
            &rows,
        ),
    })
}

/// POST /api/players/import - Import players from a raw CSV body.
///
/// Rows without a name are discarded; rows whose roster slot is already
/// taken are skipped. Everything else is inserted with a fresh id.
pub async fn import_players(State(state): State<AppState>, body: String) -> ApiResult<ImportReport> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    let parsed = csv::parse(&body);
    let total = parsed.len();

    let rows: Vec<CreatePlayerRequest> = parsed
        .into_iter()
        .filter_map(|row| {
            let name = row.get("name").map(|s| s.trim().to_string())?;
            if name.is_empty() {
                return None;
            }
            Some(CreatePlayerRequest {
                name,
                college: row.get("college").cloned().unwrap_or_default(),
                sport: row.get("sport").cloned().unwrap_or_default(),
                position: row.get("position").cloned().unwrap_or_default(),
                jersey: row
                    .get("jersey")
                    .and_then(|j| j.trim().parse().ok())
                    .unwrap_or(0),
                photo: None,
            })
        })
        .collect();
    let discarded = total - rows.len();

    match state.repo.import_players(&rows).await {
        Ok((imported, skipped_duplicates)) => {
            let new_revision = state.repo.get_revision_id().await.unwrap_or(revision_id);
            success(
                ImportReport {
                    imported,
                    skipped_duplicates,
                    discarded,
                },
                new_revision,
            )
        }
        Err(e) => error(e, revision_id),
    }
}
