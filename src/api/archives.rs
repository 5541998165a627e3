//! Archive views over past results and media.

use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use super::{error, success, ApiResult};
use crate::models::{MatchResult, MediaItem};
use crate::AppState;

/// Query filters for the archive. `year` matches the record's creation
/// year; `sport` is a case-insensitive substring for results and an exact
/// scope for media.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArchiveFilter {
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub sport: Option<String>,
}

/// Past results and media grouped in one response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveView {
    pub results: Vec<MatchResult>,
    pub media: Vec<MediaItem>,
}

fn created_year(created_at: &str) -> &str {
    created_at.get(..4).unwrap_or("")
}

/// GET /api/archives - Filtered view of recorded results and media.
pub async fn get_archives(
    State(state): State<AppState>,
    Query(filter): Query<ArchiveFilter>,
) -> ApiResult<ArchiveView> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    let results = match state.repo.list_results().await {
        Ok(r) => r,
        Err(e) => return error(e, revision_id),
    };
    let media = match state.repo.list_media().await {
        Ok(m) => m,
        Err(e) => return error(e, revision_id),
    };

    let year = filter.year.as_deref().filter(|y| !y.is_empty());
    let sport = filter
        .sport
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(|s| s.to_lowercase());

    let results = results
        .into_iter()
        .filter(|r| year.map_or(true, |y| created_year(&r.created_at) == y))
        .filter(|r| {
            sport
                .as_deref()
                .map_or(true, |s| r.sport.to_lowercase().contains(s))
        })
        .collect();

    let media = media
        .into_iter()
        .filter(|m| year.map_or(true, |y| created_year(&m.created_at) == y))
        .filter(|m| {
            sport
                .as_deref()
                .map_or(true, |s| m.sport.to_lowercase() == *s)
        })
        .collect();

    success(ArchiveView { results, media }, revision_id)
}
