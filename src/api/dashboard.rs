//! Dashboard summary endpoint.

use axum::extract::State;
use chrono::{Duration, Utc};
use serde::Serialize;

use super::{error, success, ApiResult};
use crate::models::{MatchPhase, MatchView, PlayerFilter};
use crate::AppState;

/// The counters and recent-match strip the console's dashboard shows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_matches: usize,
    pub live_matches: usize,
    pub total_teams: usize,
    pub total_players: usize,
    /// The four most recently created matches, newest first.
    pub recent_matches: Vec<MatchView>,
}

/// GET /api/dashboard - Aggregate counters derived at query time.
pub async fn get_dashboard(State(state): State<AppState>) -> ApiResult<DashboardSummary> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    let matches = match state.repo.list_matches().await {
        Ok(m) => m,
        Err(e) => return error(e, revision_id),
    };
    let resulted = match state.repo.resulted_match_ids().await {
        Ok(ids) => ids,
        Err(e) => return error(e, revision_id),
    };
    let teams = match state.repo.list_teams().await {
        Ok(t) => t,
        Err(e) => return error(e, revision_id),
    };
    let players = match state.repo.list_players(&PlayerFilter::default()).await {
        Ok(p) => p,
        Err(e) => return error(e, revision_id),
    };
    let recent = match state.repo.recent_matches(4).await {
        Ok(r) => r,
        Err(e) => return error(e, revision_id),
    };

    let now = Utc::now().naive_utc();
    let window = Duration::minutes(state.config.live_window_minutes);

    let live_matches = matches
        .iter()
        .filter(|m| m.phase_at(now, resulted.contains(&m.id), window) == MatchPhase::Live)
        .count();

    let recent_matches = recent
        .into_iter()
        .map(|m| {
            let phase = m.phase_at(now, resulted.contains(&m.id), window);
            MatchView { record: m, phase }
        })
        .collect();

    success(
        DashboardSummary {
            total_matches: matches.len(),
            live_matches,
            total_teams: teams.len(),
            total_players: players.len(),
            recent_matches,
        },
        revision_id,
    )
}
