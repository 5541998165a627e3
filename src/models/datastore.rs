//! Full-snapshot view of every collection, for clients that still want to
//! hydrate in one request like the localStorage console did.

use serde::Serialize;

use super::{Match, MatchResult, MediaItem, Notification, Player, Stat, Team};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Datastore {
    pub schema_version: i64,
    pub revision_id: i64,
    pub generated_at: String,
    pub matches: Vec<Match>,
    pub teams: Vec<Team>,
    pub players: Vec<Player>,
    pub stats: Vec<Stat>,
    pub results: Vec<MatchResult>,
    pub media: Vec<MediaItem>,
    pub notifications: Vec<Notification>,
}

/// Revision info for cheap staleness checks.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionInfo {
    pub revision_id: i64,
    pub generated_at: String,
}
