//! Player roster records.

use serde::{Deserialize, Serialize};

/// A rostered player. The (college, sport, jersey) combination is unique
/// at insert time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    pub college: String,
    pub sport: String,
    pub position: String,
    pub jersey: i64,
    /// Inline data URL, or absent for players without a photo.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub created_at: String,
}

/// Request body for adding a player, also the shape of one imported CSV row.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayerRequest {
    pub name: String,
    pub college: String,
    pub sport: String,
    pub position: String,
    pub jersey: i64,
    #[serde(default)]
    pub photo: Option<String>,
}

/// Optional query filters for the player list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerFilter {
    /// Case-insensitive name substring.
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub college: Option<String>,
    #[serde(default)]
    pub sport: Option<String>,
}

/// Outcome of a CSV roster import.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub imported: usize,
    /// Rows skipped because their (college, sport, jersey) slot was taken.
    pub skipped_duplicates: usize,
    /// Rows discarded for having no name.
    pub discarded: usize,
}
