//! Free-form statistics. There is no per-sport schema; a stat is a named
//! value attached to either a player or a whole team.

use serde::{Deserialize, Serialize};

/// Whether a stat belongs to a single player or a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatKind {
    Player,
    Team,
}

impl StatKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatKind::Player => "Player",
            StatKind::Team => "Team",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Player" => Some(StatKind::Player),
            "Team" => Some(StatKind::Team),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stat {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: StatKind,
    pub sport: String,
    pub college: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_id: Option<String>,
    pub stat_name: String,
    pub stat_value: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStatRequest {
    #[serde(rename = "type")]
    pub kind: StatKind,
    pub sport: String,
    pub college: String,
    #[serde(default)]
    pub player_id: Option<String>,
    pub stat_name: String,
    pub stat_value: String,
}

/// Patch for an existing stat; absent fields keep their prior value.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatRequest {
    #[serde(rename = "type", default)]
    pub kind: Option<StatKind>,
    #[serde(default)]
    pub sport: Option<String>,
    #[serde(default)]
    pub college: Option<String>,
    #[serde(default)]
    pub player_id: Option<String>,
    #[serde(default)]
    pub stat_name: Option<String>,
    #[serde(default)]
    pub stat_value: Option<String>,
}

/// Optional query filters for the stat list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatFilter {
    /// Case-insensitive substring over stat name and college.
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub college: Option<String>,
    #[serde(default)]
    pub sport: Option<String>,
}
