//! Recorded match results.

use serde::{Deserialize, Serialize};

/// The final score of a match. The winner is derived once when the result
/// is recorded and never recomputed, even if the match record changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub id: String,
    pub match_id: String,
    pub team_a: String,
    pub team_b: String,
    pub score_a: i64,
    pub score_b: i64,
    /// Winning team name, or `"Draw"` on equal scores.
    pub winner: String,
    pub sport: String,
    pub created_at: String,
}

/// Request body for recording a result. Team names and sport are copied
/// from the referenced match, not trusted from the client.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordResultRequest {
    pub match_id: String,
    pub score_a: i64,
    pub score_b: i64,
}

/// Strictly greater score wins; equal scores are a draw.
pub fn derive_winner(team_a: &str, team_b: &str, score_a: i64, score_b: i64) -> String {
    if score_a > score_b {
        team_a.to_string()
    } else if score_b > score_a {
        team_b.to_string()
    } else {
        "Draw".to_string()
    }
}
