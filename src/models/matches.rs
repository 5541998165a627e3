//! Scheduled matches and their derived phase.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A scheduled match between two teams.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: String,
    pub sport: String,
    pub team_a: String,
    pub team_b: String,
    /// Scheduled date, `YYYY-MM-DD`.
    pub date: String,
    /// Scheduled start time, `HH:MM` (24-hour).
    pub time: String,
    pub venue: String,
    /// Advisory stored status. Clients should rely on the derived
    /// [`MatchPhase`] instead; nothing server-side trusts this value.
    pub status: String,
    pub created_at: String,
}

/// Request body for scheduling a new match.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMatchRequest {
    pub sport: String,
    pub team_a: String,
    pub team_b: String,
    pub date: String,
    pub time: String,
    pub venue: String,
}

/// Where a match stands relative to the wall clock and recorded results.
///
/// Computed at query time, never stored: a match is `Finished` once any
/// result references it, `Live` while the clock is inside the configured
/// window past its scheduled start, and `Upcoming` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPhase {
    Upcoming,
    Live,
    Finished,
}

impl Match {
    /// Parse the scheduled start from the stored date and time strings.
    pub fn scheduled_start(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(
            &format!("{} {}", self.date, self.time),
            "%Y-%m-%d %H:%M",
        )
        .ok()
    }

    /// Derive the phase at `now`.
    ///
    /// An unparseable schedule yields `Upcoming` rather than an error so a
    /// single malformed row cannot take down list views.
    pub fn phase_at(&self, now: NaiveDateTime, has_result: bool, live_window: Duration) -> MatchPhase {
        if has_result {
            return MatchPhase::Finished;
        }
        match self.scheduled_start() {
            Some(start) => {
                let elapsed = now - start;
                if elapsed > Duration::zero() && elapsed < live_window {
                    MatchPhase::Live
                } else {
                    MatchPhase::Upcoming
                }
            }
            None => MatchPhase::Upcoming,
        }
    }
}

/// A match together with its derived phase, as list views report it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchView {
    #[serde(flatten)]
    pub record: Match,
    pub phase: MatchPhase,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(date: &str, time: &str) -> Match {
        Match {
            id: "m-1".to_string(),
            sport: "Basketball Men".to_string(),
            team_a: "COS Scions".to_string(),
            team_b: "SOM Tycoons".to_string(),
            date: date.to_string(),
            time: time.to_string(),
            venue: "Sports Complex Court 1".to_string(),
            status: "upcoming".to_string(),
            created_at: "2026-02-01T08:00:00Z".to_string(),
        }
    }

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    #[test]
    fn upcoming_before_start() {
        let m = fixture("2026-02-20", "14:00");
        let phase = m.phase_at(at("2026-02-20 13:59"), false, Duration::minutes(120));
        assert_eq!(phase, MatchPhase::Upcoming);
    }

    #[test]
    fn live_inside_window() {
        let m = fixture("2026-02-20", "14:00");
        let phase = m.phase_at(at("2026-02-20 15:30"), false, Duration::minutes(120));
        assert_eq!(phase, MatchPhase::Live);
    }

    #[test]
    fn upcoming_again_past_window_without_result() {
        // The source has no terminal state for an unresulted match past its
        // window; it falls back to upcoming, and so do we.
        let m = fixture("2026-02-20", "14:00");
        let phase = m.phase_at(at("2026-02-20 16:01"), false, Duration::minutes(120));
        assert_eq!(phase, MatchPhase::Upcoming);
    }

    #[test]
    fn finished_wins_over_clock() {
        let m = fixture("2026-02-20", "14:00");
        let phase = m.phase_at(at("2026-02-20 14:30"), true, Duration::minutes(120));
        assert_eq!(phase, MatchPhase::Finished);
    }

    #[test]
    fn window_is_configurable() {
        let m = fixture("2026-02-20", "14:00");
        let phase = m.phase_at(at("2026-02-20 14:45"), false, Duration::minutes(30));
        assert_eq!(phase, MatchPhase::Upcoming);
    }

    #[test]
    fn malformed_schedule_is_upcoming() {
        let m = fixture("soon", "later");
        let phase = m.phase_at(at("2026-02-20 14:00"), false, Duration::minutes(120));
        assert_eq!(phase, MatchPhase::Upcoming);
    }
}
