//! Database repository for CRUD operations.
//!
//! Single point of access to every collection. Each successful mutation
//! bumps the meta revision once, so clients can detect staleness without
//! re-reading the full datastore.

use std::collections::HashSet;

use chrono::Utc;
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{
    Admin, AdminCredentials, CreateMatchRequest, CreatePlayerRequest, CreateStatRequest,
    CreateTeamRequest, Datastore, Match, MatchResult, MediaItem, MediaKind, Notification, Player,
    PlayerFilter, RecordResultRequest, RevisionInfo, SendNotificationRequest, Stat, StatFilter,
    StatKind, Team, UpdateStatRequest, UploadMediaRequest,
};

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get the current revision ID.
    pub async fn get_revision_id(&self) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT revision_id FROM meta WHERE id = 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get("revision_id"))
    }

    /// Get revision info.
    pub async fn get_revision_info(&self) -> Result<RevisionInfo, AppError> {
        let row = sqlx::query("SELECT revision_id, generated_at FROM meta WHERE id = 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(RevisionInfo {
            revision_id: row.get("revision_id"),
            generated_at: row.get("generated_at"),
        })
    }

    /// Increment the revision ID and return the new value.
    pub async fn increment_revision(&self) -> Result<i64, AppError> {
        let now = Utc::now().to_rfc3339();
        sqlx::query("UPDATE meta SET revision_id = revision_id + 1, generated_at = ? WHERE id = 1")
            .bind(&now)
            .execute(&self.pool)
            .await?;
        self.get_revision_id().await
    }

    /// Get a snapshot of every collection, for clients that hydrate in one
    /// request.
    pub async fn datastore(&self) -> Result<Datastore, AppError> {
        let meta =
            sqlx::query("SELECT schema_version, revision_id, generated_at FROM meta WHERE id = 1")
                .fetch_one(&self.pool)
                .await?;

        Ok(Datastore {
            schema_version: meta.get("schema_version"),
            revision_id: meta.get("revision_id"),
            generated_at: meta.get("generated_at"),
            matches: self.list_matches().await?,
            teams: self.list_teams().await?,
            players: self.list_players(&PlayerFilter::default()).await?,
            stats: self.list_stats(&StatFilter::default()).await?,
            results: self.list_results().await?,
            media: self.list_media().await?,
            notifications: self.list_notifications().await?,
        })
    }

    // ==================== ADMIN REGISTRY ====================

    pub async fn count_admins(&self) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM admins")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get("n"))
    }

    pub async fn username_taken(&self, username: &str) -> Result<bool, AppError> {
        let row = sqlx::query("SELECT 1 FROM admins WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    /// Register a new admin. Fails with a duplicate error if the username
    /// is taken, leaving the registry unchanged.
    pub async fn create_admin(
        &self,
        full_name: &str,
        username: &str,
        password_hash: &str,
    ) -> Result<Admin, AppError> {
        if self.username_taken(username).await? {
            return Err(AppError::Duplicate(format!(
                "Username '{}' already exists",
                username
            )));
        }

        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO admins (id, username, password_hash, full_name, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(username)
        .bind(password_hash)
        .bind(full_name)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        self.increment_revision().await?;

        Ok(Admin {
            id,
            username: username.to_string(),
            full_name: full_name.to_string(),
            created_at: now,
        })
    }

    /// Look up an admin and its stored hash for login verification.
    pub async fn find_credentials(
        &self,
        username: &str,
    ) -> Result<Option<AdminCredentials>, AppError> {
        let row = sqlx::query(
            "SELECT id, username, password_hash, full_name, created_at FROM admins WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| AdminCredentials {
            admin: Admin {
                id: row.get("id"),
                username: row.get("username"),
                full_name: row.get("full_name"),
                created_at: row.get("created_at"),
            },
            password_hash: row.get("password_hash"),
        }))
    }

    // ==================== MATCH OPERATIONS ====================

    /// List all matches in schedule order.
    pub async fn list_matches(&self) -> Result<Vec<Match>, AppError> {
        let rows = sqlx::query(
            "SELECT id, sport, team_a, team_b, date, time, venue, status, created_at FROM matches ORDER BY date, time",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(match_from_row).collect())
    }

    /// The most recently created matches, newest first.
    pub async fn recent_matches(&self, limit: i64) -> Result<Vec<Match>, AppError> {
        let rows = sqlx::query(
            "SELECT id, sport, team_a, team_b, date, time, venue, status, created_at FROM matches ORDER BY created_at DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(match_from_row).collect())
    }

    /// Get a match by ID.
    pub async fn get_match(&self, id: &str) -> Result<Option<Match>, AppError> {
        let row = sqlx::query(
            "SELECT id, sport, team_a, team_b, date, time, venue, status, created_at FROM matches WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(match_from_row))
    }

    /// Schedule a new match.
    pub async fn create_match(&self, request: &CreateMatchRequest) -> Result<Match, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO matches (id, sport, team_a, team_b, date, time, venue, status, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, 'upcoming', ?)",
        )
        .bind(&id)
        .bind(&request.sport)
        .bind(&request.team_a)
        .bind(&request.team_b)
        .bind(&request.date)
        .bind(&request.time)
        .bind(&request.venue)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        self.increment_revision().await?;

        Ok(Match {
            id,
            sport: request.sport.clone(),
            team_a: request.team_a.clone(),
            team_b: request.team_b.clone(),
            date: request.date.clone(),
            time: request.time.clone(),
            venue: request.venue.clone(),
            status: "upcoming".to_string(),
            created_at: now,
        })
    }

    /// Delete a match.
    pub async fn delete_match(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM matches WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Match {} not found", id)));
        }

        self.increment_revision().await?;
        Ok(())
    }

    /// Ids of matches that have at least one recorded result.
    pub async fn resulted_match_ids(&self) -> Result<HashSet<String>, AppError> {
        let rows = sqlx::query("SELECT DISTINCT match_id FROM results")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.iter().map(|r| r.get("match_id")).collect())
    }

    // ==================== RESULT OPERATIONS ====================

    /// List all results, newest first.
    pub async fn list_results(&self) -> Result<Vec<MatchResult>, AppError> {
        let rows = sqlx::query(
            "SELECT id, match_id, team_a, team_b, score_a, score_b, winner, sport, created_at FROM results ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(result_from_row).collect())
    }

    /// Record a result for an existing match. Team names and sport are
    /// copied from the match; the winner is derived here, once.
    pub async fn create_result(
        &self,
        request: &RecordResultRequest,
    ) -> Result<MatchResult, AppError> {
        let game = self
            .get_match(&request.match_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Match {} not found", request.match_id)))?;

        let winner = crate::models::derive_winner(
            &game.team_a,
            &game.team_b,
            request.score_a,
            request.score_b,
        );

        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO results (id, match_id, team_a, team_b, score_a, score_b, winner, sport, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&request.match_id)
        .bind(&game.team_a)
        .bind(&game.team_b)
        .bind(request.score_a)
        .bind(request.score_b)
        .bind(&winner)
        .bind(&game.sport)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        self.increment_revision().await?;

        Ok(MatchResult {
            id,
            match_id: request.match_id.clone(),
            team_a: game.team_a,
            team_b: game.team_b,
            score_a: request.score_a,
            score_b: request.score_b,
            winner,
            sport: game.sport,
            created_at: now,
        })
    }

    // ==================== PLAYER OPERATIONS ====================

    /// List players, optionally filtered by name substring, college and
    /// sport, in name order.
    pub async fn list_players(&self, filter: &PlayerFilter) -> Result<Vec<Player>, AppError> {
        let q = filter
            .q
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(|s| format!("%{}%", s.to_lowercase()));

        let rows = sqlx::query(
            r#"SELECT id, name, college, sport, position, jersey, photo, created_at
               FROM players
               WHERE (? IS NULL OR LOWER(name) LIKE ?)
                 AND (? IS NULL OR college = ?)
                 AND (? IS NULL OR sport = ?)
               ORDER BY name"#,
        )
        .bind(&q)
        .bind(&q)
        .bind(&filter.college)
        .bind(&filter.college)
        .bind(&filter.sport)
        .bind(&filter.sport)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(player_from_row).collect())
    }

    /// Find the player occupying a (college, sport, jersey) roster slot.
    pub async fn find_roster_slot(
        &self,
        college: &str,
        sport: &str,
        jersey: i64,
    ) -> Result<Option<Player>, AppError> {
        let row = sqlx::query(
            "SELECT id, name, college, sport, position, jersey, photo, created_at FROM players WHERE college = ? AND sport = ? AND jersey = ?",
        )
        .bind(college)
        .bind(sport)
        .bind(jersey)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(player_from_row))
    }

    /// Add a player. Fails with a duplicate error naming the conflicting
    /// player if the roster slot is taken; the table is not mutated.
    pub async fn create_player(&self, request: &CreatePlayerRequest) -> Result<Player, AppError> {
        if let Some(taken) = self
            .find_roster_slot(&request.college, &request.sport, request.jersey)
            .await?
        {
            return Err(AppError::Duplicate(format!(
                "Jersey {} is already taken by {} ({} - {})",
                request.jersey, taken.name, taken.college, taken.sport
            )));
        }

        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO players (id, name, college, sport, position, jersey, photo, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&request.name)
        .bind(&request.college)
        .bind(&request.sport)
        .bind(&request.position)
        .bind(request.jersey)
        .bind(&request.photo)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        self.increment_revision().await?;

        Ok(Player {
            id,
            name: request.name.clone(),
            college: request.college.clone(),
            sport: request.sport.clone(),
            position: request.position.clone(),
            jersey: request.jersey,
            photo: request.photo.clone(),
            created_at: now,
        })
    }

    /// Delete a player.
    pub async fn delete_player(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM players WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Player {} not found", id)));
        }

        self.increment_revision().await?;
        Ok(())
    }

    /// Remove every player. Returns the number removed; an already-empty
    /// roster is not an error.
    pub async fn delete_all_players(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM players").execute(&self.pool).await?;

        if result.rows_affected() > 0 {
            self.increment_revision().await?;
        }
        Ok(result.rows_affected())
    }

    /// Bulk-insert imported players inside one transaction, skipping rows
    /// whose roster slot is already taken. Bumps the revision once for the
    /// whole batch.
    pub async fn import_players(
        &self,
        rows: &[CreatePlayerRequest],
    ) -> Result<(usize, usize), AppError> {
        let mut imported = 0usize;
        let mut skipped = 0usize;

        let mut tx = self.pool.begin().await?;

        for request in rows {
            let taken = sqlx::query(
                "SELECT 1 FROM players WHERE college = ? AND sport = ? AND jersey = ?",
            )
            .bind(&request.college)
            .bind(&request.sport)
            .bind(request.jersey)
            .fetch_optional(&mut *tx)
            .await?;

            if taken.is_some() {
                skipped += 1;
                continue;
            }

            let id = uuid::Uuid::new_v4().to_string();
            let now = Utc::now().to_rfc3339();

            sqlx::query(
                "INSERT INTO players (id, name, college, sport, position, jersey, photo, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(&id)
            .bind(&request.name)
            .bind(&request.college)
            .bind(&request.sport)
            .bind(&request.position)
            .bind(request.jersey)
            .bind(&request.photo)
            .bind(&now)
            .execute(&mut *tx)
            .await?;

            imported += 1;
        }

        if imported > 0 {
            let now = Utc::now().to_rfc3339();
            sqlx::query(
                "UPDATE meta SET revision_id = revision_id + 1, generated_at = ? WHERE id = 1",
            )
            .bind(&now)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok((imported, skipped))
    }

    // ==================== TEAM OPERATIONS ====================

    /// List all teams in name order.
    pub async fn list_teams(&self) -> Result<Vec<Team>, AppError> {
        let rows = sqlx::query(
            "SELECT id, name, org, primary_sport, created_at FROM teams ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(team_from_row).collect())
    }

    /// Create a new team.
    pub async fn create_team(&self, request: &CreateTeamRequest) -> Result<Team, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO teams (id, name, org, primary_sport, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&request.name)
        .bind(&request.org)
        .bind(&request.primary_sport)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        self.increment_revision().await?;

        Ok(Team {
            id,
            name: request.name.clone(),
            org: request.org.clone(),
            primary_sport: request.primary_sport.clone(),
            created_at: now,
        })
    }

    /// Delete a team.
    pub async fn delete_team(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM teams WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Team {} not found", id)));
        }

        self.increment_revision().await?;
        Ok(())
    }

    // ==================== STAT OPERATIONS ====================

    /// List stats, optionally filtered, newest first.
    pub async fn list_stats(&self, filter: &StatFilter) -> Result<Vec<Stat>, AppError> {
        let q = filter
            .q
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(|s| format!("%{}%", s.to_lowercase()));

        let rows = sqlx::query(
            r#"SELECT id, kind, sport, college, player_id, stat_name, stat_value, created_at
               FROM stats
               WHERE (? IS NULL OR LOWER(stat_name) LIKE ? OR LOWER(college) LIKE ?)
                 AND (? IS NULL OR college = ?)
                 AND (? IS NULL OR sport = ?)
               ORDER BY created_at DESC"#,
        )
        .bind(&q)
        .bind(&q)
        .bind(&q)
        .bind(&filter.college)
        .bind(&filter.college)
        .bind(&filter.sport)
        .bind(&filter.sport)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(stat_from_row).collect())
    }

    /// Get a stat by ID.
    pub async fn get_stat(&self, id: &str) -> Result<Option<Stat>, AppError> {
        let row = sqlx::query(
            "SELECT id, kind, sport, college, player_id, stat_name, stat_value, created_at FROM stats WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(stat_from_row))
    }

    /// Create a new stat.
    pub async fn create_stat(&self, request: &CreateStatRequest) -> Result<Stat, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO stats (id, kind, sport, college, player_id, stat_name, stat_value, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(request.kind.as_str())
        .bind(&request.sport)
        .bind(&request.college)
        .bind(&request.player_id)
        .bind(&request.stat_name)
        .bind(&request.stat_value)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        self.increment_revision().await?;

        Ok(Stat {
            id,
            kind: request.kind,
            sport: request.sport.clone(),
            college: request.college.clone(),
            player_id: request.player_id.clone(),
            stat_name: request.stat_name.clone(),
            stat_value: request.stat_value.clone(),
            created_at: now,
        })
    }

    /// Update a stat: fields present in the patch are overwritten, absent
    /// fields keep their prior value.
    pub async fn update_stat(&self, id: &str, patch: &UpdateStatRequest) -> Result<Stat, AppError> {
        let existing = self
            .get_stat(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Stat {} not found", id)))?;

        let kind = patch.kind.unwrap_or(existing.kind);
        let sport = patch.sport.clone().unwrap_or(existing.sport);
        let college = patch.college.clone().unwrap_or(existing.college);
        // Team stats never carry a player reference, so flipping the kind
        // drops any stale player_id
        let player_id = match kind {
            StatKind::Team => None,
            StatKind::Player => patch.player_id.clone().or(existing.player_id),
        };
        let stat_name = patch.stat_name.clone().unwrap_or(existing.stat_name);
        let stat_value = patch.stat_value.clone().unwrap_or(existing.stat_value);

        sqlx::query(
            "UPDATE stats SET kind = ?, sport = ?, college = ?, player_id = ?, stat_name = ?, stat_value = ? WHERE id = ?",
        )
        .bind(kind.as_str())
        .bind(&sport)
        .bind(&college)
        .bind(&player_id)
        .bind(&stat_name)
        .bind(&stat_value)
        .bind(id)
        .execute(&self.pool)
        .await?;

        self.increment_revision().await?;

        Ok(Stat {
            id: id.to_string(),
            kind,
            sport,
            college,
            player_id,
            stat_name,
            stat_value,
            created_at: existing.created_at,
        })
    }

    /// Delete a stat.
    pub async fn delete_stat(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM stats WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Stat {} not found", id)));
        }

        self.increment_revision().await?;
        Ok(())
    }

    // ==================== MEDIA OPERATIONS ====================

    /// List media items, newest first.
    pub async fn list_media(&self) -> Result<Vec<MediaItem>, AppError> {
        let rows = sqlx::query(
            "SELECT id, title, kind, data, file_name, match_id, sport, size, created_at FROM media ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(media_from_row).collect())
    }

    /// Store an uploaded media item. `size` is the human-readable payload
    /// size computed by the handler.
    pub async fn create_media(
        &self,
        request: &UploadMediaRequest,
        size: &str,
    ) -> Result<MediaItem, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO media (id, title, kind, data, file_name, match_id, sport, size, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&request.title)
        .bind(request.kind.as_str())
        .bind(&request.data)
        .bind(&request.file_name)
        .bind(&request.match_id)
        .bind(&request.sport)
        .bind(size)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        self.increment_revision().await?;

        Ok(MediaItem {
            id,
            title: request.title.clone(),
            kind: request.kind,
            data: request.data.clone(),
            file_name: request.file_name.clone(),
            match_id: request.match_id.clone(),
            sport: request.sport.clone(),
            size: size.to_string(),
            created_at: now,
        })
    }

    // ==================== NOTIFICATION OPERATIONS ====================

    /// List notifications, newest first.
    pub async fn list_notifications(&self) -> Result<Vec<Notification>, AppError> {
        let rows = sqlx::query(
            "SELECT id, message, kind, sport, timestamp, created_at FROM notifications ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(notification_from_row).collect())
    }

    /// Store a notification. A missing sport scope means "All Sports".
    pub async fn create_notification(
        &self,
        request: &SendNotificationRequest,
    ) -> Result<Notification, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();
        let sport = request
            .sport
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "All Sports".to_string());

        sqlx::query(
            "INSERT INTO notifications (id, message, kind, sport, timestamp, created_at) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&request.message)
        .bind(&request.kind)
        .bind(&sport)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        self.increment_revision().await?;

        Ok(Notification {
            id,
            message: request.message.clone(),
            kind: request.kind.clone(),
            sport,
            timestamp: now.clone(),
            created_at: now,
        })
    }
}

// Helper functions for row conversion

fn match_from_row(row: &sqlx::sqlite::SqliteRow) -> Match {
    Match {
        id: row.get("id"),
        sport: row.get("sport"),
        team_a: row.get("team_a"),
        team_b: row.get("team_b"),
        date: row.get("date"),
        time: row.get("time"),
        venue: row.get("venue"),
        status: row.get("status"),
        created_at: row.get("created_at"),
    }
}

fn result_from_row(row: &sqlx::sqlite::SqliteRow) -> MatchResult {
    MatchResult {
        id: row.get("id"),
        match_id: row.get("match_id"),
        team_a: row.get("team_a"),
        team_b: row.get("team_b"),
        score_a: row.get("score_a"),
        score_b: row.get("score_b"),
        winner: row.get("winner"),
        sport: row.get("sport"),
        created_at: row.get("created_at"),
    }
}

fn player_from_row(row: &sqlx::sqlite::SqliteRow) -> Player {
    Player {
        id: row.get("id"),
        name: row.get("name"),
        college: row.get("college"),
        sport: row.get("sport"),
        position: row.get("position"),
        jersey: row.get("jersey"),
        photo: row.get("photo"),
        created_at: row.get("created_at"),
    }
}

fn team_from_row(row: &sqlx::sqlite::SqliteRow) -> Team {
    Team {
        id: row.get("id"),
        name: row.get("name"),
        org: row.get("org"),
        primary_sport: row.get("primary_sport"),
        created_at: row.get("created_at"),
    }
}

fn stat_from_row(row: &sqlx::sqlite::SqliteRow) -> Stat {
    let kind: String = row.get("kind");
    Stat {
        id: row.get("id"),
        kind: StatKind::from_str(&kind).unwrap_or(StatKind::Team),
        sport: row.get("sport"),
        college: row.get("college"),
        player_id: row.get("player_id"),
        stat_name: row.get("stat_name"),
        stat_value: row.get("stat_value"),
        created_at: row.get("created_at"),
    }
}

fn media_from_row(row: &sqlx::sqlite::SqliteRow) -> MediaItem {
    let kind: String = row.get("kind");
    MediaItem {
        id: row.get("id"),
        title: row.get("title"),
        kind: MediaKind::from_str(&kind).unwrap_or(MediaKind::Image),
        data: row.get("data"),
        file_name: row.get("file_name"),
        match_id: row.get("match_id"),
        sport: row.get("sport"),
        size: row.get("size"),
        created_at: row.get("created_at"),
    }
}

fn notification_from_row(row: &sqlx::sqlite::SqliteRow) -> Notification {
    Notification {
        id: row.get("id"),
        message: row.get("message"),
        kind: row.get("kind"),
        sport: row.get("sport"),
        timestamp: row.get("timestamp"),
        created_at: row.get("created_at"),
    }
}
