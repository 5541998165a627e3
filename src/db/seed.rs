//! Startup seeding: the bootstrap admin account and optional demo fixtures.

use tracing::{info, warn};

use crate::auth::hash_password;
use crate::config::Config;
use crate::db::Repository;
use crate::errors::AppError;
use crate::models::{CreateMatchRequest, CreatePlayerRequest, CreateTeamRequest};

/// Ensure at least one admin account exists. On a fresh database this
/// creates `admin` with the configured bootstrap password.
pub async fn seed_admin(repo: &Repository, config: &Config) -> Result<(), AppError> {
    if repo.count_admins().await? > 0 {
        return Ok(());
    }

    let hash = hash_password(&config.bootstrap_password);
    repo.create_admin("Administrator", "admin", &hash).await?;
    warn!("Created bootstrap 'admin' account; change ARENA_BOOTSTRAP_PASSWORD in production");
    Ok(())
}

/// Populate an empty database with the demo schedule and rosters used
/// during development. Skipped when any matches already exist.
pub async fn seed_demo_data(repo: &Repository) -> Result<(), AppError> {
    if !repo.list_matches().await?.is_empty() {
        return Ok(());
    }

    let matches = [
        CreateMatchRequest {
            sport: "Basketball Men".to_string(),
            team_a: "COS Scions".to_string(),
            team_b: "SOM Tycoons".to_string(),
            date: "2026-02-20".to_string(),
            time: "14:00".to_string(),
            venue: "Sports Complex Court 1".to_string(),
        },
        CreateMatchRequest {
            sport: "Volleyball Women".to_string(),
            team_a: "CSS Stallions".to_string(),
            team_b: "CCAD Phoenix".to_string(),
            date: "2026-02-21".to_string(),
            time: "15:30".to_string(),
            venue: "Gymnasium A".to_string(),
        },
    ];
    for m in &matches {
        repo.create_match(m).await?;
    }

    let teams = [
        ("COS Scions", "COS", "Basketball Men"),
        ("SOM Tycoons", "COS", "Basketball Men"),
        ("CSS Stallions", "COS", "Volleyball Women"),
        ("CCAD Phoenix", "COS", "Volleyball Women"),
    ];
    for (name, org, sport) in teams {
        repo.create_team(&CreateTeamRequest {
            name: name.to_string(),
            org: org.to_string(),
            primary_sport: sport.to_string(),
        })
        .await?;
    }

    let players = [
        ("Juan Santos", "COS Scions", "Basketball Men", "Point Guard", 7),
        ("Maria Garcia", "COS Scions", "Basketball Men", "Small Forward", 10),
        ("Carlos Reyes", "SOM Tycoons", "Basketball Men", "Center", 5),
        ("Ana Cruz", "CSS Stallions", "Volleyball Women", "Setter", 3),
    ];
    for (name, college, sport, position, jersey) in players {
        repo.create_player(&CreatePlayerRequest {
            name: name.to_string(),
            college: college.to_string(),
            sport: sport.to_string(),
            position: position.to_string(),
            jersey,
            photo: None,
        })
        .await?;
    }

    info!("Seeded demo matches, teams and players");
    Ok(())
}
