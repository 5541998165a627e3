//! Integration tests for the arena backend.

use std::sync::Arc;

use reqwest::Client;
use serde_json::{json, Value};
use tempfile::TempDir;

use crate::config::Config;
use crate::db::{init_database, seed_admin, seed_demo_data, Repository};
use crate::{create_router, AppState};

/// Test fixture for integration tests.
struct TestFixture {
    client: Client,
    base_url: String,
    repo: Arc<Repository>,
    config: Arc<Config>,
    _temp_dir: TempDir,
}

impl TestFixture {
    async fn new() -> Self {
        Self::with_seed(false).await
    }

    /// A fixture whose database went through the startup seeding path.
    async fn seeded() -> Self {
        Self::with_seed(true).await
    }

    async fn with_seed(seed: bool) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.sqlite");

        let pool = init_database(&db_path).await.expect("Failed to init DB");
        let repo = Arc::new(Repository::new(pool));

        let config = Config {
            db_path,
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            log_level: "warn".to_string(),
            live_window_minutes: 120,
            seed_demo: false,
            bootstrap_password: "admin123".to_string(),
            // Small cap so the over-limit test does not need a huge body
            max_media_bytes: 4096,
        };

        let config = Arc::new(config);

        if seed {
            seed_admin(&repo, &config).await.expect("Failed to seed admin");
            seed_demo_data(&repo).await.expect("Failed to seed demo data");
        }

        let state = AppState {
            repo: repo.clone(),
            config: config.clone(),
        };

        let app = create_router(state);

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get addr");
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to start
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        TestFixture {
            client: Client::new(),
            base_url,
            repo,
            config,
            _temp_dir: temp_dir,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Schedule a match far in the future and return its id.
    async fn create_match(&self, sport: &str, team_a: &str, team_b: &str) -> String {
        let resp = self
            .client
            .post(self.url("/api/matches"))
            .json(&json!({
                "sport": sport,
                "teamA": team_a,
                "teamB": team_b,
                "date": "2030-01-15",
                "time": "14:00",
                "venue": "Sports Complex Court 1"
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        let body: Value = resp.json().await.unwrap();
        body["data"]["id"].as_str().unwrap().to_string()
    }

    async fn create_player(&self, name: &str, college: &str, sport: &str, jersey: i64) -> Value {
        let resp = self
            .client
            .post(self.url("/api/players"))
            .json(&json!({
                "name": name,
                "college": college,
                "sport": sport,
                "position": "Guard",
                "jersey": jersey
            }))
            .send()
            .await
            .unwrap();
        resp.json().await.unwrap()
    }
}

#[tokio::test]
async fn test_health_check() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_datastore_snapshot() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/api/datastore"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert!(body["data"]["schemaVersion"].is_number());
    assert!(body["data"]["revisionId"].is_number());
    assert!(body["data"]["matches"].is_array());
    assert!(body["data"]["players"].is_array());
    assert!(body["revisionId"].is_number());
}

#[tokio::test]
async fn test_register_and_login() {
    let fixture = TestFixture::new().await;

    // Register
    let register_resp = fixture
        .client
        .post(fixture.url("/api/auth/register"))
        .json(&json!({
            "fullName": "Dana Admin",
            "username": "dana",
            "password": "sekrit1"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(register_resp.status(), 200);
    let register_body: Value = register_resp.json().await.unwrap();
    assert_eq!(register_body["data"]["username"], "dana");
    // The hash must never appear on the wire
    assert!(register_body["data"]["passwordHash"].is_null());

    // Login with the right password
    let login_resp = fixture
        .client
        .post(fixture.url("/api/auth/login"))
        .json(&json!({ "username": "dana", "password": "sekrit1" }))
        .send()
        .await
        .unwrap();
    assert_eq!(login_resp.status(), 200);
    let login_body: Value = login_resp.json().await.unwrap();
    assert_eq!(login_body["data"]["fullName"], "Dana Admin");

    // Wrong password
    let bad_resp = fixture
        .client
        .post(fixture.url("/api/auth/login"))
        .json(&json!({ "username": "dana", "password": "wrong" }))
        .send()
        .await
        .unwrap();
    assert_eq!(bad_resp.status(), 401);
    let bad_body: Value = bad_resp.json().await.unwrap();
    assert_eq!(bad_body["error"]["code"], "INVALID_CREDENTIALS");

    // Unknown username gets the same error
    let unknown_resp = fixture
        .client
        .post(fixture.url("/api/auth/login"))
        .json(&json!({ "username": "nobody", "password": "sekrit1" }))
        .send()
        .await
        .unwrap();
    assert_eq!(unknown_resp.status(), 401);
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let fixture = TestFixture::new().await;

    for _ in 0..2 {
        let resp = fixture
            .client
            .post(fixture.url("/api/auth/register"))
            .json(&json!({
                "fullName": "First In",
                "username": "taken",
                "password": "sekrit1"
            }))
            .send()
            .await
            .unwrap();
        if resp.status() == 200 {
            continue;
        }
        assert_eq!(resp.status(), 409);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["error"]["code"], "DUPLICATE");
        return;
    }
    panic!("second registration should have conflicted");
}

#[tokio::test]
async fn test_register_validation() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/auth/register"))
        .json(&json!({
            "fullName": "Short Pass",
            "username": "shorty",
            "password": "12345"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_match_create_list_delete() {
    let fixture = TestFixture::new().await;

    let id = fixture
        .create_match("Basketball Men", "COS Scions", "SOM Tycoons")
        .await;

    // A far-future match lists as upcoming
    let list_resp = fixture
        .client
        .get(fixture.url("/api/matches"))
        .send()
        .await
        .unwrap();
    assert_eq!(list_resp.status(), 200);
    let list_body: Value = list_resp.json().await.unwrap();
    let matches = list_body["data"].as_array().unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["id"], id.as_str());
    assert_eq!(matches[0]["phase"], "upcoming");

    // Delete it
    let delete_resp = fixture
        .client
        .delete(fixture.url(&format!("/api/matches/{}", id)))
        .send()
        .await
        .unwrap();
    assert_eq!(delete_resp.status(), 200);

    // Deleting again reports the miss instead of silently succeeding
    let missing_resp = fixture
        .client
        .delete(fixture.url(&format!("/api/matches/{}", id)))
        .send()
        .await
        .unwrap();
    assert_eq!(missing_resp.status(), 404);
    let missing_body: Value = missing_resp.json().await.unwrap();
    assert_eq!(missing_body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_match_cannot_play_itself() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/matches"))
        .json(&json!({
            "sport": "Basketball Men",
            "teamA": "COS Scions",
            "teamB": "COS Scions",
            "date": "2030-01-15",
            "time": "14:00",
            "venue": "Court 1"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn test_record_result_derives_winner_and_finishes_match() {
    let fixture = TestFixture::new().await;

    let match_id = fixture
        .create_match("Basketball Men", "COS Scions", "SOM Tycoons")
        .await;

    let resp = fixture
        .client
        .post(fixture.url("/api/results"))
        .json(&json!({ "matchId": match_id, "scoreA": 78, "scoreB": 74 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["winner"], "COS Scions");
    assert_eq!(body["data"]["teamA"], "COS Scions");
    assert_eq!(body["data"]["sport"], "Basketball Men");

    // The match now lists as finished regardless of the clock
    let list_body: Value = fixture
        .client
        .get(fixture.url("/api/matches"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list_body["data"][0]["phase"], "finished");
}

#[tokio::test]
async fn test_record_result_draw() {
    let fixture = TestFixture::new().await;

    let match_id = fixture
        .create_match("Volleyball Women", "CSS Stallions", "CCAD Phoenix")
        .await;

    let body: Value = fixture
        .client
        .post(fixture.url("/api/results"))
        .json(&json!({ "matchId": match_id, "scoreA": 70, "scoreB": 70 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"]["winner"], "Draw");
}

#[tokio::test]
async fn test_record_result_for_missing_match() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/results"))
        .json(&json!({ "matchId": "no-such-match", "scoreA": 1, "scoreB": 0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_duplicate_jersey_names_holder_and_leaves_roster_alone() {
    let fixture = TestFixture::new().await;

    let first = fixture
        .create_player("Juan Santos", "COS Scions", "Basketball Men", 7)
        .await;
    assert_eq!(first["success"], true);

    // Same slot, different player
    let resp = fixture
        .client
        .post(fixture.url("/api/players"))
        .json(&json!({
            "name": "Pedro Cruz",
            "college": "COS Scions",
            "sport": "Basketball Men",
            "position": "Forward",
            "jersey": 7
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 409);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "DUPLICATE");
    assert_eq!(
        body["error"]["message"],
        "Jersey 7 is already taken by Juan Santos (COS Scions - Basketball Men)"
    );

    // Roster unchanged
    let list_body: Value = fixture
        .client
        .get(fixture.url("/api/players"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list_body["data"].as_array().unwrap().len(), 1);

    // Same jersey on a different college is fine
    let other = fixture
        .create_player("Pedro Cruz", "SOM Tycoons", "Basketball Men", 7)
        .await;
    assert_eq!(other["success"], true);
}

#[tokio::test]
async fn test_player_filters() {
    let fixture = TestFixture::new().await;

    fixture
        .create_player("Juan Santos", "COS Scions", "Basketball Men", 7)
        .await;
    fixture
        .create_player("Ana Cruz", "CSS Stallions", "Volleyball Women", 3)
        .await;

    let by_name: Value = fixture
        .client
        .get(fixture.url("/api/players?q=santos"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(by_name["data"].as_array().unwrap().len(), 1);
    assert_eq!(by_name["data"][0]["name"], "Juan Santos");

    let by_college: Value = fixture
        .client
        .get(fixture.url("/api/players?college=CSS%20Stallions"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(by_college["data"].as_array().unwrap().len(), 1);
    assert_eq!(by_college["data"][0]["name"], "Ana Cruz");

    let by_sport: Value = fixture
        .client
        .get(fixture.url("/api/players?sport=Basketball%20Men"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(by_sport["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_all_players() {
    let fixture = TestFixture::new().await;

    fixture
        .create_player("Juan Santos", "COS Scions", "Basketball Men", 7)
        .await;
    fixture
        .create_player("Ana Cruz", "CSS Stallions", "Volleyball Women", 3)
        .await;

    let resp = fixture
        .client
        .delete(fixture.url("/api/players"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"], 2);

    let list_body: Value = fixture
        .client
        .get(fixture.url("/api/players"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(list_body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_player_csv_export_and_import() {
    let fixture = TestFixture::new().await;

    fixture
        .create_player("Juan Santos", "COS Scions", "Basketball Men", 7)
        .await;

    let export_resp = fixture
        .client
        .get(fixture.url("/api/players/export"))
        .send()
        .await
        .unwrap();
    assert_eq!(export_resp.status(), 200);
    assert!(export_resp
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/csv"));
    let csv_text = export_resp.text().await.unwrap();
    assert!(csv_text.starts_with("id,name,college,sport,position,jersey,createdAt"));
    assert!(csv_text.contains("Juan Santos"));

    // Import two rows: one new, one hitting the existing jersey slot, and
    // one nameless row that gets discarded.
    let import_csv = "name,college,sport,position,jersey\n\
                      Ana Cruz,CSS Stallions,Volleyball Women,Setter,3\n\
                      Pedro Cruz,COS Scions,Basketball Men,Forward,7\n\
                      ,COS Scions,Basketball Men,Guard,9\n";
    let import_resp = fixture
        .client
        .post(fixture.url("/api/players/import"))
        .body(import_csv.to_string())
        .send()
        .await
        .unwrap();
    assert_eq!(import_resp.status(), 200);
    let import_body: Value = import_resp.json().await.unwrap();
    assert_eq!(import_body["data"]["imported"], 1);
    assert_eq!(import_body["data"]["skippedDuplicates"], 1);
    assert_eq!(import_body["data"]["discarded"], 1);

    let list_body: Value = fixture
        .client
        .get(fixture.url("/api/players"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list_body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_player_export_import_round_trip() {
    let fixture = TestFixture::new().await;

    fixture
        .create_player("Juan Santos", "COS Scions", "Basketball Men", 7)
        .await;
    fixture
        .create_player("Ana Cruz", "CSS Stallions", "Volleyball Women", 3)
        .await;

    let exported = fixture
        .client
        .get(fixture.url("/api/players/export"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    // Wipe the roster, then feed the exported CSV straight back in
    fixture
        .client
        .delete(fixture.url("/api/players"))
        .send()
        .await
        .unwrap();
    let import_body: Value = fixture
        .client
        .post(fixture.url("/api/players/import"))
        .body(exported)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(import_body["data"]["imported"], 2);
    assert_eq!(import_body["data"]["skippedDuplicates"], 0);
    assert_eq!(import_body["data"]["discarded"], 0);

    // Non-derived fields survive the round trip
    let list_body: Value = fixture
        .client
        .get(fixture.url("/api/players"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let players = list_body["data"].as_array().unwrap();
    assert_eq!(players.len(), 2);
    let rows: Vec<(String, String, String, String, i64)> = players
        .iter()
        .map(|p| {
            (
                p["name"].as_str().unwrap().to_string(),
                p["college"].as_str().unwrap().to_string(),
                p["sport"].as_str().unwrap().to_string(),
                p["position"].as_str().unwrap().to_string(),
                p["jersey"].as_i64().unwrap(),
            )
        })
        .collect();
    assert!(rows.contains(&(
        "Juan Santos".to_string(),
        "COS Scions".to_string(),
        "Basketball Men".to_string(),
        "Guard".to_string(),
        7
    )));
    assert!(rows.contains(&(
        "Ana Cruz".to_string(),
        "CSS Stallions".to_string(),
        "Volleyball Women".to_string(),
        "Guard".to_string(),
        3
    )));
}

#[tokio::test]
async fn test_bootstrap_admin_can_log_in() {
    let fixture = TestFixture::seeded().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/auth/login"))
        .json(&json!({ "username": "admin", "password": "admin123" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["username"], "admin");
    assert_eq!(body["data"]["fullName"], "Administrator");
}

#[tokio::test]
async fn test_demo_seeding_inserts_fixtures_once() {
    let fixture = TestFixture::seeded().await;

    let snapshot: Value = fixture
        .client
        .get(fixture.url("/api/datastore"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(snapshot["data"]["matches"].as_array().unwrap().len(), 2);
    assert_eq!(snapshot["data"]["teams"].as_array().unwrap().len(), 4);
    assert_eq!(snapshot["data"]["players"].as_array().unwrap().len(), 4);

    // Rows match the demo fixtures
    let teams = snapshot["data"]["teams"].as_array().unwrap();
    assert!(teams.iter().all(|t| t["org"] == "COS"));
    let players = snapshot["data"]["players"].as_array().unwrap();
    let maria = players
        .iter()
        .find(|p| p["name"] == "Maria Garcia")
        .unwrap();
    assert_eq!(maria["position"], "Small Forward");

    // Running the seeders again changes nothing
    seed_admin(&fixture.repo, &fixture.config).await.unwrap();
    seed_demo_data(&fixture.repo).await.unwrap();

    assert_eq!(fixture.repo.count_admins().await.unwrap(), 1);
    let again: Value = fixture
        .client
        .get(fixture.url("/api/datastore"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(again["data"]["matches"].as_array().unwrap().len(), 2);
    assert_eq!(again["data"]["teams"].as_array().unwrap().len(), 4);
    assert_eq!(again["data"]["players"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_team_crud() {
    let fixture = TestFixture::new().await;

    let create_body: Value = fixture
        .client
        .post(fixture.url("/api/teams"))
        .json(&json!({
            "name": "COS Scions",
            "org": "College of Science",
            "primarySport": "Basketball Men"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(create_body["success"], true);
    let team_id = create_body["data"]["id"].as_str().unwrap().to_string();

    let list_body: Value = fixture
        .client
        .get(fixture.url("/api/teams"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list_body["data"].as_array().unwrap().len(), 1);

    let delete_resp = fixture
        .client
        .delete(fixture.url(&format!("/api/teams/{}", team_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(delete_resp.status(), 200);
}

#[tokio::test]
async fn test_stat_update_patches_only_sent_fields() {
    let fixture = TestFixture::new().await;

    let create_body: Value = fixture
        .client
        .post(fixture.url("/api/stats"))
        .json(&json!({
            "type": "Team",
            "sport": "Basketball Men",
            "college": "COS Scions",
            "statName": "Wins",
            "statValue": "3"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(create_body["success"], true);
    let stat_id = create_body["data"]["id"].as_str().unwrap().to_string();

    let update_body: Value = fixture
        .client
        .put(fixture.url(&format!("/api/stats/{}", stat_id)))
        .json(&json!({ "statValue": "4" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(update_body["data"]["statValue"], "4");
    // Untouched fields keep their prior values
    assert_eq!(update_body["data"]["statName"], "Wins");
    assert_eq!(update_body["data"]["college"], "COS Scions");

    // Patching a missing stat reports the miss
    let missing_resp = fixture
        .client
        .put(fixture.url("/api/stats/no-such-stat"))
        .json(&json!({ "statValue": "9" }))
        .send()
        .await
        .unwrap();
    assert_eq!(missing_resp.status(), 404);
}

#[tokio::test]
async fn test_stat_flipped_to_team_drops_player_id() {
    let fixture = TestFixture::new().await;

    let player = fixture
        .create_player("Juan Santos", "COS Scions", "Basketball Men", 7)
        .await;
    let player_id = player["data"]["id"].as_str().unwrap().to_string();

    let create_body: Value = fixture
        .client
        .post(fixture.url("/api/stats"))
        .json(&json!({
            "type": "Player",
            "sport": "Basketball Men",
            "college": "COS Scions",
            "playerId": player_id,
            "statName": "Points",
            "statValue": "21"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(create_body["data"]["playerId"].as_str().unwrap(), player_id);
    let stat_id = create_body["data"]["id"].as_str().unwrap().to_string();

    // Reclassifying as a team stat drops the player reference
    let update_body: Value = fixture
        .client
        .put(fixture.url(&format!("/api/stats/{}", stat_id)))
        .json(&json!({ "type": "Team", "statName": "Team Points" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(update_body["data"]["type"], "Team");
    assert!(update_body["data"]["playerId"].is_null());

    // And it stays dropped on a fresh read
    let list_body: Value = fixture
        .client
        .get(fixture.url("/api/stats"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(list_body["data"][0]["playerId"].is_null());
}

#[tokio::test]
async fn test_player_stat_requires_player_id() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/stats"))
        .json(&json!({
            "type": "Player",
            "sport": "Basketball Men",
            "college": "COS Scions",
            "statName": "Points",
            "statValue": "21"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn test_media_upload_and_limits() {
    let fixture = TestFixture::new().await;

    // A small valid image upload
    let upload_body: Value = fixture
        .client
        .post(fixture.url("/api/media"))
        .json(&json!({
            "title": "Winning shot",
            "type": "image",
            "data": "data:image/png;base64,iVBORw0KGgo=",
            "fileName": "shot.png",
            "sport": "Basketball Men"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(upload_body["success"], true);
    assert_eq!(upload_body["data"]["size"], "34 B");

    // Wrong prefix for the declared type
    let wrong_prefix_resp = fixture
        .client
        .post(fixture.url("/api/media"))
        .json(&json!({
            "title": "Not a video",
            "type": "video",
            "data": "data:image/png;base64,iVBORw0KGgo=",
            "fileName": "shot.png",
            "sport": "Basketball Men"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(wrong_prefix_resp.status(), 400);

    // Over the configured cap (4096 bytes in the fixture)
    let big = format!("data:image/png;base64,{}", "A".repeat(5000));
    let too_big_resp = fixture
        .client
        .post(fixture.url("/api/media"))
        .json(&json!({
            "title": "Too big",
            "type": "image",
            "data": big,
            "fileName": "big.png",
            "sport": "Basketball Men"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(too_big_resp.status(), 413);
    let too_big_body: Value = too_big_resp.json().await.unwrap();
    assert_eq!(too_big_body["error"]["code"], "PAYLOAD_TOO_LARGE");
}

#[tokio::test]
async fn test_notification_defaults_to_all_sports() {
    let fixture = TestFixture::new().await;

    let body: Value = fixture
        .client
        .post(fixture.url("/api/notifications"))
        .json(&json!({ "message": "Games resume at 2pm", "type": "info" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["sport"], "All Sports");
    assert!(body["data"]["timestamp"].is_string());

    let scoped: Value = fixture
        .client
        .post(fixture.url("/api/notifications"))
        .json(&json!({
            "message": "Court change",
            "type": "warning",
            "sport": "Basketball Men"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(scoped["data"]["sport"], "Basketball Men");
}

#[tokio::test]
async fn test_dashboard_summary() {
    let fixture = TestFixture::new().await;

    let match_id = fixture
        .create_match("Basketball Men", "COS Scions", "SOM Tycoons")
        .await;
    fixture
        .create_match("Volleyball Women", "CSS Stallions", "CCAD Phoenix")
        .await;
    fixture
        .create_player("Juan Santos", "COS Scions", "Basketball Men", 7)
        .await;
    fixture
        .client
        .post(fixture.url("/api/teams"))
        .json(&json!({
            "name": "COS Scions",
            "org": "College of Science",
            "primarySport": "Basketball Men"
        }))
        .send()
        .await
        .unwrap();
    fixture
        .client
        .post(fixture.url("/api/results"))
        .json(&json!({ "matchId": match_id, "scoreA": 78, "scoreB": 74 }))
        .send()
        .await
        .unwrap();

    let body: Value = fixture
        .client
        .get(fixture.url("/api/dashboard"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"]["totalMatches"], 2);
    assert_eq!(body["data"]["totalTeams"], 1);
    assert_eq!(body["data"]["totalPlayers"], 1);
    // Both matches are far in the future or finished, so none are live
    assert_eq!(body["data"]["liveMatches"], 0);
    assert_eq!(body["data"]["recentMatches"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_archives_filtering() {
    let fixture = TestFixture::new().await;

    let basketball = fixture
        .create_match("Basketball Men", "COS Scions", "SOM Tycoons")
        .await;
    let volleyball = fixture
        .create_match("Volleyball Women", "CSS Stallions", "CCAD Phoenix")
        .await;
    for (id, a, b) in [(basketball, 78, 74), (volleyball, 21, 25)] {
        fixture
            .client
            .post(fixture.url("/api/results"))
            .json(&json!({ "matchId": id, "scoreA": a, "scoreB": b }))
            .send()
            .await
            .unwrap();
    }

    // Sport substring filter is case-insensitive
    let body: Value = fixture
        .client
        .get(fixture.url("/api/archives?sport=basket"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let results = body["data"]["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["sport"], "Basketball Men");

    // A year with no records filters everything out
    let empty: Value = fixture
        .client
        .get(fixture.url("/api/archives?year=1999"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(empty["data"]["results"].as_array().unwrap().is_empty());
    assert!(empty["data"]["media"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_snapshot_reads_are_stable() {
    let fixture = TestFixture::new().await;

    fixture
        .create_player("Juan Santos", "COS Scions", "Basketball Men", 7)
        .await;

    // Two reads with no mutation in between are identical, and reading
    // does not bump the revision
    let first: Value = fixture
        .client
        .get(fixture.url("/api/datastore"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let second: Value = fixture
        .client
        .get(fixture.url("/api/datastore"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(first["data"], second["data"]);
    assert_eq!(first["revisionId"], second["revisionId"]);
}

#[tokio::test]
async fn test_revision_increments_on_writes() {
    let fixture = TestFixture::new().await;

    let initial_body: Value = fixture
        .client
        .get(fixture.url("/api/datastore/revision"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let initial_revision = initial_body["data"]["revisionId"].as_i64().unwrap();

    let create_body = fixture
        .create_player("Juan Santos", "COS Scions", "Basketball Men", 7)
        .await;
    let after_create = create_body["revisionId"].as_i64().unwrap();
    assert_eq!(after_create, initial_revision + 1);

    let player_id = create_body["data"]["id"].as_str().unwrap();
    let delete_body: Value = fixture
        .client
        .delete(fixture.url(&format!("/api/players/{}", player_id)))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let after_delete = delete_body["revisionId"].as_i64().unwrap();
    assert_eq!(after_delete, initial_revision + 2);

    // A batch import bumps the revision once, not per row
    let import_csv = "name,college,sport,position,jersey\n\
                      Ana Cruz,CSS Stallions,Volleyball Women,Setter,3\n\
                      Maria Garcia,COS Scions,Basketball Men,Guard,10\n";
    let import_body: Value = fixture
        .client
        .post(fixture.url("/api/players/import"))
        .body(import_csv.to_string())
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let after_import = import_body["revisionId"].as_i64().unwrap();
    assert_eq!(after_import, after_delete + 1);
}

#[tokio::test]
async fn test_not_found_errors() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .delete(fixture.url("/api/players/non-existent-id"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let resp2 = fixture
        .client
        .delete(fixture.url("/api/teams/non-existent-id"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp2.status(), 404);
}
