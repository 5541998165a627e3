//! Configuration module for the arena backend.
//!
//! All configuration is loaded from environment variables with sensible
//! defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Minutes past its scheduled start during which an unresulted match
    /// counts as live
    pub live_window_minutes: i64,
    /// Insert demo matches/teams/players into an empty database at startup
    pub seed_demo: bool,
    /// Password for the bootstrap `admin` account created on first run
    pub bootstrap_password: String,
    /// Maximum accepted media payload (data URL length in bytes)
    pub max_media_bytes: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let db_path = env::var("ARENA_DB_PATH")
            .unwrap_or_else(|_| "./data/arena.sqlite".to_string())
            .into();

        let bind_addr = env::var("ARENA_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid ARENA_BIND_ADDR format");

        let log_level = env::var("ARENA_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let live_window_minutes = env::var("ARENA_LIVE_WINDOW_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(120);

        let seed_demo = env::var("ARENA_SEED_DEMO")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let bootstrap_password =
            env::var("ARENA_BOOTSTRAP_PASSWORD").unwrap_or_else(|_| "admin123".to_string());

        let max_media_bytes = env::var("ARENA_MAX_MEDIA_BYTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5 * 1024 * 1024);

        Self {
            db_path,
            bind_addr,
            log_level,
            live_window_minutes,
            seed_demo,
            bootstrap_password,
            max_media_bytes,
        }
    }
}
