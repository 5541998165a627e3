//! Administrator accounts for the console's credential registry.

use serde::{Deserialize, Serialize};

/// An administrator account. The password hash is never serialized; it
/// lives only in [`AdminCredentials`] for verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub id: String,
    pub username: String,
    pub full_name: String,
    pub created_at: String,
}

/// Internal pairing of an account with its stored password hash.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub admin: Admin,
    pub password_hash: String,
}

/// Request body for creating a new administrator account.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub username: String,
    pub password: String,
}

/// Request body for a login attempt.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}
