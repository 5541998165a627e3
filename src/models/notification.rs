//! Informational notifications. There is no delivery mechanism; clients
//! poll the list.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub sport: String,
    pub timestamp: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendNotificationRequest {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Absent means the notification applies to all sports.
    #[serde(default)]
    pub sport: Option<String>,
}
