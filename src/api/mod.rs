//! REST API module.
//!
//! Contains all API routes and handlers following the admin console's
//! contract.

mod archives;
mod auth;
mod dashboard;
mod datastore;
mod matches;
mod media;
mod notifications;
mod players;
mod results;
mod stats;
mod teams;

pub use archives::*;
pub use auth::*;
pub use dashboard::*;
pub use datastore::*;
pub use matches::*;
pub use media::*;
pub use notifications::*;
pub use players::*;
pub use results::*;
pub use stats::*;
pub use teams::*;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Success response envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    pub revision_id: i64,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T, revision_id: i64) -> Self {
        Self {
            success: true,
            data,
            revision_id,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, crate::errors::AppErrorWithRevision>;

/// Create a successful API response.
pub fn success<T: Serialize>(data: T, revision_id: i64) -> ApiResult<T> {
    Ok(ApiResponse::new(data, revision_id))
}

/// Create an error API response.
pub fn error<T: Serialize>(err: crate::errors::AppError, revision_id: i64) -> ApiResult<T> {
    Err(crate::errors::AppErrorWithRevision {
        error: err,
        revision_id,
    })
}

/// A CSV download: `text/csv` body with an attachment filename, mirroring
/// the console's export buttons.
pub struct CsvFile {
    pub file_name: &'static str,
    pub body: String,
}

impl IntoResponse for CsvFile {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", self.file_name),
                ),
            ],
            self.body,
        )
            .into_response()
    }
}

pub type CsvResult = Result<CsvFile, crate::errors::AppErrorWithRevision>;
