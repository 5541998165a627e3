//! Full-snapshot and revision endpoints.

use axum::extract::State;

use super::{error, success, ApiResult};
use crate::models::{Datastore, RevisionInfo};
use crate::AppState;

/// GET /api/datastore - The complete datastore snapshot.
pub async fn get_datastore(State(state): State<AppState>) -> ApiResult<Datastore> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.datastore().await {
        Ok(snapshot) => success(snapshot, revision_id),
        Err(e) => error(e, revision_id),
    }
}

/// GET /api/datastore/revision - Just the revision counter, for cheap
/// staleness checks.
pub async fn get_revision(State(state): State<AppState>) -> ApiResult<RevisionInfo> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.get_revision_info().await {
        Ok(info) => success(info, revision_id),
        Err(e) => error(e, revision_id),
    }
}
