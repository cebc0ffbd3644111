//! Admin metrics endpoints
//!
//! Plain integer bodies, guarded by HTTP Basic admin credentials.

use axum::extract::State;
use tracing::debug;

use crate::api::middleware::RequireAdmin;
use crate::api::state::AppState;
use crate::api::types::ApiError;

/// GET /api/metrics/team/count
pub async fn team_count(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> Result<String, ApiError> {
    let count = state
        .team_service
        .count_teams()
        .await
        .map_err(ApiError::from)?;

    debug!(count, "Reporting team count");
    Ok(count.to_string())
}

/// GET /api/metrics/feedback/count
pub async fn feedback_count(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> Result<String, ApiError> {
    let count = state
        .feedback_repository
        .count()
        .await
        .map_err(ApiError::from)?;

    debug!(count, "Reporting feedback count");
    Ok(count.to_string())
}
