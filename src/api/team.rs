//! Team endpoints: registration, login, lookup, CSV export

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::team::Team;
use crate::infrastructure::team::{CreateTeamRequest, LoginRequest};

/// Request to register a new team
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeamApiRequest {
    pub name: String,
    pub password: String,
}

/// Request to log a team in. The password is optional on the wire; a
/// missing one fails authentication like a wrong one.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginApiRequest {
    pub name: String,
    #[serde(default)]
    pub password: Option<String>,
}

/// Team response (never includes the password hash)
#[derive(Debug, Clone, Serialize)]
pub struct TeamResponse {
    pub uri: String,
    pub name: String,
    pub date_created: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_date: Option<String>,
    pub failed_attempts: u32,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            uri: team.uri().as_str().to_string(),
            name: team.name().to_string(),
            date_created: team.date_created().to_string(),
            last_login_date: team.last_login_date().map(|d| d.to_string()),
            failed_attempts: team.failed_attempts().unwrap_or(0),
        }
    }
}

/// POST /api/team
pub async fn create_team(
    State(state): State<AppState>,
    Json(request): Json<CreateTeamApiRequest>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    debug!(name = %request.name, "Creating team");

    let team = state
        .team_service
        .create_team(CreateTeamRequest {
            name: request.name,
            password: request.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok((StatusCode::CREATED, Json(TeamResponse::from(&team))))
}

/// POST /api/team/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginApiRequest>,
) -> Result<Json<TeamResponse>, ApiError> {
    debug!(name = %request.name, "Team login attempt");

    let team = state
        .team_service
        .login(LoginRequest {
            name: request.name,
            password: request.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Json(TeamResponse::from(&team)))
}

/// GET /api/team/{team_uri}
pub async fn get_team(
    State(state): State<AppState>,
    Path(team_uri): Path<String>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = state
        .team_service
        .get_team_by_uri(&team_uri)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(TeamResponse::from(&team)))
}

/// GET /api/team/{team_uri}/csv
pub async fn download_csv(
    State(state): State<AppState>,
    Path(team_uri): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    debug!(team_uri = %team_uri, "Building CSV export");

    let file = state
        .team_service
        .build_csv_file_from_team(&team_uri)
        .await
        .map_err(ApiError::from)?;

    let body = file.to_csv().map_err(ApiError::from)?;
    let disposition = format!("attachment; filename=\"{}\"", file.file_name());

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}
