//! Admin authentication middleware
//!
//! The metrics endpoints require HTTP Basic credentials matching the
//! configured admin username and password. Anything else is a 401.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use base64::{engine::general_purpose::STANDARD, Engine};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;

/// Extractor that requires admin access via HTTP Basic auth
#[derive(Debug, Clone)]
pub struct RequireAdmin;

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let (username, password) = extract_basic_credentials(&parts.headers)?;

        if username != state.admin.username || password != state.admin.password {
            return Err(ApiError::unauthorized("Invalid admin credentials"));
        }

        debug!(username = %username, "Admin access granted");
        Ok(RequireAdmin)
    }
}

fn extract_basic_credentials(
    headers: &axum::http::HeaderMap,
) -> Result<(String, String), ApiError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| ApiError::unauthorized("Admin credentials required"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::bad_request("Invalid Authorization header encoding"))?;

    let encoded = auth_str
        .strip_prefix("Basic ")
        .ok_or_else(|| ApiError::unauthorized("Basic authentication required"))?;

    let decoded = STANDARD
        .decode(encoded.trim())
        .map_err(|_| ApiError::bad_request("Invalid base64 in Authorization header"))?;

    let decoded = String::from_utf8(decoded)
        .map_err(|_| ApiError::bad_request("Invalid UTF-8 in Authorization header"))?;

    let (username, password) = decoded
        .split_once(':')
        .ok_or_else(|| ApiError::bad_request("Malformed basic credentials"))?;

    Ok((username.to_string(), password.to_string()))
}
