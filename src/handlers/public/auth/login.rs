// handlers/public/auth/login.rs - POST /api/auth/login handler

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{info, warn};
use validator::Validate;

use crate::api::LoginRequest;
use crate::auth::IssuedToken;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/**
 * POST /api/auth/login - Authenticate and receive a bearer token
 *
 * Input:
 * ```json
 * { "username": "admin", "password": "..." }
 * ```
 *
 * Output:
 * ```json
 * {
 *   "message": "Login successful.",
 *   "data": { "token": "eyJhbGciOiJIUzI1NiI...", "tokenType": "Bearer", "expiresIn": 7200 }
 * }
 * ```
 *
 * 400 when either field is empty, 401 when the pair is not accepted.
 */
pub async fn login_post(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<IssuedToken> {
    let Json(payload) = payload?;
    payload.validate()?;

    if !state.credentials.verify(&payload.username, &payload.password) {
        warn!(username = %payload.username, "Rejected login attempt");
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let issued = state.jwt.issue(&payload.username)?;
    info!(username = %payload.username, "Issued access token");

    Ok(ApiResponse::success("Login successful.", issued))
}
