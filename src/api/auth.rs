//! Login, logout and session inspection endpoints.

use axum::{
    extract::State,
    http::{header, HeaderMap},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use super::{success, ApiResult};
use crate::auth::verify_password;
use crate::errors::AppError;
use crate::models::PublicUser;
use crate::AppState;

/// Request body for POST /api/auth/login.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response body for a successful login.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user: PublicUser,
}

/// POST /api/auth/login - Verify credentials and open a session.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<LoginResponse> {
    if request.username.trim().is_empty() || request.password.trim().is_empty() {
        return Err(AppError::Validation(
            "Username and password are required".to_string(),
        ));
    }

    let user = state.repo.get_user(&request.username).await?;

    // A single rejection message for unknown users and bad passwords
    let user = user
        .filter(|u| verify_password(&u.password, &request.password))
        .ok_or_else(|| AppError::Unauthorized("Invalid username or password.".to_string()))?;

    let public = PublicUser::from(&user);
    let token = uuid::Uuid::new_v4().to_string();
    state
        .sessions
        .write()
        .await
        .insert(token.clone(), public.clone());

    tracing::info!(username = %public.username, "login");
    success(LoginResponse {
        token,
        user: public,
    })
}

/// POST /api/auth/logout - Close the caller's session.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<()> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "));

    if let Some(token) = token {
        state.sessions.write().await.remove(token);
    }
    success(())
}

/// GET /api/auth/me - The logged-in user behind the session token.
pub async fn me(Extension(user): Extension<PublicUser>) -> ApiResult<PublicUser> {
    success(user)
}
