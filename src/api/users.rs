//! Login account management endpoints. Admin only.

use axum::{
    extract::{Path, State},
    Extension, Json,
};

use super::{success, ApiResult};
use crate::auth::hash_password;
use crate::errors::AppError;
use crate::models::{CreateUserRequest, PublicUser, UpdateUserRequest, User, UserRole};
use crate::AppState;

fn require_admin(user: &PublicUser) -> Result<(), AppError> {
    if user.role != UserRole::Admin {
        return Err(AppError::Forbidden(
            "Admin access is required".to_string(),
        ));
    }
    Ok(())
}

/// GET /api/users - List all login accounts.
pub async fn list_users(
    State(state): State<AppState>,
    Extension(current): Extension<PublicUser>,
) -> ApiResult<Vec<PublicUser>> {
    require_admin(&current)?;

    let users = state.repo.list_users().await?;
    success(users.iter().map(PublicUser::from).collect())
}

/// POST /api/users - Create a login account.
pub async fn create_user(
    State(state): State<AppState>,
    Extension(current): Extension<PublicUser>,
    Json(request): Json<CreateUserRequest>,
) -> ApiResult<PublicUser> {
    require_admin(&current)?;

    if request.username.trim().is_empty() || request.password.trim().is_empty() {
        return Err(AppError::Validation(
            "Username and password cannot be empty".to_string(),
        ));
    }

    // Uniqueness is case-insensitive: "alice" blocks "Alice"
    if state.repo.get_user_ci(&request.username).await?.is_some() {
        return Err(AppError::Conflict("Username already exists.".to_string()));
    }

    let user = User {
        username: request.username.trim().to_string(),
        password: hash_password(&request.password),
        role: request.role,
    };
    state.repo.create_user(&user).await?;
    success(PublicUser::from(&user))
}

/// PUT /api/users/{username} - Update a login account's password and/or role.
pub async fn update_user(
    State(state): State<AppState>,
    Extension(current): Extension<PublicUser>,
    Path(username): Path<String>,
    Json(request): Json<UpdateUserRequest>,
) -> ApiResult<PublicUser> {
    require_admin(&current)?;

    let existing = state
        .repo
        .get_user(&username)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", username)))?;

    // A blank password keeps the stored credential
    let password = match request.password.as_deref().map(str::trim) {
        Some(p) if !p.is_empty() => hash_password(p),
        _ => existing.password,
    };

    let user = User {
        username: existing.username,
        password,
        role: request.role,
    };
    state.repo.update_user(&user).await?;
    success(PublicUser::from(&user))
}

/// DELETE /api/users/{username} - Delete a login account.
pub async fn delete_user(
    State(state): State<AppState>,
    Extension(current): Extension<PublicUser>,
    Path(username): Path<String>,
) -> ApiResult<()> {
    require_admin(&current)?;

    if username == current.username {
        return Err(AppError::Forbidden(
            "You cannot delete your own account".to_string(),
        ));
    }

    state.repo.delete_user(&username).await?;

    // Drop any live sessions for the deleted account
    state
        .sessions
        .write()
        .await
        .retain(|_, u| u.username != username);

    success(())
}
