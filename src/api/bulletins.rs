//! Bulletin board endpoints built on the visibility core.

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use chrono::Utc;

use super::{success, ApiResult};
use crate::core::bulletin::{self, AUDIENCE_ALL};
use crate::errors::AppError;
use crate::models::{
    BulletinMessage, BulletinReply, BulletinReplyRequest, BulletinRequest, PublicUser, UserRole,
};
use crate::AppState;

/// GET /api/bulletins - Messages visible to the caller, newest first.
pub async fn list_bulletins(
    State(state): State<AppState>,
    Extension(user): Extension<PublicUser>,
) -> ApiResult<Vec<BulletinMessage>> {
    let bulletins = state.repo.list_bulletins().await?;
    success(bulletin::visible(&bulletins, &user.username, user.role))
}

/// GET /api/bulletins/mentions - Visible messages that tag the caller.
pub async fn list_mentions(
    State(state): State<AppState>,
    Extension(user): Extension<PublicUser>,
) -> ApiResult<Vec<BulletinMessage>> {
    let bulletins = state.repo.list_bulletins().await?;
    success(bulletin::mentions(&bulletins, &user.username, user.role))
}

/// POST /api/bulletins - Post a message. An empty audience means everyone.
pub async fn create_bulletin(
    State(state): State<AppState>,
    Extension(user): Extension<PublicUser>,
    Json(request): Json<BulletinRequest>,
) -> ApiResult<BulletinMessage> {
    if request.content.trim().is_empty() {
        return Err(AppError::Validation("Message is required".to_string()));
    }

    let audience = if request.audience.is_empty() {
        vec![AUDIENCE_ALL.to_string()]
    } else {
        request.audience
    };

    let msg = BulletinMessage {
        id: uuid::Uuid::new_v4().to_string(),
        author: user.username,
        content: request.content,
        timestamp: Utc::now().to_rfc3339(),
        audience,
        likes: Vec::new(),
        replies: Vec::new(),
    };
    state.repo.create_bulletin(&msg).await?;
    success(msg)
}

/// DELETE /api/bulletins/{id} - Delete a message. Author or Admin only.
pub async fn delete_bulletin(
    State(state): State<AppState>,
    Extension(user): Extension<PublicUser>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    let msg = state
        .repo
        .get_bulletin(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Bulletin {} not found", id)))?;

    if msg.author != user.username && user.role != UserRole::Admin {
        return Err(AppError::Forbidden(
            "Only the author or an admin can delete a message".to_string(),
        ));
    }

    state.repo.delete_bulletin(&id).await?;
    success(())
}

/// POST /api/bulletins/{id}/like - Toggle the caller's like on a message.
pub async fn like_bulletin(
    State(state): State<AppState>,
    Extension(user): Extension<PublicUser>,
    Path(id): Path<String>,
) -> ApiResult<BulletinMessage> {
    let mut msg = state
        .repo
        .get_bulletin(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Bulletin {} not found", id)))?;

    msg.likes = bulletin::toggle_like(&msg.likes, &user.username);
    state.repo.save_bulletin_likes(&id, &msg.likes).await?;
    success(msg)
}

/// POST /api/bulletins/{id}/replies - Append a reply to a message.
pub async fn reply_to_bulletin(
    State(state): State<AppState>,
    Extension(user): Extension<PublicUser>,
    Path(id): Path<String>,
    Json(request): Json<BulletinReplyRequest>,
) -> ApiResult<BulletinMessage> {
    if request.content.trim().is_empty() {
        return Err(AppError::Validation("Reply is required".to_string()));
    }

    let mut msg = state
        .repo
        .get_bulletin(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Bulletin {} not found", id)))?;

    msg.replies.push(BulletinReply {
        id: uuid::Uuid::new_v4().to_string(),
        author: user.username,
        content: request.content,
        timestamp: Utc::now().to_rfc3339(),
    });
    state.repo.save_bulletin_replies(&id, &msg.replies).await?;
    success(msg)
}
