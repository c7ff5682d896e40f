//! Accommodation assignment endpoints built on the allocator core.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{success, ApiResult};
use crate::core::allocation;
use crate::errors::AppError;
use crate::models::{Accommodation, AllocationRequest};
use crate::AppState;

/// GET /api/accommodations - List all lodging units.
pub async fn list_accommodations(State(state): State<AppState>) -> ApiResult<Vec<Accommodation>> {
    success(state.repo.list_accommodations().await?)
}

/// POST /api/accommodations/{id}/assign - Place an attendee in a unit,
/// moving them out of any other unit they were in.
pub async fn assign_accommodation(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<AllocationRequest>,
) -> ApiResult<Vec<Accommodation>> {
    let units = state.repo.list_accommodations().await?;
    if !units.iter().any(|u| u.id == id) {
        return Err(AppError::NotFound(format!("Accommodation {} not found", id)));
    }
    if state
        .repo
        .get_attendee(&request.attendee_id)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound(format!(
            "Attendee {} not found",
            request.attendee_id
        )));
    }

    let after = allocation::assign(&units, &id, &request.attendee_id);
    // Persist only the units whose membership changed
    for unit in allocation::changed_units(&units, &after) {
        state.repo.save_accommodation_members(unit).await?;
    }
    success(after)
}

/// POST /api/accommodations/{id}/remove - Take an attendee out of a unit.
/// A no-op if they are not in it.
pub async fn remove_accommodation(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<AllocationRequest>,
) -> ApiResult<Vec<Accommodation>> {
    let units = state.repo.list_accommodations().await?;
    if !units.iter().any(|u| u.id == id) {
        return Err(AppError::NotFound(format!("Accommodation {} not found", id)));
    }

    let after = allocation::remove(&units, &id, &request.attendee_id);
    for unit in allocation::changed_units(&units, &after) {
        state.repo.save_accommodation_members(unit).await?;
    }
    success(after)
}
