//! Attendee registration and check-in endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;

use super::{success, ApiResult};
use crate::core::allocation;
use crate::errors::AppError;
use crate::models::{Attendee, AttendeeRequest};
use crate::AppState;

/// GET /api/attendees - List all attendees.
pub async fn list_attendees(State(state): State<AppState>) -> ApiResult<Vec<Attendee>> {
    success(state.repo.list_attendees().await?)
}

/// GET /api/attendees/{id} - Get a single attendee.
pub async fn get_attendee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Attendee> {
    let attendee = state
        .repo
        .get_attendee(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Attendee {} not found", id)))?;
    success(attendee)
}

/// POST /api/attendees - Register a new attendee.
pub async fn create_attendee(
    State(state): State<AppState>,
    Json(request): Json<AttendeeRequest>,
) -> ApiResult<Attendee> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".to_string()));
    }

    let attendee = Attendee {
        id: uuid::Uuid::new_v4().to_string(),
        name: request.name,
        attendee_type: request.attendee_type,
        contact: request.contact,
        phone: request.phone,
        paid: request.paid,
        ticket_tier: request.ticket_tier,
        position: request.position,
        notes: request.notes,
        check_in_time: None,
    };
    state.repo.create_attendee(&attendee).await?;
    success(attendee)
}

/// PUT /api/attendees/{id} - Replace an attendee record. Last write wins.
pub async fn update_attendee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<AttendeeRequest>,
) -> ApiResult<Attendee> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".to_string()));
    }

    let existing = state
        .repo
        .get_attendee(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Attendee {} not found", id)))?;

    let attendee = Attendee {
        id,
        name: request.name,
        attendee_type: request.attendee_type,
        contact: request.contact,
        phone: request.phone,
        paid: request.paid,
        ticket_tier: request.ticket_tier,
        position: request.position,
        notes: request.notes,
        // Check-in state is owned by the check-in endpoints
        check_in_time: existing.check_in_time,
    };
    state.repo.update_attendee(&attendee).await?;
    success(attendee)
}

/// DELETE /api/attendees/{id} - Delete an attendee and free their lodging.
pub async fn delete_attendee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    state.repo.delete_attendee(&id).await?;

    // Strip the attendee from every accommodation unit as well
    let units = state.repo.list_accommodations().await?;
    let after = allocation::remove_everywhere(&units, &id);
    for unit in allocation::changed_units(&units, &after) {
        state.repo.save_accommodation_members(unit).await?;
    }

    success(())
}

/// POST /api/attendees/{id}/check-in - Stamp the attendee as arrived.
pub async fn check_in_attendee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Attendee> {
    let now = Utc::now().to_rfc3339();
    state.repo.set_check_in(&id, Some(&now)).await?;

    let attendee = state
        .repo
        .get_attendee(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Attendee {} not found", id)))?;
    success(attendee)
}

/// POST /api/attendees/{id}/check-out - Clear the check-in stamp.
pub async fn check_out_attendee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Attendee> {
    state.repo.set_check_in(&id, None).await?;

    let attendee = state
        .repo
        .get_attendee(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Attendee {} not found", id)))?;
    success(attendee)
}
