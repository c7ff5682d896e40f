//! CRUD endpoints for the three independently edited schedule collections.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{
    ProgrammeEvent, ProgrammeEventRequest, StaffShift, StaffShiftRequest, VolunteerShift,
    VolunteerShiftRequest,
};
use crate::AppState;

fn validate_day_and_time(day: &str, time: &str) -> Result<(), AppError> {
    if day.trim().is_empty() {
        return Err(AppError::Validation("Day is required".to_string()));
    }
    if time.trim().is_empty() {
        return Err(AppError::Validation("Time is required".to_string()));
    }
    Ok(())
}

// ==================== PROGRAMME EVENTS ====================

/// GET /api/events - List all programme events.
pub async fn list_events(State(state): State<AppState>) -> ApiResult<Vec<ProgrammeEvent>> {
    success(state.repo.list_events().await?)
}

/// POST /api/events - Create a programme event.
pub async fn create_event(
    State(state): State<AppState>,
    Json(request): Json<ProgrammeEventRequest>,
) -> ApiResult<ProgrammeEvent> {
    validate_day_and_time(&request.day, &request.time)?;
    if request.event_name.trim().is_empty() {
        return Err(AppError::Validation("Event name is required".to_string()));
    }

    let event = ProgrammeEvent {
        id: uuid::Uuid::new_v4().to_string(),
        date: request.date,
        day: request.day,
        time: request.time,
        stage: request.stage,
        event_name: request.event_name,
        details: request.details,
    };
    state.repo.create_event(&event).await?;
    success(event)
}

/// PUT /api/events/{id} - Replace a programme event. Last write wins.
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<ProgrammeEventRequest>,
) -> ApiResult<ProgrammeEvent> {
    validate_day_and_time(&request.day, &request.time)?;

    let event = ProgrammeEvent {
        id,
        date: request.date,
        day: request.day,
        time: request.time,
        stage: request.stage,
        event_name: request.event_name,
        details: request.details,
    };
    state.repo.update_event(&event).await?;
    success(event)
}

/// DELETE /api/events/{id} - Delete a programme event.
pub async fn delete_event(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    state.repo.delete_event(&id).await?;
    success(())
}

// ==================== STAFF SHIFTS ====================

/// GET /api/staff-shifts - List all staff shifts.
pub async fn list_staff_shifts(State(state): State<AppState>) -> ApiResult<Vec<StaffShift>> {
    success(state.repo.list_staff_shifts().await?)
}

/// POST /api/staff-shifts - Create a staff shift.
pub async fn create_staff_shift(
    State(state): State<AppState>,
    Json(request): Json<StaffShiftRequest>,
) -> ApiResult<StaffShift> {
    validate_day_and_time(&request.day, &request.time)?;

    let shift = StaffShift {
        id: uuid::Uuid::new_v4().to_string(),
        date: request.date,
        day: request.day,
        time: request.time,
        attendee_ids: request.attendee_ids,
        role: request.role,
        locations: request.locations,
    };
    state.repo.create_staff_shift(&shift).await?;
    success(shift)
}

/// PUT /api/staff-shifts/{id} - Replace a staff shift. Last write wins.
pub async fn update_staff_shift(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<StaffShiftRequest>,
) -> ApiResult<StaffShift> {
    validate_day_and_time(&request.day, &request.time)?;

    let shift = StaffShift {
        id,
        date: request.date,
        day: request.day,
        time: request.time,
        attendee_ids: request.attendee_ids,
        role: request.role,
        locations: request.locations,
    };
    state.repo.update_staff_shift(&shift).await?;
    success(shift)
}

/// DELETE /api/staff-shifts/{id} - Delete a staff shift.
pub async fn delete_staff_shift(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    state.repo.delete_staff_shift(&id).await?;
    success(())
}

// ==================== VOLUNTEER SHIFTS ====================

/// GET /api/volunteer-shifts - List all volunteer shifts.
pub async fn list_volunteer_shifts(
    State(state): State<AppState>,
) -> ApiResult<Vec<VolunteerShift>> {
    success(state.repo.list_volunteer_shifts().await?)
}

/// POST /api/volunteer-shifts - Create a volunteer shift.
pub async fn create_volunteer_shift(
    State(state): State<AppState>,
    Json(request): Json<VolunteerShiftRequest>,
) -> ApiResult<VolunteerShift> {
    validate_day_and_time(&request.day, &request.time)?;

    let shift = VolunteerShift {
        id: uuid::Uuid::new_v4().to_string(),
        date: request.date,
        day: request.day,
        time: request.time,
        attendee_ids: request.attendee_ids,
        task: request.task,
        locations: request.locations,
    };
    state.repo.create_volunteer_shift(&shift).await?;
    success(shift)
}

/// PUT /api/volunteer-shifts/{id} - Replace a volunteer shift. Last write wins.
pub async fn update_volunteer_shift(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<VolunteerShiftRequest>,
) -> ApiResult<VolunteerShift> {
    validate_day_and_time(&request.day, &request.time)?;

    let shift = VolunteerShift {
        id,
        date: request.date,
        day: request.day,
        time: request.time,
        attendee_ids: request.attendee_ids,
        task: request.task,
        locations: request.locations,
    };
    state.repo.update_volunteer_shift(&shift).await?;
    success(shift)
}

/// DELETE /api/volunteer-shifts/{id} - Delete a volunteer shift.
pub async fn delete_volunteer_shift(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    state.repo.delete_volunteer_shift(&id).await?;
    success(())
}
