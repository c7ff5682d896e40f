//! Merged schedule views built on the schedule core.

use axum::{
    extract::{Query, State},
    Extension,
};
use chrono::Utc;
use serde::Deserialize;

use super::{success, ApiResult};
use crate::core::{identity, schedule};
use crate::models::PublicUser;
use crate::AppState;

/// Query parameters for the upcoming-events view.
#[derive(Debug, Deserialize)]
pub struct UpcomingQuery {
    /// Restrict to a single stage, e.g. `Main Stage`.
    #[serde(default)]
    pub stage: Option<String>,
}

/// GET /api/schedule - Events and shifts merged into one chronological list.
pub async fn combined_schedule(
    State(state): State<AppState>,
) -> ApiResult<Vec<schedule::ScheduleEntry>> {
    let events = state.repo.list_events().await?;
    let staff_shifts = state.repo.list_staff_shifts().await?;
    let volunteer_shifts = state.repo.list_volunteer_shifts().await?;
    let attendees = state.repo.list_attendees().await?;

    success(schedule::merge(
        &events,
        &staff_shifts,
        &volunteer_shifts,
        &attendees,
        None,
    ))
}

/// GET /api/schedule/me - The caller's personal shift timetable.
///
/// The session username is mapped onto an attendee record by the identity
/// resolver; a user with no matching attendee gets an empty schedule rather
/// than an error.
pub async fn personal_schedule(
    State(state): State<AppState>,
    Extension(user): Extension<PublicUser>,
) -> ApiResult<Vec<schedule::ScheduleEntry>> {
    let attendees = state.repo.list_attendees().await?;

    let Some(attendee_id) = identity::resolve_attendee(&user.username, &attendees) else {
        return success(Vec::new());
    };

    let staff_shifts = state.repo.list_staff_shifts().await?;
    let volunteer_shifts = state.repo.list_volunteer_shifts().await?;

    success(schedule::merge(
        &[],
        &staff_shifts,
        &volunteer_shifts,
        &attendees,
        Some(&attendee_id),
    ))
}

/// GET /api/schedule/upcoming - The next few events, optionally per stage.
pub async fn upcoming_events(
    State(state): State<AppState>,
    Query(query): Query<UpcomingQuery>,
) -> ApiResult<Vec<schedule::ScheduleEntry>> {
    let events = state.repo.list_events().await?;
    success(schedule::upcoming(
        &events,
        query.stage.as_deref(),
        Utc::now(),
    ))
}
