//! Programme events, staff shifts and volunteer shifts.
//!
//! The three collections are edited independently; the schedule core merges
//! them into one chronological view.

use serde::{Deserialize, Serialize};

/// A programmed performance or activity on a stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgrammeEvent {
    pub id: String,
    /// Optional ISO calendar date (`YYYY-MM-DD`); older records carry only `day`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub day: String,
    /// Clock range in the `"HH:MM - HH:MM"` form.
    pub time: String,
    pub stage: String,
    pub event_name: String,
    pub details: String,
}

/// A time-boxed staff assignment. Not exclusive: one attendee may hold
/// multiple shifts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffShift {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub day: String,
    pub time: String,
    pub attendee_ids: Vec<String>,
    pub role: String,
    pub locations: Vec<String>,
}

/// A time-boxed volunteer assignment, same shape as [`StaffShift`] but with
/// a `task` instead of a `role`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerShift {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub day: String,
    pub time: String,
    pub attendee_ids: Vec<String>,
    pub task: String,
    pub locations: Vec<String>,
}

/// Request body for creating or replacing a programme event.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgrammeEventRequest {
    #[serde(default)]
    pub date: Option<String>,
    pub day: String,
    pub time: String,
    pub stage: String,
    pub event_name: String,
    pub details: String,
}

/// Request body for creating or replacing a staff shift.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffShiftRequest {
    #[serde(default)]
    pub date: Option<String>,
    pub day: String,
    pub time: String,
    #[serde(default)]
    pub attendee_ids: Vec<String>,
    pub role: String,
    #[serde(default)]
    pub locations: Vec<String>,
}

/// Request body for creating or replacing a volunteer shift.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerShiftRequest {
    #[serde(default)]
    pub date: Option<String>,
    pub day: String,
    pub time: String,
    #[serde(default)]
    pub attendee_ids: Vec<String>,
    pub task: String,
    #[serde(default)]
    pub locations: Vec<String>,
}
