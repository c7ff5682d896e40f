//! Cross-collection schedule merging.
//!
//! Events, staff shifts and volunteer shifts are normalized into a common
//! entry shape and sorted into one chronological sequence. Entries that
//! carry an explicit date sort by it; entries without one fall back to a
//! fixed weekday rank. The two groups are not cross-normalized against each
//! other, which is an accepted limitation inherited from the dashboard this
//! replaced.

use std::cmp::Ordering;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Attendee, ProgrammeEvent, StaffShift, VolunteerShift};

/// Which collection a merged entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleKind {
    Event,
    Staff,
    Volunteer,
}

/// Common projection of an event or shift used by schedule views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub day: String,
    pub time: String,
    pub kind: ScheduleKind,
    /// Event name, or the joined attendee names for shifts.
    pub primary_label: String,
    /// Stage, role or task.
    pub secondary_label: String,
    /// Event details, or the joined shift locations.
    pub detail_label: String,
}

/// Join attendee ids into a display string. Unresolved ids render as
/// `"Unknown"`; an empty list renders as `"Unassigned"`.
pub fn join_attendee_names(ids: &[String], attendees: &[Attendee]) -> String {
    if ids.is_empty() {
        return "Unassigned".to_string();
    }
    ids.iter()
        .map(|id| {
            attendees
                .iter()
                .find(|a| &a.id == id)
                .map(|a| a.name.clone())
                .unwrap_or_else(|| "Unknown".to_string())
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn event_entry(event: &ProgrammeEvent) -> ScheduleEntry {
    ScheduleEntry {
        id: event.id.clone(),
        date: event.date.clone(),
        day: event.day.clone(),
        time: event.time.clone(),
        kind: ScheduleKind::Event,
        primary_label: event.event_name.clone(),
        secondary_label: event.stage.clone(),
        detail_label: event.details.clone(),
    }
}

fn staff_entry(shift: &StaffShift, attendees: &[Attendee]) -> ScheduleEntry {
    ScheduleEntry {
        id: shift.id.clone(),
        date: shift.date.clone(),
        day: shift.day.clone(),
        time: shift.time.clone(),
        kind: ScheduleKind::Staff,
        primary_label: join_attendee_names(&shift.attendee_ids, attendees),
        secondary_label: shift.role.clone(),
        detail_label: shift.locations.join(", "),
    }
}

fn volunteer_entry(shift: &VolunteerShift, attendees: &[Attendee]) -> ScheduleEntry {
    ScheduleEntry {
        id: shift.id.clone(),
        date: shift.date.clone(),
        day: shift.day.clone(),
        time: shift.time.clone(),
        kind: ScheduleKind::Volunteer,
        primary_label: join_attendee_names(&shift.attendee_ids, attendees),
        secondary_label: shift.task.clone(),
        detail_label: shift.locations.join(", "),
    }
}

/// Fixed rank for the festival weekend; anything else sorts last.
fn day_rank(day: &str) -> u8 {
    match day {
        "Friday" => 1,
        "Saturday" => 2,
        "Sunday" => 3,
        _ => 4,
    }
}

fn date_key(date: &Option<String>) -> Option<&str> {
    date.as_deref().filter(|d| !d.is_empty())
}

/// Chronological comparison: lexicographic ISO date then time when both
/// entries are dated, weekday rank then time otherwise.
fn compare_entries(a: &ScheduleEntry, b: &ScheduleEntry) -> Ordering {
    if let (Some(da), Some(db)) = (date_key(&a.date), date_key(&b.date)) {
        return da.cmp(db).then_with(|| a.time.cmp(&b.time));
    }
    day_rank(&a.day)
        .cmp(&day_rank(&b.day))
        .then_with(|| a.time.cmp(&b.time))
}

/// Merge the three collections into one ordered sequence.
///
/// With `filter_attendee_id` set, events are excluded entirely (they carry
/// no attendee assignment) and shifts are kept only when they include the
/// attendee.
pub fn merge(
    events: &[ProgrammeEvent],
    staff_shifts: &[StaffShift],
    volunteer_shifts: &[VolunteerShift],
    attendees: &[Attendee],
    filter_attendee_id: Option<&str>,
) -> Vec<ScheduleEntry> {
    let mut entries: Vec<ScheduleEntry> = Vec::new();

    match filter_attendee_id {
        None => {
            entries.extend(events.iter().map(event_entry));
            entries.extend(staff_shifts.iter().map(|s| staff_entry(s, attendees)));
            entries.extend(volunteer_shifts.iter().map(|v| volunteer_entry(v, attendees)));
        }
        Some(id) => {
            entries.extend(
                staff_shifts
                    .iter()
                    .filter(|s| s.attendee_ids.iter().any(|a| a == id))
                    .map(|s| staff_entry(s, attendees)),
            );
            entries.extend(
                volunteer_shifts
                    .iter()
                    .filter(|v| v.attendee_ids.iter().any(|a| a == id))
                    .map(|v| volunteer_entry(v, attendees)),
            );
        }
    }

    entries.sort_by(compare_entries);
    entries
}

/// How long an event stays "upcoming" past its stated start.
const UPCOMING_GRACE_HOURS: i64 = 2;

/// Number of entries the upcoming widget shows.
const UPCOMING_LIMIT: usize = 3;

/// Parse the start instant of an event from its date and the first clock
/// time in its `"HH:MM - HH:MM"` range. None when either part is missing or
/// malformed.
fn event_start(event: &ProgrammeEvent) -> Option<DateTime<Utc>> {
    let date = date_key(&event.date)?;
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let start = event.time.split('-').next()?.trim();
    let time = NaiveTime::parse_from_str(start, "%H:%M").ok()?;
    Utc.from_local_datetime(&date.and_time(time)).single()
}

/// The next few events, optionally restricted to one stage.
///
/// An event is upcoming until two hours past its stated start. Events whose
/// date or time cannot be parsed are always included rather than dropped
/// (fail-open), matching the dashboard's behaviour for undated records.
pub fn upcoming(
    events: &[ProgrammeEvent],
    stage: Option<&str>,
    now: DateTime<Utc>,
) -> Vec<ScheduleEntry> {
    let cutoff = now - Duration::hours(UPCOMING_GRACE_HOURS);

    let mut entries: Vec<ScheduleEntry> = events
        .iter()
        .filter(|e| stage.map_or(true, |s| e.stage == s))
        .filter(|e| event_start(e).map_or(true, |start| start > cutoff))
        .map(event_entry)
        .collect();

    entries.sort_by(compare_entries);
    entries.truncate(UPCOMING_LIMIT);
    entries
}
