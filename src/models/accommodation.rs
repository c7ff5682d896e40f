//! Accommodation unit model.

use serde::{Deserialize, Serialize};

/// Kind of lodging unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccommodationType {
    Yurt,
    Caravan,
}

impl AccommodationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccommodationType::Yurt => "Yurt",
            AccommodationType::Caravan => "Caravan",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Yurt" => Some(AccommodationType::Yurt),
            "Caravan" => Some(AccommodationType::Caravan),
            _ => None,
        }
    }
}

/// A lodging unit with a fixed capacity and the attendees currently placed
/// in it. Capacity is advisory; the allocator does not reject over-full
/// assignments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accommodation {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub accommodation_type: AccommodationType,
    pub capacity: i64,
    pub attendee_ids: Vec<String>,
}

impl Accommodation {
    /// Whether the unit is at or beyond its stated capacity.
    pub fn is_full(&self) -> bool {
        self.attendee_ids.len() as i64 >= self.capacity
    }
}

/// Request body for assigning or removing an attendee.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationRequest {
    pub attendee_id: String,
}
