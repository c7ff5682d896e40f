//! Attendee model matching the frontend Attendee interface.

use serde::{Deserialize, Serialize};

/// Category of person tracked by the festival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendeeType {
    Staff,
    Customer,
    Artist,
    Volunteer,
}

impl AttendeeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendeeType::Staff => "Staff",
            AttendeeType::Customer => "Customer",
            AttendeeType::Artist => "Artist",
            AttendeeType::Volunteer => "Volunteer",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Staff" => Some(AttendeeType::Staff),
            "Customer" => Some(AttendeeType::Customer),
            "Artist" => Some(AttendeeType::Artist),
            "Volunteer" => Some(AttendeeType::Volunteer),
            _ => None,
        }
    }
}

/// Customer ticket tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketType {
    #[serde(rename = "Tier 1")]
    Tier1,
    #[serde(rename = "Tier 2")]
    Tier2,
    #[serde(rename = "Tier 3")]
    Tier3,
}

impl TicketType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketType::Tier1 => "Tier 1",
            TicketType::Tier2 => "Tier 2",
            TicketType::Tier3 => "Tier 3",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Tier 1" => Some(TicketType::Tier1),
            "Tier 2" => Some(TicketType::Tier2),
            "Tier 3" => Some(TicketType::Tier3),
            _ => None,
        }
    }
}

/// A person tracked by the event: staff, customer, artist or volunteer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub attendee_type: AttendeeType,
    pub contact: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_tier: Option<TicketType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// RFC 3339 timestamp, set only while the attendee is checked in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in_time: Option<String>,
}

/// Request body for creating or replacing an attendee record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendeeRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub attendee_type: AttendeeType,
    pub contact: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub paid: Option<bool>,
    #[serde(default)]
    pub ticket_tier: Option<TicketType>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}
