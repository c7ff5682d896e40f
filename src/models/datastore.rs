//! Whole-store snapshot handed to clients at session start.

use serde::{Deserialize, Serialize};

use super::{
    Accommodation, Attendee, BulletinMessage, Product, ProgrammeEvent, PublicUser, StaffShift,
    Transaction, VolunteerShift,
};

/// Everything a dashboard session mirrors into local view state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Datastore {
    pub generated_at: String,
    pub users: Vec<PublicUser>,
    pub attendees: Vec<Attendee>,
    pub events: Vec<ProgrammeEvent>,
    pub staff_shifts: Vec<StaffShift>,
    pub volunteer_shifts: Vec<VolunteerShift>,
    pub accommodations: Vec<Accommodation>,
    pub products: Vec<Product>,
    pub transactions: Vec<Transaction>,
    pub bulletins: Vec<BulletinMessage>,
}
