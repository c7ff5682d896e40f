//! Data models for the festival operations dashboard.
//!
//! These models match the frontend TypeScript interfaces exactly for seamless interoperability.

mod accommodation;
mod attendee;
mod bulletin;
mod datastore;
mod schedule;
mod till;
mod user;

pub use accommodation::*;
pub use attendee::*;
pub use bulletin::*;
pub use datastore::*;
pub use schedule::*;
pub use till::*;
pub use user::*;
