//! Pure bookkeeping logic for assignment and scheduling.
//!
//! These modules take snapshots of the in-memory collections as plain
//! arguments and return new values; persistence stays entirely in the
//! repository layer, so everything here is testable without a database.

pub mod allocation;
pub mod bulletin;
pub mod identity;
pub mod schedule;
