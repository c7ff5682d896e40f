//! Accommodation assignment bookkeeping.
//!
//! An attendee lives in at most one unit at a time: assigning moves them,
//! never duplicates them. Capacity is advisory and not enforced here; the
//! UI greys out full units but an over-capacity assign still goes through.

use crate::models::Accommodation;

/// Place an attendee in the named unit, removing them from every other unit
/// first. Returns the updated snapshot.
///
/// An unknown `unit_id` still strips the attendee from all units, leaving
/// them unassigned.
pub fn assign(units: &[Accommodation], unit_id: &str, attendee_id: &str) -> Vec<Accommodation> {
    units
        .iter()
        .map(|unit| {
            let mut unit = unit.clone();
            if unit.id == unit_id {
                if !unit.attendee_ids.iter().any(|id| id == attendee_id) {
                    unit.attendee_ids.push(attendee_id.to_string());
                }
            } else {
                unit.attendee_ids.retain(|id| id != attendee_id);
            }
            unit
        })
        .collect()
}

/// Remove an attendee from exactly the named unit. A no-op if the attendee
/// is not in it, so repeated removes are safe.
pub fn remove(units: &[Accommodation], unit_id: &str, attendee_id: &str) -> Vec<Accommodation> {
    units
        .iter()
        .map(|unit| {
            let mut unit = unit.clone();
            if unit.id == unit_id {
                unit.attendee_ids.retain(|id| id != attendee_id);
            }
            unit
        })
        .collect()
}

/// Remove an attendee from every unit. Used when the attendee record itself
/// is deleted.
pub fn remove_everywhere(units: &[Accommodation], attendee_id: &str) -> Vec<Accommodation> {
    units
        .iter()
        .map(|unit| {
            let mut unit = unit.clone();
            unit.attendee_ids.retain(|id| id != attendee_id);
            unit
        })
        .collect()
}

/// Units in `after` whose membership differs from their counterpart in
/// `before`. Only these need persisting after an allocator call.
pub fn changed_units<'a>(
    before: &[Accommodation],
    after: &'a [Accommodation],
) -> Vec<&'a Accommodation> {
    after
        .iter()
        .filter(|unit| {
            before
                .iter()
                .find(|b| b.id == unit.id)
                .map_or(true, |b| b.attendee_ids != unit.attendee_ids)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccommodationType;

    fn unit(id: &str, capacity: i64, attendee_ids: &[&str]) -> Accommodation {
        Accommodation {
            id: id.to_string(),
            name: format!("Unit {id}"),
            accommodation_type: AccommodationType::Yurt,
            capacity,
            attendee_ids: attendee_ids.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn count_occurrences(units: &[Accommodation], attendee_id: &str) -> usize {
        units
            .iter()
            .filter(|u| u.attendee_ids.iter().any(|id| id == attendee_id))
            .count()
    }

    #[test]
    fn test_assign_appends_to_target() {
        let units = vec![unit("y1", 4, &[]), unit("y2", 4, &[])];
        let after = assign(&units, "y1", "a1");
        assert_eq!(after[0].attendee_ids, vec!["a1"]);
        assert!(after[1].attendee_ids.is_empty());
    }

    #[test]
    fn test_assign_moves_between_units() {
        let units = vec![unit("y1", 4, &["a1"]), unit("y2", 4, &[])];
        let after = assign(&units, "y2", "a1");
        assert!(after[0].attendee_ids.is_empty());
        assert_eq!(after[1].attendee_ids, vec!["a1"]);
        assert_eq!(count_occurrences(&after, "a1"), 1);
    }

    #[test]
    fn test_assign_same_unit_is_noop() {
        let units = vec![unit("y1", 4, &["a1", "a2"])];
        let after = assign(&units, "y1", "a1");
        assert_eq!(after[0].attendee_ids, vec!["a1", "a2"]);
    }

    #[test]
    fn test_assign_invalid_unit_leaves_attendee_unassigned() {
        let units = vec![unit("y1", 4, &["a1"]), unit("y2", 4, &[])];
        let after = assign(&units, "nope", "a1");
        assert_eq!(count_occurrences(&after, "a1"), 0);
    }

    #[test]
    fn test_assign_at_most_one_unit() {
        // a1 somehow present in two units; assign repairs the duplication
        let units = vec![unit("y1", 4, &["a1"]), unit("y2", 4, &["a1"]), unit("y3", 4, &[])];
        let after = assign(&units, "y3", "a1");
        assert_eq!(count_occurrences(&after, "a1"), 1);
        assert_eq!(after[2].attendee_ids, vec!["a1"]);
    }

    #[test]
    fn test_capacity_not_enforced() {
        let units = vec![unit("c1", 2, &["a1", "a2"])];
        let after = assign(&units, "c1", "a3");
        assert_eq!(after[0].attendee_ids.len(), 3);
        assert!(after[0].is_full());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let units = vec![unit("y1", 4, &["a1"])];
        let once = remove(&units, "y1", "a1");
        assert!(once[0].attendee_ids.is_empty());
        let twice = remove(&once, "y1", "a1");
        assert!(twice[0].attendee_ids.is_empty());
    }

    #[test]
    fn test_remove_only_touches_named_unit() {
        let units = vec![unit("y1", 4, &["a1"]), unit("y2", 4, &["a1"])];
        let after = remove(&units, "y1", "a1");
        assert!(after[0].attendee_ids.is_empty());
        assert_eq!(after[1].attendee_ids, vec!["a1"]);
    }

    #[test]
    fn test_remove_everywhere() {
        let units = vec![unit("y1", 4, &["a1", "a2"]), unit("y2", 4, &["a1"])];
        let after = remove_everywhere(&units, "a1");
        assert_eq!(after[0].attendee_ids, vec!["a2"]);
        assert!(after[1].attendee_ids.is_empty());
    }

    #[test]
    fn test_changed_units_reports_only_diffs() {
        let before = vec![unit("y1", 4, &["a1"]), unit("y2", 4, &[])];
        let after = assign(&before, "y2", "a1");
        let changed = changed_units(&before, &after);
        let ids: Vec<&str> = changed.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["y1", "y2"]);

        let unchanged = changed_units(&after, &after);
        assert!(unchanged.is_empty());
    }
}
