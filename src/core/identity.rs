//! Maps a login username onto an attendee record.

use crate::models::Attendee;

/// Resolve a username to an attendee id.
///
/// Tries a case-insensitive exact match on the attendee name first, then
/// falls back to substring containment in either direction. Ties are broken
/// by list order, not by best-match length; this heuristic is deliberately
/// kept compatible with the dashboard it replaced.
pub fn resolve_attendee(username: &str, attendees: &[Attendee]) -> Option<String> {
    let needle = username.to_lowercase();

    if let Some(exact) = attendees.iter().find(|a| a.name.to_lowercase() == needle) {
        return Some(exact.id.clone());
    }

    attendees
        .iter()
        .find(|a| {
            let name = a.name.to_lowercase();
            name.contains(&needle) || needle.contains(&name)
        })
        .map(|a| a.id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttendeeType;

    fn attendee(id: &str, name: &str) -> Attendee {
        Attendee {
            id: id.to_string(),
            name: name.to_string(),
            attendee_type: AttendeeType::Staff,
            contact: String::new(),
            phone: None,
            paid: None,
            ticket_tier: None,
            position: None,
            notes: None,
            check_in_time: None,
        }
    }

    #[test]
    fn test_exact_match_case_insensitive() {
        let attendees = vec![attendee("1", "Alice Johnson"), attendee("2", "ALICE JOHNSON")];
        // "ALICE JOHNSON" matches id 1 exactly before fuzzy matching runs
        assert_eq!(
            resolve_attendee("alice johnson", &attendees),
            Some("1".to_string())
        );
    }

    #[test]
    fn test_fuzzy_name_contains_username() {
        let attendees = vec![attendee("1", "Alice Johnson"), attendee("2", "Bob Smith")];
        assert_eq!(resolve_attendee("bob", &attendees), Some("2".to_string()));
    }

    #[test]
    fn test_fuzzy_username_contains_name() {
        let attendees = vec![attendee("7", "Eve")];
        assert_eq!(
            resolve_attendee("eve.adams", &attendees),
            Some("7".to_string())
        );
    }

    #[test]
    fn test_first_in_list_wins_on_ambiguity() {
        let attendees = vec![attendee("1", "Alice Johnson"), attendee("2", "Alice Cooper")];
        assert_eq!(resolve_attendee("alice", &attendees), Some("1".to_string()));
    }

    #[test]
    fn test_no_match() {
        let attendees = vec![attendee("1", "Alice Johnson")];
        assert_eq!(resolve_attendee("zorro", &attendees), None);
    }
}
