//! Bulletin audience visibility and reaction bookkeeping.

use crate::models::{BulletinMessage, UserRole};

/// Audience tag addressing every login.
pub const AUDIENCE_ALL: &str = "(All)";

/// Audience tag addressing staff and admin logins.
pub const AUDIENCE_STAFF: &str = "(Staff)";

/// Whether a single message may be shown to the given user.
///
/// Group tags are literal strings; `(Staff)` matches both Staff and Admin
/// roles, anything else in parentheses matches nobody. Authors always see
/// their own posts regardless of audience.
pub fn is_visible(message: &BulletinMessage, username: &str, role: UserRole) -> bool {
    let audience = &message.audience;
    if audience.iter().any(|a| a == AUDIENCE_ALL) {
        return true;
    }
    if audience.iter().any(|a| a == AUDIENCE_STAFF)
        && matches!(role, UserRole::Staff | UserRole::Admin)
    {
        return true;
    }
    if audience.iter().any(|a| a == username) {
        return true;
    }
    message.author == username
}

/// Messages the user may see, newest first. Timestamps are RFC 3339 strings,
/// so lexical descending order is chronological descending order.
pub fn visible(
    bulletins: &[BulletinMessage],
    username: &str,
    role: UserRole,
) -> Vec<BulletinMessage> {
    let mut result: Vec<BulletinMessage> = bulletins
        .iter()
        .filter(|b| is_visible(b, username, role))
        .cloned()
        .collect();
    result.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    result
}

/// Visible messages that name the user in their audience and were written by
/// someone else. Drives the notification badge.
pub fn mentions(
    bulletins: &[BulletinMessage],
    username: &str,
    role: UserRole,
) -> Vec<BulletinMessage> {
    visible(bulletins, username, role)
        .into_iter()
        .filter(|b| b.audience.iter().any(|a| a == username) && b.author != username)
        .collect()
}

/// Toggle a username's membership in a likes list.
pub fn toggle_like(likes: &[String], username: &str) -> Vec<String> {
    if likes.iter().any(|l| l == username) {
        likes.iter().filter(|l| *l != username).cloned().collect()
    } else {
        let mut next = likes.to_vec();
        next.push(username.to_string());
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(id: &str, author: &str, audience: &[&str], timestamp: &str) -> BulletinMessage {
        BulletinMessage {
            id: id.to_string(),
            author: author.to_string(),
            content: "hello".to_string(),
            timestamp: timestamp.to_string(),
            audience: audience.iter().map(|s| s.to_string()).collect(),
            likes: Vec::new(),
            replies: Vec::new(),
        }
    }

    #[test]
    fn test_all_tag_visible_to_everyone() {
        let msgs = vec![message("b1", "Admin", &["(All)"], "2024-06-01T10:00:00Z")];
        assert_eq!(visible(&msgs, "alice", UserRole::Staff).len(), 1);
    }

    #[test]
    fn test_staff_tag_matches_staff_and_admin() {
        let msgs = vec![message("b1", "Admin", &["(Staff)"], "2024-06-01T10:00:00Z")];
        assert_eq!(visible(&msgs, "alice", UserRole::Staff).len(), 1);
        assert_eq!(visible(&msgs, "boss", UserRole::Admin).len(), 1);
    }

    #[test]
    fn test_unknown_group_tag_matches_nobody() {
        // "(Admin)" is a literal tag, not a role match
        let msgs = vec![message("b1", "henry", &["(Admin)"], "2024-06-01T10:00:00Z")];
        assert!(visible(&msgs, "alice", UserRole::Admin).is_empty());
        // ...unless the user authored it
        assert_eq!(visible(&msgs, "henry", UserRole::Staff).len(), 1);
    }

    #[test]
    fn test_username_in_audience() {
        let msgs = vec![message("b1", "Admin", &["alice"], "2024-06-01T10:00:00Z")];
        assert_eq!(visible(&msgs, "alice", UserRole::Staff).len(), 1);
        assert!(visible(&msgs, "henry", UserRole::Staff).is_empty());
    }

    #[test]
    fn test_newest_first_ordering() {
        let msgs = vec![
            message("old", "Admin", &["(All)"], "2024-06-01T10:00:00Z"),
            message("new", "Admin", &["(All)"], "2024-06-02T10:00:00Z"),
        ];
        let result = visible(&msgs, "alice", UserRole::Staff);
        assert_eq!(result[0].id, "new");
        assert_eq!(result[1].id, "old");
    }

    #[test]
    fn test_mentions_require_explicit_audience_and_other_author() {
        let msgs = vec![
            message("b1", "Admin", &["alice"], "2024-06-01T10:00:00Z"),
            message("b2", "alice", &["alice"], "2024-06-01T11:00:00Z"),
            message("b3", "Admin", &["(All)"], "2024-06-01T12:00:00Z"),
        ];
        let result = mentions(&msgs, "alice", UserRole::Staff);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "b1");
    }

    #[test]
    fn test_toggle_like_roundtrip() {
        let likes = toggle_like(&[], "alice");
        assert_eq!(likes, vec!["alice"]);
        let likes = toggle_like(&likes, "bob");
        assert_eq!(likes, vec!["alice", "bob"]);
        let likes = toggle_like(&likes, "alice");
        assert_eq!(likes, vec!["bob"]);
    }
}
