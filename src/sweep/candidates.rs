//! Candidate records and the deduplicating candidate set

use std::collections::BTreeMap;

use crate::client::models::User;
use crate::output::formatters::format_epoch_date;

/// A user selected for action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub user_id: String,
    pub username: String,
    pub email: String,
    /// First and last name
    pub full_name: String,
    /// Last activity as `DD-MM-YYYY`
    pub last_activity_on: String,
    pub days_inactive: i64,
}

impl Candidate {
    pub fn from_user(user: &User, days_inactive: i64) -> Self {
        Self {
            user_id: user.id.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            full_name: user.full_name(),
            last_activity_on: format_epoch_date(user.last_activity_at),
            days_inactive,
        }
    }

    /// One-line description used by the review listing.
    pub fn summary_line(&self) -> String {
        format!(
            "Username: {}, Email: {}, Full name: {}, Last Login: {}, Days Since Last Login: {}",
            self.username, self.email, self.full_name, self.last_activity_on, self.days_inactive
        )
    }
}

/// Candidates keyed by user ID.
///
/// Inserting a user that is already present replaces the record, so
/// fetching the same page twice never duplicates anyone.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    by_id: BTreeMap<String, Candidate>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. Returns true if the user was not yet present.
    pub fn insert(&mut self, candidate: Candidate) -> bool {
        self.by_id
            .insert(candidate.user_id.clone(), candidate)
            .is_none()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Candidates ordered most-inactive first, then by username.
    pub fn listing(&self) -> Vec<&Candidate> {
        let mut items: Vec<&Candidate> = self.by_id.values().collect();
        items.sort_by(|a, b| {
            b.days_inactive
                .cmp(&a.days_inactive)
                .then_with(|| a.username.cmp(&b.username))
        });
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::{UserBuilder, fixed_now};

    fn candidate(id: &str, username: &str, days: i64) -> Candidate {
        let user = UserBuilder::new(id)
            .username(username)
            .inactive_for(days, fixed_now())
            .build();
        Candidate::from_user(&user, days)
    }

    #[test]
    fn test_insert_is_keyed_overwrite() {
        let mut set = CandidateSet::new();
        assert!(set.insert(candidate("u1", "alice", 200)));
        assert!(!set.insert(candidate("u1", "alice", 201)));

        assert_eq!(set.len(), 1);
        assert_eq!(set.listing()[0].days_inactive, 201);
    }

    #[test]
    fn test_listing_order() {
        let mut set = CandidateSet::new();
        set.insert(candidate("u1", "carol", 190));
        set.insert(candidate("u2", "bob", 400));
        set.insert(candidate("u3", "alice", 190));

        let names: Vec<&str> = set.listing().iter().map(|c| c.username.as_str()).collect();
        assert_eq!(names, vec!["bob", "alice", "carol"]);
    }

    #[test]
    fn test_summary_line() {
        let c = Candidate {
            user_id: "u1".to_string(),
            username: "jdoe".to_string(),
            email: "jdoe@example.com".to_string(),
            full_name: "Jane Doe".to_string(),
            last_activity_on: "15-01-2025".to_string(),
            days_inactive: 200,
        };
        assert_eq!(
            c.summary_line(),
            "Username: jdoe, Email: jdoe@example.com, Full name: Jane Doe, Last Login: 15-01-2025, Days Since Last Login: 200"
        );
    }

    #[test]
    fn test_empty_set() {
        let set = CandidateSet::new();
        assert!(set.is_empty());
        assert!(set.listing().is_empty());
    }
}
