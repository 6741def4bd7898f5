//! Inclusion policy for inactive users

use chrono::{DateTime, Utc};

use super::candidates::Candidate;
use crate::client::models::User;
use crate::output::formatters::days_since;

/// Decides which team members become candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InactivityPolicy {
    /// Minimum whole days since last activity (inclusive)
    pub threshold_days: i64,
    /// Leave already-deactivated accounts out of the candidate set
    pub skip_deactivated: bool,
}

/// Outcome of evaluating one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Include(Candidate),
    SystemAdmin,
    Deactivated,
    Recent { days_inactive: i64 },
}

impl InactivityPolicy {
    /// Policy with the given threshold that skips deactivated accounts.
    pub fn new(threshold_days: i64) -> Self {
        Self {
            threshold_days,
            skip_deactivated: true,
        }
    }

    /// Also consider accounts that are already deactivated.
    pub fn include_deactivated(mut self, include: bool) -> Self {
        self.skip_deactivated = !include;
        self
    }

    /// Evaluate a user against the policy at time `now`.
    ///
    /// System administrators are never candidates, whatever their age.
    pub fn evaluate(&self, user: &User, now: DateTime<Utc>) -> Verdict {
        if user.is_system_admin() {
            return Verdict::SystemAdmin;
        }
        if self.skip_deactivated && user.is_deactivated() {
            return Verdict::Deactivated;
        }

        let days_inactive = days_since(user.last_activity_at, now);
        if days_inactive >= self.threshold_days {
            Verdict::Include(Candidate::from_user(user, days_inactive))
        } else {
            Verdict::Recent { days_inactive }
        }
    }
}
