//! Test fixtures and builders for API model types
//!
//! Import via `use crate::client::fixtures::*` in test modules.

use chrono::{DateTime, Duration, Utc};

use super::models::{SYSTEM_ADMIN_ROLE, Team, User};

/// A fixed "now" so day arithmetic in tests is deterministic.
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::from_timestamp(1_760_000_000, 0).expect("valid timestamp")
}

/// Build a team with matching name and display name.
pub fn team(id: &str, name: &str) -> Team {
    Team {
        id: id.to_string(),
        name: name.to_string(),
        display_name: format!("Team {}", name),
    }
}

/// Builder for creating test User instances.
///
/// # Example
/// ```ignore
/// let user = UserBuilder::new("u1")
///     .inactive_for(200, fixed_now())
///     .admin()
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct UserBuilder {
    user: User,
}

impl UserBuilder {
    /// Create a new active, non-admin user that was last seen at `now`.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            user: User {
                username: format!("user-{}", id),
                email: format!("{}@example.com", id),
                first_name: "Test".to_string(),
                last_name: id.clone(),
                last_activity_at: fixed_now().timestamp_millis(),
                delete_at: 0,
                roles: "system_user".to_string(),
                id,
            },
        }
    }

    /// Set the username.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.user.username = username.into();
        self
    }

    /// Set last activity to exactly `days` before `now`.
    pub fn inactive_for(mut self, days: i64, now: DateTime<Utc>) -> Self {
        self.user.last_activity_at = (now - Duration::days(days)).timestamp_millis();
        self
    }

    /// Set the raw last-activity timestamp (epoch milliseconds).
    pub fn last_activity_at(mut self, millis: i64) -> Self {
        self.user.last_activity_at = millis;
        self
    }

    /// Grant the system administrator role.
    pub fn admin(mut self) -> Self {
        self.user.roles = format!("system_user {}", SYSTEM_ADMIN_ROLE);
        self
    }

    /// Mark the account as already deactivated.
    pub fn deactivated(mut self) -> Self {
        self.user.delete_at = fixed_now().timestamp_millis();
        self
    }

    /// Build the User.
    pub fn build(self) -> User {
        self.user
    }
}
