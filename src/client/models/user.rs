//! User models

use serde::{Deserialize, Serialize};

/// Role marker carried by system administrators
pub const SYSTEM_ADMIN_ROLE: &str = "system_admin";

/// Mattermost user as returned by `GET /api/v4/users`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// User ID
    pub id: String,

    /// Login name
    #[serde(default)]
    pub username: String,

    /// Email address
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    /// Last activity (Unix epoch milliseconds, 0 if never active)
    #[serde(default)]
    pub last_activity_at: i64,

    /// Deactivation time (Unix epoch milliseconds, 0 while active)
    #[serde(default)]
    pub delete_at: i64,

    /// Space separated role names, e.g. `system_user system_admin`
    #[serde(default)]
    pub roles: String,
}

impl User {
    /// Whether the user holds the system administrator role.
    pub fn is_system_admin(&self) -> bool {
        self.roles.split_whitespace().any(|r| r == SYSTEM_ADMIN_ROLE)
    }

    /// Whether the account has already been deactivated.
    pub fn is_deactivated(&self) -> bool {
        self.delete_at != 0
    }

    /// First and last name joined with a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Body for `PUT /api/v4/users/{id}/active`
#[derive(Debug, Clone, Serialize)]
pub struct ActiveStatusRequest {
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserialize_full_record() {
        let user: User = serde_json::from_str(
            r#"{
                "id": "u1",
                "username": "jdoe",
                "email": "jdoe@example.com",
                "first_name": "Jane",
                "last_name": "Doe",
                "last_activity_at": 1700000000000,
                "delete_at": 0,
                "roles": "system_user",
                "locale": "en"
            }"#,
        )
        .unwrap();

        assert_eq!(user.username, "jdoe");
        assert_eq!(user.last_activity_at, 1_700_000_000_000);
        assert!(!user.is_deactivated());
        assert!(!user.is_system_admin());
        assert_eq!(user.full_name(), "Jane Doe");
    }

    #[test]
    fn test_user_missing_optional_fields() {
        let user: User = serde_json::from_str(r#"{"id":"u2","username":"bot"}"#).unwrap();
        assert_eq!(user.last_activity_at, 0);
        assert_eq!(user.delete_at, 0);
        assert!(user.roles.is_empty());
        assert_eq!(user.full_name(), "");
    }

    #[test]
    fn test_system_admin_detection() {
        let mut user: User = serde_json::from_str(r#"{"id":"u3"}"#).unwrap();
        user.roles = "system_user system_admin".to_string();
        assert!(user.is_system_admin());

        // Custom roles that merely contain the marker are not admins
        user.roles = "system_user system_admin_readonly".to_string();
        assert!(!user.is_system_admin());
    }

    #[test]
    fn test_full_name_with_only_first_name() {
        let mut user: User = serde_json::from_str(r#"{"id":"u4"}"#).unwrap();
        user.first_name = "Cher".to_string();
        assert_eq!(user.full_name(), "Cher");
    }

    #[test]
    fn test_active_status_request_body() {
        let body = serde_json::to_string(&ActiveStatusRequest { active: false }).unwrap();
        assert_eq!(body, r#"{"active":false}"#);
    }
}
