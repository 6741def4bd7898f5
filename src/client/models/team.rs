//! Team models

use serde::{Deserialize, Serialize};

/// Mattermost team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Internal team ID (opaque, used by the users endpoint)
    #[serde(default)]
    pub id: String,

    /// URL-safe team name, as typed by operators
    #[serde(default)]
    pub name: String,

    /// Human-readable team name
    #[serde(default)]
    pub display_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_deserialize_ignores_unknown_fields() {
        let team: Team = serde_json::from_str(
            r#"{"id":"t1","name":"eng","display_name":"Engineering","type":"O","create_at":1}"#,
        )
        .unwrap();
        assert_eq!(team.id, "t1");
        assert_eq!(team.name, "eng");
        assert_eq!(team.display_name, "Engineering");
    }

    #[test]
    fn test_team_missing_id_defaults_to_empty() {
        let team: Team = serde_json::from_str(r#"{"name":"eng"}"#).unwrap();
        assert!(team.id.is_empty());
    }
}
