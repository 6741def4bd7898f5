//! Dispatch outcome display model

use tabled::Tabled;

use crate::sweep::ActionOutcome;

/// Row for a user whose deactivation or deletion failed.
#[derive(Debug, Clone, Tabled)]
pub struct FailureDisplay {
    #[tabled(rename = "USERNAME")]
    pub username: String,

    #[tabled(rename = "USER ID")]
    pub user_id: String,

    #[tabled(rename = "ERROR")]
    pub error: String,
}

impl FailureDisplay {
    /// Row for a failed outcome, `None` for a successful one.
    pub fn from_outcome(outcome: &ActionOutcome) -> Option<Self> {
        outcome.result.as_ref().err().map(|error| Self {
            username: outcome.username.clone(),
            user_id: outcome.user_id.clone(),
            error: error.clone(),
        })
    }
}
