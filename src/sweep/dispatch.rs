//! Per-user account actions

use log::{debug, info, warn};

use super::candidates::CandidateSet;
use crate::client::UserApi;

/// What to do with each candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Mark the account inactive (reversible)
    Deactivate,
    /// Permanently delete the account and its content
    HardDelete,
}

impl Action {
    /// Imperative verb for prompts, e.g. "Deactivate".
    pub fn verb(&self) -> &'static str {
        match self {
            Action::Deactivate => "Deactivate",
            Action::HardDelete => "Permanently delete",
        }
    }

    /// Past tense for summaries, e.g. "deactivated".
    pub fn past_tense(&self) -> &'static str {
        match self {
            Action::Deactivate => "deactivated",
            Action::HardDelete => "permanently deleted",
        }
    }
}

/// Result of acting on one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub user_id: String,
    pub username: String,
    /// Error message on failure
    pub result: std::result::Result<(), String>,
}

/// Per-user outcomes of a dispatch, in processing order.
#[derive(Debug, Clone)]
pub struct DispatchReport {
    pub action: Action,
    pub outcomes: Vec<ActionOutcome>,
}

impl DispatchReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }
}

/// Apply `action` to every candidate, one request at a time.
///
/// A failure for one user is logged and recorded; it never stops the rest.
pub async fn dispatch<A: UserApi + ?Sized>(
    api: &A,
    candidates: &CandidateSet,
    action: Action,
) -> DispatchReport {
    debug!("Dispatching {:?} for {} users", action, candidates.len());

    let mut outcomes = Vec::with_capacity(candidates.len());
    for candidate in candidates.listing() {
        let result = match action {
            Action::Deactivate => api.deactivate_user(&candidate.user_id).await,
            Action::HardDelete => api.delete_user(&candidate.user_id, true).await,
        };

        let result = result.map_err(|e| {
            warn!(
                "Failed to {} user {}: {}",
                action.verb().to_lowercase(),
                candidate.username,
                e
            );
            e.to_string()
        });
        if result.is_ok() {
            debug!("User {} {}", candidate.username, action.past_tense());
        }

        outcomes.push(ActionOutcome {
            user_id: candidate.user_id.clone(),
            username: candidate.username.clone(),
            result,
        });
    }

    let report = DispatchReport { action, outcomes };
    info!(
        "Processing complete: {} {}, {} failed",
        report.succeeded(),
        action.past_tense(),
        report.failed()
    );
    report
}
