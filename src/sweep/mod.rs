//! Inactive-user sweep
//!
//! Walks a team's member collection page by page, keeps the users the
//! [`InactivityPolicy`] selects, and applies an [`Action`] to each of them.

mod candidates;
mod collect;
mod dispatch;
mod filter;
mod team;

#[cfg(test)]
pub use candidates::Candidate;
pub use candidates::CandidateSet;
pub use collect::collect_candidates;
pub use dispatch::{Action, ActionOutcome, DispatchReport, dispatch};
pub use filter::InactivityPolicy;
pub use team::resolve_team;
