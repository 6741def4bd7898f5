//! API trait definitions split by responsibility
//!
//! This module organizes the Mattermost API surface into focused sub-traits:
//! - [`TeamApi`] - Team lookup operations
//! - [`UserApi`] - Team member listing and account actions
//!
//! The [`MattermostApi`](super::MattermostApi) super-trait combines both.

mod team;
mod user;

pub use team::TeamApi;
pub use user::{UserApi, UserPage};
