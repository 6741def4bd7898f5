//! Mattermost API data models
//!
//! Only the fields this tool reads are modelled; serde ignores the rest of
//! each payload.

mod team;
mod user;

pub use team::Team;
pub use user::{ActiveStatusRequest, SYSTEM_ADMIN_ROLE, User};
