//! Display model implementations for table output
//!
//! Display models transform API response types into CLI-friendly formats
//! with appropriate column names.

mod outcome;
mod team;

pub use outcome::FailureDisplay;
pub use team::TeamDisplay;
