//! Display models for CLI output
//!
//! Converts API and sweep types into table rows.

pub mod display;

pub use display::{FailureDisplay, TeamDisplay};
