//! Error types for mm-inactive

use std::path::PathBuf;

use thiserror::Error;

use crate::client::models::Team;

/// Result type alias for mm-inactive operations
pub type Result<T> = std::result::Result<T, Error>;

/// Exit code for missing or invalid configuration
pub const EXIT_CONFIG: i32 = 1;
/// Exit code for a failed run (API, network, decode)
pub const EXIT_PROCESSING: i32 = 2;
/// Exit code when operator input could not be read
pub const EXIT_INPUT: i32 = 4;
/// Exit code when the requested team does not exist
pub const EXIT_TEAM_NOT_FOUND: i32 = 99;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Error processing user input: {0}")]
    Input(String),

    #[error("Team '{team}' not found")]
    TeamNotFound { team: String, available: Vec<Team> },
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Input(err.to_string())
    }
}

impl Error {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_) => EXIT_CONFIG,
            Error::Input(_) => EXIT_INPUT,
            Error::TeamNotFound { .. } => EXIT_TEAM_NOT_FOUND,
            Error::Api(_) | Error::Io(_) => EXIT_PROCESSING,
        }
    }
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed. Check the access token (--token or MM_TOKEN).")]
    Unauthorized,

    #[error("Access denied. The token's account lacks permission for this operation.")]
    Forbidden,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to Mattermost".to_string())
        } else if err.is_decode() {
            ApiError::InvalidResponse(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Incomplete configuration: {}", .0.join("; "))]
    Incomplete(Vec<String>),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
