//! Command execution context
//!
//! Loads configuration, validates settings and builds the API client, so
//! the run itself starts from a ready state.

use log::debug;

use super::Cli;
use super::settings::Settings;
use crate::client::MattermostClient;
use crate::config::Config;
use crate::error::Result;

/// Context for command execution containing settings and the API client.
pub struct CommandContext {
    /// Validated settings
    pub settings: Settings,
    /// API client for the configured server
    pub client: MattermostClient,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Errors
    /// Returns a configuration error if the config file cannot be loaded or
    /// required settings are missing or invalid.
    pub fn new(cli: &Cli) -> Result<Self> {
        let config = Config::load_at(cli.config.as_deref())?;
        let settings = Settings::resolve(cli, &config)?;
        debug!("Using {:?}", settings.connection);

        let client = MattermostClient::new(&settings.connection)?;

        Ok(Self { settings, client })
    }
}
