//! CLI definition and command handlers

use clap::Parser;

pub mod context;
pub mod prompt;
pub mod prune;
pub mod review;
pub mod settings;

pub use context::CommandContext;

/// Find Mattermost team members who have been inactive for too long, and
/// deactivate or permanently delete them.
#[derive(Parser, Debug)]
#[command(name = "mm-inactive")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Host name of the Mattermost instance (without the HTTP scheme)
    #[arg(long, env = "MM_URL")]
    pub url: Option<String>,

    /// TCP port used by Mattermost [default: 8065]
    #[arg(long, env = "MM_PORT")]
    pub port: Option<String>,

    /// HTTP scheme to use (http/https) [default: http]
    #[arg(long, env = "MM_SCHEME")]
    pub scheme: Option<String>,

    /// Access token used to connect to Mattermost
    #[arg(long, env = "MM_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Name of the Mattermost team (required)
    #[arg(long)]
    pub team: Option<String>,

    /// Days a user must have been inactive to be selected
    #[arg(long, default_value_t = 180)]
    pub age: u32,

    /// List the users that would be affected without changing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Permanently delete users instead of deactivating them
    /// (the server must allow API user deletion)
    #[arg(long)]
    pub hard_delete: bool,

    /// Also select accounts that are already deactivated
    #[arg(long)]
    pub include_deactivated: bool,

    /// Act without asking for confirmation
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Enable debug output
    #[arg(
        long,
        env = "MM_DEBUG",
        hide_env = true,
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub debug: bool,

    /// Config file location [default: ~/.mm-inactive/config.yaml]
    #[arg(long, env = "MM_CONFIG", hide_env = true)]
    pub config: Option<String>,
}
