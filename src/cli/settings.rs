//! Effective run settings
//!
//! Merges command-line flags (and their environment variables) over the
//! config file and built-in defaults, then validates the result.

use log::warn;

use super::Cli;
use crate::client::Connection;
use crate::config::Config;
use crate::error::{ConfigError, Result};
use crate::sweep::{Action, InactivityPolicy};

/// Port used when neither flag, environment nor config file sets one
pub const DEFAULT_PORT: &str = "8065";
/// Scheme used when neither flag, environment nor config file sets one
pub const DEFAULT_SCHEME: &str = "http";
/// Thresholds below this many days trigger a warning
pub const LOW_AGE_WARNING_DAYS: u32 = 30;

const SCHEMES: &[&str] = &["http", "https"];

/// Validated settings for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub connection: Connection,
    /// Team name as typed by the operator
    pub team: String,
    pub age_days: u32,
    pub policy: InactivityPolicy,
    pub action: Action,
    pub dry_run: bool,
    /// Skip the confirmation prompt
    pub assume_yes: bool,
    pub page_size: usize,
}

impl Settings {
    /// Resolve settings from parsed flags and the loaded config file.
    ///
    /// Every problem is collected before returning, so the operator sees
    /// all of them at once.
    pub fn resolve(cli: &Cli, file: &Config) -> Result<Self> {
        let mut problems = Vec::new();

        let host = pick(&cli.url, &file.url).map(|u| u.trim_end_matches('/').to_string());
        if host.is_none() {
            problems.push("Mattermost URL is missing (--url or MM_URL)".to_string());
        }
        if let Some(h) = &host {
            if h.contains("://") {
                problems.push(format!(
                    "Mattermost URL '{}' must not include the HTTP scheme; use --scheme",
                    h
                ));
            }
        }

        let token = pick(&cli.token, &file.token);
        if token.is_none() {
            problems.push("Access token is missing (--token or MM_TOKEN)".to_string());
        }

        let team = pick(&cli.team, &None);
        if team.is_none() {
            problems.push("Team name is missing (--team)".to_string());
        }

        let scheme = pick(&cli.scheme, &file.scheme)
            .unwrap_or_else(|| DEFAULT_SCHEME.to_string())
            .to_lowercase();
        if !SCHEMES.contains(&scheme.as_str()) {
            problems.push(format!(
                "Invalid HTTP scheme '{}' (expected http or https)",
                scheme
            ));
        }

        let port_text = pick(&cli.port, &file.port).unwrap_or_else(|| DEFAULT_PORT.to_string());
        let port = match port_text.trim().parse::<u16>() {
            Ok(p) if p > 0 => Some(p),
            _ => {
                problems.push(format!("Invalid port '{}' (expected 1-65535)", port_text));
                None
            }
        };

        if !problems.is_empty() {
            return Err(ConfigError::Incomplete(problems).into());
        }

        if cli.age < LOW_AGE_WARNING_DAYS {
            warn!(
                "Age is set to {} days; users active within the last month will be affected",
                cli.age
            );
        }

        // All present: the checks above pushed a problem for each None
        let (Some(host), Some(token), Some(team), Some(port)) = (host, token, team, port) else {
            return Err(ConfigError::Invalid("incomplete settings".to_string()).into());
        };

        Ok(Self {
            connection: Connection {
                scheme,
                host,
                port,
                token,
            },
            team,
            age_days: cli.age,
            policy: InactivityPolicy::new(i64::from(cli.age))
                .include_deactivated(cli.include_deactivated),
            action: if cli.hard_delete {
                Action::HardDelete
            } else {
                Action::Deactivate
            },
            dry_run: cli.dry_run,
            assume_yes: cli.yes,
            page_size: file.preferences.page_size,
        })
    }
}

/// First non-blank value, flag (or env) before config file.
fn pick(flag: &Option<String>, file: &Option<String>) -> Option<String> {
    flag.iter()
        .chain(file.iter())
        .map(|v| v.trim())
        .find(|v| !v.is_empty())
        .map(str::to_string)
}
