//! The inactive-user run: resolve, collect, review, confirm, act

use std::io::{self, IsTerminal, Write};

use chrono::Utc;
use colored::Colorize;
use log::{debug, info};

use super::context::CommandContext;
use super::prompt::{LinePrompter, Prompter, TerminalPrompter};
use super::review::{self, Console, list_candidates};
use super::settings::Settings;
use crate::client::MattermostApi;
use crate::client::models::Team;
use crate::error::{Error, Result};
use crate::models::{FailureDisplay, TeamDisplay};
use crate::output::format_table;
use crate::sweep::{DispatchReport, collect_candidates, dispatch, resolve_team};

/// How a run ended, short of an error.
#[derive(Debug)]
pub enum SweepOutcome {
    /// Nobody met the inactivity threshold
    NoCandidates,
    /// Dry run: candidates were listed and left alone
    Reported { candidates: usize },
    /// The operator declined
    Aborted,
    /// Actions were attempted for every candidate
    Dispatched(DispatchReport),
}

/// Run against the configured server on the process's own terminal.
pub async fn execute(ctx: &CommandContext) -> Result<SweepOutcome> {
    let attended = io::stdin().is_terminal() && io::stdout().is_terminal();
    debug!("Interactive terminal: {}", attended);

    let mut prompter: Box<dyn Prompter> = if attended {
        Box::new(TerminalPrompter)
    } else {
        Box::new(LinePrompter::stdio())
    };
    let mut stdout = io::stdout();
    let mut console = Console {
        out: &mut stdout,
        prompter: prompter.as_mut(),
        page_height: review::page_height(),
    };

    run(&ctx.client, &ctx.settings, &mut console).await
}

/// Find the team's inactive users and act on them as `settings` direct.
pub async fn run<A: MattermostApi + ?Sized>(
    api: &A,
    settings: &Settings,
    console: &mut Console<'_>,
) -> Result<SweepOutcome> {
    let team_id = match resolve_team(api, &settings.team).await {
        Ok(id) => id,
        Err(Error::TeamNotFound { team, available }) => {
            show_available_teams(&team, &available, console.out)?;
            return Err(Error::TeamNotFound { team, available });
        }
        Err(e) => return Err(e),
    };
    debug!("Team ID for '{}': {}", settings.team, team_id);

    let sweep = collect_candidates(
        api,
        &team_id,
        &settings.policy,
        settings.page_size,
        Utc::now(),
    )
    .await?;
    info!(
        "Reviewed {} users on {} pages: {} inactive, {} admins skipped, {} deactivated skipped, {} recently active",
        sweep.stats.scanned,
        sweep.pages,
        sweep.candidates.len(),
        sweep.stats.admins,
        sweep.stats.deactivated,
        sweep.stats.recent
    );

    let candidates = &sweep.candidates;
    if candidates.is_empty() {
        info!(
            "No users found that have been inactive for more than {} days",
            settings.age_days
        );
        return Ok(SweepOutcome::NoCandidates);
    }

    if settings.dry_run {
        info!("Running in dry-run mode.  Writing list of identified users to the terminal.");
        list_candidates(candidates, console)?;
        return Ok(SweepOutcome::Reported {
            candidates: candidates.len(),
        });
    }

    if !settings.assume_yes {
        let prompt = format!(
            "{} users identified as inactive.  {} them? (Y)es/(N)o/(L)ist",
            candidates.len(),
            settings.action.verb()
        );
        loop {
            match console.prompter.keypress(&prompt, &['Y', 'N', 'L'])? {
                'Y' => break,
                'N' => {
                    info!("Exiting without changes");
                    return Ok(SweepOutcome::Aborted);
                }
                _ => {
                    list_candidates(candidates, console)?;
                }
            }
        }
    }

    let report = dispatch(api, candidates, settings.action).await;
    write_report(&report, console.out)?;
    Ok(SweepOutcome::Dispatched(report))
}

fn show_available_teams(team: &str, available: &[Team], out: &mut dyn Write) -> Result<()> {
    let rows: Vec<TeamDisplay> = available.iter().map(TeamDisplay::from).collect();
    writeln!(out, "Team '{}' not found. Available teams:", team)?;
    writeln!(out, "{}", format_table(&rows, "No teams visible to this token."))?;
    out.flush()?;
    Ok(())
}

fn write_report(report: &DispatchReport, out: &mut dyn Write) -> Result<()> {
    writeln!(
        out,
        "{} {} users {}",
        "✓".green(),
        report.succeeded(),
        report.action.past_tense()
    )?;

    let failures: Vec<FailureDisplay> = report
        .outcomes
        .iter()
        .filter_map(FailureDisplay::from_outcome)
        .collect();
    if !failures.is_empty() {
        writeln!(
            out,
            "{} {} users could not be {}:",
            "⚠".yellow(),
            failures.len(),
            report.action.past_tense()
        )?;
        writeln!(out, "{}", format_table(&failures, ""))?;
    }
    out.flush()?;
    Ok(())
}
