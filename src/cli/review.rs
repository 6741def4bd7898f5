//! Paged review listing of candidates

use std::io::Write;

use console::Term;

use super::prompt::Prompter;
use crate::error::Result;
use crate::sweep::CandidateSet;

/// Rows assumed when the terminal size cannot be read
pub const DEFAULT_TERMINAL_ROWS: usize = 24;

/// Shown at every page break
pub const PAGE_PROMPT: &str = "Enter 'Q' to quit, or 'enter' key to continue...";

/// Where listings and prompts go.
pub struct Console<'a> {
    pub out: &'a mut dyn Write,
    pub prompter: &'a mut dyn Prompter,
    /// Lines per page before pausing
    pub page_height: usize,
}

/// Lines per page for the attached terminal, leaving room for the prompt.
pub fn page_height() -> usize {
    let rows = Term::stdout()
        .size_checked()
        .map(|(rows, _)| usize::from(rows))
        .unwrap_or(DEFAULT_TERMINAL_ROWS);
    rows.saturating_sub(1).max(2)
}

/// Write every candidate, one per line, pausing each time a page fills.
///
/// Stopping early with `Q` leaves the candidates untouched. Returns the
/// number of candidates written.
pub fn list_candidates(candidates: &CandidateSet, console: &mut Console<'_>) -> Result<usize> {
    writeln!(console.out)?;
    writeln!(console.out, "Identified Users")?;
    writeln!(console.out, "================")?;
    writeln!(console.out)?;

    let page_height = console.page_height.max(2);
    // Counting starts at 2 for the header
    let mut line = 2;
    let mut shown = 0;

    for candidate in candidates.listing() {
        writeln!(console.out, "{}", candidate.summary_line())?;
        shown += 1;
        line += 1;

        if line % page_height == 0 {
            console.out.flush()?;
            if !console.prompter.pause(PAGE_PROMPT)? {
                break;
            }
        }
    }

    writeln!(console.out)?;
    writeln!(console.out, "Total users identified: {}", candidates.len())?;
    writeln!(console.out)?;
    console.out.flush()?;

    Ok(shown)
}
