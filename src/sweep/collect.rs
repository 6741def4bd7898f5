//! Page-by-page collection of inactive team members

use chrono::{DateTime, Utc};
use log::{debug, info};

use super::candidates::CandidateSet;
use super::filter::{InactivityPolicy, Verdict};
use crate::client::{PageRequest, UserApi, UserPage};
use crate::error::Result;

/// Counters for the users seen on one page, or summed over a sweep.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PageStats {
    pub scanned: usize,
    pub included: usize,
    pub admins: usize,
    pub deactivated: usize,
    pub recent: usize,
}

impl PageStats {
    fn absorb(&mut self, other: PageStats) {
        self.scanned += other.scanned;
        self.included += other.included;
        self.admins += other.admins;
        self.deactivated += other.deactivated;
        self.recent += other.recent;
    }
}

/// Result of fetching one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    /// The page had users; the next page may have more
    More(PageStats),
    /// The collection is exhausted
    Exhausted,
}

/// Everything a completed sweep found.
#[derive(Debug, Clone, Default)]
pub struct Sweep {
    pub candidates: CandidateSet,
    /// Number of non-empty pages fetched
    pub pages: usize,
    pub stats: PageStats,
}

/// Fetch one page of team members and add the selected ones to `candidates`.
///
/// A page whose users are all filtered out still reports `More`; only the
/// empty-array sentinel ends the walk. Errors abort the page.
pub async fn fetch_page<A: UserApi + ?Sized>(
    api: &A,
    team_id: &str,
    request: &PageRequest,
    candidates: &mut CandidateSet,
    policy: &InactivityPolicy,
    now: DateTime<Utc>,
) -> Result<PageStatus> {
    debug!("Getting users page: {}", request.page);

    let users = match api.list_team_users(team_id, request).await? {
        UserPage::Exhausted => return Ok(PageStatus::Exhausted),
        UserPage::Page(users) => users,
    };

    let mut stats = PageStats {
        scanned: users.len(),
        ..PageStats::default()
    };

    for user in &users {
        match policy.evaluate(user, now) {
            Verdict::Include(candidate) => {
                stats.included += 1;
                candidates.insert(candidate);
            }
            Verdict::SystemAdmin => {
                info!("Skipping user {}: user is a system admin", user.username);
                stats.admins += 1;
            }
            Verdict::Deactivated => {
                debug!("Skipping user {}: already deactivated", user.username);
                stats.deactivated += 1;
            }
            Verdict::Recent { days_inactive } => {
                debug!("Skipping user {}: active {} days ago", user.username, days_inactive);
                stats.recent += 1;
            }
        }
    }

    Ok(PageStatus::More(stats))
}

/// Walk every page of the team's members from page 0 until exhaustion.
pub async fn collect_candidates<A: UserApi + ?Sized>(
    api: &A,
    team_id: &str,
    policy: &InactivityPolicy,
    page_size: usize,
    now: DateTime<Utc>,
) -> Result<Sweep> {
    let mut sweep = Sweep::default();
    let mut request = PageRequest::new(0).page_size(page_size);

    loop {
        match fetch_page(api, team_id, &request, &mut sweep.candidates, policy, now).await? {
            PageStatus::Exhausted => {
                debug!("No more users to process.");
                break;
            }
            PageStatus::More(stats) => {
                debug!(
                    "Processed page {}: {} users, {} selected",
                    request.page, stats.scanned, stats.included
                );
                sweep.pages += 1;
                sweep.stats.absorb(stats);
                request = request.next();
            }
        }
    }

    Ok(sweep)
}
