//! Mock Mattermost API client for testing
//!
//! Provides a mock implementation of the API traits for unit testing
//! without making real API calls.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::api::{TeamApi, UserApi, UserPage};
use super::models::{Team, User};
use super::pagination::PageRequest;
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockMattermostClient::new()
///     .with_team(Team { id: "t1".into(), name: "eng".into(), display_name: "Eng".into() })
///     .await
///     .with_user_pages(vec![vec![user]])
///     .await;
/// ```
#[derive(Default)]
pub struct MockMattermostClient {
    /// Teams known to get_team_by_name and list_teams
    teams: Arc<Mutex<Vec<Team>>>,
    /// Pages returned by list_team_users; past the end the mock answers Exhausted
    user_pages: Arc<Mutex<Vec<Vec<User>>>>,
    /// Page index that fails with a server error
    failing_page: Arc<Mutex<Option<usize>>>,
    /// Whether list_teams fails
    list_teams_fails: Arc<Mutex<bool>>,
    /// User IDs whose deactivate/delete calls fail
    failing_users: Arc<Mutex<HashSet<String>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured account actions for test assertions
    actions: Arc<Mutex<Vec<CapturedAction>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub get_team_by_name: usize,
    pub list_teams: usize,
    pub list_team_users: usize,
    pub deactivate_user: usize,
    pub delete_user: usize,
}

impl CallCounts {
    /// Number of mutating calls made.
    pub fn mutations(&self) -> usize {
        self.deactivate_user + self.delete_user
    }
}

/// A captured account action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapturedAction {
    Deactivate(String),
    Delete { user_id: String, permanent: bool },
}

impl MockMattermostClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a team.
    pub async fn with_team(self, team: Team) -> Self {
        self.teams.lock().await.push(team);
        self
    }

    /// Configure member pages. Page 0 returns pages[0], page 1 returns pages[1], etc.
    pub async fn with_user_pages(self, pages: Vec<Vec<User>>) -> Self {
        *self.user_pages.lock().await = pages;
        self
    }

    /// Make the given page fail with a server error.
    pub async fn with_failing_page(self, page: usize) -> Self {
        *self.failing_page.lock().await = Some(page);
        self
    }

    /// Make list_teams fail.
    pub async fn with_failing_team_list(self) -> Self {
        *self.list_teams_fails.lock().await = true;
        self
    }

    /// Make actions against this user fail.
    pub async fn with_failing_user(self, user_id: &str) -> Self {
        self.failing_users.lock().await.insert(user_id.to_string());
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get all captured account actions, in call order.
    pub async fn captured_actions(&self) -> Vec<CapturedAction> {
        self.actions.lock().await.clone()
    }

    async fn check_user(&self, user_id: &str) -> Result<()> {
        if self.failing_users.lock().await.contains(user_id) {
            return Err(ApiError::ServerError(format!("cannot update {}", user_id)).into());
        }
        Ok(())
    }
}

#[async_trait]
impl TeamApi for MockMattermostClient {
    async fn get_team_by_name(&self, name: &str) -> Result<Team> {
        self.call_count.lock().await.get_team_by_name += 1;

        self.teams
            .lock()
            .await
            .iter()
            .find(|t| t.name == name)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("team {}", name)).into())
    }

    async fn list_teams(&self) -> Result<Vec<Team>> {
        self.call_count.lock().await.list_teams += 1;

        if *self.list_teams_fails.lock().await {
            return Err(ApiError::Forbidden.into());
        }
        Ok(self.teams.lock().await.clone())
    }
}

#[async_trait]
impl UserApi for MockMattermostClient {
    async fn list_team_users(&self, _team_id: &str, page: &PageRequest) -> Result<UserPage> {
        self.call_count.lock().await.list_team_users += 1;

        if *self.failing_page.lock().await == Some(page.page) {
            return Err(ApiError::ServerError("page unavailable".to_string()).into());
        }

        let pages = self.user_pages.lock().await;
        Ok(match pages.get(page.page) {
            Some(users) if !users.is_empty() => UserPage::Page(users.clone()),
            _ => UserPage::Exhausted,
        })
    }

    async fn deactivate_user(&self, user_id: &str) -> Result<()> {
        self.call_count.lock().await.deactivate_user += 1;
        self.actions
            .lock()
            .await
            .push(CapturedAction::Deactivate(user_id.to_string()));
        self.check_user(user_id).await
    }

    async fn delete_user(&self, user_id: &str, permanent: bool) -> Result<()> {
        self.call_count.lock().await.delete_user += 1;
        self.actions.lock().await.push(CapturedAction::Delete {
            user_id: user_id.to_string(),
            permanent,
        });
        self.check_user(user_id).await
    }
}
