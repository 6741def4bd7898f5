//! Team API trait

use async_trait::async_trait;

use crate::client::models::Team;
use crate::error::Result;

/// Team lookup operations for the Mattermost API
#[async_trait]
pub trait TeamApi: Send + Sync {
    /// Look up a team by its URL-safe name.
    ///
    /// Returns `ApiError::NotFound` when no team has that name.
    async fn get_team_by_name(&self, name: &str) -> Result<Team>;

    /// List every team visible to the token's account.
    async fn list_teams(&self) -> Result<Vec<Team>>;
}
