//! User API trait

use async_trait::async_trait;

use crate::client::models::User;
use crate::client::pagination::PageRequest;
use crate::error::Result;

/// One page of the team member collection.
#[derive(Debug, Clone)]
pub enum UserPage {
    /// A page with at least one user
    Page(Vec<User>),
    /// The server answered with the empty-array sentinel
    Exhausted,
}

/// User operations for the Mattermost API
#[async_trait]
pub trait UserApi: Send + Sync {
    /// Fetch one page of a team's members, ordered by last activity.
    async fn list_team_users(&self, team_id: &str, page: &PageRequest) -> Result<UserPage>;

    /// Mark an account inactive (`PUT /users/{id}/active`). Reversible.
    async fn deactivate_user(&self, user_id: &str) -> Result<()>;

    /// Delete an account (`DELETE /users/{id}`).
    ///
    /// With `permanent` set the account and its content are purged; this
    /// requires API user deletion to be enabled on the server.
    async fn delete_user(&self, user_id: &str, permanent: bool) -> Result<()>;
}
