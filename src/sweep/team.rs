//! Team name resolution

use log::{debug, warn};

use crate::client::TeamApi;
use crate::error::{ApiError, Error, Result};

/// Resolve a team's internal ID from its name.
///
/// When no team has that name, the visible teams are fetched so the caller
/// can show them, and `Error::TeamNotFound` is returned. Any other failure
/// is passed through.
pub async fn resolve_team<A: TeamApi + ?Sized>(api: &A, name: &str) -> Result<String> {
    debug!("Retrieving Team ID for team: {}", name);

    match api.get_team_by_name(name).await {
        Ok(team) if team.id.is_empty() => Err(ApiError::InvalidResponse(format!(
            "team lookup for '{}' returned no id",
            name
        ))
        .into()),
        Ok(team) => Ok(team.id),
        Err(Error::Api(ApiError::NotFound(_))) => {
            let available = api.list_teams().await.unwrap_or_else(|e| {
                warn!("Unable to list available teams: {}", e);
                Vec::new()
            });
            Err(Error::TeamNotFound {
                team: name.to_string(),
                available,
            })
        }
        Err(e) => Err(e),
    }
}
