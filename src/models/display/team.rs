//! Team display model

use tabled::Tabled;

use crate::client::models::Team;

/// Team row shown when the requested team does not exist.
#[derive(Debug, Clone, Tabled)]
pub struct TeamDisplay {
    #[tabled(rename = "DISPLAY NAME")]
    pub display_name: String,

    /// Name to pass to `--team`
    #[tabled(rename = "NAME")]
    pub name: String,
}

impl From<&Team> for TeamDisplay {
    fn from(team: &Team) -> Self {
        Self {
            display_name: team.display_name.clone(),
            name: team.name.clone(),
        }
    }
}
