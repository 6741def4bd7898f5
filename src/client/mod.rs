//! Mattermost API client

use std::fmt;

pub mod api;
#[cfg(test)]
pub mod fixtures;
pub mod mattermost;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;

pub use api::{TeamApi, UserApi, UserPage};
pub use mattermost::MattermostClient;
#[cfg(test)]
pub use mock::MockMattermostClient;
pub use pagination::PageRequest;

/// Combined Mattermost API surface used by the sweep workflow.
pub trait MattermostApi: TeamApi + UserApi {}

impl<T: TeamApi + UserApi> MattermostApi for T {}

/// Where and how to reach the Mattermost server.
///
/// Built once from validated settings and shared by reference.
#[derive(Clone, PartialEq, Eq)]
pub struct Connection {
    /// `http` or `https`
    pub scheme: String,
    /// Host name, without scheme or port
    pub host: String,
    pub port: u16,
    /// Personal access or bot token
    pub token: String,
}

impl Connection {
    /// Base URL of the REST API, e.g. `https://chat.example.com:443/api/v4`.
    pub fn api_base(&self) -> String {
        format!("{}://{}:{}/api/v4", self.scheme, self.host, self.port)
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("scheme", &self.scheme)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("token", &"<redacted>")
            .finish()
    }
}
