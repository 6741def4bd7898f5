//! Mattermost REST client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, RequestBuilder, Response, StatusCode, Url};
use serde::Deserialize;

use super::api::{TeamApi, UserApi, UserPage};
use super::models::{ActiveStatusRequest, Team, User};
use super::pagination::{PageRequest, is_exhausted_body};
use super::Connection;
use crate::error::{ApiError, ConfigError, Result};

/// Per-request timeout
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Error payload Mattermost attaches to non-2xx responses
#[derive(Deserialize)]
struct AppError {
    message: String,
}

/// Mattermost API client
pub struct MattermostClient {
    http: HttpClient,
    base_url: Url,
    token: String,
}

impl MattermostClient {
    /// Create a client for the given connection.
    pub fn new(connection: &Connection) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("mm-inactive/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let api_base = connection.api_base();
        let base_url = Url::parse(&api_base).map_err(|e| {
            ConfigError::Invalid(format!("invalid server address '{}': {}", api_base, e))
        })?;

        Ok(Self {
            http,
            base_url,
            token: connection.token.clone(),
        })
    }

    /// Build an endpoint URL; each segment is percent-encoded on its own.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ConfigError::Invalid(format!("cannot build API paths from {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Attach the bearer token, send, and map the status code.
    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request
            .header("Authorization", format!("Bearer {}", self.token))
            .send()
            .await
            .map_err(ApiError::from)?;

        check_status(response).await
    }
}

/// Turn any non-200 response into an `ApiError`.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status == StatusCode::OK {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<AppError>(&body)
        .map(|e| e.message)
        .unwrap_or_else(|_| status.to_string());

    let err = match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::FORBIDDEN => ApiError::Forbidden,
        StatusCode::NOT_FOUND => ApiError::NotFound(message),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ApiError::BadRequest(message),
        s if s.is_server_error() => ApiError::ServerError(message),
        _ => ApiError::InvalidResponse(format!("Unexpected status code: {}", status)),
    };
    Err(err.into())
}

#[async_trait]
impl TeamApi for MattermostClient {
    async fn get_team_by_name(&self, name: &str) -> Result<Team> {
        let url = self.endpoint(&["teams", "name", name])?;
        debug!("Teams lookup URL: {}", url);

        let response = self.send(self.http.get(url)).await?;
        let team = response.json::<Team>().await.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse team response: {}", e))
        })?;
        Ok(team)
    }

    async fn list_teams(&self) -> Result<Vec<Team>> {
        let url = self.endpoint(&["teams"])?;
        debug!("Teams list URL: {}", url);

        let response = self.send(self.http.get(url)).await?;
        let teams = response.json::<Vec<Team>>().await.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse team list: {}", e))
        })?;
        Ok(teams)
    }
}

#[async_trait]
impl UserApi for MattermostClient {
    async fn list_team_users(&self, team_id: &str, page: &PageRequest) -> Result<UserPage> {
        let url = self.endpoint(&["users"])?;
        let query = page.to_query_params(team_id);
        debug!("Users lookup URL: {} {:?}", url, query);

        let response = self.send(self.http.get(url).query(&query)).await?;
        let body = response.text().await.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to read users page {}: {}", page.page, e))
        })?;

        if is_exhausted_body(&body) {
            return Ok(UserPage::Exhausted);
        }

        let users: Vec<User> = serde_json::from_str(&body).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse users page {}: {}", page.page, e))
        })?;
        Ok(UserPage::Page(users))
    }

    async fn deactivate_user(&self, user_id: &str) -> Result<()> {
        let url = self.endpoint(&["users", user_id, "active"])?;
        debug!("Deactivate URL: {}", url);

        self.send(
            self.http
                .put(url)
                .json(&ActiveStatusRequest { active: false }),
        )
        .await?;
        Ok(())
    }

    async fn delete_user(&self, user_id: &str, permanent: bool) -> Result<()> {
        let url = self.endpoint(&["users", user_id])?;
        debug!("Delete URL: {} (permanent={})", url, permanent);

        let mut request = self.http.delete(url);
        if permanent {
            request = request.query(&[("permanent", "true")]);
        }
        self.send(request).await?;
        Ok(())
    }
}
