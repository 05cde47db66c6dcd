// ABOUTME: GitHub REST client - repository lookup and creation with basic auth

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::Visibility;
use crate::error::SessionError;

const GITHUB_API: &str = "https://api.github.com";

/// Creation payload for `POST /user/repos`.
#[derive(Serialize, Debug)]
pub struct CreateRepoRequest {
    pub name: String,
    pub description: String,
    pub private: bool,
}

/// The slice of GitHub's repository object we care about.
///
/// `created_at` doubles as the success indicator for creation: a 2xx
/// body without it is treated as a failed create.
#[derive(Deserialize, Debug, Clone)]
pub struct RepoInfo {
    pub name: String,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub private: Option<bool>,
}

/// Whether the resolver found the repository or had to create it.
#[derive(Debug, Clone)]
pub enum RepoResolution {
    Existing(RepoInfo),
    Created(RepoInfo),
}

impl RepoResolution {
    pub fn info(&self) -> &RepoInfo {
        match self {
            RepoResolution::Existing(info) | RepoResolution::Created(info) => info,
        }
    }
}

/// Blocking client for the two calls the flow needs. Holds the
/// credentials so every request carries basic auth.
pub struct GithubClient {
    client: Client,
    api_base: String,
    username: String,
    token: String,
}

impl GithubClient {
    pub fn new(username: &str, token: &str) -> Result<Self, SessionError> {
        // GitHub rejects requests without a User-Agent.
        let client = Client::builder()
            .user_agent(concat!("gitship/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SessionError::Unexpected(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_base: GITHUB_API.to_string(),
            username: username.to_string(),
            token: token.to_string(),
        })
    }

    /// Point the client at a different API base (for testing).
    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = api_base.trim_end_matches('/').to_string();
        self
    }

    /// Look the repository up under the authenticated account; create
    /// it if the lookup comes back 404. An existing repository is
    /// reused as-is - description and visibility are not reconciled.
    pub fn resolve_repo(
        &self,
        name: &str,
        description: &str,
        visibility: Visibility,
    ) -> Result<RepoResolution, SessionError> {
        let url = format!("{}/repos/{}/{}", self.api_base, self.username, name);
        debug!("Checking for existing repository: {}/{}", self.username, name);

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.username, Some(&self.token))
            .send()?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                info!("Repository '{}' not found, creating it", name);
                self.create_repo(name, description, visibility)
                    .map(RepoResolution::Created)
            }
            status if status.is_success() => {
                let info: RepoInfo = response.json()?;
                info!("Repository '{}' already exists, reusing it", info.name);
                Ok(RepoResolution::Existing(info))
            }
            status => {
                let body = response.text().unwrap_or_default();
                Err(SessionError::Unexpected(format!(
                    "repository lookup failed: {status} - {body}"
                )))
            }
        }
    }

    fn create_repo(
        &self,
        name: &str,
        description: &str,
        visibility: Visibility,
    ) -> Result<RepoInfo, SessionError> {
        let url = format!("{}/user/repos", self.api_base);
        let payload = CreateRepoRequest {
            name: name.to_string(),
            description: description.to_string(),
            private: visibility.is_private(),
        };

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.username, Some(&self.token))
            .json(&payload)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(SessionError::RepoCreationFailed(format!("{status} - {body}")));
        }

        let info: RepoInfo = response
            .json()
            .map_err(|e| SessionError::RepoCreationFailed(format!("unreadable response: {e}")))?;
        validate_created(info)
    }
}

/// A creation response without a timestamp means GitHub did not
/// actually create anything, whatever the status code said.
fn validate_created(info: RepoInfo) -> Result<RepoInfo, SessionError> {
    if info.created_at.is_none() {
        return Err(SessionError::RepoCreationFailed(
            "response has no creation timestamp".to_string(),
        ));
    }
    info!("Created repository '{}'", info.name);
    Ok(info)
}
