use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};

use super::GitHubApi;
use crate::error::{PulseError, Result};
use crate::model::{ActivityEvent, Repository};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("ghpulse/", env!("CARGO_PKG_VERSION"));
const GITHUB_JSON: &str = "application/vnd.github+json";

/// Unauthenticated client over the public GitHub REST API.
pub struct GitHubClient {
    http: Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response> {
        log::debug!("GET {url}");
        let response = self.http.get(url).header(ACCEPT, GITHUB_JSON).send().await?;
        log::debug!("{} -> {}", url, response.status());
        Ok(response)
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn check_user(&self, login: &str) -> Result<()> {
        let url = self.api_url(&format!("/users/{login}"));
        let response = self.get(&url).await?;
        match response.status() {
            StatusCode::NOT_FOUND => Err(PulseError::UserNotFound(login.to_string())),
            status if status.is_success() => Ok(()),
            status => Err(PulseError::FetchUser(status)),
        }
    }

    async fn list_repositories(&self, login: &str) -> Result<Vec<Repository>> {
        let url = self.api_url(&format!("/users/{login}/repos"));
        let response = self.get(&url).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PulseError::FetchRepositories(status));
        }
        Ok(response.json().await?)
    }

    async fn list_public_events(&self, login: &str) -> Result<Vec<ActivityEvent>> {
        let url = self.api_url(&format!("/users/{login}/events/public"));
        let response = self.get(&url).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PulseError::FetchEvents(status));
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_joins_without_double_slash() {
        let client = GitHubClient::new("https://api.github.com/").unwrap();
        assert_eq!(
            client.api_url("/users/octocat"),
            "https://api.github.com/users/octocat"
        );
    }
}
