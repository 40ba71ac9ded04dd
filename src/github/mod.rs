pub mod client;

pub use client::GitHubClient;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::Result;
use crate::model::{ActivityEvent, Repository};

/// The three read-only endpoints the analysis pipeline consumes.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// Confirm `login` resolves to a real account. 404 maps to
    /// `PulseError::UserNotFound`.
    async fn check_user(&self, login: &str) -> Result<()>;

    async fn list_repositories(&self, login: &str) -> Result<Vec<Repository>>;

    /// First page of the public events feed, as the API returns it.
    async fn list_public_events(&self, login: &str) -> Result<Vec<ActivityEvent>>;
}
