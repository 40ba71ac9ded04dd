use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::error::PulseError;
use crate::github::client::DEFAULT_API_URL;

#[derive(Parser)]
#[command(name = "ghpulse")]
#[command(about = "GitHub user analysis tool for repository listings and daily commit charts")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, help = "GitHub API base URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch repositories and events, show the list and commit chart
    Analyze {
        #[arg(help = "GitHub username to analyze")]
        username: String,

        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,
    },
    /// List the user's public repositories
    Repos {
        #[arg(help = "GitHub username")]
        username: String,

        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,
    },
    /// Show the daily commit chart only
    Activity {
        #[arg(help = "GitHub username")]
        username: String,

        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Analyze { username, json, ndjson } => {
                crate::analyze::exec(self.common, validated(&username)?, json, ndjson).await
            }
            Commands::Repos { username, json, ndjson } => {
                crate::repos::exec(self.common, validated(&username)?, json, ndjson).await
            }
            Commands::Activity { username, json, ndjson } => {
                crate::activity::exec(self.common, validated(&username)?, json, ndjson).await
            }
        }
    }
}

/// The username is passed through as-is; only the empty string is
/// refused, before any network call.
fn validated(username: &str) -> crate::error::Result<&str> {
    if username.is_empty() {
        return Err(PulseError::EmptyUsername);
    }
    Ok(username)
}
