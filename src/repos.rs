use anyhow::Result;
use chrono::Utc;
use console::style;

use crate::cli::CommonArgs;
use crate::github::{GitHubApi, GitHubClient};
use crate::model::{RepoListOutput, Repository, SCHEMA_VERSION};
use crate::util::spinner;

pub async fn exec(common: CommonArgs, login: &str, json: bool, ndjson: bool) -> Result<()> {
    let client = GitHubClient::new(&common.api_url)?;

    let pb = spinner(&format!("Fetching repositories for {login}..."));
    let result = fetch_repositories(&client, login).await;
    pb.finish_and_clear();
    let repositories = result?;

    if json {
        output_json(&repositories, login)?;
    } else if ndjson {
        output_ndjson(&repositories)?;
    } else {
        print_repositories(&repositories);
    }

    Ok(())
}

async fn fetch_repositories(
    api: &dyn GitHubApi,
    login: &str,
) -> crate::error::Result<Vec<Repository>> {
    api.check_user(login).await?;
    api.list_repositories(login).await
}

fn output_json(repositories: &[Repository], login: &str) -> Result<()> {
    let output = RepoListOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        login: login.to_string(),
        repositories: repositories.to_vec(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_ndjson(repositories: &[Repository]) -> Result<()> {
    for repo in repositories {
        println!("{}", serde_json::to_string(repo)?);
    }
    Ok(())
}

pub fn print_repositories(repositories: &[Repository]) {
    if repositories.is_empty() {
        println!("No public repositories");
        return;
    }

    println!("{}", style("Repositories").bold());
    println!("{}", "─".repeat(56));

    for repo in repositories {
        println!("  {}  {}", style(&repo.name).cyan(), repo.html_url);
        println!(
            "      {}",
            repo.description.as_deref().unwrap_or("No description")
        );
    }

    println!("\n{} repositories", repositories.len());
}
