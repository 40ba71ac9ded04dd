use anyhow::Context;
use chrono::Utc;

use crate::activity::{aggregate_daily_commits, output_chart};
use crate::cli::CommonArgs;
use crate::error::Result;
use crate::github::{GitHubApi, GitHubClient};
use crate::model::{AnalysisOutput, AnalysisReport, SCHEMA_VERSION};
use crate::repos::print_repositories;
use crate::util::spinner;

pub async fn exec(common: CommonArgs, login: &str, json: bool, ndjson: bool) -> anyhow::Result<()> {
    let client = GitHubClient::new(&common.api_url)?;

    let pb = spinner(&format!("Analyzing {login}..."));
    let result = run(&client, login).await;
    pb.finish_and_clear();
    let report = result?;

    if json {
        output_json(&report)?;
    } else if ndjson {
        output_ndjson(&report)?;
    } else {
        print_repositories(&report.repositories);
        println!();
        output_chart(&report.daily_commits)?;
    }

    Ok(())
}

/// The full analysis pipeline, in its fixed order: existence check,
/// repositories, events, aggregation. The first failing stage aborts
/// the run and nothing fetched before it survives.
pub async fn run(api: &dyn GitHubApi, login: &str) -> Result<AnalysisReport> {
    api.check_user(login).await?;
    let repositories = api.list_repositories(login).await?;
    let events = api.list_public_events(login).await?;
    let daily_commits = aggregate_daily_commits(&events);

    Ok(AnalysisReport {
        login: login.to_string(),
        repositories,
        daily_commits,
    })
}

fn output_json(report: &AnalysisReport) -> anyhow::Result<()> {
    let output = AnalysisOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        login: report.login.clone(),
        repositories: report.repositories.clone(),
        daily_commits: report.daily_commits.clone(),
    };

    println!(
        "{}",
        serde_json::to_string_pretty(&output).context("Failed to encode analysis output")?
    );
    Ok(())
}

fn output_ndjson(report: &AnalysisReport) -> anyhow::Result<()> {
    for repo in &report.repositories {
        println!("{}", serde_json::to_string(repo)?);
    }
    for bucket in &report.daily_commits {
        println!("{}", serde_json::to_string(bucket)?);
    }
    Ok(())
}
