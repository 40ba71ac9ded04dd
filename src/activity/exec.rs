use super::{aggregate_daily_commits, output_chart, output_json, output_ndjson};
use crate::cli::CommonArgs;
use crate::github::{GitHubApi, GitHubClient};
use crate::util::spinner;

pub async fn exec(common: CommonArgs, login: &str, json: bool, ndjson: bool) -> anyhow::Result<()> {
    let client = GitHubClient::new(&common.api_url)?;

    let pb = spinner(&format!("Fetching activity for {login}..."));
    let result = fetch_daily_commits(&client, login).await;
    pb.finish_and_clear();
    let buckets = result?;

    if json {
        output_json(&buckets, login)?;
    } else if ndjson {
        output_ndjson(&buckets)?;
    } else {
        output_chart(&buckets)?;
    }

    Ok(())
}

async fn fetch_daily_commits(
    api: &dyn GitHubApi,
    login: &str,
) -> crate::error::Result<Vec<crate::model::DailyCommitCount>> {
    api.check_user(login).await?;
    let events = api.list_public_events(login).await?;
    Ok(aggregate_daily_commits(&events))
}
