use anyhow::Result;
use chrono::Utc;
use console::style;

use crate::model::{ActivityOutput, DailyCommitCount, SCHEMA_VERSION};

const BAR_WIDTH: usize = 40;

pub fn output_json(buckets: &[DailyCommitCount], login: &str) -> Result<()> {
    let output = ActivityOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        login: login.to_string(),
        buckets: buckets.to_vec(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn output_ndjson(buckets: &[DailyCommitCount]) -> Result<()> {
    for bucket in buckets {
        println!("{}", serde_json::to_string(bucket)?);
    }
    Ok(())
}

pub fn output_chart(buckets: &[DailyCommitCount]) -> Result<()> {
    if buckets.is_empty() {
        println!("No push activity to display");
        return Ok(());
    }

    let max_count = buckets.iter().map(|b| b.count).max().unwrap_or(1).max(1);

    println!("{}", style("Daily Commits").bold());
    println!("{}", "─".repeat(56));

    for bucket in buckets {
        let width = ((bucket.count as f64 / max_count as f64) * BAR_WIDTH as f64).round() as usize;
        println!(
            "{} {} {:>4}",
            bucket.date,
            style("█".repeat(width)).green(),
            bucket.count
        );
    }

    Ok(())
}
