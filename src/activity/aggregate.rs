use std::collections::HashMap;

use crate::model::{ActivityEvent, DailyCommitCount, EventKind};
use crate::util::day_key;

/// Bucket push-event commits into per-day counts.
///
/// Non-push events are skipped outright. Each retained event's
/// timestamp truncates to a UTC `YYYY-MM-DD` key and contributes the
/// length of its commit list to that key; a push with no commits still
/// claims its date with a contribution of zero. The output is the
/// reverse of the order in which dates were first encountered while
/// scanning `events` front to back; it is never re-sorted by date value.
pub fn aggregate_daily_commits(events: &[ActivityEvent]) -> Vec<DailyCommitCount> {
    let mut counts: HashMap<String, u32> = HashMap::new();
    let mut first_seen: Vec<String> = Vec::new();

    for event in events {
        if event.kind != EventKind::Push {
            continue;
        }
        let day = day_key(&event.created_at);
        if !counts.contains_key(&day) {
            first_seen.push(day.clone());
        }
        *counts.entry(day).or_insert(0) += event.payload.commits.len() as u32;
    }

    first_seen
        .into_iter()
        .rev()
        .map(|date| {
            let count = counts.remove(&date).unwrap_or(0);
            DailyCommitCount { date, count }
        })
        .collect()
}
