use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

/// Public repository as returned by `/users/{login}/repos`.
///
/// Order is preserved as the API returned it; nothing re-sorts the list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub html_url: String,
    pub description: Option<String>,
}

/// Event discriminator from the `type` field of the events feed.
///
/// Only push events matter here; every other tag collapses into `Other`
/// so new event kinds on the wire never break deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum EventKind {
    #[serde(rename = "PushEvent")]
    Push,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActivityEvent {
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub payload: EventPayload,
}

/// Push payloads carry `commits`; other payload shapes deserialize to
/// the empty default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub commits: Vec<CommitRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitRef {
    pub sha: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCommitCount {
    pub date: String,
    pub count: u32,
}

/// Everything a fully successful run produced.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub login: String,
    pub repositories: Vec<Repository>,
    pub daily_commits: Vec<DailyCommitCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub login: String,
    pub repositories: Vec<Repository>,
    pub daily_commits: Vec<DailyCommitCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoListOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub login: String,
    pub repositories: Vec<Repository>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub login: String,
    pub buckets: Vec<DailyCommitCount>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_event_deserializes_with_commits() {
        let json = r#"{
            "type": "PushEvent",
            "created_at": "2024-01-01T10:30:00Z",
            "payload": {
                "push_id": 12345,
                "ref": "refs/heads/main",
                "commits": [
                    {"sha": "abc123", "message": "fix parser", "distinct": true},
                    {"sha": "def456", "message": "add tests", "distinct": true}
                ]
            }
        }"#;

        let event: ActivityEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.kind, EventKind::Push);
        assert_eq!(event.payload.commits.len(), 2);
        assert_eq!(event.payload.commits[0].sha, "abc123");
    }

    #[test]
    fn unknown_event_kind_maps_to_other() {
        let json = r#"{
            "type": "WatchEvent",
            "created_at": "2024-01-02T08:00:00Z",
            "payload": {"action": "started"}
        }"#;

        let event: ActivityEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.kind, EventKind::Other);
        assert!(event.payload.commits.is_empty());
    }

    #[test]
    fn event_without_payload_deserializes() {
        let json = r#"{"type": "ForkEvent", "created_at": "2024-01-03T00:00:00Z"}"#;
        let event: ActivityEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.kind, EventKind::Other);
        assert!(event.payload.commits.is_empty());
    }

    #[test]
    fn repository_allows_null_description() {
        let json = r#"{
            "id": 42,
            "name": "dotfiles",
            "full_name": "someone/dotfiles",
            "html_url": "https://github.com/someone/dotfiles",
            "description": null,
            "fork": false
        }"#;

        let repo: Repository = serde_json::from_str(json).unwrap();
        assert_eq!(repo.id, 42);
        assert!(repo.description.is_none());
    }
}
