//! Campaign submission sink

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::state::Campaign;

/// Where validated campaigns go after the form signs off on them.
///
/// The controller only ever sees this trait; production wires in
/// `FileSubmitter`, tests substitute a mock to observe (or forbid) calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CampaignSubmitter: Send + Sync {
    /// Record one validated campaign, returning its submission id
    async fn submit(&self, campaign: &Campaign) -> Result<String>;
}

/// One line of the submissions file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub campaign: Campaign,
}

/// Appends each submission as a JSON line to a local file
#[derive(Debug, Clone)]
pub struct FileSubmitter {
    path: PathBuf,
}

impl FileSubmitter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl CampaignSubmitter for FileSubmitter {
    async fn submit(&self, campaign: &Campaign) -> Result<String> {
        let record = SubmissionRecord {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            campaign: campaign.clone(),
        };
        let line = serde_json::to_string(&record).context("failed to serialize submission")?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("failed to open {}", self.path.display()))?;
        writeln!(file, "{line}")
            .with_context(|| format!("failed to append to {}", self.path.display()))?;

        Ok(record.id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn campaign() -> Campaign {
        Campaign {
            name: "Winter Clearance".to_string(),
            description: String::new(),
            budget: Some(1200),
            start_date: NaiveDate::from_ymd_opt(2026, 12, 1),
            end_date: None,
        }
    }

    fn read_records(path: &std::path::Path) -> Vec<SubmissionRecord> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_submit_appends_one_parseable_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("submissions.jsonl");
        let submitter = FileSubmitter::new(path.clone());

        let id = tokio_test::block_on(submitter.submit(&campaign())).unwrap();

        let records = read_records(&path);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id.to_string(), id);
        assert_eq!(records[0].campaign, campaign());
    }

    #[test]
    fn test_each_submission_gets_a_distinct_id() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("submissions.jsonl");
        let submitter = FileSubmitter::new(path.clone());

        let first = tokio_test::block_on(submitter.submit(&campaign())).unwrap();
        let second = tokio_test::block_on(submitter.submit(&campaign())).unwrap();

        assert_ne!(first, second);
        assert_eq!(read_records(&path).len(), 2);
    }
}
