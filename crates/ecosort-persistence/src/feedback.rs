//! Feedback sink backed by `feedback.csv`.

use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::csvfile::{append_record, ensure_with_header};
use crate::error::Result;

const HEADER: [&str; 3] = ["timestamp", "user_id", "text"];

/// Append-only store of submitted feedback, one row per message.
#[derive(Debug)]
pub struct FeedbackLog {
    path: PathBuf,
}

impl FeedbackLog {
    /// Open (or create) the sink at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        ensure_with_header(&path, &HEADER)?;
        Ok(Self { path })
    }

    /// Append one feedback message.
    pub fn append(&self, timestamp: DateTime<Utc>, user_id: i64, text: &str) -> Result<()> {
        append_record(
            &self.path,
            [
                timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
                user_id.to_string(),
                text.to_string(),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_each_submission_is_one_row() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("feedback.csv");
        let sink = FeedbackLog::open(&path).unwrap();

        let ts = Utc::now();
        sink.append(ts, 1, "отличный бот").unwrap();
        sink.append(ts, 2, "добавьте напоминания").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 3); // header + 2 rows
        assert!(content.contains("отличный бот"));
    }
}
