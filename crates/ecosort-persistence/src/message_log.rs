//! Inbound message log backed by `logs.csv`.

use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::csvfile::{append_record, ensure_with_header};
use crate::error::Result;

const HEADER: [&str; 4] = ["timestamp", "user_id", "username", "message"];

/// Append-only log of every inbound event.
#[derive(Debug)]
pub struct MessageLog {
    path: PathBuf,
}

impl MessageLog {
    /// Open (or create) the log at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        ensure_with_header(&path, &HEADER)?;
        Ok(Self { path })
    }

    /// Append one inbound event.
    pub fn append(
        &self,
        timestamp: DateTime<Utc>,
        user_id: i64,
        username: &str,
        text: &str,
    ) -> Result<()> {
        append_record(
            &self.path,
            [
                timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
                user_id.to_string(),
                username.to_string(),
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
    fn test_append_writes_formatted_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logs.csv");
        let log = MessageLog::open(&path).unwrap();

        let ts = "2025-03-01T12:30:45Z".parse::<DateTime<Utc>>().unwrap();
        log.append(ts, 42, "alice", "выброшу пластик").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("timestamp,user_id,username,message"));
        assert_eq!(
            lines.next(),
            Some("2025-03-01 12:30:45,42,alice,выброшу пластик")
        );
    }
}
