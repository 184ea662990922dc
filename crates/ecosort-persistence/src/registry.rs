//! Append-only user registry backed by `users.csv`.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::{debug, info};

use crate::csvfile::{append_record, ensure_with_header};
use crate::error::Result;

const HEADER: [&str; 2] = ["user_id", "username"];

/// Persistent record of every user who has ever contacted the bot.
///
/// Rows are never rewritten or removed; membership is cached in memory after
/// the initial load, so the reply path does not reread the file per event.
#[derive(Debug)]
pub struct UserRegistry {
    path: PathBuf,
    known: RwLock<HashSet<i64>>,
}

impl UserRegistry {
    /// Open (or create) the registry at `path` and load the known user ids.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        ensure_with_header(&path, &HEADER)?;
        let known = load_known_ids(&path)?;
        info!(count = known.len(), path = %path.display(), "User registry loaded");

        Ok(Self {
            path,
            known: RwLock::new(known),
        })
    }

    /// True if the user has been registered before.
    pub fn contains(&self, user_id: i64) -> bool {
        self.known
            .read()
            .map(|known| known.contains(&user_id))
            .unwrap_or(false)
    }

    /// Record a new user. Idempotent: returns `false` if already present.
    pub fn register(&self, user_id: i64, username: &str) -> Result<bool> {
        {
            let known = self.known.read().unwrap_or_else(|e| e.into_inner());
            if known.contains(&user_id) {
                return Ok(false);
            }
        }

        append_record(&self.path, [user_id.to_string(), username.to_string()])?;
        self.known
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(user_id);

        debug!(user_id = %user_id, username = %username, "User registered");
        Ok(true)
    }

    /// Number of registered users.
    pub fn len(&self) -> usize {
        self.known
            .read()
            .map(|known| known.len())
            .unwrap_or(0)
    }

    /// True if no user has registered yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn load_known_ids(path: &Path) -> Result<HashSet<i64>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut known = HashSet::new();
    for record in reader.records() {
        let record = record?;
        if let Some(id) = record.get(0).and_then(|f| f.parse::<i64>().ok()) {
            known.insert(id);
        }
    }
    Ok(known)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_register_and_contains() {
        let dir = tempdir().unwrap();
        let registry = UserRegistry::open(dir.path().join("users.csv")).unwrap();

        assert!(!registry.contains(100));
        assert!(registry.register(100, "alice").unwrap());
        assert!(registry.contains(100));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_register_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("users.csv");
        let registry = UserRegistry::open(&path).unwrap();

        assert!(registry.register(100, "alice").unwrap());
        assert!(!registry.register(100, "alice").unwrap());

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches("100").count(), 1);
    }

    #[test]
    fn test_known_ids_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("users.csv");

        {
            let registry = UserRegistry::open(&path).unwrap();
            registry.register(1, "alice").unwrap();
            registry.register(2, "Anonymous").unwrap();
        }

        let reopened = UserRegistry::open(&path).unwrap();
        assert!(reopened.contains(1));
        assert!(reopened.contains(2));
        assert!(!reopened.contains(3));
    }
}
