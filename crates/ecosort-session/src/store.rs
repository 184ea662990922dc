//! Process-wide session store with per-user mutation serialization.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::session::{ReminderTime, Session, Stage};

/// Handle to one user's session.
///
/// Holding the inner lock across an event's whole processing (including the
/// suspension on the completion call) gives strict per-user ordering: a
/// second event from the same user queues on the mutex instead of racing the
/// first one's read-modify-write. Events for different users only contend on
/// the brief outer map lock.
pub type SessionHandle = Arc<Mutex<Session>>;

/// Owned, injectable mapping from user id to session.
///
/// One instance per process, passed explicitly into the stage machine rather
/// than referenced as ambient state.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<i64, SessionHandle>>,
}

impl SessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the session for `user_id`, creating it on first contact.
    ///
    /// Idempotent: a second call for the same id returns the same handle.
    pub async fn get_or_create(&self, user_id: i64) -> SessionHandle {
        {
            let sessions = self.sessions.read().await;
            if let Some(handle) = sessions.get(&user_id) {
                return Arc::clone(handle);
            }
        }

        let mut sessions = self.sessions.write().await;
        // Another task may have created it between the two locks.
        Arc::clone(
            sessions
                .entry(user_id)
                .or_insert_with(|| Arc::new(Mutex::new(Session::new(user_id)))),
        )
    }

    /// True if a session exists for `user_id`.
    pub async fn contains(&self, user_id: i64) -> bool {
        self.sessions.read().await.contains_key(&user_id)
    }

    /// Number of live sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// True if no sessions exist yet.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Set the conversation stage for a user.
    pub async fn set_stage(&self, user_id: i64, stage: Stage) {
        let handle = self.get_or_create(user_id).await;
        handle.lock().await.stage = stage;
    }

    /// Increment a material counter for a user.
    ///
    /// Unseen labels are inserted at zero, then incremented.
    pub async fn increment_statistic(&self, user_id: i64, label: &str) {
        let handle = self.get_or_create(user_id).await;
        handle.lock().await.increment_statistic(label);
    }

    /// Set the reminder time for a user.
    pub async fn set_reminder_time(&self, user_id: i64, time: ReminderTime) {
        let handle = self.get_or_create(user_id).await;
        handle.lock().await.reminder_time = time;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_or_create_is_idempotent() {
        let store = SessionStore::new();
        assert!(store.is_empty().await);

        let first = store.get_or_create(7).await;
        first.lock().await.display_name = Some("Алиса".into());

        let second = store.get_or_create(7).await;
        assert_eq!(second.lock().await.display_name.as_deref(), Some("Алиса"));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_sessions_are_independent_per_user() {
        let store = SessionStore::new();
        store.increment_statistic(1, "plastic").await;
        store.increment_statistic(2, "glass").await;

        let one = store.get_or_create(1).await;
        let two = store.get_or_create(2).await;
        assert_eq!(one.lock().await.statistics.get("glass"), None);
        assert_eq!(two.lock().await.statistics["glass"], 1);
    }

    #[tokio::test]
    async fn test_increments_survive_interleaving() {
        let store = Arc::new(SessionStore::new());

        let mut tasks = Vec::new();
        for _ in 0..10 {
            let store = Arc::clone(&store);
            tasks.push(tokio::spawn(async move {
                store.increment_statistic(5, "plastic").await;
                store.increment_statistic(5, "glass").await;
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        let handle = store.get_or_create(5).await;
        let session = handle.lock().await;
        assert_eq!(session.statistics["plastic"], 10);
        assert_eq!(session.statistics["glass"], 10);
    }

    #[tokio::test]
    async fn test_set_stage_and_reminder() {
        let store = SessionStore::new();
        store.set_stage(3, Stage::AwaitingTime).await;
        store
            .set_reminder_time(3, ReminderTime { hour: 8, minute: 30 })
            .await;

        let handle = store.get_or_create(3).await;
        let session = handle.lock().await;
        assert_eq!(session.stage, Stage::AwaitingTime);
        assert_eq!(session.reminder_time.to_string(), "08:30");
    }
}
