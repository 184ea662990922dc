//! The per-user session record and conversation stages.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use ecosort_core::materials::seed_materials;
use ecosort_core::texts::SYSTEM_PROMPT;

use crate::history::BoundedHistory;

/// Position of a session in the conversation machine.
///
/// Exactly one stage is active at a time; every inbound message has a defined
/// transition given the current stage (see the stage machine in the telegram
/// crate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    /// First contact; no registration flow has started yet.
    Unregistered,
    /// Registration started, waiting for the user's name.
    AwaitingName,
    /// Waiting for an `HH:MM` reminder time.
    AwaitingTime,
    /// Waiting for a feedback message.
    AwaitingFeedback,
    /// Normal operation: menu commands and free-text questions.
    FreeChat,
}

/// Wall-clock time of day for the daily reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderTime {
    pub hour: u8,
    pub minute: u8,
}

impl Default for ReminderTime {
    fn default() -> Self {
        Self { hour: 9, minute: 0 }
    }
}

impl std::fmt::Display for ReminderTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// A user's conversational and statistical state.
///
/// Created lazily on the first inbound event for an unseen user id and kept
/// for the process lifetime; there is no deletion path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Stable user identifier (Telegram chat id). Immutable.
    pub user_id: i64,
    /// Display name, set once during registration.
    pub display_name: Option<String>,
    /// Current conversation stage.
    pub stage: Stage,
    /// Material counters. Open vocabulary, monotonically non-decreasing.
    pub statistics: HashMap<String, u64>,
    /// Daily reminder time, defaults to 09:00.
    pub reminder_time: ReminderTime,
    /// Bounded per-session conversation history.
    pub history: BoundedHistory,
}

impl Session {
    /// Create a fresh session in the `Unregistered` stage.
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            display_name: None,
            stage: Stage::Unregistered,
            statistics: HashMap::new(),
            reminder_time: ReminderTime::default(),
            history: BoundedHistory::with_default_cap(SYSTEM_PROMPT),
        }
    }

    /// Complete registration: record the name and activate the session.
    pub fn register(&mut self, display_name: impl Into<String>) {
        self.display_name = Some(display_name.into());
        self.activate();
    }

    /// Seed the statistics map and enter free chat.
    ///
    /// Used directly for returning users, whose `display_name` stays unset
    /// for this process lifetime.
    pub fn activate(&mut self) {
        for label in seed_materials() {
            self.statistics.entry(label.to_string()).or_insert(0);
        }
        self.stage = Stage::FreeChat;
    }

    /// Increment a material counter, inserting an unseen label at zero first.
    pub fn increment_statistic(&mut self, label: &str) {
        *self.statistics.entry(label.to_string()).or_insert(0) += 1;
    }
}
