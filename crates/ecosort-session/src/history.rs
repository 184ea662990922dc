//! Bounded conversation history.

use serde::{Deserialize, Serialize};

use crate::message::{Role, Turn};

/// Default cap on user/assistant turns kept as completion context.
pub const DEFAULT_MAX_HISTORY: usize = 20;

/// Ordered log of conversation turns with a pinned leading system turn.
///
/// The buffer holds at most `cap + 1` turns: the system instruction at index
/// 0, which is never evicted, plus a sliding window over the most recent
/// user/assistant turns. Each session owns exactly one buffer; history is
/// never shared across users.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundedHistory {
    turns: Vec<Turn>,
    cap: usize,
}

impl BoundedHistory {
    /// Create a history containing only the system instruction.
    pub fn new(system_prompt: impl Into<String>, cap: usize) -> Self {
        Self {
            turns: vec![Turn::system(system_prompt)],
            cap,
        }
    }

    /// Create a history with the default cap.
    pub fn with_default_cap(system_prompt: impl Into<String>) -> Self {
        Self::new(system_prompt, DEFAULT_MAX_HISTORY)
    }

    /// Append a turn, evicting the oldest non-system turns over the cap.
    pub fn push(&mut self, turn: Turn) {
        debug_assert!(turn.role != Role::System, "system turn is set at construction");
        self.turns.push(turn);
        while self.turns.len() > self.cap + 1 {
            // Index 0 is the pinned system turn.
            self.turns.remove(1);
        }
    }

    /// The ordered sequence submitted to the completion service.
    pub fn snapshot(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of turns currently held, system turn included.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// True when only the system turn is present.
    pub fn is_empty(&self) -> bool {
        self.turns.len() == 1
    }

    /// The most recent turn, if any beyond the system instruction.
    pub fn last(&self) -> Option<&Turn> {
        if self.is_empty() {
            None
        } else {
            self.turns.last()
        }
    }
}
