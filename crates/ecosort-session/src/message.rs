//! Conversation turn types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System instruction (pinned at the start of every history).
    System,
    /// User message.
    User,
    /// Assistant (completion service) message.
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::System => write!(f, "system"),
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single turn in the conversation history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    /// Role of the sender.
    pub role: Role,

    /// Text content of the turn.
    pub content: String,

    /// Timestamp when the turn was recorded.
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    /// Create a new turn with the current timestamp.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create a system turn.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Create a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create an assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_display() {
        assert_eq!(Role::System.to_string(), "system");
        assert_eq!(Role::User.to_string(), "user");
        assert_eq!(Role::Assistant.to_string(), "assistant");
    }

    #[test]
    fn test_turn_constructors() {
        let system = Turn::system("инструкция");
        assert_eq!(system.role, Role::System);
        assert_eq!(system.content, "инструкция");

        let user = Turn::user("вопрос");
        assert_eq!(user.role, Role::User);

        let assistant = Turn::assistant("ответ");
        assert_eq!(assistant.role, Role::Assistant);
    }

    #[test]
    fn test_serialization_roles_are_lowercase() {
        let json = serde_json::to_string(&Turn::user("привет")).unwrap();
        assert!(json.contains("\"user\""));

        let parsed: Turn = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.role, Role::User);
        assert_eq!(parsed.content, "привет");
    }
}
