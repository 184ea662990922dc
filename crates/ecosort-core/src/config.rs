//! Shared configuration for Ecosort.
//!
//! Provides functions to locate the Ecosort state directory and the flat
//! files used by the persistence collaborators.
//!
//! # Storage Structure
//!
//! All application data is stored under `~/.ecosort/`:
//!
//! ```text
//! ~/.ecosort/
//! ├── users.csv      # User registry (user_id, username)
//! ├── logs.csv       # Inbound message log
//! ├── feedback.csv   # Submitted feedback
//! └── rules/         # Static educational images for the rules command
//! ```
//!
//! # Environment Variables
//!
//! - `ECOSORT_STATE_DIR`: Override the base state directory
//! - `BOT_TOKEN`: Telegram bot token
//! - `LLM_API_KEY`: Bearer token for the completion service
//! - `LLM_API_URL`: Completion endpoint override
//! - `LLM_MODEL`: Model identifier override
//! - `ECOSORT_CLASSIFIER`: Classifier strategy, "keyword" (default) or "model"

use std::path::PathBuf;
use std::sync::OnceLock;

/// Environment variable for a custom state directory.
pub const STATE_DIR_ENV: &str = "ECOSORT_STATE_DIR";

/// Environment variable for the Telegram bot token.
pub const BOT_TOKEN_ENV: &str = "BOT_TOKEN";

/// Environment variable for the completion-service API key.
pub const LLM_API_KEY_ENV: &str = "LLM_API_KEY";

/// Environment variable for the completion-service endpoint.
pub const LLM_API_URL_ENV: &str = "LLM_API_URL";

/// Environment variable for the completion-service model identifier.
pub const LLM_MODEL_ENV: &str = "LLM_MODEL";

/// Environment variable selecting the classifier strategy ("keyword" or "model").
pub const CLASSIFIER_ENV: &str = "ECOSORT_CLASSIFIER";

/// Default state directory name under home.
const DEFAULT_STATE_DIR: &str = ".ecosort";

// Flat-file names under the state directory.
const USERS_FILE: &str = "users.csv";
const LOGS_FILE: &str = "logs.csv";
const FEEDBACK_FILE: &str = "feedback.csv";
const RULES_SUBDIR: &str = "rules";

static STATE_DIR_CACHE: OnceLock<PathBuf> = OnceLock::new();

/// Get the Ecosort state directory.
///
/// The state directory is determined by:
/// 1. `ECOSORT_STATE_DIR` environment variable if set
/// 2. `~/.ecosort` if home directory is available
/// 3. `.ecosort` in current directory as fallback
pub fn state_dir() -> PathBuf {
    STATE_DIR_CACHE
        .get_or_init(|| {
            std::env::var(STATE_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|_| {
                    dirs::home_dir()
                        .map(|h| h.join(DEFAULT_STATE_DIR))
                        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_DIR))
                })
        })
        .clone()
}

/// Path of the user registry file.
pub fn users_file() -> PathBuf {
    state_dir().join(USERS_FILE)
}

/// Path of the inbound message log.
pub fn logs_file() -> PathBuf {
    state_dir().join(LOGS_FILE)
}

/// Path of the feedback sink file.
pub fn feedback_file() -> PathBuf {
    state_dir().join(FEEDBACK_FILE)
}

/// Directory holding the static sorting-rules images.
pub fn rules_dir() -> PathBuf {
    state_dir().join(RULES_SUBDIR)
}

/// Ensure the state directory (and the rules subdirectory) exists.
pub fn ensure_state_dir() -> std::io::Result<()> {
    std::fs::create_dir_all(rules_dir())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_paths_live_under_state_dir() {
        let base = state_dir();
        assert!(users_file().starts_with(&base));
        assert!(logs_file().starts_with(&base));
        assert!(feedback_file().starts_with(&base));
        assert!(rules_dir().starts_with(&base));
    }

    #[test]
    fn test_file_names() {
        assert_eq!(users_file().file_name().unwrap(), "users.csv");
        assert_eq!(logs_file().file_name().unwrap(), "logs.csv");
        assert_eq!(feedback_file().file_name().unwrap(), "feedback.csv");
    }
}
