//! Error types for the Telegram bot.

use thiserror::Error;

/// Errors that can occur while starting or running the bot.
#[derive(Debug, Error)]
pub enum BotError {
    /// Bot token not provided.
    #[error("Telegram bot token not set. Set the BOT_TOKEN environment variable.")]
    NoToken,

    /// Failed to start the bot.
    #[error("Failed to start bot: {0}")]
    BotStartFailed(String),

    /// Completion-service configuration failed at startup.
    #[error("Completion service error: {0}")]
    Gateway(#[from] ecosort_agent::GatewayError),

    /// Flat-file persistence failed at startup.
    #[error("Persistence error: {0}")]
    Persistence(#[from] ecosort_persistence::PersistenceError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for bot operations.
pub type Result<T> = std::result::Result<T, BotError>;
