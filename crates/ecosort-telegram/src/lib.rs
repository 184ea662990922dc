//! Telegram bot interface for Ecosort.
//!
//! This crate wires the teloxide transport to the transport-free
//! conversation core: inbound messages become [`event::InboundEvent`]s, the
//! [`state::BotState`] stage machine produces [`event::Reply`]s, and the
//! handlers deliver them.
//!
//! # Environment Variables
//!
//! Required:
//! - `BOT_TOKEN`: Telegram bot token from @BotFather
//! - `LLM_API_KEY`: Bearer token for the completion service
//!
//! Optional:
//! - `LLM_API_URL`: Completion endpoint (default: GigaChat)
//! - `LLM_MODEL`: Model identifier (default: GigaChat)
//! - `ECOSORT_CLASSIFIER`: "keyword" (default) or "model"
//! - `ECOSORT_STATE_DIR`: Flat-file directory (default: ~/.ecosort)

pub mod bot;
pub mod error;
pub mod event;
pub mod handlers;
pub mod state;

pub use bot::EcosortBot;
pub use error::{BotError, Result};
pub use event::{InboundEvent, Reply};
pub use state::BotState;
