//! Completion-service integration for Ecosort.
//!
//! This crate wraps the external text-generation API behind two seams:
//!
//! - [`CompletionService`]: the single request/response capability the rest
//!   of the system depends on: submit an ordered sequence of turns, get
//!   generated text or a typed failure.
//! - [`MaterialClassifier`]: maps free-form user text to a recyclable
//!   material label, either deterministically by keyword or with a
//!   single-shot completion call.
//!
//! [`CompletionGateway`] mediates between a session's bounded history and
//! the service, enforcing the history policy: the user turn is appended
//! before the call and retained on failure; the assistant turn is appended
//! only after a successful reply.

pub mod classifier;
pub mod client;
pub mod config;
pub mod error;
pub mod gateway;

pub use classifier::{KeywordClassifier, MaterialClassifier, ModelClassifier};
pub use client::{ChatClient, CompletionService};
pub use config::ModelConfig;
pub use error::{GatewayError, Result};
pub use gateway::CompletionGateway;
