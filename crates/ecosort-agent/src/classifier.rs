//! Material classification strategies.
//!
//! Two interchangeable strategies behind one trait: deterministic keyword
//! matching, and a single-shot completion call asking the model to name one
//! vocabulary word. Classifier outcomes only ever gate a statistics
//! increment, so the model strategy swallows service errors as `None`: a
//! transient outage must never block the reply path.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use ecosort_core::materials::{match_material, MATERIAL_VOCABULARY, NO_MATERIAL_SENTINEL};
use ecosort_session::Turn;

use crate::client::CompletionService;

/// Maps free-form user text to a recyclable-material label.
#[async_trait]
pub trait MaterialClassifier: Send + Sync {
    /// Classify `text`, returning a vocabulary label or `None`.
    async fn classify(&self, text: &str) -> Option<String>;
}

/// Keyword strategy: case-insensitive substring match, first match wins.
///
/// No external call, no failure mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordClassifier;

#[async_trait]
impl MaterialClassifier for KeywordClassifier {
    async fn classify(&self, text: &str) -> Option<String> {
        match_material(text).map(str::to_string)
    }
}

/// Model strategy: a single-shot completion naming one vocabulary word.
pub struct ModelClassifier {
    service: Arc<dyn CompletionService>,
}

impl ModelClassifier {
    /// Create a model-strategy classifier over the given service.
    pub fn new(service: Arc<dyn CompletionService>) -> Self {
        Self { service }
    }

    fn prompt(text: &str) -> Vec<Turn> {
        let instruction = format!(
            "Определи, какой перерабатываемый материал упоминается в сообщении. \
             Ответь ровно одним словом из списка: {}. \
             Если материал не упоминается, ответь \"{}\".",
            MATERIAL_VOCABULARY.join(", "),
            NO_MATERIAL_SENTINEL,
        );
        vec![Turn::system(instruction), Turn::user(text)]
    }
}

#[async_trait]
impl MaterialClassifier for ModelClassifier {
    async fn classify(&self, text: &str) -> Option<String> {
        match self.service.submit(&Self::prompt(text)).await {
            Ok(reply) => parse_label(&reply),
            Err(e) => {
                // Treated as "no match": statistics are best-effort and a
                // classifier outage must not block the reply path.
                warn!(error = %e, "Model classification failed");
                None
            }
        }
    }
}

/// Parse a model reply into a vocabulary label.
///
/// Trims whitespace and trailing punctuation, lowercases, and rejects
/// anything outside the closed vocabulary (including the "none" sentinel).
pub fn parse_label(reply: &str) -> Option<String> {
    let normalized = reply
        .trim()
        .trim_end_matches(['.', '!', '?', ',', ':', ';'])
        .to_lowercase();

    MATERIAL_VOCABULARY
        .iter()
        .find(|label| **label == normalized)
        .map(|label| label.to_string())
}
