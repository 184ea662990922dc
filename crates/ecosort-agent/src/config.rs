//! Model configuration for the completion service.

use serde::{Deserialize, Serialize};

use ecosort_core::config::{LLM_API_URL_ENV, LLM_MODEL_ENV};

/// Default chat-completions endpoint (GigaChat-compatible).
const DEFAULT_API_URL: &str = "https://gigachat.devices.sberbank.ru/api/v1/chat/completions";

/// Default model identifier.
const DEFAULT_MODEL: &str = "GigaChat";

/// Configuration for completion requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model identifier.
    pub model: String,

    /// Chat-completions endpoint URL.
    pub api_url: String,

    /// Maximum tokens to generate.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Temperature for generation (0.0 to 2.0).
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_max_tokens() -> u32 {
    512
}

fn default_temperature() -> f32 {
    0.7
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.into(),
            api_url: DEFAULT_API_URL.into(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

impl ModelConfig {
    /// Build a configuration from the environment, falling back to defaults.
    ///
    /// Reads `LLM_API_URL` and `LLM_MODEL`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(LLM_API_URL_ENV) {
            config.api_url = url;
        }
        if let Ok(model) = std::env::var(LLM_MODEL_ENV) {
            config.model = model;
        }
        config
    }

    /// Set the maximum tokens.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set the temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature.clamp(0.0, 2.0);
        self
    }
}
