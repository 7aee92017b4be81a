//! Gemini configuration from TOML (`[gemini]` section)

use pharma_application::GenerationParams;
use serde::{Deserialize, Serialize};

/// Raw Gemini settings from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Model identifier (default: "gemini-1.5-flash")
    pub model: String,
    /// Sampling temperature (default: 0.4)
    pub temperature: f32,
    /// Reply length bound in tokens (default: 500)
    pub max_output_tokens: u32,
    /// Per-request timeout in seconds (default: 60)
    pub request_timeout_secs: u64,
    /// Environment variable name for the API key (default: "GEMINI_API_KEY")
    pub api_key_env: String,
    /// Direct API key (not recommended; prefer the env var or secrets file)
    pub api_key: Option<String>,
    /// Base URL for the generative language API
    pub base_url: String,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            model: "gemini-1.5-flash".to_string(),
            temperature: 0.4,
            max_output_tokens: 500,
            request_timeout_secs: 60,
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
        }
    }
}

impl FileGeminiConfig {
    /// Convert to application-layer generation parameters.
    pub fn to_generation_params(&self) -> GenerationParams {
        GenerationParams::default()
            .with_model(self.model.parse().unwrap())
            .with_temperature(self.temperature)
            .with_max_output_tokens(self.max_output_tokens)
            .with_request_timeout_secs(self.request_timeout_secs)
    }
}
