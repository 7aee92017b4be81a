//! Generation parameters for a chat session.
//!
//! [`GenerationParams`] groups the static sampling and transport settings a
//! session is bound to. They are fixed once the session is created and are
//! not mutable at runtime.

use pharma_domain::Model;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Sampling and transport parameters for a chat session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Model the session is bound to.
    pub model: Model,
    /// Sampling temperature.
    pub temperature: f32,
    /// Upper bound on reply length, in tokens.
    pub max_output_tokens: u32,
    /// Per-request timeout, in seconds.
    pub request_timeout_secs: u64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            model: Model::default(),
            temperature: 0.4,
            max_output_tokens: 500,
            request_timeout_secs: 60,
        }
    }
}

impl GenerationParams {
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_output_tokens(mut self, max: u32) -> Self {
        self.max_output_tokens = max;
        self
    }

    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// The request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
