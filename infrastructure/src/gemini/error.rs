//! Error types for the Gemini adapter

use pharma_application::GatewayError;
use thiserror::Error;

/// Result type alias for Gemini operations
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Errors that can occur when calling the generative language API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Prompt was blocked: {0}")]
    Blocked(String),

    #[error("Response contained no candidates")]
    NoCandidates,
}

impl GeminiError {
    /// Map onto the application-layer error taxonomy.
    pub(crate) fn into_gateway_error(self) -> GatewayError {
        match self {
            GeminiError::Transport(e) if e.is_timeout() => GatewayError::Timeout,
            GeminiError::Transport(e) if e.is_connect() => {
                GatewayError::ConnectionError(e.to_string())
            }
            GeminiError::NoCandidates => GatewayError::EmptyResponse,
            other => GatewayError::RequestFailed(other.to_string()),
        }
    }
}
