//! Chat gateway port
//!
//! Defines the interface for communicating with the remote generation
//! service. The application layer only sees an opaque session handle with a
//! single success/failure outcome per call; the wire format belongs to the
//! infrastructure adapter.

use crate::config::GenerationParams;
use async_trait::async_trait;
use pharma_domain::Model;
use thiserror::Error;

/// Errors that can occur during gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Session error: {0}")]
    SessionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Request timed out")]
    Timeout,

    #[error("The service returned no usable text")]
    EmptyResponse,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for the remote generation service
///
/// A session created here is already seeded with the persona priming
/// exchange; callers never send the priming turns themselves.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Create a new primed session bound to the given parameters
    async fn start_chat(
        &self,
        params: &GenerationParams,
    ) -> Result<Box<dyn ChatSession>, GatewayError>;
}

/// An active chat session
///
/// The handle is stateful: each successful `send` extends the remote
/// conversational context. Implementations must serialize calls per handle;
/// the remote context is not safe for interleaved concurrent extension.
#[async_trait]
pub trait ChatSession: Send + Sync {
    /// Get the model this session is bound to
    fn model(&self) -> &Model;

    /// Send a message and wait for the complete reply text
    async fn send(&self, content: &str) -> Result<String, GatewayError>;
}
