//! Infrastructure layer for pharma-chat
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the Gemini HTTP gateway, credential resolution,
//! configuration file loading, and the JSONL conversation logger.

pub mod config;
pub mod gemini;
pub mod logging;
pub mod secrets;

// Re-export commonly used types
pub use config::{ConfigLoader, FileChatConfig, FileConfig, FileGeminiConfig};
pub use gemini::{
    error::GeminiError,
    gateway::{DEFAULT_BASE_URL, GeminiChatGateway},
    session::GeminiChatSession,
};
pub use logging::JsonlConversationLogger;
pub use secrets::{ApiKeyProvider, CredentialError, GEMINI_API_KEY_ENV};
