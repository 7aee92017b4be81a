//! Application layer for pharma-chat
//!
//! This crate contains the turn loop use case, port definitions, and the
//! generation parameters. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::GenerationParams;
pub use ports::{
    chat_gateway::{ChatGateway, ChatSession, GatewayError},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    progress::{NoTurnProgress, TurnProgress},
};
pub use use_cases::chat_turn::{ChatTurnUseCase, EMPTY_REPLY_FALLBACK, TurnResult, format_error_reply};
