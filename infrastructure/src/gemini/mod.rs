//! Gemini adapter
//!
//! Implements the application chat ports against the generative language
//! REST API. The endpoint is stateless; the conversation context lives in
//! [`session::GeminiChatSession`]'s wire history and is resent on every
//! call.

pub mod error;
pub mod gateway;
pub mod protocol;
pub mod session;
