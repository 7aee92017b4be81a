//! Chat turn use case.
//!
//! Executes one turn of the chat loop: append the user's text to the
//! transcript, send it to the session, and append the reply. Every gateway
//! failure is converted into a displayable assistant turn at this boundary;
//! nothing propagates past a single turn and the session never crashes.
//!
//! The user turn is kept in the transcript even when the send fails. The
//! session handle is responsible for keeping its own wire history consistent
//! with what the service actually received.

use crate::ports::chat_gateway::{ChatSession, GatewayError};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::progress::TurnProgress;
use pharma_domain::{Model, Transcript};
use std::sync::Arc;
use tracing::{debug, warn};

/// Reply shown when a call succeeds but carries no usable text.
pub const EMPTY_REPLY_FALLBACK: &str =
    "I can't give you an answer to that right now. Please try asking again.";

/// Format a gateway failure as a displayable assistant reply.
pub fn format_error_reply(error: &GatewayError) -> String {
    format!("Sorry, something went wrong talking to Gemini: {error}")
}

/// Outcome of a single turn.
///
/// `recovered` is true when the turn hit a failure that was converted into a
/// displayed reply instead of a real answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnResult {
    pub reply: String,
    pub recovered: bool,
}

/// Use case for running one chat turn.
///
/// Owns the session handle for the lifetime of the chat. The loop is
/// synchronous per turn: at most one call is outstanding, and there is no
/// cancellation once a send has started.
pub struct ChatTurnUseCase {
    session: Box<dyn ChatSession>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl ChatTurnUseCase {
    pub fn new(session: Box<dyn ChatSession>) -> Self {
        Self {
            session,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// The model the underlying session is bound to.
    pub fn model(&self) -> &Model {
        self.session.model()
    }

    /// Execute one turn: Idle -> AwaitingReply -> Idle.
    ///
    /// Blank input is ignored without touching the transcript.
    pub async fn execute(
        &self,
        transcript: &mut Transcript,
        input: &str,
        progress: &dyn TurnProgress,
    ) -> TurnResult {
        let input = input.trim();
        if input.is_empty() {
            return TurnResult {
                reply: String::new(),
                recovered: false,
            };
        }

        transcript.push_user(input);
        self.conversation_logger
            .log(ConversationEvent::UserTurn { text: input });

        debug!("Sending turn to {}", self.session.model());
        progress.on_waiting_start();
        let outcome = self.session.send(input).await;
        progress.on_waiting_end();

        let (reply, recovered) = match outcome {
            Ok(text) => {
                self.conversation_logger.log(ConversationEvent::AssistantTurn {
                    model: self.session.model().as_str(),
                    text: &text,
                });
                (text, false)
            }
            Err(GatewayError::EmptyResponse) => {
                warn!("Reply contained no usable text");
                self.conversation_logger.log(ConversationEvent::TurnError {
                    message: "empty response",
                });
                (EMPTY_REPLY_FALLBACK.to_string(), true)
            }
            Err(error) => {
                warn!("Turn failed: {error}");
                let message = error.to_string();
                self.conversation_logger
                    .log(ConversationEvent::TurnError { message: &message });
                (format_error_reply(&error), true)
            }
        };

        transcript.push_assistant(&reply);
        TurnResult { reply, recovered }
    }
}
