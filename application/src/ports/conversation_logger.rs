//! Port for structured conversation logging.
//!
//! Defines the [`ConversationLogger`] trait for recording the turns of a
//! chat to a structured log. This is separate from `tracing`-based operation
//! logs: tracing carries human-readable diagnostics, while this port
//! captures the conversation itself in a machine-readable form. Records are
//! write-only observability; nothing in the application ever reads them
//! back, and the transcript is never restored from them.

/// A conversation event to record.
#[derive(Debug, Clone, Copy)]
pub enum ConversationEvent<'a> {
    /// The user submitted a turn.
    UserTurn { text: &'a str },
    /// The model replied.
    AssistantTurn { model: &'a str, text: &'a str },
    /// A turn failed and was converted into a displayed error reply.
    TurnError { message: &'a str },
}

impl ConversationEvent<'_> {
    /// Stable type tag for the serialized record.
    pub fn event_type(&self) -> &'static str {
        match self {
            ConversationEvent::UserTurn { .. } => "user_turn",
            ConversationEvent::AssistantTurn { .. } => "assistant_turn",
            ConversationEvent::TurnError { .. } => "turn_error",
        }
    }
}

/// Port for recording conversation events.
///
/// The `log` method is intentionally synchronous and non-fallible: logging
/// failures must never disrupt the turn loop, so implementations swallow
/// their own errors.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent<'_>);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent<'_>) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_tags() {
        assert_eq!(
            ConversationEvent::UserTurn { text: "hi" }.event_type(),
            "user_turn"
        );
        assert_eq!(
            ConversationEvent::AssistantTurn {
                model: "gemini-1.5-flash",
                text: "hello"
            }
            .event_type(),
            "assistant_turn"
        );
        assert_eq!(
            ConversationEvent::TurnError { message: "boom" }.event_type(),
            "turn_error"
        );
    }
}
