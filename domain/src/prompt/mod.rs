//! Persona priming exchange
//!
//! Every chat session is seeded with a fixed two-turn exchange before any
//! real user input: an instruction that pins the assistant to a pharmacist
//! persona, and a canned acknowledgment. The exchange travels to the remote
//! service as ordinary conversation history, not as a system prompt, so the
//! refusal behavior is a contract on the model rather than on this client.

use crate::session::entities::Turn;

/// Instruction establishing the pharmacist persona and refusal behavior.
pub const PERSONA_INSTRUCTION: &str = "You are a pharmacist. Answer questions \
    about medicines, their uses, dosages, and interactions. Keep answers short \
    and precise. Politely refuse any question that is not about medicines or \
    health.";

/// Canned acknowledgment the session is seeded with.
pub const PERSONA_ACKNOWLEDGMENT: &str =
    "Understood. Ask me about any medicine you would like to know more about.";

/// The fixed priming exchange, in the order it is sent.
pub fn priming_exchange() -> [Turn; 2] {
    [
        Turn::user(PERSONA_INSTRUCTION),
        Turn::assistant(PERSONA_ACKNOWLEDGMENT),
    ]
}
