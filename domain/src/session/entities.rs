//! Transcript domain entities

use serde::{Deserialize, Serialize};

/// Role of a turn in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    User,
    Assistant,
}

/// A single turn in a conversation (Entity)
///
/// Immutable once appended to a [`Transcript`]. Append order is the only
/// ordering carried; turns have no identifiers or timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

/// The ordered, append-only history of turns shown to the user (Entity)
///
/// Created empty at session start and dropped at session end; it is never
/// restored from disk. An optional display cap bounds growth by evicting
/// the oldest user/assistant pair; eviction never touches the remote
/// conversation context, which is owned by the session handle.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    turns: Vec<Turn>,
    max_turns: Option<usize>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the number of displayed turns. Eviction removes whole pairs from
    /// the front so strict alternation is preserved.
    pub fn with_max_turns(mut self, max: usize) -> Self {
        self.max_turns = Some(max.max(2));
        self
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.turns.push(Turn::user(text));
        self.enforce_cap();
    }

    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.turns.push(Turn::assistant(text));
        self.enforce_cap();
    }

    /// Drop all turns, keeping the cap setting.
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// True when turns strictly alternate user/assistant starting with user.
    ///
    /// The UI loop assumes this shape; it is checked by tests rather than
    /// enforced on append.
    pub fn alternates_strictly(&self) -> bool {
        self.turns.iter().enumerate().all(|(i, turn)| {
            if i % 2 == 0 {
                turn.role == Role::User
            } else {
                turn.role == Role::Assistant
            }
        })
    }

    fn enforce_cap(&mut self) {
        if let Some(max) = self.max_turns {
            while self.turns.len() > max {
                let evict = 2.min(self.turns.len());
                self.turns.drain(..evict);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_constructors() {
        assert_eq!(Turn::user("hi").role, Role::User);
        assert_eq!(Turn::assistant("hello").role, Role::Assistant);
    }

    #[test]
    fn test_transcript_append_order() {
        let mut transcript = Transcript::new();
        transcript.push_user("What is paracetamol used for?");
        transcript.push_assistant("Pain and fever relief.");

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.turns()[0].role, Role::User);
        assert_eq!(transcript.last().unwrap().role, Role::Assistant);
        assert!(transcript.alternates_strictly());
    }

    #[test]
    fn test_alternation_detects_violation() {
        let mut transcript = Transcript::new();
        transcript.push_user("first");
        transcript.push_user("second");
        assert!(!transcript.alternates_strictly());
    }

    #[test]
    fn test_cap_evicts_oldest_pair() {
        let mut transcript = Transcript::new().with_max_turns(4);
        for i in 0..4 {
            transcript.push_user(format!("question {i}"));
            transcript.push_assistant(format!("answer {i}"));
        }

        assert_eq!(transcript.len(), 4);
        assert_eq!(transcript.turns()[0].text, "question 2");
        assert!(transcript.alternates_strictly());
    }

    #[test]
    fn test_cap_floor_is_one_pair() {
        let mut transcript = Transcript::new().with_max_turns(0);
        transcript.push_user("q");
        transcript.push_assistant("a");
        assert_eq!(transcript.len(), 2);
    }

    #[test]
    fn test_clear_keeps_cap() {
        let mut transcript = Transcript::new().with_max_turns(2);
        transcript.push_user("q");
        transcript.clear();
        assert!(transcript.is_empty());

        for i in 0..3 {
            transcript.push_user(format!("q{i}"));
            transcript.push_assistant(format!("a{i}"));
        }
        assert_eq!(transcript.len(), 2);
    }
}
