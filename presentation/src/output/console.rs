//! Console output formatting
//!
//! Formatting is pure: the same transcript always renders to the same
//! string, and the full-transcript formatter is the single source of truth
//! for the `/history` redraw.

use colored::Colorize;
use pharma_domain::{Role, Transcript, Turn};

/// Formats turns and transcripts for the terminal
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a single turn with a colored role prefix.
    pub fn format_turn(turn: &Turn) -> String {
        match turn.role {
            Role::User => format!("{} {}", "You:".cyan().bold(), turn.text),
            Role::Assistant => format!("{} {}", "Pharmacist:".green().bold(), turn.text),
        }
    }

    /// Format the whole transcript, one blank line between turns.
    pub fn format_transcript(transcript: &Transcript) -> String {
        transcript
            .turns()
            .iter()
            .map(Self::format_turn)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
