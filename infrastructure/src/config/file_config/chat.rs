//! Chat surface configuration from TOML (`[chat]` section)

use serde::{Deserialize, Serialize};

/// Raw chat settings from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// Show the busy spinner while a reply is awaited
    pub show_spinner: bool,
    /// Path to the line-editor history file
    pub history_file: Option<String>,
    /// Display cap on transcript turns (unset: unbounded)
    pub max_turns: Option<usize>,
    /// Path to a JSONL conversation log (unset: logging disabled)
    pub conversation_log: Option<String>,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        Self {
            show_spinner: true,
            history_file: None,
            max_turns: None,
            conversation_log: None,
        }
    }
}
