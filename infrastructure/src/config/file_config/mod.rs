//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every field has a default so a missing file, section, or key degrades to
//! the built-in behavior.

mod chat;
mod gemini;

pub use chat::FileChatConfig;
pub use gemini::FileGeminiConfig;

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Gemini model and transport settings
    pub gemini: FileGeminiConfig,
    /// Chat surface settings
    pub chat: FileChatConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.gemini.model, "gemini-1.5-flash");
        assert!(config.chat.show_spinner);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: FileConfig = toml::from_str(
            r#"
            [gemini]
            temperature = 0.9
            "#,
        )
        .unwrap();
        assert_eq!(config.gemini.temperature, 0.9);
        assert_eq!(config.gemini.max_output_tokens, 500);
        assert_eq!(config.gemini.request_timeout_secs, 60);
    }
}
