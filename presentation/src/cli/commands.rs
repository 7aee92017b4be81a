//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for pharma-chat
#[derive(Parser, Debug)]
#[command(name = "pharma-chat")]
#[command(author, version, about = "Pharmacist chat assistant backed by Gemini")]
#[command(long_about = r#"
pharma-chat answers questions about medicines through Google's Gemini API.
The assistant is primed as a pharmacist: it keeps answers short and refuses
questions that are not about medicines or health.

With a question argument it answers once and exits; without one (or with
--chat) it starts an interactive session.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./pharma.toml       Project-level config
3. ~/.config/pharma-chat/config.toml   Global config

The API key is read from $GEMINI_API_KEY, the config file, or
~/.config/pharma-chat/secrets.toml.

Example:
  pharma-chat "What is paracetamol used for?"
  pharma-chat --chat -m gemini-1.5-pro
"#)]
pub struct Cli {
    /// A single question to answer (omit for interactive chat)
    pub question: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Model to use
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the banner and busy spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Append a JSONL record of the conversation to this file
    #[arg(long, value_name = "PATH")]
    pub log_conversation: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shot_question() {
        let cli = Cli::parse_from(["pharma-chat", "What is aspirin?"]);
        assert_eq!(cli.question.as_deref(), Some("What is aspirin?"));
        assert!(!cli.chat);
    }

    #[test]
    fn test_chat_mode_flags() {
        let cli = Cli::parse_from(["pharma-chat", "--chat", "-m", "gemini-1.5-pro", "-vv"]);
        assert!(cli.chat);
        assert_eq!(cli.model.as_deref(), Some("gemini-1.5-pro"));
        assert_eq!(cli.verbose, 2);
    }
}
