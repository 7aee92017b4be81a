//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::output::console::ConsoleFormatter;
use crate::progress::spinner::SpinnerReporter;
use pharma_application::{ChatTurnUseCase, NoTurnProgress};
use pharma_domain::{Transcript, Turn};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;

/// Interactive chat REPL
///
/// Owns the transcript and the turn use case for the session. Input is
/// blocked while a reply is awaited; the loop only returns to the prompt
/// once the turn has completed or failed.
pub struct ChatRepl {
    use_case: ChatTurnUseCase,
    transcript: Transcript,
    show_spinner: bool,
    history_file: Option<PathBuf>,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(use_case: ChatTurnUseCase, transcript: Transcript) -> Self {
        Self {
            use_case,
            transcript,
            show_spinner: true,
            history_file: None,
        }
    }

    /// Set whether to show the busy spinner
    pub fn with_spinner(mut self, show: bool) -> Self {
        self.show_spinner = show;
        self
    }

    /// Override the line-editor history file location
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.history_file.clone().or_else(|| {
            dirs::data_dir().map(|p| p.join("pharma-chat").join("history.txt"))
        });

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    // Handle commands
                    if line.starts_with('/') {
                        if self.handle_command(line) {
                            break;
                        }
                        continue;
                    }

                    // Add to history
                    let _ = rl.add_history_entry(line);

                    self.process_turn(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        Pharmacist Chat - Gemini  💊         │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Model: {}", self.use_case.model());
        println!("Ask about medicines and health. Other topics are refused.");
        println!();
        println!("Commands:");
        println!("  /help     - Show this help");
        println!("  /model    - Show the current model");
        println!("  /history  - Redraw the full transcript");
        println!("  /clear    - Clear the displayed transcript");
        println!("  /quit     - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&mut self, cmd: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?    - Show this help");
                println!("  /model           - Show the current model");
                println!("  /history         - Redraw the full transcript");
                println!("  /clear           - Clear the displayed transcript");
                println!("  /quit, /exit, /q - Exit chat");
                println!();
                false
            }
            "/model" => {
                println!("Current model: {}", self.use_case.model());
                false
            }
            "/history" => {
                println!();
                if self.transcript.is_empty() {
                    println!("(no turns yet)");
                } else {
                    println!("{}", ConsoleFormatter::format_transcript(&self.transcript));
                }
                println!();
                false
            }
            "/clear" => {
                // Display only; the session keeps its conversational context
                self.transcript.clear();
                println!("Transcript cleared.");
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn process_turn(&mut self, input: &str) {
        println!();
        println!("{}", ConsoleFormatter::format_turn(&Turn::user(input)));

        let result = if self.show_spinner {
            let progress = SpinnerReporter::new();
            self.use_case
                .execute(&mut self.transcript, input, &progress)
                .await
        } else {
            self.use_case
                .execute(&mut self.transcript, input, &NoTurnProgress)
                .await
        };

        println!(
            "{}",
            ConsoleFormatter::format_turn(&Turn::assistant(result.reply))
        );
        println!();
    }
}
