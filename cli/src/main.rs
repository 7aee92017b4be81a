//! CLI entrypoint for pharma-chat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use pharma_application::{
    ChatGateway, ChatTurnUseCase, ConversationLogger, NoConversationLogger, NoTurnProgress,
};
use pharma_domain::{Model, Transcript};
use pharma_infrastructure::{
    ApiKeyProvider, ConfigLoader, GeminiChatGateway, JsonlConversationLogger,
};
use pharma_presentation::{ChatRepl, Cli, SpinnerReporter};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        match ConfigLoader::load(cli.config.as_ref()) {
            Ok(config) => config,
            Err(e) => bail!("Failed to load configuration: {e}"),
        }
    };

    let mut params = config.gemini.to_generation_params();
    if let Some(model) = &cli.model {
        let model: Model = model.parse().unwrap();
        params = params.with_model(model);
    }

    // The credential is resolved before anything renders; a missing key
    // stops the process here.
    let api_key = match ApiKeyProvider::new()
        .with_env_var(&config.gemini.api_key_env)
        .with_config_key(config.gemini.api_key.clone())
        .resolve()
    {
        Ok(key) => key,
        Err(e) => bail!("{e}"),
    };

    info!("Starting pharma-chat with model {}", params.model);

    // === Dependency Injection ===
    let gateway = GeminiChatGateway::new(api_key).with_base_url(config.gemini.base_url.clone());
    let session = gateway.start_chat(&params).await?;

    let log_path: Option<PathBuf> = cli
        .log_conversation
        .clone()
        .or_else(|| config.chat.conversation_log.as_ref().map(PathBuf::from));
    let logger: Arc<dyn ConversationLogger> = match log_path.and_then(JsonlConversationLogger::new)
    {
        Some(logger) => {
            info!("Recording conversation to {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoConversationLogger),
    };

    let use_case = ChatTurnUseCase::new(session).with_conversation_logger(logger);

    let mut transcript = match config.chat.max_turns {
        Some(max) => Transcript::new().with_max_turns(max),
        None => Transcript::new(),
    };

    // Single question mode
    if let Some(question) = cli.question.as_deref().filter(|_| !cli.chat) {
        let result = if cli.quiet {
            use_case
                .execute(&mut transcript, question, &NoTurnProgress)
                .await
        } else {
            let progress = SpinnerReporter::new();
            use_case
                .execute(&mut transcript, question, &progress)
                .await
        };

        println!("{}", result.reply);
        return Ok(());
    }

    // Chat mode
    let mut repl = ChatRepl::new(use_case, transcript)
        .with_spinner(!cli.quiet && config.chat.show_spinner)
        .with_history_file(config.chat.history_file.as_ref().map(PathBuf::from));

    repl.run().await?;

    Ok(())
}
