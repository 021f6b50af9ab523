//! CLI entrypoint for agentroom
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use agentroom_application::{RoundController, RoundPorts, SessionStore, SubmitOutcome};
use agentroom_infrastructure::{
    ConfigLoader, FileConfig, FileSessionStore, HttpSessionClient, MemorySessionStore,
};
use agentroom_presentation::{
    AnsiMarkup, ChatRepl, Cli, ReplControls, Terminal, TerminalToast, TerminalTranscriptView,
    ToastNotifier,
};
use anyhow::{Context, Result, bail};
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };
    apply_cli_overrides(&mut config, &cli);
    config.validate().context("Invalid configuration")?;

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(&cli, &config)?;

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    info!("Starting agentroom against {}", config.backend.base_url);

    // === Dependency Injection ===
    let client = Arc::new(HttpSessionClient::new(&config.backend.base_url)?);
    let store = session_store(&config);
    if cli.new_session {
        store.clear();
    }

    let terminal = Arc::new(Terminal::new());
    let one_shot = cli.prompt.is_some();
    let controls = Arc::new(
        ReplControls::new(
            terminal.clone(),
            config.round.parse_mode()?,
            config.round.agent_toggles(),
        )
        .with_session_announcements(!one_shot),
    );
    let notifier = Arc::new(ToastNotifier::with_delay(
        TerminalToast::new(terminal.clone()),
        Duration::from_millis(config.notification.dismiss_ms),
    ));
    let view = Arc::new(
        TerminalTranscriptView::new(terminal.clone())
            .with_clear_screen(!one_shot && Terminal::is_interactive()),
    );
    let markup = Arc::new(AnsiMarkup);

    let controller = Arc::new(RoundController::new(
        client,
        RoundPorts {
            store,
            notifier,
            controls: controls.clone(),
            view,
            markup: markup.clone(),
        },
    ));

    controller.initialize().await;

    match cli.prompt {
        Some(prompt) => {
            controls.set_prompt(prompt);
            match controller.submit().await {
                SubmitOutcome::Completed => Ok(()),
                outcome => bail!("Round did not complete ({:?})", outcome),
            }
        }
        None => {
            ChatRepl::new(controller, controls, terminal)
                .with_markup(markup)
                .run()
                .await?;
            Ok(())
        }
    }
}

/// Flags take priority over every configuration source
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(server) = &cli.server {
        config.backend.base_url = server.clone();
    }
    if let Some(mode) = &cli.mode {
        config.round.mode = mode.clone();
    }
    if !cli.agent.is_empty() {
        config.round.enabled = Some(cli.agent.clone());
    }
}

fn session_store(config: &FileConfig) -> Arc<dyn SessionStore> {
    match config
        .session
        .store_path
        .clone()
        .or_else(FileSessionStore::default_path)
    {
        Some(path) => {
            info!("Session id stored at {}", path.display());
            Arc::new(FileSessionStore::new(path))
        }
        None => {
            warn!("No data directory available; session will not survive restarts");
            Arc::new(MemorySessionStore::new())
        }
    }
}

/// Initialize logging based on verbosity level.
///
/// `RUST_LOG` wins over `-v`. With `[logging] file` set, records go to that
/// file instead of stderr so they never interleave with the chat.
fn init_logging(cli: &Cli, config: &FileConfig) -> Result<Option<WorkerGuard>> {
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match &config.logging.file {
        Some(path) => {
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => std::path::Path::new("."),
            };
            let Some(file_name) = path.file_name() else {
                bail!("Log file path has no file name: {}", path.display());
            };
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}
