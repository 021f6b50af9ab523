//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for agentroom
#[derive(Parser, Debug)]
#[command(name = "agentroom")]
#[command(author, version, about = "Terminal client for a multi-agent discussion backend")]
#[command(long_about = r#"
agentroom sends your prompt to a panel of agents on a discussion backend and
shows the shared transcript of the round.

The session ID is remembered between runs, so the conversation resumes where
it left off. Use --new-session (or /new in chat) to start over.

Configuration files are loaded from (in priority order):
1. --config <path>          Explicit config file
2. ./agentroom.toml         Project-level config
3. ~/.config/agentroom/config.toml   Global config
AGENTROOM_* environment variables override files, and flags override both.

Example:
  agentroom "How could CRISPR screens be combined with protein language models?"
  agentroom --mode evidence --agent BioExpert --agent Reviewer "Critique this aim"
  agentroom
"#)]
pub struct Cli {
    /// Prompt for a single round (starts interactive chat when omitted)
    pub prompt: Option<String>,

    /// Backend base URL
    #[arg(short, long, value_name = "URL")]
    pub server: Option<String>,

    /// Round mode (FREESTYLE, EVIDENCE, or a backend-specific value)
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Agents to enable (can be specified multiple times; others are disabled)
    #[arg(short, long, value_name = "AGENT")]
    pub agent: Vec<String>,

    /// Forget the stored session and start a new one
    #[arg(long)]
    pub new_session: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
