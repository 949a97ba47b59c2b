//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: Report unlocalized text (optionally confirmed by AI review)
//! - `unused`: Report locale keys never referenced from source
//! - `typos`: Report misspelled words in locale files
//! - `keys`: List translation keys referenced from source
//! - `extract`: Move a hardcoded text into the locale file
//! - `init`: Initialize the configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Scan(cmd)) => cmd.common.verbose,
            Some(Command::Unused(cmd)) => cmd.common.verbose,
            Some(Command::Typos(cmd)) => cmd.common.verbose,
            Some(Command::Keys(cmd)) => cmd.common.verbose,
            Some(Command::Extract(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by all analysis commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project root directory, where the config file is looked up
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Locale directory (overrides config file)
    #[arg(long)]
    pub locale_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Options for the OpenAI-compatible backend.
#[derive(Debug, Clone, Default, Args)]
pub struct AiArgs {
    /// API key (overrides config file)
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    /// File or directory to scan (default: whole project)
    pub path: Option<PathBuf>,

    /// Ask the AI backend to confirm findings
    #[arg(long)]
    pub ai: bool,

    #[command(flatten)]
    pub ai_args: AiArgs,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct UnusedCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct TyposCommand {
    /// Hunspell dictionary: path without extension, or a directory with
    /// index.aff/index.dic (overrides config file)
    #[arg(long)]
    pub dictionary: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct KeysCommand {
    /// File or directory to read keys from (default: whole project)
    pub path: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// Source file containing the text
    #[arg(long)]
    pub file: PathBuf,

    /// 1-based line of the text
    #[arg(long)]
    pub line: usize,

    /// 1-based column; extracts the sentence under it
    #[arg(long, conflicts_with = "text")]
    pub col: Option<usize>,

    /// Exact text to extract (quotes are stripped)
    #[arg(long)]
    pub text: Option<String>,

    /// Key to store the text under (default: AI suggestion or generated)
    #[arg(long)]
    pub key: Option<String>,

    /// Reuse an existing key that already holds the same text
    #[arg(long)]
    pub reuse: bool,

    /// Ask the AI backend for a key name
    #[arg(long, conflicts_with = "key")]
    pub ai: bool,

    /// Actually write the files (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    #[command(flatten)]
    pub ai_args: AiArgs,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report hardcoded text that should be translated
    Scan(ScanCommand),
    /// Report locale keys that no source file references
    Unused(UnusedCommand),
    /// Report misspelled words in locale files
    Typos(TyposCommand),
    /// List translation keys referenced from source
    Keys(KeysCommand),
    /// Move a hardcoded text into the locale file and replace it with a translation call
    Extract(ExtractCommand),
    /// Initialize a new .i18nscanrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
