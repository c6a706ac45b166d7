//! RRUI CLI
//!
//! - `rrui theme` prints a resolved theme as JSON or TOML
//! - `rrui config` shows and edits the persisted performance preferences

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Inspect RRUI themes and performance preferences
#[derive(Parser, Debug)]
#[command(name = "rrui")]
#[command(about = "Inspect RRUI themes and performance preferences")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a resolved theme
    Theme {
        /// Color scheme: light, dark or high-contrast
        #[arg(short, long, default_value = "light")]
        scheme: String,

        /// Theme name (defaults to the built-in name for the scheme)
        #[arg(short, long)]
        name: Option<String>,

        /// Bundle manifest (TOML) to resolve named colors from
        #[arg(short, long)]
        bundle: Option<PathBuf>,

        /// Disable animation durations
        #[arg(long)]
        reduced_motion: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Show or edit performance preferences
    Config {
        /// Preferences file
        #[arg(short, long, default_value = "rrui-preferences.toml")]
        prefs: PathBuf,

        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print every setting
    Show,
    /// Set one key, e.g. `performance.maxCacheSize 50`
    Set { key: String, value: String },
    /// Remove every stored key
    Reset,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Json,
    Toml,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Theme {
            scheme,
            name,
            bundle,
            reduced_motion,
            format,
        } => commands::theme(&scheme, name.as_deref(), bundle.as_deref(), reduced_motion, format),
        Commands::Config { prefs, action } => match action {
            ConfigAction::Show => commands::config_show(&prefs),
            ConfigAction::Set { key, value } => commands::config_set(&prefs, &key, &value),
            ConfigAction::Reset => commands::config_reset(&prefs),
        },
    }
}
