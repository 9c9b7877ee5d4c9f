use clap::{Parser, ValueEnum};
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Report output format.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable summary per sort
    #[default]
    Text,
    /// Pretty-printed JSON array of sorts
    Json,
}

/// Extract card sort results from exported board JSON files
#[derive(Parser, Debug, Clone)]
#[command(
    name = "cardsort",
    about = "Extract card sort results from exported board JSON files",
    version
)]
pub struct Settings {
    /// Directory containing one exported board JSON file per participant
    pub directory: PathBuf,

    /// JSON file mapping card names to replacement identifiers
    #[arg(long, short = 'm')]
    pub mapping: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Order results by board name instead of directory order
    #[arg(long)]
    pub sorted: bool,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// The log level to use, with `--debug` taking precedence.
    pub fn effective_log_level(&self) -> &str {
        if self.debug {
            "DEBUG"
        } else {
            &self.log_level
        }
    }
}
