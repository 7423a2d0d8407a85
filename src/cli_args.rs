//! All the CLI arguments for the particle field window

use crate::config::LogLevel;

/// Drifting particles linked by proximity, drawn in a resizable window.
#[derive(clap::Parser, Debug, Clone, Default)]
#[command(version, about)]
#[non_exhaustive]
pub struct CliArgs {
    /// Path to a TOML config file.
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Number of particles, overrides the config file.
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Seed for the particle layout. Random when omitted.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Maximum log level, overrides the config file.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Test every particle pair instead of using the spatial grid.
    #[arg(long)]
    pub no_grid: bool,
}
