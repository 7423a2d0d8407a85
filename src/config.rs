//! User config: an optional TOML file, then CLI overrides on top.

use color_eyre::eyre::{Result, WrapErr as _};

use crate::cli_args::CliArgs;
use crate::params::FieldParams;

/// Environment variable that, when set, replaces the log filter entirely.
pub const LOG_ENV_VAR: &str = "PARTICLE_FIELD_LOG";

/// The valid log levels. Based on our `tracing` crate.
#[derive(serde::Deserialize, clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    /// Error
    Error,
    /// Warnings
    #[default]
    Warn,
    /// Info
    Info,
    /// Debug
    Debug,
    /// Trace
    Trace,
    /// No logging
    Off,
}

impl LogLevel {
    pub fn as_directive(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
            Self::Off => "off",
        }
    }
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// The maximum log level
    pub log_level: LogLevel,
    /// Window title
    pub title: String,
    /// Seed for the initial layout
    pub seed: Option<u64>,
    /// Everything about the particles themselves
    pub field: FieldParams,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            title: "Particle Field".into(),
            seed: None,
            field: FieldParams::default(),
        }
    }
}

impl Config {
    pub fn from_toml(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).wrap_err("Couldn't parse config")?;
        config.field.validate()?;
        Ok(config)
    }

    pub fn load(path: &std::path::Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Couldn't read config file: {}", path.display()))?;
        Self::from_toml(&source).wrap_err_with(|| format!("Invalid config file: {}", path.display()))
    }

    // Config file (if any), then the CLI flags on top
    pub fn from_cli(args: &CliArgs) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_cli(args);
        config.field.validate()?;
        Ok(config)
    }

    pub fn apply_cli(&mut self, args: &CliArgs) {
        if let Some(count) = args.count {
            self.field.particle_count = count;
        }
        if let Some(seed) = args.seed {
            self.seed = Some(seed);
        }
        if let Some(level) = args.log_level {
            self.log_level = level;
        }
        if args.no_grid {
            self.field.use_spatial_grid = false;
        }
    }
}
