/*
 * Particle Field
 *
 * A window full of slowly drifting particles. Each particle bounces off the
 * window edges, and every pair closer than the link distance is joined by a
 * line that fades out as the pair drifts apart.
 *
 * The controls window adjusts the population and link distance at runtime.
 */

use clap::Parser as _;
use color_eyre::eyre::Result;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _, Layer as _};

use particle_field::app;
use particle_field::cli_args::CliArgs;
use particle_field::config::{Config, LOG_ENV_VAR};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli_args = CliArgs::parse();
    let config = Config::from_cli(&cli_args)?;
    setup_logging(&config)?;

    tracing::info!(particles = config.field.particle_count, seed = ?config.seed, "Starting particle field");
    app::set_startup_config(config);

    nannou::app(app::model).update(app::update).run();

    Ok(())
}

// `PARTICLE_FIELD_LOG` wins over the configured level when it is set
fn setup_logging(config: &Config) -> Result<()> {
    let filter = if std::env::var(LOG_ENV_VAR).is_ok() {
        tracing_subscriber::EnvFilter::builder()
            .with_default_directive("error".parse()?)
            .with_env_var(LOG_ENV_VAR)
            .from_env_lossy()
    } else {
        tracing_subscriber::EnvFilter::builder()
            .with_default_directive("off".parse()?)
            .parse_lossy(format!("particle_field={}", config.log_level.as_directive()))
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .try_init()?;

    Ok(())
}
