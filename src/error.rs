/*
 * Error Module
 *
 * Errors raised while validating field parameters. Loading the config file
 * itself reports through `color_eyre` with context instead.
 */

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("`{name}` must be zero or greater, got {value}")]
    Negative { name: &'static str, value: f32 },

    #[error("`{name}` must be greater than zero, got {value}")]
    NotPositive { name: &'static str, value: f32 },

    #[error("`{name}` must be at least {min}, got {value}")]
    BelowMinimum { name: &'static str, min: f32, value: f32 },

    #[error("radius range {min}..{max} is empty or negative")]
    RadiusRange { min: f32, max: f32 },

    #[error("`{name}` must be an alpha between 0 and 1, got {value}")]
    Alpha { name: &'static str, value: f32 },
}
