/*
 * Particle Field - Module Definitions
 *
 * This file defines the module structure for the particle field animation.
 * The core (particle, field, links, spatial_grid, surface) knows nothing about
 * windows; the remaining modules host it inside a nannou application.
 */

// Re-export key components for easier access
pub use field::{ParticleField, RenderStats};
pub use links::Link;
pub use params::FieldParams;
pub use particle::Particle;
pub use surface::{DrawCommand, NannouSurface, RecordingSurface, Surface};
pub use error::ConfigError;
pub use debug::DebugInfo;
pub use app::Model;

// Define modules
pub mod particle;
pub mod field;
pub mod links;
pub mod spatial_grid;
pub mod surface;
pub mod params;
pub mod config;
pub mod cli_args;
pub mod error;
pub mod debug;
pub mod app;
pub mod ui;
pub mod renderer;

// Constants
pub const DEFAULT_PARTICLE_COUNT: usize = 80;
pub const LINK_DISTANCE: f32 = 100.0;
