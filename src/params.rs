/*
 * Field Parameters Module
 *
 * This module defines the FieldParams struct that contains every tunable value
 * of the particle field. The defaults reproduce the original portfolio
 * background: 80 particles, sub-pixel drift, links fading out by 100 pixels.
 * Parameters can be loaded from the config file and adjusted through the UI;
 * a ParamSnapshot of the previous values drives change detection.
 */

use nannou::color::{rgba, Rgba};
use serde::Deserialize;

use crate::error::ConfigError;
use crate::{DEFAULT_PARTICLE_COUNT, LINK_DISTANCE};

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldParams {
    pub particle_count: usize,
    pub max_speed: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    pub link_distance: f32,
    pub link_max_alpha: f32,
    pub link_fade: f32,
    pub line_width: f32,
    pub accent: [u8; 3],
    pub particle_alpha: f32,
    pub background: [u8; 3],
    pub use_spatial_grid: bool,
    pub show_debug: bool,
}

/// Smallest accepted link distance, in pixels.
pub const MIN_LINK_DISTANCE: f32 = 1.0;

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            max_speed: 0.5,
            min_radius: 1.0,
            max_radius: 3.0,
            link_distance: LINK_DISTANCE,
            link_max_alpha: 0.2,
            link_fade: 500.0,
            line_width: 1.0,
            accent: [50, 184, 198],
            particle_alpha: 0.5,
            background: [0, 0, 0],
            use_spatial_grid: true,
            show_debug: false,
        }
    }
}

/// What the UI changed since the last snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParamChanges {
    pub count_changed: bool,
    pub any_changed: bool,
}

impl FieldParams {
    pub fn particle_color(&self) -> Rgba {
        self.accent_with_alpha(self.particle_alpha)
    }

    pub fn link_color(&self, alpha: f32) -> Rgba {
        self.accent_with_alpha(alpha)
    }

    pub fn background_color(&self) -> Rgba {
        let [r, g, b] = self.background;
        rgba(channel(r), channel(g), channel(b), 1.0)
    }

    fn accent_with_alpha(&self, alpha: f32) -> Rgba {
        let [r, g, b] = self.accent;
        rgba(channel(r), channel(g), channel(b), alpha.clamp(0.0, 1.0))
    }

    // Reject values that would make sampling or linking meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.max_speed >= 0.0) {
            return Err(ConfigError::Negative { name: "max_speed", value: self.max_speed });
        }
        if !(self.line_width >= 0.0) {
            return Err(ConfigError::Negative { name: "line_width", value: self.line_width });
        }
        if !(self.min_radius >= 0.0) || !(self.min_radius < self.max_radius) {
            return Err(ConfigError::RadiusRange { min: self.min_radius, max: self.max_radius });
        }
        if !(self.link_distance >= MIN_LINK_DISTANCE) {
            return Err(ConfigError::BelowMinimum {
                name: "link_distance",
                min: MIN_LINK_DISTANCE,
                value: self.link_distance,
            });
        }
        if !(self.link_fade > 0.0) {
            return Err(ConfigError::NotPositive { name: "link_fade", value: self.link_fade });
        }
        for (name, value) in [("link_max_alpha", self.link_max_alpha), ("particle_alpha", self.particle_alpha)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Alpha { name, value });
            }
        }
        Ok(())
    }

    // Get parameter ranges for UI sliders
    pub fn particle_count_range() -> std::ops::RangeInclusive<usize> {
        0..=2000
    }

    pub fn max_speed_range() -> std::ops::RangeInclusive<f32> {
        0.0..=5.0
    }

    pub fn link_distance_range() -> std::ops::RangeInclusive<f32> {
        10.0..=300.0
    }
}

// The values seen before this frame's UI pass
#[derive(Debug, Default)]
pub struct ParamSnapshot {
    previous_values: Option<FieldParams>,
}

impl ParamSnapshot {
    // Take a snapshot of current parameter values for change detection
    pub fn take(&mut self, params: &FieldParams) {
        self.previous_values = Some(params.clone());
    }

    // Compare against the last snapshot; nothing has changed without one
    pub fn detect_changes(&self, params: &FieldParams) -> ParamChanges {
        let Some(prev) = &self.previous_values else {
            return ParamChanges::default();
        };

        ParamChanges {
            count_changed: params.particle_count != prev.particle_count,
            any_changed: params != prev,
        }
    }
}

fn channel(value: u8) -> f32 {
    f32::from(value) / 255.0
}
