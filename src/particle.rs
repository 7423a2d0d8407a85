/*
 * Particle Module
 *
 * This module defines the Particle struct and its per-frame behavior.
 * A particle drifts at a constant velocity and bounces off the surface edges
 * by flipping the sign of the offending velocity component. Its position is
 * never clamped, so it may sit just outside the surface for the frame in
 * which it turns around.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::params::FieldParams;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Point2,
    pub velocity: Vec2,
    pub radius: f32,
}

impl Particle {
    pub fn new(x: f32, y: f32, vx: f32, vy: f32, radius: f32) -> Self {
        Self {
            position: pt2(x, y),
            velocity: vec2(vx, vy),
            radius,
        }
    }

    // Create a particle somewhere on a `width` x `height` surface
    pub fn random<R: Rng>(rng: &mut R, width: f32, height: f32, params: &FieldParams) -> Self {
        let x = sample(rng, 0.0, width);
        let y = sample(rng, 0.0, height);
        let vx = sample(rng, -params.max_speed, params.max_speed);
        let vy = sample(rng, -params.max_speed, params.max_speed);
        let radius = sample(rng, params.min_radius, params.max_radius);

        Self::new(x, y, vx, vy, radius)
    }

    // Move by one frame's worth of velocity, then bounce off the bounds
    pub fn advance(&mut self, width: f32, height: f32) {
        self.position += self.velocity;

        if self.position.x < 0.0 || self.position.x > width {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > height {
            self.velocity.y = -self.velocity.y;
        }
    }
}

// Uniform sample from [low, high); an empty range collapses to `low`
fn sample<R: Rng>(rng: &mut R, low: f32, high: f32) -> f32 {
    if high > low {
        rng.gen_range(low..high)
    } else {
        low
    }
}
