/*
 * Links Module
 *
 * This module computes the edges ("links") drawn between particles that are
 * closer than the link distance. The brute-force pass visits every unordered
 * pair once, which is the one quadratic cost of the animation; the spatial
 * grid module offers an accelerated pass producing the same edges.
 *
 * A link fades linearly with distance. The raw formula can dip below zero for
 * some parameter choices, so the alpha handed to a surface is always clamped
 * to [0, 1].
 */

use crate::params::FieldParams;
use crate::particle::Particle;

/// An edge between particles `a` and `b`, with `a < b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub distance: f32,
    pub alpha: f32,
}

/// Stroke alpha for two particles `distance` apart, or `None` when they are
/// too far apart to be linked. The threshold is exclusive.
pub fn connection_alpha(distance: f32, params: &FieldParams) -> Option<f32> {
    if distance < params.link_distance {
        let alpha = params.link_max_alpha - distance / params.link_fade;
        Some(alpha.clamp(0.0, 1.0))
    } else {
        None
    }
}

// Link a single pair if it is close enough
#[inline]
pub fn link_between(particles: &[Particle], a: usize, b: usize, params: &FieldParams) -> Option<Link> {
    let distance = particles[a].position.distance(particles[b].position);
    connection_alpha(distance, params).map(|alpha| Link { a, b, distance, alpha })
}

// Visit every unordered pair (i, j), i < j
pub fn brute_force_links(particles: &[Particle], params: &FieldParams) -> Vec<Link> {
    let mut links = Vec::new();

    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            if let Some(link) = link_between(particles, i, j, params) {
                links.push(link);
            }
        }
    }

    links
}
