/*
 * Particle Field Module
 *
 * This module defines ParticleField: the fixed population of particles plus the
 * current surface bounds. Each frame the host calls `advance` to move every
 * particle and `render` to draw the particles and the links between nearby
 * pairs. Resizing only changes the bounds; particles keep their positions and
 * bounce correctly at their next boundary crossing.
 */

use rand::Rng;

use crate::links::{brute_force_links, Link};
use crate::params::FieldParams;
use crate::particle::Particle;
use crate::spatial_grid::grid_links;
use crate::surface::Surface;

#[derive(Clone, Debug)]
pub struct ParticleField {
    pub particles: Vec<Particle>,
    pub width: f32,
    pub height: f32,
    pub params: FieldParams,
}

/// Counts of what the last `render` call drew.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub particles: usize,
    pub links: usize,
}

impl ParticleField {
    /// Populate a `width` x `height` surface with `count` particles using the
    /// default parameters.
    pub fn create(width: f32, height: f32, count: usize) -> Self {
        let params = FieldParams {
            particle_count: count,
            ..FieldParams::default()
        };
        Self::with_rng(width, height, params, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng>(width: f32, height: f32, params: FieldParams, rng: &mut R) -> Self {
        let particles = (0..params.particle_count)
            .map(|_| Particle::random(rng, width, height, &params))
            .collect();

        tracing::debug!(count = params.particle_count, width, height, "Created particle field");

        Self {
            particles,
            width,
            height,
            params,
        }
    }

    pub fn from_particles(width: f32, height: f32, particles: Vec<Particle>) -> Self {
        let params = FieldParams {
            particle_count: particles.len(),
            ..FieldParams::default()
        };

        Self {
            particles,
            width,
            height,
            params,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    // Move every particle by one frame
    pub fn advance(&mut self) {
        for particle in &mut self.particles {
            particle.advance(self.width, self.height);
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        if self.width != width || self.height != height {
            tracing::debug!(width, height, "Particle field resized");
        }
        self.width = width;
        self.height = height;
    }

    // Grow or shrink the population; surviving particles are left untouched
    pub fn repopulate<R: Rng>(&mut self, count: usize, rng: &mut R) {
        let (width, height) = (self.width, self.height);
        let params = &self.params;
        self.particles
            .resize_with(count, || Particle::random(rng, width, height, params));
        self.params.particle_count = count;
    }

    // All pairs closer than the link distance
    pub fn links(&self) -> Vec<Link> {
        if self.params.use_spatial_grid && self.params.link_distance > 0.0 {
            grid_links(&self.particles, self.width, self.height, &self.params)
        } else {
            brute_force_links(&self.particles, &self.params)
        }
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> RenderStats {
        let (width, height) = surface.size();
        if width <= 0.0 || height <= 0.0 {
            return RenderStats::default();
        }

        surface.clear();

        let particle_color = self.params.particle_color();
        for particle in &self.particles {
            surface.fill_circle(particle.position, particle.radius, particle_color);
        }

        let links = self.links();
        for link in &links {
            surface.stroke_line(
                self.particles[link.a].position,
                self.particles[link.b].position,
                self.params.line_width,
                self.params.link_color(link.alpha),
            );
        }

        RenderStats {
            particles: self.particles.len(),
            links: links.len(),
        }
    }

    // One frame for hosts that drive the loop themselves
    pub fn step<S: Surface + ?Sized>(&mut self, surface: &mut S) -> RenderStats {
        self.advance();
        self.render(surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCommand, RecordingSurface};
    use nannou::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn still(x: f32, y: f32) -> Particle {
        Particle::new(x, y, 0.0, 0.0, 2.0)
    }

    #[test]
    fn create_allocates_the_requested_population() {
        let field = ParticleField::create(800.0, 600.0, 80);

        assert_eq!(field.len(), 80);
        assert_eq!((field.width, field.height), (800.0, 600.0));
    }

    #[test]
    fn population_is_stable_across_frames() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut field = ParticleField::with_rng(300.0, 200.0, FieldParams::default(), &mut rng);
        let mut surface = RecordingSurface::new(300.0, 200.0);

        for _ in 0..1000 {
            let stats = field.step(&mut surface);
            assert_eq!(stats.particles, 80);
        }
        assert_eq!(field.len(), 80);
    }

    #[test]
    fn resize_twice_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut field = ParticleField::with_rng(400.0, 300.0, FieldParams::default(), &mut rng);
        let before = field.particles.clone();

        field.resize(1024.0, 768.0);
        field.resize(1024.0, 768.0);

        assert_eq!((field.width, field.height), (1024.0, 768.0));
        assert_eq!(field.particles, before);
    }

    #[test]
    fn empty_field_clears_and_draws_nothing() {
        let field = ParticleField::create(640.0, 480.0, 0);
        let mut surface = RecordingSurface::new(640.0, 480.0);

        let stats = field.render(&mut surface);

        assert_eq!(surface.commands, vec![DrawCommand::Clear]);
        assert_eq!(stats, RenderStats::default());
    }

    #[test]
    fn zero_sized_surface_is_left_alone() {
        let field = ParticleField::from_particles(0.0, 0.0, vec![still(0.0, 0.0)]);
        let mut surface = RecordingSurface::new(0.0, 0.0);

        field.render(&mut surface);

        assert!(surface.commands.is_empty());
    }

    #[test]
    fn renders_circles_then_links() {
        let field = ParticleField::from_particles(
            200.0,
            200.0,
            vec![still(10.0, 10.0), still(60.0, 10.0), still(190.0, 190.0)],
        );
        let mut surface = RecordingSurface::new(200.0, 200.0);

        let stats = field.render(&mut surface);

        assert_eq!(stats, RenderStats { particles: 3, links: 1 });
        assert_eq!(surface.commands[0], DrawCommand::Clear);
        assert_eq!(surface.circles().count(), 3);
        let first_line = surface.lines().next().cloned();
        match first_line {
            Some(DrawCommand::Line { from, to, width, color }) => {
                assert_eq!((from, to), (pt2(10.0, 10.0), pt2(60.0, 10.0)));
                assert_eq!(width, 1.0);
                assert!((color.alpha - 0.1).abs() < 1e-6);
            }
            other => panic!("expected a line, got {other:?}"),
        }
    }

    #[test]
    fn particles_use_the_half_transparent_accent() {
        let field = ParticleField::from_particles(100.0, 100.0, vec![still(50.0, 50.0)]);
        let mut surface = RecordingSurface::new(100.0, 100.0);

        field.render(&mut surface);

        let first_circle = surface.circles().next().cloned();
        match first_circle {
            Some(DrawCommand::Circle { center, radius, color }) => {
                assert_eq!(center, pt2(50.0, 50.0));
                assert_eq!(radius, 2.0);
                assert_eq!(color.alpha, 0.5);
            }
            other => panic!("expected a circle, got {other:?}"),
        }
    }

    #[test]
    fn grid_and_brute_force_render_the_same_number_of_links() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut field = ParticleField::with_rng(500.0, 500.0, FieldParams::default(), &mut rng);
        let mut surface = RecordingSurface::new(500.0, 500.0);

        let with_grid = field.render(&mut surface);
        field.params.use_spatial_grid = false;
        let without_grid = field.render(&mut surface);

        assert_eq!(with_grid, without_grid);
    }

    #[test]
    fn tiny_link_distance_renders_on_a_large_surface() {
        let params = FieldParams {
            link_distance: 0.001,
            ..FieldParams::default()
        };
        let mut rng = StdRng::seed_from_u64(21);
        let field = ParticleField::with_rng(1280.0, 800.0, params, &mut rng);
        let mut surface = RecordingSurface::new(1280.0, 800.0);

        let stats = field.render(&mut surface);

        assert_eq!(stats.particles, 80);
        assert_eq!(surface.circles().count(), 80);
    }

    #[test]
    fn repopulate_keeps_survivors() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut field = ParticleField::with_rng(300.0, 300.0, FieldParams::default(), &mut rng);
        let first_ten = field.particles[..10].to_vec();

        field.repopulate(10, &mut rng);
        assert_eq!(field.particles, first_ten);

        field.repopulate(25, &mut rng);
        assert_eq!(field.len(), 25);
        assert_eq!(field.params.particle_count, 25);
        assert_eq!(field.particles[..10], first_ten[..]);
    }
}
