/*
 * Spatial Grid Module
 *
 * This module defines the SpatialGrid struct used to find nearby particle pairs
 * without testing every pair. The surface is divided into square cells whose
 * side is at least the link distance, so any linkable pair sits in the same or
 * in adjacent cells.
 *
 * Particles briefly outside the surface (after a bounce) are clamped into the
 * border cells; this only widens the candidate set, never narrows it.
 *
 * The cell count stays within a small multiple of the particle count: when the
 * link distance is tiny compared to the surface, cells grow past it.
 */

use nannou::prelude::*;

use crate::links::{brute_force_links, link_between, Link};
use crate::params::FieldParams;
use crate::particle::Particle;

pub struct SpatialGrid {
    pub cell_size: f32,
    pub columns: usize,
    pub rows: usize,
    pub grid: Vec<Vec<usize>>,
}

impl SpatialGrid {
    pub fn new(cell_size: f32, width: f32, height: f32) -> Self {
        let columns = ((width / cell_size).ceil() as usize).max(1);
        let rows = ((height / cell_size).ceil() as usize).max(1);

        Self {
            cell_size,
            columns,
            rows,
            grid: vec![Vec::new(); columns * rows],
        }
    }

    // Convert surface coordinates to (column, row)
    #[inline]
    pub fn cell_of(&self, pos: Point2) -> (usize, usize) {
        let column = (pos.x / self.cell_size).clamp(0.0, self.columns as f32 - 1.0) as usize;
        let row = (pos.y / self.cell_size).clamp(0.0, self.rows as f32 - 1.0) as usize;
        (column, row)
    }

    pub fn clear(&mut self) {
        for cell in &mut self.grid {
            cell.clear();
        }
    }

    #[inline]
    pub fn insert(&mut self, index: usize, position: Point2) {
        let (column, row) = self.cell_of(position);
        self.grid[row * self.columns + column].push(index);
    }

    // Indices stored in the cell at (column, row) and its 8 neighbours
    pub fn nearby_indices(&self, column: usize, row: usize) -> impl Iterator<Item = usize> + '_ {
        let rows = row.saturating_sub(1)..=(row + 1).min(self.rows - 1);
        let columns = column.saturating_sub(1)..=(column + 1).min(self.columns - 1);

        rows.flat_map(move |check_row| {
            let row_start = check_row * self.columns;
            columns
                .clone()
                .flat_map(move |check_column| self.grid[row_start + check_column].iter().copied())
        })
    }
}

// Smallest cell size that keeps the grid within a budget tied to `population`
pub fn bounded_cell_size(link_distance: f32, width: f32, height: f32, population: usize) -> f32 {
    let population = population.max(1) as f32;
    link_distance
        .max((width * height / population).sqrt())
        .max(width.max(height) / population)
}

// Same edge set as `links::brute_force_links`, in a different order
pub fn grid_links(particles: &[Particle], width: f32, height: f32, params: &FieldParams) -> Vec<Link> {
    let cell_size = bounded_cell_size(params.link_distance, width.max(0.0), height.max(0.0), particles.len());
    if !(cell_size.is_finite() && cell_size > 0.0) {
        return brute_force_links(particles, params);
    }

    let mut grid = SpatialGrid::new(cell_size, width.max(0.0), height.max(0.0));
    for (i, particle) in particles.iter().enumerate() {
        grid.insert(i, particle.position);
    }

    let mut links = Vec::new();
    for (i, particle) in particles.iter().enumerate() {
        let (column, row) = grid.cell_of(particle.position);
        for j in grid.nearby_indices(column, row) {
            // Each pair is seen from both ends; keep the one where i < j
            if j <= i {
                continue;
            }
            if let Some(link) = link_between(particles, i, j, params) {
                links.push(link);
            }
        }
    }

    links
}
