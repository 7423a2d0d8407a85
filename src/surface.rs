/*
 * Surface Module
 *
 * This module defines the Surface trait: the 2D drawing target a particle field
 * renders onto. Surface coordinates have their origin in the top-left corner
 * with y growing downward, measured in pixels.
 *
 * Two implementations live here:
 * - NannouSurface draws into a nannou `Draw` for a window
 * - RecordingSurface keeps a list of commands, for tests and benchmarks
 */

use nannou::color::Rgba;
use nannou::prelude::*;

pub trait Surface {
    /// Current (width, height) in pixels.
    fn size(&self) -> (f32, f32);

    fn clear(&mut self);

    fn fill_circle(&mut self, center: Point2, radius: f32, color: Rgba);

    fn stroke_line(&mut self, from: Point2, to: Point2, width: f32, color: Rgba);
}

// Draws into a nannou window, mapping surface space onto nannou's
// centered, y-up coordinate system
pub struct NannouSurface<'a> {
    draw: &'a Draw,
    window_rect: Rect,
    background: Rgba,
}

impl<'a> NannouSurface<'a> {
    pub fn new(draw: &'a Draw, window_rect: Rect, background: Rgba) -> Self {
        Self {
            draw,
            window_rect,
            background,
        }
    }

    #[inline]
    pub fn to_window(&self, point: Point2) -> Point2 {
        pt2(self.window_rect.left() + point.x, self.window_rect.top() - point.y)
    }
}

impl Surface for NannouSurface<'_> {
    fn size(&self) -> (f32, f32) {
        (self.window_rect.w(), self.window_rect.h())
    }

    fn clear(&mut self) {
        self.draw.background().color(self.background);
    }

    fn fill_circle(&mut self, center: Point2, radius: f32, color: Rgba) {
        self.draw
            .ellipse()
            .xy(self.to_window(center))
            .radius(radius)
            .color(color);
    }

    fn stroke_line(&mut self, from: Point2, to: Point2, width: f32, color: Rgba) {
        self.draw
            .line()
            .start(self.to_window(from))
            .end(self.to_window(to))
            .weight(width)
            .color(color);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    Circle { center: Point2, radius: f32, color: Rgba },
    Line { from: Point2, to: Point2, width: f32, color: Rgba },
}

// Headless surface that remembers what was drawn since the last clear
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub width: f32,
    pub height: f32,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|command| matches!(command, DrawCommand::Circle { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|command| matches!(command, DrawCommand::Line { .. }))
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_circle(&mut self, center: Point2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }

    fn stroke_line(&mut self, from: Point2, to: Point2, width: f32, color: Rgba) {
        self.commands.push(DrawCommand::Line { from, to, width, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_mapping_puts_the_origin_top_left() {
        let draw = Draw::new();
        let rect = Rect::from_w_h(200.0, 100.0);
        let surface = NannouSurface::new(&draw, rect, rgba(0.0, 0.0, 0.0, 1.0));

        assert_eq!(surface.to_window(pt2(0.0, 0.0)), pt2(-100.0, 50.0));
        assert_eq!(surface.to_window(pt2(200.0, 100.0)), pt2(100.0, -50.0));
        assert_eq!(surface.size(), (200.0, 100.0));
    }

    #[test]
    fn clearing_a_recording_forgets_earlier_frames() {
        let mut surface = RecordingSurface::new(10.0, 10.0);
        surface.fill_circle(pt2(1.0, 1.0), 1.0, rgba(1.0, 1.0, 1.0, 1.0));

        surface.clear();

        assert_eq!(surface.commands, vec![DrawCommand::Clear]);
    }
}
