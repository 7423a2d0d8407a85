/*
 * Renderer Module
 *
 * This module handles drawing the particle field into the nannou window.
 * The field itself decides what to draw; this view only wraps the frame in a
 * NannouSurface, then layers the debug overlay and the egui controls on top.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::surface::NannouSurface;
use crate::ui;

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let window_rect = app.window_rect();

    let mut surface = NannouSurface::new(&draw, window_rect, model.field.params.background_color());
    let stats = model.field.render(&mut surface);
    model.debug_info.record_render(stats);

    if model.field.params.show_debug {
        ui::draw_debug_info(&draw, &model.debug_info, window_rect);
    }

    if let Err(error) = draw.to_frame(app, &frame) {
        tracing::error!(?error, "Failed to draw particle field");
    }

    if let Err(error) = model.egui.draw_to_frame(&frame) {
        tracing::error!(?error, "Failed to draw controls");
    }
}
