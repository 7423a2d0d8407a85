/*
 * UI Module
 *
 * This module contains functions for creating and updating the user interface
 * using nannou_egui, plus the plain-text debug overlay drawn with nannou.
 * Parameter change detection is handled by ParamSnapshot.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::{FieldParams, ParamChanges, ParamSnapshot};

// What the host should do after this frame's UI pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiOutcome {
    pub reseed: bool,
    pub changes: ParamChanges,
}

pub fn update_ui(
    egui: &mut Egui,
    params: &mut FieldParams,
    snapshot: &mut ParamSnapshot,
    debug_info: &DebugInfo,
) -> UiOutcome {
    let mut reseed = false;

    // Take a snapshot of current parameter values for change detection
    snapshot.take(params);

    let ctx = egui.begin_frame();

    egui::Window::new("Particle Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Particles", |ui| {
                ui.add(egui::Slider::new(&mut params.particle_count, FieldParams::particle_count_range()).text("Count"));
                ui.add(egui::Slider::new(&mut params.max_speed, FieldParams::max_speed_range()).text("Max Speed"));

                if ui.button("Reseed").clicked() {
                    reseed = true;
                }
            });

            ui.collapsing("Links", |ui| {
                ui.add(egui::Slider::new(&mut params.link_distance, FieldParams::link_distance_range()).text("Link Distance"));
                ui.checkbox(&mut params.use_spatial_grid, "Use Spatial Grid");

                let stats = debug_info.last_render.get();
                ui.label(format!("Links drawn: {}", stats.links));
            });

            ui.checkbox(&mut params.show_debug, "Show Debug Info");
        });

    UiOutcome {
        reseed,
        changes: snapshot.detect_changes(params),
    }
}

// Draw debug information in the top-left corner of the window
pub fn draw_debug_info(draw: &nannou::Draw, debug_info: &DebugInfo, window_rect: nannou::geom::Rect) {
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 200.0;

    let surface_label = format!("{:.0}x{:.0}", window_rect.w(), window_rect.h());
    let debug_texts = debug_info.lines(&surface_label);

    let panel_height = line_height * debug_texts.len() as f32 + margin;
    draw.rect()
        .x_y(window_rect.left() + panel_width / 2.0, window_rect.top() - panel_height / 2.0)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.top() - margin;

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        draw.text(text)
            .x_y(text_x + 70.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
