/*
 * Application Module
 *
 * This module defines the nannou model for the particle field window and the
 * per-frame wiring: nannou calls `update` and then the view once per display
 * refresh, which gives the field its advance-then-render loop. Window resizes
 * arrive on the same thread and only update the field's bounds.
 */

use std::sync::OnceLock;

use nannou::prelude::*;
use nannou_egui::Egui;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::debug::DebugInfo;
use crate::field::ParticleField;
use crate::params::ParamSnapshot;
use crate::renderer::view;
use crate::ui;

// nannou's model function takes no arguments, so the binary parks the
// loaded config here before starting the app
static STARTUP_CONFIG: OnceLock<Config> = OnceLock::new();

pub fn set_startup_config(config: Config) {
    if STARTUP_CONFIG.set(config).is_err() {
        tracing::warn!("Startup config was already set, keeping the first one");
    }
}

// Main model for the application
pub struct Model {
    pub field: ParticleField,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub param_snapshot: ParamSnapshot,
    pub rng: StdRng,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let config = STARTUP_CONFIG.get().cloned().unwrap_or_default();

    let window_id = app
        .new_window()
        .title(&config.title)
        .size(1280, 800)
        .view(view)
        .resized(resized)
        .raw_event(raw_window_event)
        .build()
        .expect("Failed to build the main window");

    let window = app.window(window_id).expect("Main window vanished right after creation");
    let egui = Egui::from_window(&window);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let rect = window.rect();
    let field = ParticleField::with_rng(rect.w(), rect.h(), config.field, &mut rng);
    tracing::info!(particles = field.len(), width = field.width, height = field.height, "Particle field started");

    Model {
        field,
        egui,
        debug_info: DebugInfo::default(),
        param_snapshot: ParamSnapshot::default(),
        rng,
    }
}

// Called once per frame before the view
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.record_frame(app.fps(), update.since_last);
    model.egui.set_elapsed_time(update.since_start);

    let outcome = ui::update_ui(
        &mut model.egui,
        &mut model.field.params,
        &mut model.param_snapshot,
        &model.debug_info,
    );
    apply_ui_outcome(model, outcome);

    model.field.advance();
}

fn apply_ui_outcome(model: &mut Model, outcome: ui::UiOutcome) {
    if outcome.reseed {
        let (width, height) = (model.field.width, model.field.height);
        let params = model.field.params.clone();
        model.field = ParticleField::with_rng(width, height, params, &mut model.rng);
        tracing::debug!("Reseeded particle field");
    } else if outcome.changes.count_changed {
        let count = model.field.params.particle_count;
        model.field.repopulate(count, &mut model.rng);
        tracing::debug!(count, "Changed particle count");
    }

    if outcome.changes.any_changed {
        tracing::debug!(params = ?model.field.params, "Field parameters changed");
        if let Err(error) = model.field.params.validate() {
            tracing::warn!(%error, "UI produced invalid parameters");
        }
    }
}

// Window resize event handler
pub fn resized(_app: &App, model: &mut Model, size: Vec2) {
    model.field.resize(size.x, size.y);
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
