use bevy::diagnostic::{DiagnosticsStore, EntityCountDiagnosticsPlugin, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPlugin};

use crate::particle::ParticleStore;
use crate::physics::PhysicsEngine;
use crate::sim::{ResetEvent, Scenario, SimSettings, SimState};

pub struct UiPlugin;
impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Update, (ui_system, help_panel, diagnostics_panel));
    }
}

#[allow(clippy::too_many_arguments)]
fn ui_system(
    mut contexts: EguiContexts,
    mut settings: ResMut<SimSettings>,
    store: Res<ParticleStore>,
    engine: Res<PhysicsEngine>,
    state: Res<State<SimState>>,
    mut next_state: ResMut<NextState<SimState>>,
    mut ev_reset: EventWriter<ResetEvent>,
    diagnostics: Res<DiagnosticsStore>,
) {
    egui::Window::new("Settings").show(contexts.ctx_mut(), |ui| {
        ui.label(format!("Particles: {}", store.len()));
        if let Some(fps) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS) {
            if let Some(value) = fps.smoothed() {
                ui.label(format!("FPS: {:.1}", value));
            }
        }
        ui.label(format!("Sim Rate: {:.2}x", settings.time_scale));

        ui.separator();

        let mut running = *state.get() == SimState::Running;
        if ui.checkbox(&mut running, "Running").changed() {
            next_state.set(if running {
                SimState::Running
            } else {
                SimState::Paused
            });
        }
        ui.checkbox(&mut settings.gravity_enabled, "Gravity");
        ui.add(egui::Slider::new(&mut settings.time_scale, 0.25..=4.0).text("Time Scale"));

        ui.separator();

        // Engine parameters are fixed until the next reset.
        let config = engine.config();
        ui.label(format!("G: {}", config.g));
        ui.label(format!("Restitution: {:.2}", config.restitution));
        ui.label(format!("Collision Slack: {:.1}", config.collision_slack));
        ui.label(format!(
            "Boundary: {}",
            if config.wrapping {
                format!("{} x {}", config.width, config.height)
            } else {
                "off".to_string()
            }
        ));

        ui.separator();

        egui::ComboBox::from_label("Scenario")
            .selected_text(format!("{:?}", settings.scenario))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut settings.scenario, Scenario::OpenSpace, "Open Space");
                ui.selectable_value(&mut settings.scenario, Scenario::Walled, "Walled");
                ui.selectable_value(&mut settings.scenario, Scenario::Billiards, "Billiards");
            });
        if ui.button("Reset").clicked() {
            ev_reset.send(ResetEvent);
        }
    });
}

fn help_panel(mut contexts: EguiContexts, settings: Res<SimSettings>) {
    if !settings.show_help {
        return;
    }
    egui::Window::new("Help").show(contexts.ctx_mut(), |ui| {
        ui.label("Left Mouse: Spawn Orbiting Particle");
        ui.label("G: Toggle Gravity");
        ui.label("Space: Pause Simulation");
        ui.label("[/]: Adjust Sim Speed");
        ui.label("R: Reset Simulation");
        ui.label("H: Toggle Help");
        ui.label("F3: Toggle Diagnostics");
    });
}

fn diagnostics_panel(
    mut contexts: EguiContexts,
    settings: Res<SimSettings>,
    store: Res<ParticleStore>,
    diagnostics: Res<DiagnosticsStore>,
) {
    if !settings.show_diagnostics {
        return;
    }
    egui::Window::new("Diagnostics").show(contexts.ctx_mut(), |ui| {
        if let Some(fps) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS) {
            if let Some(value) = fps.smoothed() {
                ui.label(format!("FPS: {:.1}", value));
            }
        }
        if let Some(entity_count) = diagnostics.get(&EntityCountDiagnosticsPlugin::ENTITY_COUNT) {
            if let Some(value) = entity_count.value() {
                ui.label(format!("Entities: {}", value));
            }
        }
        let p = store.total_momentum();
        ui.label(format!("Momentum: ({:.3e}, {:.3e})", p.x, p.y));
        ui.label(format!("Kinetic Energy: {:.3e}", store.kinetic_energy()));
    });
}
