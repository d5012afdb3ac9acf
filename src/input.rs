use crate::sim::{ResetEvent, SimSettings, SimState, SpawnParticle};
use crate::MainCamera;
use bevy::input::mouse::MouseButtonInput;
use bevy::input::ButtonState;
use bevy::prelude::*;
use bevy_egui::EguiContexts;

pub struct InputPlugin;
impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                click_spawn,
                gravity_toggle,
                pause_toggle,
                time_scale_toggle,
                reset_trigger,
                help_toggle,
                diagnostics_toggle,
            ),
        );
    }
}

fn window_cursor_world(
    window: &Window,
    cam: (&Camera, &GlobalTransform),
) -> Option<Vec2> {
    let cursor_pos = window.cursor_position()?;
    cam.0.viewport_to_world_2d(cam.1, cursor_pos)
}

fn click_spawn(
    windows: Query<&Window>,
    q_cam: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut mousebtn_evr: EventReader<MouseButtonInput>,
    mut ev_spawn: EventWriter<SpawnParticle>,
    mut contexts: EguiContexts,
) {
    // Clicks on the panels belong to egui.
    if contexts.ctx_mut().wants_pointer_input() {
        mousebtn_evr.clear();
        return;
    }
    let (Ok(win), Ok(cam)) = (windows.get_single(), q_cam.get_single()) else {
        return;
    };

    for ev in mousebtn_evr.read() {
        if ev.state == ButtonState::Pressed && ev.button == MouseButton::Left {
            if let Some(world) = window_cursor_world(win, cam) {
                ev_spawn.send(SpawnParticle { position: world });
            }
        }
    }
}

fn gravity_toggle(mut settings: ResMut<SimSettings>, keys: Res<ButtonInput<KeyCode>>) {
    if keys.just_pressed(KeyCode::KeyG) {
        settings.gravity_enabled = !settings.gravity_enabled;
        debug!("gravity {}", if settings.gravity_enabled { "on" } else { "off" });
    }
}

fn pause_toggle(
    state: Res<State<SimState>>,
    mut next_state: ResMut<NextState<SimState>>,
    keys: Res<ButtonInput<KeyCode>>,
) {
    if keys.just_pressed(KeyCode::Space) {
        next_state.set(match state.get() {
            SimState::Running => SimState::Paused,
            SimState::Paused => SimState::Running,
        });
    }
}

fn time_scale_toggle(mut settings: ResMut<SimSettings>, keys: Res<ButtonInput<KeyCode>>) {
    if keys.just_pressed(KeyCode::BracketRight) {
        settings.time_scale *= 2.0;
    }
    if keys.just_pressed(KeyCode::BracketLeft) {
        settings.time_scale /= 2.0;
    }
    settings.time_scale = settings.time_scale.clamp(0.25, 4.0);
}

fn reset_trigger(mut ev_reset: EventWriter<ResetEvent>, keys: Res<ButtonInput<KeyCode>>) {
    if keys.just_pressed(KeyCode::KeyR) {
        ev_reset.send(ResetEvent);
    }
}

fn help_toggle(mut settings: ResMut<SimSettings>, keys: Res<ButtonInput<KeyCode>>) {
    if keys.just_pressed(KeyCode::KeyH) {
        settings.show_help = !settings.show_help;
    }
}

fn diagnostics_toggle(mut settings: ResMut<SimSettings>, keys: Res<ButtonInput<KeyCode>>) {
    if keys.just_pressed(KeyCode::F3) {
        settings.show_diagnostics = !settings.show_diagnostics;
    }
}
