mod input;
mod particle;
mod physics;
mod sim;
mod ui;

#[cfg(test)]
mod particle_test;
#[cfg(test)]
mod sim_test;

use bevy::core_pipeline::bloom::BloomSettings;
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::diagnostic::{EntityCountDiagnosticsPlugin, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use input::InputPlugin;
use sim::{SimPlugin, SimSettings};
use ui::UiPlugin;

fn main() {
    let settings = SimSettings::default();
    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(Msaa::Sample4)
        .add_plugins(FrameTimeDiagnosticsPlugin)
        .add_plugins(EntityCountDiagnosticsPlugin)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "orbit-sandbox".into(),
                resolution: (settings.width as f32, settings.height as f32).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(settings)
        .add_plugins((SimPlugin, UiPlugin, InputPlugin))
        .add_systems(Startup, setup_camera)
        .run();
}

// Centres the view on the boundary so world coordinates run from (0, 0) at
// the bottom-left corner to (width, height).
fn setup_camera(mut commands: Commands, settings: Res<SimSettings>) {
    commands.spawn((
        Camera2dBundle {
            camera: Camera {
                hdr: true,
                ..default()
            },
            tonemapping: Tonemapping::TonyMcMapface,
            transform: Transform::from_xyz(
                (settings.width / 2.0) as f32,
                (settings.height / 2.0) as f32,
                999.0,
            ),
            ..default()
        },
        BloomSettings::default(),
        MainCamera,
    ));
}

#[derive(Component)]
pub struct MainCamera;
