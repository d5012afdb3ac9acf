use bevy::color::LinearRgba;
use bevy::math::primitives::Circle;
use bevy::math::DVec2;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use rand::Rng;

use crate::particle::{Particle, ParticleStore};
use crate::physics::{EngineConfig, PhysicsEngine, COLLISION_SLACK};

/// Index of the body new particles are put in orbit around.
pub const ANCHOR: usize = 0;

#[derive(States, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SimState {
    #[default]
    Running,
    Paused,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Scenario {
    #[default]
    OpenSpace,
    Walled,
    Billiards,
}

pub struct SimPlugin;
impl Plugin for SimPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<SimState>()
            .init_resource::<SimSettings>()
            .add_event::<SpawnParticle>()
            .add_event::<ResetEvent>()
            .add_systems(Startup, setup_simulation)
            .add_systems(
                Update,
                (
                    handle_reset,
                    spawn_particles,
                    physics_step.run_if(in_state(SimState::Running)),
                    sync_render,
                )
                    .chain(),
            );
    }
}

/// Request to drop a new orbiting particle at a world position.
#[derive(Event)]
pub struct SpawnParticle {
    pub position: Vec2,
}

#[derive(Event, Default)]
pub struct ResetEvent;

#[derive(Resource, Clone)]
pub struct SimSettings {
    pub scenario: Scenario,
    pub g: f64,
    pub wrapping: bool,
    pub width: f64,
    pub height: f64,
    pub restitution: f64,
    pub collision_slack: f64,
    pub sun_radius: f64,
    pub sun_density: f64,
    pub spawn_radius: (u32, u32), // min, max (inclusive)
    pub spawn_density: f64,
    pub gravity_enabled: bool,
    pub time_scale: f64,
    pub show_help: bool,
    pub show_diagnostics: bool,
}
impl Default for SimSettings {
    fn default() -> Self {
        Self {
            scenario: Scenario::default(),
            g: 2e-3,
            wrapping: false,
            width: 1400.0,
            height: 900.0,
            restitution: 1.0,
            collision_slack: COLLISION_SLACK,
            sun_radius: 75.0,
            sun_density: 10_000.0,
            spawn_radius: (5, 15),
            spawn_density: 10_000.0,
            gravity_enabled: true,
            time_scale: 1.0,
            show_help: true,
            show_diagnostics: false,
        }
    }
}

impl SimSettings {
    pub fn from_scenario(scenario: Scenario) -> Self {
        let mut settings = SimSettings {
            scenario,
            ..default()
        };
        match scenario {
            Scenario::OpenSpace => {}
            Scenario::Walled => {
                settings.wrapping = true;
                settings.restitution = 0.9;
            }
            Scenario::Billiards => {
                settings.wrapping = true;
                settings.restitution = 1.0;
                settings.gravity_enabled = false;
                settings.sun_radius = 40.0;
            }
        }
        settings
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            g: self.g,
            wrapping: self.wrapping,
            width: self.width,
            height: self.height,
            restitution: self.restitution,
            collision_slack: self.collision_slack,
        }
    }

    /// The resting sun in the middle of the boundary.
    pub fn anchor(&self) -> Particle {
        Particle::from_density(
            DVec2::new(self.width / 2.0, self.height / 2.0),
            DVec2::ZERO,
            self.sun_radius,
            self.sun_density,
        )
    }
}

#[derive(Component)]
pub struct ParticleIndex(pub usize);

#[derive(Resource)]
struct ParticleAssets {
    mesh: Mesh2dHandle,
    sun: Handle<ColorMaterial>,
    body: Handle<ColorMaterial>,
}

fn setup_simulation(
    mut commands: Commands,
    settings: Res<SimSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // Unit disk, scaled per particle by its radius.
    let mesh = Mesh2dHandle(meshes.add(Circle::new(1.0)));
    let glow: Color = (LinearRgba::from(Color::srgb(1.0, 0.92, 0.6)) * 3.0).into();
    commands.insert_resource(ParticleAssets {
        mesh,
        sun: materials.add(ColorMaterial::from(glow)),
        body: materials.add(ColorMaterial::from(Color::WHITE)),
    });

    commands.insert_resource(ParticleStore::new(settings.anchor()));
    commands.insert_resource(PhysicsEngine::new(settings.engine_config()));
    info!(
        "simulation ready: scenario {:?}, G = {}, wrapping = {}",
        settings.scenario, settings.g, settings.wrapping
    );
}

fn handle_reset(
    mut ev_reset: EventReader<ResetEvent>,
    mut settings: ResMut<SimSettings>,
    mut store: ResMut<ParticleStore>,
    mut engine: ResMut<PhysicsEngine>,
) {
    if ev_reset.is_empty() {
        return;
    }
    ev_reset.clear();

    // Keep the view toggles, take everything else from the chosen scenario.
    let (show_help, show_diagnostics, time_scale) =
        (settings.show_help, settings.show_diagnostics, settings.time_scale);
    *settings = SimSettings::from_scenario(settings.scenario);
    settings.show_help = show_help;
    settings.show_diagnostics = show_diagnostics;
    settings.time_scale = time_scale;

    store.reset(settings.anchor());
    *engine = PhysicsEngine::new(settings.engine_config());
    info!("simulation reset to {:?}", settings.scenario);
}

fn spawn_particles(
    mut ev: EventReader<SpawnParticle>,
    settings: Res<SimSettings>,
    engine: Res<PhysicsEngine>,
    mut store: ResMut<ParticleStore>,
) {
    let mut rng = rand::thread_rng();
    for e in ev.read() {
        let (min, max) = settings.spawn_radius;
        let radius = rng.gen_range(min..=max) as f64;
        match engine.spawn(
            &mut store,
            ANCHOR,
            e.position.as_dvec2(),
            radius,
            settings.spawn_density,
        ) {
            Ok(index) => debug!("spawned particle {} (r = {}) at {}", index, radius, e.position),
            Err(err) => warn!("spawn dropped: {}", err),
        }
    }
}

fn physics_step(
    time: Res<Time>,
    settings: Res<SimSettings>,
    engine: Res<PhysicsEngine>,
    mut store: ResMut<ParticleStore>,
) {
    let dt = time.delta_seconds_f64() * settings.time_scale;
    engine.step(store.as_mut_slice(), dt, settings.gravity_enabled);
}

// Mirrors the store onto disk entities: moves existing ones, adds one per new
// index and drops those left past the end after a reset.
fn sync_render(
    mut commands: Commands,
    store: Res<ParticleStore>,
    assets: Res<ParticleAssets>,
    mut q: Query<(Entity, &ParticleIndex, &mut Transform)>,
) {
    let particles = store.as_slice();
    let mut rendered = 0;
    for (e, ParticleIndex(i), mut t) in &mut q {
        match particles.get(*i) {
            Some(p) => {
                place(&mut t, p);
                rendered = rendered.max(*i + 1);
            }
            None => commands.entity(e).despawn(),
        }
    }

    for (i, p) in particles.iter().enumerate().skip(rendered) {
        let mut transform = Transform::default();
        place(&mut transform, p);
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: assets.mesh.clone(),
                material: if i == ANCHOR {
                    assets.sun.clone()
                } else {
                    assets.body.clone()
                },
                transform,
                ..default()
            },
            ParticleIndex(i),
        ));
    }
}

fn place(t: &mut Transform, p: &Particle) {
    t.translation = p.position.as_vec2().extend(0.0);
    t.scale = Vec3::splat(p.radius() as f32);
}
