use approx::assert_relative_eq;
use bevy::math::DVec2;

use crate::particle::mass_for;
use crate::physics::{EngineConfig, COLLISION_SLACK};
use crate::sim::{Scenario, SimSettings};

#[test]
fn test_open_space_matches_engine_defaults() {
    let settings = SimSettings::from_scenario(Scenario::OpenSpace);

    assert_eq!(settings.engine_config(), EngineConfig::default());
    assert!(settings.gravity_enabled);
}

#[test]
fn test_walled_scenarios_enable_the_boundary() {
    let walled = SimSettings::from_scenario(Scenario::Walled).engine_config();
    assert!(walled.wrapping);
    assert!(walled.restitution < 1.0);
    assert_eq!(walled.collision_slack, COLLISION_SLACK);

    let billiards = SimSettings::from_scenario(Scenario::Billiards);
    assert!(billiards.engine_config().wrapping);
    assert_eq!(billiards.engine_config().restitution, 1.0);
    assert!(!billiards.gravity_enabled);
}

#[test]
fn test_anchor_rests_at_boundary_centre() {
    let settings = SimSettings::default();
    let sun = settings.anchor();

    assert_eq!(sun.position, DVec2::new(700.0, 450.0));
    assert_eq!(sun.velocity, DVec2::ZERO);
    assert_eq!(sun.radius(), 75.0);
    assert_relative_eq!(sun.mass(), mass_for(75.0, 10_000.0));
}
