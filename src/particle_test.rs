use approx::assert_relative_eq;
use bevy::math::DVec2;
use std::f64::consts::PI;

use crate::particle::*;

#[test]
fn test_mass_from_density_uses_sphere_volume() {
    let p = Particle::from_density(DVec2::new(1.0, 2.0), DVec2::ZERO, 3.0, 10.0);

    assert_relative_eq!(p.mass(), 4.0 / 3.0 * PI * 27.0 * 10.0);
    assert_eq!(p.radius(), 3.0);
    assert_eq!(p.acceleration, DVec2::ZERO);
}

#[test]
fn test_momentum_and_energy() {
    let p = Particle::new(2.0, 1.0, DVec2::ZERO, DVec2::new(3.0, 4.0));

    assert_eq!(p.momentum(), DVec2::new(6.0, 8.0));
    assert_relative_eq!(p.kinetic_energy(), 25.0);
}

#[test]
fn test_store_appends_in_order() {
    let anchor = Particle::new(100.0, 10.0, DVec2::ZERO, DVec2::ZERO);
    let mut store = ParticleStore::new(anchor);

    let a = store.push(Particle::new(1.0, 1.0, DVec2::X, DVec2::ZERO));
    let b = store.push(Particle::new(2.0, 1.0, DVec2::Y, DVec2::ZERO));

    assert_eq!((a, b), (1, 2));
    assert_eq!(store.len(), 3);
    assert_eq!(store.get(0), Some(&anchor));
    assert_eq!(store.get(2).map(Particle::mass), Some(2.0));
    assert!(store.get(3).is_none());
    assert_eq!(store.iter().count(), store.as_slice().len());
}

#[test]
fn test_reset_leaves_only_the_new_anchor() {
    let mut store = ParticleStore::new(Particle::new(1.0, 1.0, DVec2::ZERO, DVec2::ZERO));
    for i in 0..5 {
        store.push(Particle::new(1.0, 1.0, DVec2::splat(i as f64), DVec2::ONE));
    }
    let sun = Particle::new(500.0, 20.0, DVec2::new(700.0, 450.0), DVec2::ZERO);

    store.reset(sun);

    assert_eq!(store.len(), 1);
    assert_eq!(store.get(0), Some(&sun));
}

#[test]
fn test_store_totals() {
    let mut store = ParticleStore::new(Particle::new(2.0, 1.0, DVec2::ZERO, DVec2::new(1.0, 0.0)));
    store.push(Particle::new(1.0, 1.0, DVec2::ZERO, DVec2::new(-2.0, 3.0)));

    assert_eq!(store.total_momentum(), DVec2::new(0.0, 3.0));
    assert_relative_eq!(store.kinetic_energy(), 1.0 + 6.5);
}
