use approx::assert_relative_eq;
use bevy::math::DVec2;

use crate::particle::Particle;
use crate::physics::boundary::reflect;

fn ball(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
    Particle::new(1.0, 5.0, DVec2::new(x, y), DVec2::new(vx, vy))
}

#[test]
fn test_inside_particle_is_untouched() {
    let mut p = ball(50.0, 50.0, 3.0, -4.0);
    let before = p;

    assert!(!reflect(&mut p, 100.0, 100.0));
    assert_eq!(p, before);
}

#[test]
fn test_right_wall_negates_normal_component() {
    let mut p = ball(98.0, 50.0, 3.0, 1.5);

    assert!(reflect(&mut p, 100.0, 80.0));
    assert_eq!(p.position, DVec2::new(95.0, 50.0));
    assert_eq!(p.velocity, DVec2::new(-3.0, 1.5));
}

#[test]
fn test_left_and_bottom_walls_clamp_to_radius() {
    let mut left = ball(2.0, 40.0, -6.0, 2.0);
    reflect(&mut left, 100.0, 80.0);
    assert_eq!(left.position.x, 5.0);
    assert_eq!(left.velocity, DVec2::new(6.0, 2.0));

    let mut bottom = ball(40.0, -1.0, 2.0, -7.0);
    reflect(&mut bottom, 100.0, 80.0);
    assert_eq!(bottom.position.y, 5.0);
    assert_eq!(bottom.velocity, DVec2::new(2.0, 7.0));
}

#[test]
fn test_top_wall_uses_height() {
    let mut p = ball(40.0, 79.0, 0.0, 4.0);
    reflect(&mut p, 100.0, 80.0);
    assert_eq!(p.position.y, 75.0);
    assert_eq!(p.velocity, DVec2::new(0.0, -4.0));
}

#[test]
fn test_corner_reflects_about_diagonal_normal() {
    let mut p = ball(99.0, 99.0, 2.0, 1.0);

    assert!(reflect(&mut p, 100.0, 100.0));
    assert_eq!(p.position, DVec2::new(95.0, 95.0));
    // n = (-1, -1)/sqrt(2): v - 2(v.n)n = (2, 1) - (3, 3)
    assert_relative_eq!(p.velocity.x, -1.0, epsilon = 1e-12);
    assert_relative_eq!(p.velocity.y, -2.0, epsilon = 1e-12);
}
