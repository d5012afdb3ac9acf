use bevy::math::DVec2;

use crate::particle::Particle;

/// Clamps a particle that crossed the `[0, width] x [0, height]` box back
/// inside and reflects its velocity about the combined wall normal.
///
/// Reflection is always elastic. Returns whether any wall was hit.
pub fn reflect(particle: &mut Particle, width: f64, height: f64) -> bool {
    let r = particle.radius();
    let mut normal = DVec2::ZERO;

    if particle.position.x + r > width {
        normal.x -= 1.0;
        particle.position.x = width - r;
    } else if particle.position.x - r < 0.0 {
        normal.x += 1.0;
        particle.position.x = r;
    }

    if particle.position.y + r > height {
        normal.y -= 1.0;
        particle.position.y = height - r;
    } else if particle.position.y - r < 0.0 {
        normal.y += 1.0;
        particle.position.y = r;
    }

    if normal == DVec2::ZERO {
        return false;
    }

    let n = normal.normalize();
    particle.velocity -= 2.0 * particle.velocity.dot(n) * n;
    true
}
