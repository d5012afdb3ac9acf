use bevy::math::DVec2;

use crate::particle::Particle;

/// Newtonian acceleration on `particles[index]` from every other particle.
///
/// Coincident positions divide by zero and yield non-finite components.
pub fn acceleration_on(particles: &[Particle], index: usize, g: f64) -> DVec2 {
    let target = particles[index].position;
    particles
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != index)
        .map(|(_, other)| {
            let r = other.position - target;
            r / r.length() * other.mass() * g / r.length_squared()
        })
        .sum()
}
