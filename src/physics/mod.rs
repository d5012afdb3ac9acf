//! Direct-summation gravity, pairwise collisions and boundary reflection for
//! the particle store.
//!
//! Every tick walks the store once. Particle `i` is first resolved against
//! each later particle `j > i`, so every unordered pair is handled exactly
//! once, then drifted with its previous acceleration, then kicked with the
//! average of its old and new acceleration (a velocity-Verlet style update).

pub mod boundary;
pub mod collision;
pub mod gravity;

#[cfg(test)]
mod boundary_test;

use bevy::math::DVec2;
use bevy::prelude::*;
use std::fmt;

use crate::particle::{Particle, ParticleStore};

/// Extra distance added to the sum of radii when testing for contact.
pub const COLLISION_SLACK: f64 = 5.0;

/// Immutable engine parameters, fixed for the engine's lifetime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineConfig {
    pub g: f64,
    pub wrapping: bool,
    pub width: f64,
    pub height: f64,
    /// Coefficient of restitution in `[0, 1]`.
    pub restitution: f64,
    pub collision_slack: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            g: 2e-3,
            wrapping: false,
            width: 1400.0,
            height: 900.0,
            restitution: 1.0,
            collision_slack: COLLISION_SLACK,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpawnError {
    MissingAnchor { index: usize, len: usize },
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpawnError::MissingAnchor { index, len } => write!(
                f,
                "no anchor particle at index {index} (store holds {len} particles)"
            ),
        }
    }
}

impl std::error::Error for SpawnError {}

#[derive(Resource, Clone, Debug, Default)]
pub struct PhysicsEngine {
    config: EngineConfig,
}

impl PhysicsEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Advances every particle by `delta_time` seconds.
    ///
    /// With `has_gravity` off only positions drift, using whatever
    /// acceleration was last computed, so gravity can be toggled without
    /// losing momentum. `delta_time` is taken as-is.
    pub fn step(&self, particles: &mut [Particle], delta_time: f64, has_gravity: bool) {
        let n = particles.len();
        if n <= 1 {
            return;
        }
        let dt = delta_time;

        for i in 0..n {
            for j in (i + 1)..n {
                let (head, tail) = particles.split_at_mut(j);
                collision::resolve_pair(
                    &mut head[i],
                    &mut tail[0],
                    self.config.restitution,
                    self.config.collision_slack,
                );
            }

            let p = &mut particles[i];
            p.position += p.velocity * dt + 0.5 * p.acceleration * dt * dt;

            if has_gravity {
                let new_acc = gravity::acceleration_on(particles, i, self.config.g);
                let p = &mut particles[i];
                p.velocity += dt * (new_acc + p.acceleration) * 0.5;
                p.acceleration = new_acc;
            }

            if self.config.wrapping {
                boundary::reflect(&mut particles[i], self.config.width, self.config.height);
            }
        }
    }

    /// Appends a particle placed at `position` on a circular orbit around the
    /// particle at `anchor`, returning its index.
    pub fn spawn(
        &self,
        store: &mut ParticleStore,
        anchor: usize,
        position: DVec2,
        radius: f64,
        density: f64,
    ) -> Result<usize, SpawnError> {
        let sun = *store.get(anchor).ok_or(SpawnError::MissingAnchor {
            index: anchor,
            len: store.len(),
        })?;
        let velocity = orbital_velocity(&sun, position, self.config.g);
        Ok(store.push(Particle::from_density(position, velocity, radius, density)))
    }
}

/// Circular-orbit velocity around `sun` for a body at `position`, rotated a
/// quarter turn counter-clockwise from the direction to the sun.
pub fn orbital_velocity(sun: &Particle, position: DVec2, g: f64) -> DVec2 {
    let to_sun = sun.position - position;
    let speed = (g * sun.mass() / to_sun.length()).sqrt();
    to_sun.normalize().perp() * speed
}
