use bevy::math::DVec2;
use bevy::prelude::*;
use std::f64::consts::PI;

/// A point-mass disk. Mass and radius are fixed at construction; the
/// kinematic state is owned by the physics step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    mass: f64,
    radius: f64,
    pub position: DVec2,
    pub velocity: DVec2,
    pub acceleration: DVec2,
}

impl Particle {
    pub fn new(mass: f64, radius: f64, position: DVec2, velocity: DVec2) -> Self {
        Self {
            mass,
            radius,
            position,
            velocity,
            acceleration: DVec2::ZERO,
        }
    }

    /// Builds a particle whose mass comes from a solid sphere of the given
    /// density, even though the dynamics are planar.
    pub fn from_density(position: DVec2, velocity: DVec2, radius: f64, density: f64) -> Self {
        Self::new(mass_for(radius, density), radius, position, velocity)
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn momentum(&self) -> DVec2 {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.length_squared()
    }
}

pub fn mass_for(radius: f64, density: f64) -> f64 {
    4.0 / 3.0 * PI * radius.powi(3) * density
}

/// Ordered, index-stable particle collection. Particles are only appended
/// while simulating; `reset` swaps the whole contents for a lone anchor.
#[derive(Resource, Clone, Debug, Default)]
pub struct ParticleStore {
    particles: Vec<Particle>,
}

impl ParticleStore {
    pub fn new(anchor: Particle) -> Self {
        Self {
            particles: vec![anchor],
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    /// Fixed-size view handed to the physics step; it cannot grow or shrink
    /// the store mid-tick.
    pub fn as_mut_slice(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn push(&mut self, particle: Particle) -> usize {
        self.particles.push(particle);
        self.particles.len() - 1
    }

    pub fn reset(&mut self, anchor: Particle) {
        self.particles.clear();
        self.particles.push(anchor);
    }

    pub fn total_momentum(&self) -> DVec2 {
        self.iter().map(Particle::momentum).sum()
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.iter().map(Particle::kinetic_energy).sum()
    }
}
