use crate::particle::Particle;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Contact {
    Apart,
    Touching,
    /// Penetration below the contact distance, as a positive length.
    Overlapping { depth: f64 },
}

/// Resolves one pair. Touching pairs exchange an impulse along the line of
/// centres scaled by `restitution`; overlapping pairs also have the lighter
/// particle pushed back out to the contact distance (`b` on equal mass).
pub fn resolve_pair(a: &mut Particle, b: &mut Particle, restitution: f64, slack: f64) -> Contact {
    let delta = b.position - a.position;
    let distance = delta.length();
    let alpha = distance - (a.radius() + b.radius() + slack);
    if alpha > 0.0 {
        return Contact::Apart;
    }

    let unit = delta / distance;
    let (ma, mb) = (a.mass(), b.mass());
    let moment = restitution * 2.0 * (a.velocity.dot(unit) - b.velocity.dot(unit)) / (ma + mb);
    a.velocity -= moment * mb * unit;
    b.velocity += moment * ma * unit;

    if alpha < 0.0 {
        let (lighter, heavier) = if ma < mb { (a, &*b) } else { (b, &*a) };
        lighter.position -= (lighter.position - heavier.position) / distance * alpha;
        Contact::Overlapping { depth: -alpha }
    } else {
        Contact::Touching
    }
}
