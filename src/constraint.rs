//! Distance constraints between two particles, with severing.

use crate::error::ClothError;
use crate::float::Float;
use crate::particle::Particle;

/// A distance link between two particles of the same arena.
///
/// Endpoints are stored as indices into the particle slice, never as
/// references. `rest_length` is measured once at creation and never
/// recomputed. Once severed, a constraint stays inert forever.
#[derive(Clone, Debug, PartialEq)]
pub struct Constraint<F: Float> {
    pub a: usize,
    pub b: usize,
    pub rest_length: F,
    active: bool,
}

impl<F: Float> Constraint<F> {
    /// Link `a` and `b` with an explicit rest length.
    ///
    /// `a` and `b` must differ. A self-link has zero length forever and is a
    /// caller bug; it is not checked in release builds.
    pub fn new(a: usize, b: usize, rest_length: F) -> Self {
        debug_assert_ne!(a, b, "constraint endpoints must be distinct particles");
        Constraint { a, b, rest_length, active: true }
    }

    /// Link `a` and `b`, taking their current distance as the rest length.
    ///
    /// Panics if either index is outside `particles`.
    pub fn between(a: usize, b: usize, particles: &[Particle<F>]) -> Self {
        let rest_length = particles[a].pos.distance(particles[b].pos);
        Constraint::new(a, b, rest_length)
    }

    /// Checked form of [`Constraint::between`].
    pub fn try_between(a: usize, b: usize, particles: &[Particle<F>]) -> Result<Self, ClothError> {
        let count = particles.len();
        for index in [a, b] {
            if index >= count {
                return Err(ClothError::ParticleOutOfBounds { index, count });
            }
        }
        if a == b {
            return Err(ClothError::DegenerateConstraint { index: a });
        }
        Ok(Constraint::between(a, b, particles))
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Permanently deactivate. Idempotent.
    pub fn sever(&mut self) {
        self.active = false;
    }

    /// Current distance between the endpoints.
    pub fn current_length(&self, particles: &[Particle<F>]) -> F {
        particles[self.a].pos.distance(particles[self.b].pos)
    }

    /// One relaxation pass: move each unpinned endpoint half the way toward
    /// the rest length.
    ///
    /// Skips inactive links and links whose current length is below the
    /// float type's machine epsilon.
    pub fn relax(&self, particles: &mut [Particle<F>]) {
        if !self.active {
            return;
        }

        let delta = particles[self.b].pos - particles[self.a].pos;
        let current_length = delta.length();
        if current_length < F::epsilon() {
            return;
        }

        let difference = (current_length - self.rest_length) / current_length;
        let correction = delta.scale(F::half()).scale(difference);

        if !particles[self.a].pinned {
            particles[self.a].pos += correction;
        }
        if !particles[self.b].pinned {
            particles[self.b].pos -= correction;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::Vec2;

    fn pair(a: Vec2<f32>, b: Vec2<f32>) -> [Particle<f32>; 2] {
        [Particle::new(a), Particle::new(b)]
    }

    #[test]
    fn stretched_link_pulls_both_ends_in() {
        let mut particles = pair(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        let c = Constraint::new(0, 1, 5.0);
        c.relax(&mut particles);
        assert_eq!(particles[0].pos, Vec2::new(2.5, 0.0));
        assert_eq!(particles[1].pos, Vec2::new(7.5, 0.0));
    }

    #[test]
    fn compressed_link_pushes_ends_apart() {
        let mut particles = pair(Vec2::new(0.0, 0.0), Vec2::new(2.0, 0.0));
        let c = Constraint::new(0, 1, 4.0);
        c.relax(&mut particles);
        assert_eq!(particles[0].pos, Vec2::new(-1.0, 0.0));
        assert_eq!(particles[1].pos, Vec2::new(3.0, 0.0));
    }

    #[test]
    fn pinned_end_takes_no_correction() {
        let mut particles = pair(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        particles[0].pin();
        Constraint::new(0, 1, 5.0).relax(&mut particles);
        assert_eq!(particles[0].pos, Vec2::new(0.0, 0.0));
        // Only half the error is removed per pass.
        assert_eq!(particles[1].pos, Vec2::new(7.5, 0.0));
    }

    #[test]
    fn try_between_rejects_bad_indices() {
        let particles = pair(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0));
        assert_eq!(
            Constraint::try_between(0, 2, &particles),
            Err(ClothError::ParticleOutOfBounds { index: 2, count: 2 })
        );
        assert_eq!(
            Constraint::try_between(1, 1, &particles),
            Err(ClothError::DegenerateConstraint { index: 1 })
        );
        let c = Constraint::try_between(0, 1, &particles).unwrap();
        assert_eq!(c.rest_length, 1.0);
    }
}
