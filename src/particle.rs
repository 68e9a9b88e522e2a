//! Verlet particles with position-based dynamics.

use crate::float::Float;
use crate::vec::Vec2;

/// A Verlet particle — position-based dynamics with implicit velocity.
///
/// Velocity is never stored: it is `pos - prev_pos`. Pinned particles are
/// skipped by force accumulation, integration and constraint relaxation.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    /// Force accumulated since the last integration.
    pub force: Vec2<F>,
    pub pinned: bool,
}

impl<F: Float> Particle<F> {
    pub fn new(pos: Vec2<F>) -> Self {
        Particle {
            pos,
            prev_pos: pos,
            force: Vec2::zero(),
            pinned: false,
        }
    }

    pub fn pinned(pos: Vec2<F>) -> Self {
        Particle { pinned: true, ..Particle::new(pos) }
    }

    pub fn apply_force(&mut self, force: Vec2<F>) {
        if !self.pinned {
            self.force += force;
        }
    }

    /// Explicit Verlet step. The force term is scaled by `dt²`.
    pub fn integrate(&mut self, dt: F) {
        if self.pinned {
            return;
        }
        let velocity = self.pos - self.prev_pos;
        self.prev_pos = self.pos;
        self.pos = self.pos + velocity + self.force.scale(dt * dt);
        self.force = Vec2::zero();
    }

    /// Clamp each axis into `[0, width]` x `[0, height]`. Runs on pinned
    /// particles too; it is a position correction, not a dynamics step.
    pub fn clamp_to_region(&mut self, width: F, height: F) {
        self.pos.x = self.pos.x.clamp(F::zero(), width);
        self.pos.y = self.pos.y.clamp(F::zero(), height);
    }

    /// Hard position override used by pointer dragging. `prev_pos` is left
    /// alone, so the jump shows up as velocity on the next integration.
    pub fn drag_to(&mut self, pos: Vec2<F>) {
        self.pos = pos;
    }

    pub fn pin(&mut self) {
        self.pinned = true;
        self.prev_pos = self.pos;
        self.force = Vec2::zero();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn force_is_cleared_after_integration() {
        let mut p = Particle::new(Vec2::new(0.0f32, 0.0));
        p.apply_force(Vec2::new(1.0, 2.0));
        p.integrate(1.0);
        assert_eq!(p.force, Vec2::zero());
        assert_eq!(p.pos, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn velocity_carries_over() {
        let mut p = Particle::new(Vec2::new(0.0f32, 0.0));
        p.prev_pos = Vec2::new(-1.0, 0.0);
        p.integrate(0.5);
        assert_eq!(p.pos, Vec2::new(1.0, 0.0));
        assert_eq!(p.prev_pos, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn pinned_ignores_force() {
        let mut p = Particle::pinned(Vec2::new(2.0f64, 3.0));
        p.apply_force(Vec2::new(100.0, 100.0));
        assert_eq!(p.force, Vec2::zero());
    }

    #[test]
    fn pin_stops_motion() {
        let mut p = Particle::new(Vec2::new(0.0f32, 0.0));
        p.prev_pos = Vec2::new(-1.0, -1.0);
        p.apply_force(Vec2::new(3.0, 3.0));
        p.pin();
        assert_eq!(p.prev_pos, p.pos);
        assert_eq!(p.force, Vec2::zero());
        p.integrate(0.1);
        assert_eq!(p.pos, Vec2::new(0.0, 0.0));
    }
}
