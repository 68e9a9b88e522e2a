//! Per-frame simulation step: force, Verlet integration, clamping, then a
//! fixed number of relaxation passes.

use crate::constraint::Constraint;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::particle::Particle;
use crate::vec::Vec2;

/// Apply `force`, integrate with `dt` and clamp into the region, particle by
/// particle in slice order.
pub fn integrate_particles<F: Float>(
    particles: &mut [Particle<F>],
    force: Vec2<F>,
    dt: F,
    width: F,
    height: F,
) {
    for p in particles.iter_mut() {
        p.apply_force(force);
        p.integrate(dt);
        p.clamp_to_region(width, height);
    }
}

/// Run `passes` Gauss-Seidel passes over `constraints` in slice order.
///
/// Pass count is fixed; there is no convergence check.
pub fn relax_constraints<F: Float, O: StepObserver>(
    constraints: &[Constraint<F>],
    particles: &mut [Particle<F>],
    passes: usize,
    observer: &mut O,
) {
    for pass in 0..passes {
        for c in constraints.iter() {
            c.relax(particles);
        }
        observer.on_relaxation_pass(pass);
    }
}

/// Parameters of a single step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StepParams<F: Float> {
    pub force: Vec2<F>,
    pub dt: F,
    pub width: F,
    pub height: F,
    pub passes: usize,
}

/// Advance the system by one frame.
pub fn step<F: Float, O: StepObserver>(
    particles: &mut [Particle<F>],
    constraints: &[Constraint<F>],
    params: &StepParams<F>,
    observer: &mut O,
) {
    integrate_particles(particles, params.force, params.dt, params.width, params.height);
    observer.on_integrate();

    relax_constraints(constraints, particles, params.passes, observer);

    tracing::trace!(
        particles = particles.len(),
        constraints = constraints.len(),
        passes = params.passes,
        "cloth step complete"
    );
    observer.on_step_complete();
}
