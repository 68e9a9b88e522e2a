//! Cloth mesh: a particle grid joined by horizontal and vertical distance
//! constraints, plus the per-frame driver.

use crate::config::ClothConfig;
use crate::constraint::Constraint;
use crate::error::ClothError;
use crate::float::Float;
use crate::interaction::{Interaction, InteractionOutcome, PointerEvent};
use crate::observer::StepObserver;
use crate::particle::Particle;
use crate::solver::{self, StepParams};
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;
use tracing::debug;

/// A tearable cloth.
///
/// Owns the particle arena and the constraint list. The arena is sized at
/// construction and never grows, so constraint indices stay valid for the
/// cloth's lifetime. Constraints are never removed, only severed.
pub struct Cloth<F: Float> {
    particles: AllocVec<Particle<F>>,
    constraints: AllocVec<Constraint<F>>,
    config: ClothConfig<F>,
}

impl<F: Float> Cloth<F> {
    /// Build a grid from `config`.
    ///
    /// Particle at (row, col) has index `row * cols + col` and sits at
    /// `offset + (col, row) * rest_distance`. Constraints are emitted per
    /// particle in row-major order: the right neighbor first, then the one
    /// below. That order is also the relaxation order.
    pub fn new(config: &ClothConfig<F>) -> Result<Self, ClothError> {
        config.validate()?;
        let (rows, cols) = (config.rows, config.cols);

        let mut particles = AllocVec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                let x = config.offset.x + F::from_f32(col as f32) * config.rest_distance;
                let y = config.offset.y + F::from_f32(row as f32) * config.rest_distance;
                let mut p = Particle::new(Vec2::new(x, y));
                p.pinned = config.pin_mode.is_pinned(row, col, rows, cols);
                particles.push(p);
            }
        }

        let horizontal = rows * (cols - 1);
        let vertical = (rows - 1) * cols;
        let mut constraints = AllocVec::with_capacity(horizontal + vertical);
        for row in 0..rows {
            for col in 0..cols {
                let here = row * cols + col;
                if col + 1 < cols {
                    constraints.push(Constraint::between(here, here + 1, &particles));
                }
                if row + 1 < rows {
                    constraints.push(Constraint::between(here, here + cols, &particles));
                }
            }
        }

        debug!(
            rows,
            cols,
            particles = particles.len(),
            constraints = constraints.len(),
            "cloth built"
        );

        Ok(Cloth { particles, constraints, config: config.clone() })
    }

    /// Assemble a cloth from a custom mesh. Every constraint index must
    /// point into `particles`.
    ///
    /// Grid accessors (`index`, `position_at`) assume `config.rows` x
    /// `config.cols`; they are meaningless for non-grid meshes.
    pub fn from_parts(
        particles: AllocVec<Particle<F>>,
        constraints: AllocVec<Constraint<F>>,
        config: &ClothConfig<F>,
    ) -> Result<Self, ClothError> {
        config.validate()?;
        let count = particles.len();
        for c in constraints.iter() {
            for index in [c.a, c.b] {
                if index >= count {
                    return Err(ClothError::ParticleOutOfBounds { index, count });
                }
            }
            if c.a == c.b {
                return Err(ClothError::DegenerateConstraint { index: c.a });
            }
        }
        Ok(Cloth { particles, constraints, config: config.clone() })
    }

    /// Advance one frame with the configured time step.
    pub fn step<O: StepObserver>(&mut self, observer: &mut O) {
        self.step_with(self.config.time_step, observer);
    }

    /// Advance one frame with an explicit time step.
    pub fn step_with<O: StepObserver>(&mut self, dt: F, observer: &mut O) {
        let params = StepParams {
            force: self.config.force,
            dt,
            width: self.config.width,
            height: self.config.height,
            passes: self.config.relaxation_passes,
        };
        solver::step(&mut self.particles, &self.constraints, &params, observer);
    }

    /// Route one pointer event through `interaction` against this mesh.
    pub fn handle_event(
        &mut self,
        interaction: &mut Interaction<F>,
        event: PointerEvent<F>,
    ) -> InteractionOutcome {
        interaction.handle_event(event, &mut self.particles, &mut self.constraints)
    }

    /// An interaction state using the configured click tolerance.
    pub fn interaction(&self) -> Interaction<F> {
        Interaction::new(self.config.click_tolerance)
    }

    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.config.cols + col
    }

    pub fn position_at(&self, row: usize, col: usize) -> Vec2<F> {
        self.particles[self.index(row, col)].pos
    }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.particles.iter().map(|p| p.pos).collect()
    }

    /// Endpoint positions of every active constraint, in constraint order.
    pub fn active_segments(&self) -> impl Iterator<Item = (Vec2<F>, Vec2<F>)> + '_ {
        self.constraints
            .iter()
            .filter(|c| c.is_active())
            .map(move |c| (self.particles[c.a].pos, self.particles[c.b].pos))
    }

    pub fn active_constraint_count(&self) -> usize {
        self.constraints.iter().filter(|c| c.is_active()).count()
    }

    pub fn particles(&self) -> &[Particle<F>] { &self.particles }
    pub fn constraints(&self) -> &[Constraint<F>] { &self.constraints }
    pub fn particle_mut(&mut self, index: usize) -> &mut Particle<F> { &mut self.particles[index] }
    pub fn constraint_mut(&mut self, index: usize) -> &mut Constraint<F> { &mut self.constraints[index] }
    pub fn config(&self) -> &ClothConfig<F> { &self.config }
    pub fn rows(&self) -> usize { self.config.rows }
    pub fn cols(&self) -> usize { self.config.cols }
    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn constraint_count(&self) -> usize { self.constraints.len() }
}
