//! Hooks into the phases of a cloth frame.

/// Receives a callback at each phase boundary of [`crate::solver::step`].
///
/// A frame is integration of every particle, then a fixed number of
/// relaxation passes. Hosts use this to count passes, sample positions
/// between passes, or time a frame. Every hook defaults to nothing.
pub trait StepObserver {
    /// Force, Verlet update and region clamp have run on every particle.
    /// Relaxation has not started yet.
    fn on_integrate(&mut self) {}

    /// Relaxation pass `pass` (zero-based) has visited every constraint.
    fn on_relaxation_pass(&mut self, _pass: usize) {}

    /// The frame is finished; positions are ready to draw.
    fn on_step_complete(&mut self) {}
}

/// Observer for callers that only want the frame advanced.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
