//! Pointer interaction: pick-and-drag of a particle and path-based cutting.
//!
//! The host feeds raw pointer samples into [`Interaction::handle_event`]
//! together with the particle and constraint collections. Dragging overrides
//! a particle position directly; cutting severs every active constraint
//! crossed by the accumulated cut path.

use crate::constraint::Constraint;
use crate::float::Float;
use crate::geometry::polyline_intersects;
use crate::particle::Particle;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;
use tracing::debug;

/// Pointer button identifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PointerButton {
    /// Drags particles.
    Primary,
    /// Draws cut paths.
    Secondary,
    /// Anything else; ignored.
    Other,
}

/// A raw pointer sample from the host surface.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerEvent<F: Float> {
    Pressed { button: PointerButton, position: Vec2<F> },
    Released { button: PointerButton, position: Vec2<F> },
    Moved { position: Vec2<F> },
}

impl<F: Float> PointerEvent<F> {
    pub fn pressed_at_pixel(button: PointerButton, x: i32, y: i32) -> Self {
        PointerEvent::Pressed { button, position: pixel(x, y) }
    }

    pub fn released_at_pixel(button: PointerButton, x: i32, y: i32) -> Self {
        PointerEvent::Released { button, position: pixel(x, y) }
    }

    pub fn moved_to_pixel(x: i32, y: i32) -> Self {
        PointerEvent::Moved { position: pixel(x, y) }
    }
}

fn pixel<F: Float>(x: i32, y: i32) -> Vec2<F> {
    Vec2::new(F::from_f32(x as f32), F::from_f32(y as f32))
}

/// What a single event did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InteractionOutcome {
    /// Nothing changed.
    None,
    DragStarted(usize),
    DragMoved(usize),
    DragEnded,
    CutStarted,
    /// A point was added to the cut path; `severed` links were cut by it.
    CutExtended { severed: usize },
    CutEnded,
}

/// Drag and cut gesture state.
///
/// `dragged` doubles as the dragging flag. The press/release contract keeps
/// at most one of dragging or cutting meaningful per move event; a move is
/// handled as a drag first.
#[derive(Clone, Debug)]
pub struct Interaction<F: Float> {
    click_tolerance: F,
    dragged: Option<usize>,
    cutting: bool,
    cut_path: AllocVec<Vec2<F>>,
}

impl<F: Float> Interaction<F> {
    pub fn new(click_tolerance: F) -> Self {
        Interaction {
            click_tolerance,
            dragged: None,
            cutting: false,
            cut_path: AllocVec::new(),
        }
    }

    pub fn click_tolerance(&self) -> F { self.click_tolerance }
    pub fn is_dragging(&self) -> bool { self.dragged.is_some() }
    pub fn dragged_particle(&self) -> Option<usize> { self.dragged }
    pub fn is_cutting(&self) -> bool { self.cutting }
    pub fn cut_path(&self) -> &[Vec2<F>] { &self.cut_path }

    /// Drop the recorded path, e.g. once the host has finished drawing it.
    pub fn clear_cut_path(&mut self) {
        self.cut_path.clear();
    }

    /// Index of the first particle, in slice order, strictly closer than the
    /// click tolerance. Not a nearest-of-all search.
    pub fn pick(&self, point: Vec2<F>, particles: &[Particle<F>]) -> Option<usize> {
        particles
            .iter()
            .position(|p| p.pos.distance(point) < self.click_tolerance)
    }

    pub fn handle_event(
        &mut self,
        event: PointerEvent<F>,
        particles: &mut [Particle<F>],
        constraints: &mut [Constraint<F>],
    ) -> InteractionOutcome {
        match event {
            PointerEvent::Pressed { button: PointerButton::Primary, position } => {
                self.start_drag(position, particles)
            }
            PointerEvent::Pressed { button: PointerButton::Secondary, position } => {
                self.cutting = true;
                self.cut_path.clear();
                self.cut_path.push(position);
                debug!("cut gesture started");
                InteractionOutcome::CutStarted
            }
            PointerEvent::Released { button: PointerButton::Primary, .. } => {
                if let Some(index) = self.dragged.take() {
                    debug!(index, "drag ended");
                }
                InteractionOutcome::DragEnded
            }
            PointerEvent::Released { button: PointerButton::Secondary, .. } => {
                self.cutting = false;
                debug!(points = self.cut_path.len(), "cut gesture ended");
                InteractionOutcome::CutEnded
            }
            PointerEvent::Moved { position } => {
                if let Some(index) = self.dragged {
                    particles[index].drag_to(position);
                    InteractionOutcome::DragMoved(index)
                } else if self.cutting {
                    self.cut_path.push(position);
                    let severed = self.cut(particles, constraints);
                    InteractionOutcome::CutExtended { severed }
                } else {
                    InteractionOutcome::None
                }
            }
            PointerEvent::Pressed { button: PointerButton::Other, .. }
            | PointerEvent::Released { button: PointerButton::Other, .. } => InteractionOutcome::None,
        }
    }

    fn start_drag(&mut self, position: Vec2<F>, particles: &[Particle<F>]) -> InteractionOutcome {
        match self.pick(position, particles) {
            Some(index) => {
                self.dragged = Some(index);
                debug!(index, "drag started");
                InteractionOutcome::DragStarted(index)
            }
            None => InteractionOutcome::None,
        }
    }

    /// Sever every active constraint crossed by any segment of the whole cut
    /// path. Returns the number newly severed.
    pub fn cut(&self, particles: &[Particle<F>], constraints: &mut [Constraint<F>]) -> usize {
        cut_along(&self.cut_path, particles, constraints)
    }
}

/// Sever every active constraint whose current segment crosses `path`.
///
/// Cost is constraints x path segments.
pub fn cut_along<F: Float>(
    path: &[Vec2<F>],
    particles: &[Particle<F>],
    constraints: &mut [Constraint<F>],
) -> usize {
    if path.len() < 2 {
        return 0;
    }
    let mut severed = 0;
    for c in constraints.iter_mut().filter(|c| c.is_active()) {
        if polyline_intersects(particles[c.a].pos, particles[c.b].pos, path) {
            c.sever();
            severed += 1;
        }
    }
    if severed > 0 {
        debug!(severed, path_points = path.len(), "cut pass severed constraints");
    }
    severed
}
