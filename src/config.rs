//! Construction-time configuration for a cloth.

use crate::error::ClothError;
use crate::float::Float;
use crate::vec::Vec2;

/// Which grid particles start pinned.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum PinMode {
    /// Every particle on the first/last row or column.
    #[default]
    Border,
    /// Only the first row.
    TopRow,
    /// Nothing is pinned.
    None,
}

impl PinMode {
    pub fn is_pinned(self, row: usize, col: usize, rows: usize, cols: usize) -> bool {
        match self {
            PinMode::Border => row == 0 || col == 0 || row + 1 == rows || col + 1 == cols,
            PinMode::TopRow => row == 0,
            PinMode::None => false,
        }
    }
}

/// Configuration for a cloth mesh and its simulation.
///
/// Every value is read once when the cloth is built.
///
/// # Builder Pattern
/// ```
/// use tearable::config::{ClothConfig, PinMode};
/// use tearable::vec::Vec2;
///
/// let config: ClothConfig<f32> = ClothConfig::new()
///     .with_grid(20, 30)
///     .with_rest_distance(8.0)
///     .with_force(Vec2::new(0.0, 10.0))
///     .with_relaxation_passes(8)
///     .with_pin_mode(PinMode::TopRow);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ClothConfig<F: Float> {
    /// Grid rows. Default: 140.
    pub rows: usize,
    /// Grid columns. Default: 140.
    pub cols: usize,
    /// Spacing between neighbors at rest. Default: 4.0.
    pub rest_distance: F,
    /// Position of the particle at row 0, column 0.
    pub offset: Vec2<F>,
    /// Constant external force applied to every particle each step.
    /// Default: gravity 10 down plus a lateral -20.
    pub force: Vec2<F>,
    /// Integration time step. Default: 0.131.
    pub time_step: F,
    /// Bounding region `[0, width] x [0, height]`. Default: 1000 x 800.
    pub width: F,
    pub height: F,
    /// Pick radius for dragging. Default: 5.0.
    pub click_tolerance: F,
    /// Relaxation passes per step. Default: 5.
    pub relaxation_passes: usize,
    pub pin_mode: PinMode,
}

impl<F: Float> ClothConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        let width = F::from_f32(1000.0);
        let height = F::from_f32(800.0);
        ClothConfig {
            rows: 140,
            cols: 140,
            rest_distance: F::from_f32(4.0),
            offset: Vec2::new(width / F::from_f32(3.8), height / F::from_f32(8.0)),
            force: Vec2::new(F::from_f32(-20.0), F::from_f32(10.0)),
            time_step: F::from_f32(0.131),
            width,
            height,
            click_tolerance: F::from_f32(5.0),
            relaxation_passes: 5,
            pin_mode: PinMode::Border,
        }
    }

    pub fn with_grid(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_rest_distance(mut self, rest_distance: F) -> Self {
        self.rest_distance = rest_distance;
        self
    }

    pub fn with_offset(mut self, offset: Vec2<F>) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_force(mut self, force: Vec2<F>) -> Self {
        self.force = force;
        self
    }

    pub fn with_time_step(mut self, time_step: F) -> Self {
        self.time_step = time_step;
        self
    }

    pub fn with_bounds(mut self, width: F, height: F) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_click_tolerance(mut self, click_tolerance: F) -> Self {
        self.click_tolerance = click_tolerance;
        self
    }

    pub fn with_relaxation_passes(mut self, passes: usize) -> Self {
        self.relaxation_passes = passes;
        self
    }

    pub fn with_pin_mode(mut self, pin_mode: PinMode) -> Self {
        self.pin_mode = pin_mode;
        self
    }

    /// Check every value once, before the mesh is built.
    pub fn validate(&self) -> Result<(), ClothError> {
        let fits = self.rows.checked_mul(self.cols).is_some();
        if self.rows == 0 || self.cols == 0 || !fits {
            return Err(ClothError::InvalidGridDimensions { rows: self.rows, cols: self.cols });
        }
        if !positive_finite(self.rest_distance) {
            return Err(ClothError::InvalidRestDistance);
        }
        if !positive_finite(self.time_step) {
            return Err(ClothError::InvalidTimeStep);
        }
        let bounds_ok = self.width.is_finite()
            && self.height.is_finite()
            && self.width >= F::zero()
            && self.height >= F::zero();
        if !bounds_ok {
            return Err(ClothError::InvalidBounds);
        }
        if !positive_finite(self.click_tolerance) {
            return Err(ClothError::InvalidClickTolerance);
        }
        Ok(())
    }
}

fn positive_finite<F: Float>(v: F) -> bool {
    v.is_finite() && v > F::zero()
}

impl<F: Float> Default for ClothConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
