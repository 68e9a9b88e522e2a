//! Error types for cloth construction.
//!
//! The per-frame core never fails; these are only produced while a mesh or
//! its constraints are being set up.

use core::fmt;

/// Errors that can occur while building a cloth.
#[derive(Debug, Clone, PartialEq)]
pub enum ClothError {
    /// Grid needs at least one row and one column, and `rows * cols`
    /// must fit in `usize`.
    InvalidGridDimensions { rows: usize, cols: usize },
    /// Rest distance must be positive and finite.
    InvalidRestDistance,
    /// Time step must be positive and finite.
    InvalidTimeStep,
    /// Bounding region must be non-negative and finite.
    InvalidBounds,
    /// Click tolerance must be positive and finite.
    InvalidClickTolerance,
    /// Particle index is out of bounds.
    ParticleOutOfBounds { index: usize, count: usize },
    /// A constraint joins a particle to itself.
    DegenerateConstraint { index: usize },
}

impl fmt::Display for ClothError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClothError::InvalidGridDimensions { rows, cols } => {
                write!(f, "grid must be at least 1x1 (got {}x{})", rows, cols)
            }
            ClothError::InvalidRestDistance => write!(f, "rest distance must be positive and finite"),
            ClothError::InvalidTimeStep => write!(f, "time step must be positive and finite"),
            ClothError::InvalidBounds => write!(f, "bounds must be non-negative and finite"),
            ClothError::InvalidClickTolerance => {
                write!(f, "click tolerance must be positive and finite")
            }
            ClothError::ParticleOutOfBounds { index, count } => {
                write!(f, "particle index {} out of bounds (count: {})", index, count)
            }
            ClothError::DegenerateConstraint { index } => {
                write!(f, "constraint joins particle {} to itself", index)
            }
        }
    }
}
