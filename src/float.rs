//! Floating-point abstraction trait for generic numeric operations.

use core::cmp::PartialOrd;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Trait abstracting floating-point operations needed by the cloth engine.
///
/// Implemented for `f32` and `f64`. `hypot` goes through `libm` so the crate
/// stays `no_std`.
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Default
    + core::fmt::Debug
{
    /// The additive identity (0.0).
    fn zero() -> Self;
    /// Half (0.5).
    fn half() -> Self;
    /// Machine epsilon of the type.
    fn epsilon() -> Self;
    /// `sqrt(self^2 + other^2)` without intermediate overflow.
    fn hypot(self, other: Self) -> Self;
    /// Minimum of two values.
    fn min(self, other: Self) -> Self;
    /// Maximum of two values.
    fn max(self, other: Self) -> Self;
    /// Convert from f32 (for constants and configuration).
    fn from_f32(v: f32) -> Self;
    /// Neither infinite nor NaN.
    fn is_finite(self) -> bool;

    /// Clamp self to [min, max].
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

impl Float for f32 {
    fn zero() -> Self { 0.0 }
    fn half() -> Self { 0.5 }
    fn epsilon() -> Self { f32::EPSILON }
    fn hypot(self, other: Self) -> Self { libm::hypotf(self, other) }
    fn min(self, other: Self) -> Self { if self < other { self } else { other } }
    fn max(self, other: Self) -> Self { if self > other { self } else { other } }
    fn from_f32(v: f32) -> Self { v }
    fn is_finite(self) -> bool { f32::is_finite(self) }
}

impl Float for f64 {
    fn zero() -> Self { 0.0 }
    fn half() -> Self { 0.5 }
    fn epsilon() -> Self { f64::EPSILON }
    fn hypot(self, other: Self) -> Self { libm::hypot(self, other) }
    fn min(self, other: Self) -> Self { if self < other { self } else { other } }
    fn max(self, other: Self) -> Self { if self > other { self } else { other } }
    fn from_f32(v: f32) -> Self { v as f64 }
    fn is_finite(self) -> bool { f64::is_finite(self) }
}
