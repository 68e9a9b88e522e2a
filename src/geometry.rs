//! Segment intersection predicates used by cutting.

use crate::float::Float;
use crate::vec::Vec2;

/// Proper-crossing test for segments `(p1, p2)` and `(q1, q2)`.
///
/// Each segment's endpoints must lie strictly on opposite sides of the
/// other segment's line. Collinear overlap and endpoint contact
/// (`d1 * d2 == 0` or `d3 * d4 == 0`) report `false`.
pub fn segments_intersect<F: Float>(p1: Vec2<F>, p2: Vec2<F>, q1: Vec2<F>, q2: Vec2<F>) -> bool {
    let p = p2 - p1;
    let q = q2 - q1;
    let d1 = p.cross(q1 - p1);
    let d2 = p.cross(q2 - p1);
    let d3 = q.cross(p1 - q1);
    let d4 = q.cross(p2 - q1);

    d1 * d2 < F::zero() && d3 * d4 < F::zero()
}

/// True if segment `(a, b)` crosses any consecutive pair of `path`.
///
/// Paths with fewer than two points have no segments and never intersect.
pub fn polyline_intersects<F: Float>(a: Vec2<F>, b: Vec2<F>, path: &[Vec2<F>]) -> bool {
    path.windows(2).any(|w| segments_intersect(a, b, w[0], w[1]))
}
