//! Rotated containment and collision
//!
//! Every input-dispatch decision against a rotated element funnels through
//! two queries: point-in-rotated-rect (rotate the point back, test
//! axis-aligned) and rotated-rect vs axis-aligned-rect overlap. The overlap
//! test is two-phase: a cheap bounding-box reject, then exact separating-axis
//! confirmation along the rotated rectangle's own edge directions. The
//! bounding-box phase doubles as the separating-axis test along the
//! axis-aligned rectangle's edges, so together the phases are a complete SAT
//! for the two shapes.

use crate::primitives::{Point, Quad, Rect, Vec2};

/// Test a point against `rect` rotated by `theta` radians about `origin`
/// (`origin` in the same coordinate space as `rect`).
///
/// The point is rotated by `-theta` about the origin and tested against the
/// unrotated rectangle, so the half-open edge convention of
/// [`Rect::contains`] carries over.
pub fn rotated_contains(rect: &Rect, theta: f32, origin: Point, point: Point) -> bool {
    if theta == 0.0 {
        return rect.contains(point);
    }
    rect.contains(point.rotated_about(-theta, origin))
}

/// Test whether axis-aligned `q` intersects `p` rotated by `theta` radians
/// about `origin` (`origin` relative to `p`'s position).
///
/// Touching edges do not count as intersecting, matching
/// [`Rect::intersects`]. Negative extents on either rectangle are
/// normalized first.
pub fn rect_collide(theta: f32, p: &Rect, q: &Rect, origin: Point) -> bool {
    let p = p.with_positive_extent();
    let q = q.with_positive_extent();

    // Fast path: no rotation degenerates to the plain overlap test
    if theta == 0.0 {
        return p.intersects(&q);
    }

    let pivot = Point::new(p.x + origin.x, p.y + origin.y);
    let rotated = Quad::from_rect(p).rotated(theta, pivot);

    // Phase 1: bounding-box reject. Also the exact separating-axis test
    // along q's two edge directions.
    if !rotated.bounding_rect().intersects(&q) {
        return false;
    }

    // Phase 2: exact separating-axis confirm along p's two edge directions
    let (sin, cos) = theta.sin_cos();
    let q_quad = Quad::from_rect(q);
    for axis in [Vec2::new(cos, sin), Vec2::new(-sin, cos)] {
        if !projections_overlap(axis, &rotated, &q_quad) {
            return false;
        }
    }
    true
}

fn project(axis: Vec2, quad: &Quad) -> (f32, f32) {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for corner in &quad.corners {
        let d = corner.x * axis.x + corner.y * axis.y;
        min = min.min(d);
        max = max.max(d);
    }
    (min, max)
}

fn projections_overlap(axis: Vec2, a: &Quad, b: &Quad) -> bool {
    let (a_min, a_max) = project(axis, a);
    let (b_min, b_max) = project(axis, b);
    a_min < b_max && b_min < a_max
}
