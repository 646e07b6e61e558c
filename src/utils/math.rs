//! Geometry helpers layered on top of `glam`.

use glam::{Vec2, Vec4};

use crate::config::DEGENERATE_LENGTH;

/// Closest point to `point` on the segment `a`–`b`.
///
/// The point is projected onto the line through `a` and `b`, and the
/// projection is clamped between the endpoint projections. A segment shorter
/// than [`DEGENERATE_LENGTH`] collapses to `a`.
pub fn closest_point_on_segment(a: Vec2, b: Vec2, point: Vec2) -> Vec2 {
    let distance = a.distance(b);
    if distance < DEGENERATE_LENGTH {
        return a;
    }

    let direction = (b - a) / distance;
    let a_dot = direction.dot(a);
    let b_dot = direction.dot(b);
    // Rounding can swap the endpoint projections for short segments far from the origin.
    let along = direction
        .dot(point)
        .clamp(a_dot.min(b_dot), a_dot.max(b_dot));
    a.lerp(b, (along - a_dot) / distance)
}

/// Component-wise linear interpolation between two RGBA colours, with `t`
/// clamped to `[0, 1]`.
pub fn lerp_color(from: Vec4, to: Vec4, t: f32) -> Vec4 {
    from.lerp(to, t.clamp(0.0, 1.0))
}
