use glam::Vec3;
use log::warn;

use crate::config::DEGENERATE_LENGTH;
use crate::core::{
    body::BodySet,
    spring::SpringConstraint,
    types::{BodyState, SpringSettings},
};

/// Damped Hookean force between two endpoint states.
///
/// The returned vector is subtracted from `a` and added to `b`, so the pair
/// always sums to zero. The spring term is `stiffness * (length - rest)`
/// along the unit offset `a - b`; the damping term opposes the relative
/// velocity projected onto the same axis.
///
/// A missing endpoint logs a warning and yields zero. Coincident endpoints
/// have no axis and also yield zero.
pub fn compute_spring_force(
    a: Option<&BodyState>,
    b: Option<&BodyState>,
    rest_length: f32,
    settings: &SpringSettings,
) -> Vec3 {
    let (Some(a), Some(b)) = (a, b) else {
        warn!("spring force requested for a missing body");
        return Vec3::ZERO;
    };

    let offset = a.position - b.position;
    let length = offset.length();
    if length < DEGENERATE_LENGTH {
        return Vec3::ZERO;
    }

    let direction = offset / length;
    let displacement = length - rest_length;
    let spring_magnitude = settings.stiffness * displacement;

    let relative_velocity = b.velocity - a.velocity;
    let damping_force = -direction.dot(relative_velocity) * settings.damping_ratio * direction;

    direction * spring_magnitude + damping_force
}

/// Looks up both endpoints of `spring` in `bodies` and evaluates
/// [`compute_spring_force`] for them.
pub fn spring_force<B: BodySet + ?Sized>(
    bodies: &B,
    spring: &SpringConstraint,
    settings: &SpringSettings,
) -> Vec3 {
    let state_a = bodies.state(spring.a());
    let state_b = bodies.state(spring.b());
    compute_spring_force(
        state_a.as_ref(),
        state_b.as_ref(),
        spring.rest_length(),
        settings,
    )
}
