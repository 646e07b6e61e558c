use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_DAMPING_RATIO, DEFAULT_STIFFNESS};

/// Global coefficients shared by every spring in a network.
///
/// No validation is applied: zero or negative stiffness is accepted and
/// simply produces a degenerate (slack or repulsive) spring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringSettings {
    /// Hooke constant scaling the displacement from rest length.
    pub stiffness: f32,
    /// Coefficient of the velocity term along the spring axis.
    pub damping_ratio: f32,
}

impl Default for SpringSettings {
    fn default() -> Self {
        Self {
            stiffness: DEFAULT_STIFFNESS,
            damping_ratio: DEFAULT_DAMPING_RATIO,
        }
    }
}

impl SpringSettings {
    pub fn new(stiffness: f32, damping_ratio: f32) -> Self {
        Self {
            stiffness,
            damping_ratio,
        }
    }

    /// Undamped spring with the given stiffness.
    pub fn undamped(stiffness: f32) -> Self {
        Self::new(stiffness, 0.0)
    }
}

/// Snapshot of the kinematic state the spring model reads from a body.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BodyState {
    pub position: Vec3,
    pub velocity: Vec3,
}

impl BodyState {
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self { position, velocity }
    }

    pub fn at_rest(position: Vec3) -> Self {
        Self::new(position, Vec3::ZERO)
    }
}
