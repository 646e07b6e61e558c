//! Global configuration constants and the serializable network configuration.

use serde::{Deserialize, Serialize};

use crate::core::types::SpringSettings;

/// Default fixed simulation timestep (in seconds) hosts are expected to tick at.
pub const DEFAULT_TIME_STEP: f32 = 1.0 / 60.0;

/// Default spring stiffness (Hooke constant).
pub const DEFAULT_STIFFNESS: f32 = 50.0;

/// Default damping coefficient along the spring axis.
pub const DEFAULT_DAMPING_RATIO: f32 = 0.5;

/// Default endpoint distance beyond which a spring snaps.
pub const DEFAULT_SNAP_LENGTH: f32 = 5.0;

/// Default cursor radius for interactive severing, in world units.
pub const DEFAULT_INTERACT_RADIUS: f32 = 0.5;

/// Lengths below this are treated as degenerate (no direction).
pub const DEGENERATE_LENGTH: f32 = 1e-6;

/// Stretch, in world units, at which the debug colour saturates to red.
pub const STRAIN_COLOR_SCALE: f32 = 5.0;

/// Tunables consumed by [`crate::SpringNetwork`] every step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub settings: SpringSettings,
    /// Endpoint distance beyond which a spring is removed.
    pub snap_length: f32,
    pub interact_radius: f32,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            settings: SpringSettings::default(),
            snap_length: DEFAULT_SNAP_LENGTH,
            interact_radius: DEFAULT_INTERACT_RADIUS,
        }
    }
}

impl NetworkConfig {
    pub fn with_settings(mut self, settings: SpringSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_snap_length(mut self, snap_length: f32) -> Self {
        self.snap_length = snap_length;
        self
    }

    pub fn with_interact_radius(mut self, radius: f32) -> Self {
        self.interact_radius = radius;
        self
    }
}
