//! Step observers and debug-draw data. Purely informational: nothing here
//! feeds back into the simulation.

use std::sync::Arc;

use glam::{Vec3, Vec4};
use parking_lot::Mutex;

use crate::config::STRAIN_COLOR_SCALE;
use crate::core::spring::SpringConstraint;
use crate::network::StepReport;
use crate::utils::math::lerp_color;

/// Colour of a spring at its rest length.
pub const HEALTHY_COLOR: Vec4 = Vec4::new(0.0, 1.0, 0.0, 1.0);

/// Colour of a spring stretched or compressed by [`STRAIN_COLOR_SCALE`] or more.
pub const STRAINED_COLOR: Vec4 = Vec4::new(1.0, 0.0, 0.0, 1.0);

/// Line segment to draw for one spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugLine {
    pub from: Vec3,
    pub to: Vec3,
    pub color: Vec4,
}

/// How far a live spring currently sits from its rest length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringStrain {
    pub spring: SpringConstraint,
    pub from: Vec3,
    pub to: Vec3,
    /// `|rest - distance| / STRAIN_COLOR_SCALE`, clamped to `[0, 1]`.
    pub ratio: f32,
}

impl SpringStrain {
    pub fn measure(spring: SpringConstraint, from: Vec3, to: Vec3) -> Self {
        let deviation = (spring.rest_length() - from.distance(to)).abs();
        Self {
            spring,
            from,
            to,
            ratio: (deviation / STRAIN_COLOR_SCALE).clamp(0.0, 1.0),
        }
    }

    pub fn color(&self) -> Vec4 {
        lerp_color(HEALTHY_COLOR, STRAINED_COLOR, self.ratio)
    }

    pub fn line(&self) -> DebugLine {
        DebugLine {
            from: self.from,
            to: self.to,
            color: self.color(),
        }
    }
}

/// Hook invoked by [`crate::SpringNetwork`] after every step.
pub trait StepObserver: Send + Sync {
    fn name(&self) -> &str;

    /// Called once the step has applied forces and removed dead springs.
    /// `strains` covers the springs still alive, in network order.
    fn on_step(&mut self, _report: &StepReport, _strains: &[SpringStrain]) {}
}

/// Observer that keeps the debug lines of the most recent step.
///
/// Clones share the same buffer, so a host can hand one clone to the network
/// and read frames through another.
#[derive(Debug, Clone, Default)]
pub struct DebugLineRecorder {
    lines: Arc<Mutex<Vec<DebugLine>>>,
    steps: Arc<Mutex<usize>>,
}

impl DebugLineRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<DebugLine> {
        self.lines.lock().clone()
    }

    pub fn steps_observed(&self) -> usize {
        *self.steps.lock()
    }
}

impl StepObserver for DebugLineRecorder {
    fn name(&self) -> &str {
        "debug-lines"
    }

    fn on_step(&mut self, _report: &StepReport, strains: &[SpringStrain]) {
        let mut lines = self.lines.lock();
        lines.clear();
        lines.extend(strains.iter().map(SpringStrain::line));
        *self.steps.lock() += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::allocator::BodyId;

    fn spring(rest_length: f32) -> SpringConstraint {
        SpringConstraint::new(BodyId::from_index(0), BodyId::from_index(1), rest_length).unwrap()
    }

    #[test]
    fn strain_at_rest_is_green() {
        let strain = SpringStrain::measure(spring(2.0), Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0));
        assert!(strain.ratio.abs() < 1e-6);
        assert_eq!(strain.color(), HEALTHY_COLOR);
    }

    #[test]
    fn strain_ratio_is_symmetric_and_clamped() {
        let stretched = SpringStrain::measure(spring(2.0), Vec3::ZERO, Vec3::new(4.5, 0.0, 0.0));
        let compressed = SpringStrain::measure(spring(5.0), Vec3::ZERO, Vec3::new(2.5, 0.0, 0.0));
        assert!((stretched.ratio - 0.5).abs() < 1e-6);
        assert!((compressed.ratio - 0.5).abs() < 1e-6);

        let extreme = SpringStrain::measure(spring(0.0), Vec3::ZERO, Vec3::new(40.0, 0.0, 0.0));
        assert_eq!(extreme.ratio, 1.0);
        assert_eq!(extreme.color(), STRAINED_COLOR);
    }
}
