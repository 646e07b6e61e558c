//! Cursor-driven severing: the input collaborator surface and the segment hit test.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::utils::math::closest_point_on_segment;

/// Input collaborator queried once per step.
pub trait CursorSource {
    /// Whether the sever input (e.g. a held mouse button) is active this step.
    fn sever_active(&self) -> bool;

    /// Cursor position on the simulation plane, in world units.
    fn cursor_world(&self) -> Vec2;
}

/// Plain snapshot of the sever input for one step.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SeverInput {
    pub active: bool,
    pub cursor: Vec2,
}

impl SeverInput {
    pub fn inactive() -> Self {
        Self::default()
    }

    /// Active input with the cursor at `cursor` (world units).
    pub fn at(cursor: Vec2) -> Self {
        Self {
            active: true,
            cursor,
        }
    }

    /// Builds the snapshot from a cursor position in screen pixels.
    pub fn from_screen(active: bool, screen: Vec2, camera: &Camera2D) -> Self {
        Self {
            active,
            cursor: camera.screen_to_world(screen),
        }
    }
}

impl CursorSource for SeverInput {
    fn sever_active(&self) -> bool {
        self.active
    }

    fn cursor_world(&self) -> Vec2 {
        self.cursor
    }
}

/// Orthographic camera looking down the Z axis.
///
/// Screen coordinates are pixels with the origin at the bottom-left corner
/// of the viewport and Y pointing up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera2D {
    /// World position at the centre of the viewport.
    pub position: Vec2,
    /// Viewport size in pixels.
    pub viewport: Vec2,
    pub pixels_per_unit: f32,
}

impl Default for Camera2D {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            viewport: Vec2::new(1280.0, 720.0),
            pixels_per_unit: 64.0,
        }
    }
}

impl Camera2D {
    pub fn new(position: Vec2, viewport: Vec2, pixels_per_unit: f32) -> Self {
        Self {
            position,
            viewport,
            pixels_per_unit,
        }
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        self.position + (screen - self.viewport * 0.5) / self.pixels_per_unit
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        (world - self.position) * self.pixels_per_unit + self.viewport * 0.5
    }
}

/// True if `cursor` lies strictly within `radius` of the segment `a`–`b`.
///
/// Only the plane components are considered. A degenerate segment is tested
/// as the single point `a`.
pub fn segment_hit(a: Vec3, b: Vec3, cursor: Vec2, radius: f32) -> bool {
    let closest = closest_point_on_segment(a.truncate(), b.truncate(), cursor);
    cursor.distance(closest) < radius
}
