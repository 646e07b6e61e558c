//! Utility helpers: generational storage, scoped logging timers, and geometry math.

pub mod allocator;
pub mod logging;
pub mod math;

pub use allocator::{Arena, BodyId};
pub use math::*;
