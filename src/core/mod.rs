//! Core types describing springs, body state, and the body collaborator.

pub mod body;
pub mod spring;
pub mod types;

pub use body::{BodySet, PointMass, PointMassSet};
pub use spring::SpringConstraint;
pub use types::{BodyState, SpringSettings};
