//! Spring force model.

pub mod forces;

pub use forces::{compute_spring_force, spring_force};
