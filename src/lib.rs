//! Spring Network – breakable damped springs for real-time physics.
//!
//! A [`SpringNetwork`] keeps a graph of spring constraints between bodies it
//! does not own. Each fixed tick it pushes damped Hookean forces into the
//! host's bodies through the [`BodySet`] collaborator, snaps springs that are
//! stretched past a threshold, and severs springs swept by the cursor. An
//! adjacency index answers "are these connected?" and "who connects these
//! two?" in time proportional to a body's degree.
//!
//! ```
//! use spring_network::*;
//!
//! let mut bodies = PointMassSet::new();
//! let a = bodies.insert(PointMass::new(Vec3::ZERO));
//! let b = bodies.insert(PointMass::new(Vec3::new(3.0, 0.0, 0.0)));
//!
//! let mut network = SpringNetwork::new();
//! network.add_spring(SpringConstraint::new(a, b, 1.0).unwrap());
//! network.step(DEFAULT_TIME_STEP, &mut bodies, &SeverInput::inactive());
//!
//! assert!(bodies.get(a).unwrap().force.x > 0.0);
//! ```

pub mod config;
pub mod core;
pub mod debug;
pub mod dynamics;
pub mod error;
pub mod interaction;
pub mod network;
pub mod utils;

pub use glam::{Vec2, Vec3, Vec4};

pub use crate::config::{NetworkConfig, DEFAULT_TIME_STEP};
pub use crate::core::{
    body::{BodySet, PointMass, PointMassSet},
    spring::SpringConstraint,
    types::{BodyState, SpringSettings},
};
pub use crate::debug::{DebugLine, DebugLineRecorder, SpringStrain, StepObserver};
pub use crate::dynamics::forces::{compute_spring_force, spring_force};
pub use crate::error::NetworkError;
pub use crate::interaction::{Camera2D, CursorSource, SeverInput};
pub use crate::network::{AdjacencyIndex, SharedSpringNetwork, SpringNetwork, StepReport};
pub use crate::utils::allocator::BodyId;
