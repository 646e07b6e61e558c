use glam::Vec3;

use super::types::BodyState;
use crate::utils::allocator::{Arena, BodyId};

/// Capability surface the network needs from whatever owns body motion.
///
/// Bodies are addressed by [`BodyId`]; a handle the collaborator no longer
/// (or never) recognises resolves to `None`.
pub trait BodySet {
    /// Current position and velocity of `id`, or `None` if it is absent.
    fn state(&self, id: BodyId) -> Option<BodyState>;

    /// Accumulates `force` into the body's integrator input. Absent bodies are ignored.
    fn add_force(&mut self, id: BodyId, force: Vec3);

    fn position(&self, id: BodyId) -> Option<Vec3> {
        self.state(id).map(|state| state.position)
    }

    fn velocity(&self, id: BodyId) -> Option<Vec3> {
        self.state(id).map(|state| state.velocity)
    }
}

/// Minimal point mass: kinematic state plus a force accumulator.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointMass {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Sum of forces added since the last [`PointMassSet::clear_forces`].
    pub force: Vec3,
}

impl PointMass {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }
}

/// Arena-backed [`BodySet`] for hosts without their own body storage.
///
/// It accumulates forces but never integrates them; the host reads
/// `force`, advances its own state and calls [`PointMassSet::clear_forces`].
#[derive(Default)]
pub struct PointMassSet {
    bodies: Arena<PointMass>,
}

impl PointMassSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, body: PointMass) -> BodyId {
        self.bodies.insert(body)
    }

    pub fn remove(&mut self, id: BodyId) -> Option<PointMass> {
        self.bodies.remove(id)
    }

    pub fn get(&self, id: BodyId) -> Option<&PointMass> {
        self.bodies.get(id)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut PointMass> {
        self.bodies.get_mut(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = BodyId> + '_ {
        self.bodies.ids()
    }

    pub fn clear_forces(&mut self) {
        for body in self.bodies.iter_mut() {
            body.force = Vec3::ZERO;
        }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl BodySet for PointMassSet {
    fn state(&self, id: BodyId) -> Option<BodyState> {
        self.bodies
            .get(id)
            .map(|body| BodyState::new(body.position, body.velocity))
    }

    fn add_force(&mut self, id: BodyId, force: Vec3) {
        if let Some(body) = self.bodies.get_mut(id) {
            body.force += force;
        }
    }
}
