use std::sync::Arc;

use parking_lot::Mutex;

use super::{SpringNetwork, StepReport};
use crate::{
    core::{body::BodySet, spring::SpringConstraint},
    error::NetworkError,
    interaction::CursorSource,
    utils::allocator::BodyId,
};

/// A [`SpringNetwork`] behind one exclusive lock, for hosts that touch the
/// network from more than one thread.
///
/// Each operation holds the lock for its whole duration, so a step always sees
/// (and leaves) a consistent spring list and adjacency index.
#[derive(Clone, Default)]
pub struct SharedSpringNetwork {
    inner: Arc<Mutex<SpringNetwork>>,
}

impl SharedSpringNetwork {
    pub fn new(network: SpringNetwork) -> Self {
        Self {
            inner: Arc::new(Mutex::new(network)),
        }
    }

    pub fn step<B, C>(&self, elapsed_seconds: f32, bodies: &mut B, input: &C) -> StepReport
    where
        B: BodySet + ?Sized,
        C: CursorSource + ?Sized,
    {
        self.inner.lock().step(elapsed_seconds, bodies, input)
    }

    pub fn add_spring(&self, spring: SpringConstraint) {
        self.inner.lock().add_spring(spring);
    }

    pub fn remove_spring(
        &self,
        spring: &SpringConstraint,
    ) -> Result<SpringConstraint, NetworkError> {
        self.inner.lock().remove_spring(spring)
    }

    pub fn spring_exists_between(&self, a: BodyId, b: BodyId) -> bool {
        self.inner.lock().spring_exists_between(a, b)
    }

    pub fn mutual_connection(&self, a: BodyId, b: BodyId) -> Option<BodyId> {
        self.inner.lock().mutual_connection(a, b)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Runs `f` with shared access while holding the lock.
    pub fn with<R>(&self, f: impl FnOnce(&SpringNetwork) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Runs `f` with exclusive access while holding the lock.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut SpringNetwork) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
