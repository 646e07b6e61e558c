use std::collections::HashMap;

use crate::error::NetworkError;
use crate::utils::allocator::BodyId;

/// Per-body neighbour lists for the live springs.
///
/// The index is symmetric: every link `a–b` appends `b` to `a`'s list and `a`
/// to `b`'s. Parallel springs are not merged, so two springs between the same
/// pair leave two entries on each side.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    neighbors: HashMap<BodyId, Vec<BodyId>>,
}

impl AdjacencyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn link(&mut self, a: BodyId, b: BodyId) {
        self.neighbors.entry(a).or_default().push(b);
        self.neighbors.entry(b).or_default().push(a);
    }

    /// Drops one `a–b` entry from each side. Nothing is modified unless both
    /// sides hold the entry.
    pub fn unlink(&mut self, a: BodyId, b: BodyId) -> Result<(), NetworkError> {
        let slot_in_a = self.position_of(a, b)?;
        let slot_in_b = self.position_of(b, a)?;

        if let Some(list) = self.neighbors.get_mut(&a) {
            list.remove(slot_in_a);
        }
        if let Some(list) = self.neighbors.get_mut(&b) {
            list.remove(slot_in_b);
        }
        Ok(())
    }

    fn position_of(&self, body: BodyId, neighbor: BodyId) -> Result<usize, NetworkError> {
        self.neighbors
            .get(&body)
            .and_then(|list| list.iter().position(|&candidate| candidate == neighbor))
            .ok_or(NetworkError::MissingAdjacency { body })
    }

    /// Neighbours of `body` in insertion order; empty for unknown bodies.
    pub fn neighbors(&self, body: BodyId) -> &[BodyId] {
        self.neighbors
            .get(&body)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn degree(&self, body: BodyId) -> usize {
        self.neighbors(body).len()
    }

    pub fn contains_body(&self, body: BodyId) -> bool {
        self.neighbors.contains_key(&body)
    }

    /// O(degree of `a`).
    pub fn connected(&self, a: BodyId, b: BodyId) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// First neighbour of `a`, in `a`'s order, that is also a neighbour of `b`.
    pub fn mutual_neighbor(&self, a: BodyId, b: BodyId) -> Option<BodyId> {
        let of_a = self.neighbors.get(&a)?;
        let of_b = self.neighbors.get(&b)?;
        of_a.iter().copied().find(|candidate| of_b.contains(candidate))
    }

    /// Removes `body`'s entry once it has no neighbours left.
    pub fn forget_if_isolated(&mut self, body: BodyId) {
        if self.neighbors.get(&body).is_some_and(Vec::is_empty) {
            self.neighbors.remove(&body);
        }
    }

    /// Number of bodies with an entry (including entries emptied by removals).
    pub fn body_count(&self) -> usize {
        self.neighbors.len()
    }

    pub fn clear(&mut self) {
        self.neighbors.clear();
    }
}
