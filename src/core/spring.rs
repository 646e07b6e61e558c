use serde::{Deserialize, Serialize};

use super::types::BodyState;
use crate::error::NetworkError;
use crate::utils::allocator::BodyId;

/// Elastic edge between two bodies with a target length.
///
/// The endpoints are stored in a fixed orientation, but equality treats the
/// pair as unordered: `a–b` and `b–a` with the same rest length are the same
/// spring.
///
/// Endpoints always differ and the rest length is finite and non-negative;
/// every constructor, deserialization included, goes through
/// [`SpringConstraint::new`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "RawSpringConstraint")]
pub struct SpringConstraint {
    a: BodyId,
    b: BodyId,
    rest_length: f32,
}

/// Unchecked wire form of [`SpringConstraint`].
#[derive(Deserialize)]
struct RawSpringConstraint {
    a: BodyId,
    b: BodyId,
    rest_length: f32,
}

impl TryFrom<RawSpringConstraint> for SpringConstraint {
    type Error = NetworkError;

    fn try_from(raw: RawSpringConstraint) -> Result<Self, Self::Error> {
        Self::new(raw.a, raw.b, raw.rest_length)
    }
}

impl SpringConstraint {
    pub fn new(a: BodyId, b: BodyId, rest_length: f32) -> Result<Self, NetworkError> {
        if a == b {
            return Err(NetworkError::SelfLoop { body: a });
        }
        if !rest_length.is_finite() || rest_length < 0.0 {
            return Err(NetworkError::InvalidRestLength { rest_length });
        }
        Ok(Self { a, b, rest_length })
    }

    /// Spring that is at rest for the given endpoint states.
    pub fn between(
        a: BodyId,
        b: BodyId,
        state_a: &BodyState,
        state_b: &BodyState,
    ) -> Result<Self, NetworkError> {
        Self::new(a, b, state_a.position.distance(state_b.position))
    }

    pub fn a(&self) -> BodyId {
        self.a
    }

    pub fn b(&self) -> BodyId {
        self.b
    }

    pub fn rest_length(&self) -> f32 {
        self.rest_length
    }

    /// True if this spring joins `x` and `y`, in either orientation.
    pub fn connects(&self, x: BodyId, y: BodyId) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }

    pub fn involves(&self, body: BodyId) -> bool {
        self.a == body || self.b == body
    }

    /// The endpoint opposite `body`, if `body` is an endpoint.
    pub fn other(&self, body: BodyId) -> Option<BodyId> {
        if self.a == body {
            Some(self.b)
        } else if self.b == body {
            Some(self.a)
        } else {
            None
        }
    }
}

impl PartialEq for SpringConstraint {
    fn eq(&self, other: &Self) -> bool {
        self.connects(other.a, other.b) && self.rest_length == other.rest_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn ids() -> (BodyId, BodyId) {
        (BodyId::from_index(0), BodyId::from_index(1))
    }

    #[test]
    fn rejects_self_loops_and_bad_rest_lengths() {
        let (a, b) = ids();
        assert_eq!(
            SpringConstraint::new(a, a, 1.0),
            Err(NetworkError::SelfLoop { body: a })
        );
        assert!(matches!(
            SpringConstraint::new(a, b, -0.5),
            Err(NetworkError::InvalidRestLength { .. })
        ));
        assert!(SpringConstraint::new(a, b, f32::NAN).is_err());
        assert!(SpringConstraint::new(a, b, 0.0).is_ok());
    }

    #[test]
    fn equality_ignores_orientation() {
        let (a, b) = ids();
        let forward = SpringConstraint::new(a, b, 2.0).unwrap();
        let backward = SpringConstraint::new(b, a, 2.0).unwrap();
        assert_eq!(forward, backward);
        assert_ne!(forward, SpringConstraint::new(a, b, 2.5).unwrap());
        assert_eq!(forward.other(b), Some(a));
        assert_eq!(forward.other(BodyId::from_index(7)), None);
    }

    #[test]
    fn between_uses_current_distance() {
        let (a, b) = ids();
        let spring = SpringConstraint::between(
            a,
            b,
            &BodyState::at_rest(Vec3::ZERO),
            &BodyState::at_rest(Vec3::new(3.0, 4.0, 0.0)),
        )
        .unwrap();
        assert!((spring.rest_length() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn deserialization_enforces_invariants() {
        let self_loop = r#"{"a":{"index":0,"generation":0},"b":{"index":0,"generation":0},"rest_length":1.0}"#;
        let negative = r#"{"a":{"index":0,"generation":0},"b":{"index":1,"generation":0},"rest_length":-3.0}"#;
        assert!(serde_json::from_str::<SpringConstraint>(self_loop).is_err());
        assert!(serde_json::from_str::<SpringConstraint>(negative).is_err());

        let (a, b) = ids();
        let spring = SpringConstraint::new(a, b, 2.0).unwrap();
        let json = serde_json::to_string(&spring).unwrap();
        let restored: SpringConstraint = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.a(), a);
        assert_eq!(restored.b(), b);
        assert_eq!(restored.rest_length(), 2.0);
    }
}
