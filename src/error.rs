//! Error types for spring network operations.

use std::fmt;

use crate::utils::allocator::BodyId;

/// Errors reported by fallible network operations.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// A spring cannot connect a body to itself.
    SelfLoop { body: BodyId },
    /// Rest length must be finite and non-negative.
    InvalidRestLength { rest_length: f32 },
    /// No live spring matches the one being removed.
    SpringNotFound { a: BodyId, b: BodyId },
    /// The adjacency index has no entry for a body it should know.
    MissingAdjacency { body: BodyId },
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::SelfLoop { body } => {
                write!(f, "spring endpoints must differ (both are {})", body)
            }
            NetworkError::InvalidRestLength { rest_length } => {
                write!(f, "rest length must be finite and >= 0, got {}", rest_length)
            }
            NetworkError::SpringNotFound { a, b } => {
                write!(f, "no live spring between {} and {}", a, b)
            }
            NetworkError::MissingAdjacency { body } => {
                write!(f, "adjacency index has no entry for {}", body)
            }
        }
    }
}

impl std::error::Error for NetworkError {}
