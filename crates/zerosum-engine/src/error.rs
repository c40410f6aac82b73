//! Engine error types.

/// An algorithm name that matches none of [`Algorithm::ALL`](crate::Algorithm::ALL).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search algorithm: \"{name}\"")]
pub struct ParseAlgorithmError {
    /// The name as given.
    pub name: String,
}
