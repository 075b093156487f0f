use thiserror::Error;

/// Top-level error type for the planimetry kernel.
#[derive(Debug, Error)]
pub enum PlanimetryError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Canonical(#[from] CanonicalError),
}

/// Contract violations detected while constructing a geometric entity.
///
/// Purely geometric edge cases (parallel lines, trivial curves, ...) are
/// never reported through this type.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("circle radius must be non-negative, got {0}")]
    NegativeRadius(f64),

    #[error("non-finite {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("{shape} needs at least {expected} vertices, got {found}")]
    TooFewVertices {
        shape: &'static str,
        expected: usize,
        found: usize,
    },
}

/// Errors raised when decoding a canonical tuple.
#[derive(Debug, Error)]
pub enum CanonicalError {
    #[error("invalid canonical {kind}: {reason}")]
    Invalid { kind: &'static str, reason: String },
}

/// Convenience type alias for results using [`PlanimetryError`].
pub type Result<T> = std::result::Result<T, PlanimetryError>;
