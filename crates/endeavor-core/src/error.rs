//! Error types for geometry, boundary selection, and configuration.

use thiserror::Error;

use crate::enums::Wall;

/// Degenerate geometry. Always recoverable by the caller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// Arc angle requested around a center that coincides with the arc start.
    #[error("arc angle is undefined for a zero-radius arc")]
    ZeroRadiusArc,

    /// Heading requested between two coincident points.
    #[error("heading is undefined between coincident points")]
    ZeroDistanceBearing,
}

/// Misuse of the boundary helpers. These indicate a logic defect.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryError {
    #[error("there are no walls to choose from")]
    EmptyCandidateSet,

    #[error("heading set needs one vertical and one horizontal wall, got {vertical:?} and {horizontal:?}")]
    MismatchedHeadingSet { vertical: Wall, horizontal: Wall },
}

/// Failure to load an [`AgentConfig`](crate::config::AgentConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

pub type GeometryResult<T> = Result<T, GeometryError>;

pub type BoundaryResult<T> = Result<T, BoundaryError>;
