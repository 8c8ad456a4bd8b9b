//! Error types for point-set queries.

use thiserror::Error;

use crate::point::Point;

/// Primary error type for closest-pair and k-d tree operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A pair needs two points; fewer is a caller error, not an answer.
    #[error("closest pair needs at least 2 points, got {0}")]
    TooFewPoints(usize),

    /// Nearest-neighbor query against a tree built from no points.
    #[error("nearest-neighbor query on an empty tree")]
    EmptyTree,

    /// Removal of a point that is not in the frontier.
    #[error("point {0} not present in frontier")]
    PointNotFound(Point),
}

/// Convenience Result type alias for Error.
pub type Result<T> = std::result::Result<T, Error>;
