use thiserror::Error;

/// Top-level error type for the roundel engine.
#[derive(Debug, Error)]
pub enum RoundelError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("zero-length vector")]
    DegenerateVector,

    #[error("degenerate corner {index}: interior angle {angle} leaves no bisector")]
    DegenerateCorner { index: usize, angle: f64 },

    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("non-finite value in {0}")]
    NonFinite(&'static str),
}

/// Errors related to engine operations.
#[derive(Debug, Error, PartialEq)]
pub enum OperationError {
    #[error("a polygon needs at least 3 vertices, got {count}")]
    InvalidVertexCount { count: usize },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`RoundelError`].
pub type Result<T> = std::result::Result<T, RoundelError>;
