use thiserror::Error;

/// Top-level error type for the airfoil crate.
#[derive(Debug, Error)]
pub enum AirfoilError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to curve operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("operation failed: {0}")]
    Failed(String),
}

/// Errors raised while reading persisted coordinate files.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("malformed line {line}: {content:?}")]
    MalformedLine { line: usize, content: String },
}

/// Convenience type alias for results using [`AirfoilError`].
pub type Result<T> = std::result::Result<T, AirfoilError>;
