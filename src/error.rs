use thiserror::Error;

/// Top-level error type for the formfit kernel.
#[derive(Debug, Error)]
pub enum FormfitError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Errors related to geometric construction and computation.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("face corners are not coplanar (deviation {deviation})")]
    NonCoplanarFace { deviation: f64 },

    #[error("face corners are not in boundary order")]
    UnorderedFaceCorners,

    #[error("wall axis must be horizontal (rise {rise} over length {length})")]
    SlopedWallAxis { rise: f64, length: f64 },

    #[error("non-positive wall dimension: {dimension} = {value}")]
    NonPositiveDimension {
        dimension: &'static str,
        value: f64,
    },
}

/// Errors related to panel layout solving.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("panel catalog is empty")]
    EmptyCatalog,

    #[error("panel width {0} is not a positive finite number")]
    InvalidWidth(f64),

    #[error("target span {parameter} = {value} is not a positive finite number")]
    InvalidTarget {
        parameter: &'static str,
        value: f64,
    },

    #[error("inverted target range: min {min} > max {max}")]
    InvertedRange { min: f64, max: f64 },

    #[error("maximum filler width {0} is not a finite non-negative number")]
    InvalidFillerWidth(f64),
}

/// Convenience type alias for results using [`FormfitError`].
pub type Result<T> = std::result::Result<T, FormfitError>;
