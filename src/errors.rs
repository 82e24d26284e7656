//! Error types produced while configuring meshes or writing artifacts.

use thiserror::Error;

/// Error returned when mesh generation parameters are rejected.
///
/// Validation happens eagerly when [`MeshParameters`](crate::MeshParameters)
/// is constructed, before any point is sampled, so invalid configurations are
/// never discovered mid-enumeration.
///
/// # Examples
///
/// ```
/// use flowermesh::{MeshConfigError, MeshParameters};
///
/// let error = MeshParameters::new(10.0, 5.0, 12, 5).expect_err("inverted radii rejected");
/// assert_eq!(
///     error,
///     MeshConfigError::InvertedRadii {
///         inner_radius: 10.0,
///         outer_radius: 5.0,
///     }
/// );
/// ```
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum MeshConfigError {
    /// Returned when a radius is NaN or infinite.
    #[error("radii must be finite (received r1 = {inner_radius}, r2 = {outer_radius})")]
    NonFiniteRadius {
        /// Supplied inner radius.
        inner_radius: f64,
        /// Supplied outer radius.
        outer_radius: f64,
    },
    /// Returned when the inner radius is negative.
    #[error("inner radius must be non-negative (received {inner_radius})")]
    NegativeInnerRadius {
        /// Rejected inner radius.
        inner_radius: f64,
    },
    /// Returned when the outer radius does not exceed the inner radius.
    #[error("outer radius must exceed inner radius (received r1 = {inner_radius}, r2 = {outer_radius})")]
    InvertedRadii {
        /// Supplied inner radius.
        inner_radius: f64,
        /// Supplied outer radius.
        outer_radius: f64,
    },
    /// Returned when no angles would be sampled on each ring.
    #[error("angular divisions must be at least 1")]
    ZeroAngularDivisions,
    /// Returned when no radius values would be sampled.
    #[error("radial divisions must be at least 1")]
    ZeroRadialDivisions,
}

/// Error returned when writing a mesh artifact to disk fails.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Underlying I/O failure while creating or writing the file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Failure serializing the array artifact.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
