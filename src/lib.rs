#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

mod errors;
mod export;
mod geometry;
mod mesh;
mod region;

pub use errors::{ExportError, MeshConfigError};
pub use export::{write_array_artifact, write_vector_drawing, ArrayArtifact};
pub use geometry::{is_collinear_redundant, point, point_segment_distance, Point, Segment};
pub use mesh::{generate, Mesh, MeshParameters};
pub use region::Annulus;
