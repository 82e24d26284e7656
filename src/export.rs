//! Artifact writers for generated meshes.
//!
//! Two outputs are produced from a finished [`Mesh`]: a DXF line drawing for
//! vector tooling and a JSON array artifact carrying the raw coordinate and
//! connectivity tables for downstream reuse.

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ExportError;
use crate::mesh::Mesh;

/// Write the mesh as a minimal ASCII DXF drawing.
///
/// The file contains one `LINE` entity per element on the default layer and
/// nothing else; no colours, layers or attributes are attached.
///
/// # Errors
///
/// Returns [`ExportError::Io`] when the file cannot be created or written.
pub fn write_vector_drawing<P: AsRef<Path>>(mesh: &Mesh, path: P) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(render_dxf(mesh).as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Render the DXF document for the mesh as a string.
fn render_dxf(mesh: &Mesh) -> String {
    let mut output = String::new();
    output.push_str("0\nSECTION\n2\nENTITIES\n");
    for (start, end) in mesh.elements() {
        let from = mesh.position(start).expect("element endpoint exists");
        let to = mesh.position(end).expect("element endpoint exists");
        write!(
            &mut output,
            "0\nLINE\n8\n0\n10\n{}\n20\n{}\n11\n{}\n21\n{}\n",
            from.x, from.y, to.x, to.y
        )
        .expect("writing to string cannot fail");
    }
    output.push_str("0\nENDSEC\n0\nEOF\n");
    output
}

/// Raw coordinate and connectivity tables of a mesh.
///
/// `points` holds the `N×2` coordinate table in generation order and
/// `elements` the `M×2` index table in acceptance order. Element indices are
/// **0-based** references into `points`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ArrayArtifact {
    /// Point coordinate table, one `[x, y]` row per point.
    pub points: Vec<[f64; 2]>,
    /// Element index table, one `[i, j]` row per accepted element.
    pub elements: Vec<[usize; 2]>,
}

impl ArrayArtifact {
    /// Extract the coordinate and connectivity tables from a mesh.
    #[must_use]
    pub fn from_mesh(mesh: &Mesh) -> Self {
        Self {
            points: mesh.points().iter().map(|p| [p.x, p.y]).collect(),
            elements: mesh
                .elements()
                .iter()
                .map(|&(start, end)| [start, end])
                .collect(),
        }
    }
}

/// Write the mesh's coordinate and connectivity tables as JSON.
///
/// # Errors
///
/// Returns [`ExportError::Io`] when the file cannot be created and
/// [`ExportError::Serialize`] when serialization fails.
pub fn write_array_artifact<P: AsRef<Path>>(mesh: &Mesh, path: P) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, &ArrayArtifact::from_mesh(mesh))?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{generate, MeshParameters};

    fn small_mesh() -> Mesh {
        let parameters = MeshParameters::new(0.0, 10.0, 3, 2).expect("valid parameters");
        generate(&parameters)
    }

    #[test]
    fn dxf_contains_one_line_entity_per_element() {
        let mesh = small_mesh();
        let document = render_dxf(&mesh);
        let line_count = document.matches("0\nLINE\n").count();
        assert_eq!(line_count, mesh.element_count());
        assert!(document.starts_with("0\nSECTION\n2\nENTITIES\n"));
        assert!(document.ends_with("0\nENDSEC\n0\nEOF\n"));
    }

    #[test]
    fn dxf_line_coordinates_match_element_endpoints() {
        let mesh = small_mesh();
        let (start, end) = mesh.elements()[0];
        let from = mesh.position(start).expect("endpoint exists");
        let to = mesh.position(end).expect("endpoint exists");
        let document = render_dxf(&mesh);
        assert!(document.contains(&format!(
            "10\n{}\n20\n{}\n11\n{}\n21\n{}\n",
            from.x, from.y, to.x, to.y
        )));
    }

    #[test]
    fn artifact_tables_mirror_the_mesh() {
        let mesh = small_mesh();
        let artifact = ArrayArtifact::from_mesh(&mesh);
        assert_eq!(artifact.points.len(), mesh.point_count());
        assert_eq!(artifact.elements.len(), mesh.element_count());
        assert_eq!(artifact.points[0], [0.0, 0.0]);
        for row in &artifact.elements {
            assert!(row[0] < row[1]);
        }
    }

    #[test]
    fn artifact_survives_json_round_trip() {
        let artifact = ArrayArtifact::from_mesh(&small_mesh());
        let encoded = serde_json::to_string(&artifact).expect("artifact serializes");
        let decoded: ArrayArtifact = serde_json::from_str(&encoded).expect("artifact deserializes");
        assert_eq!(decoded, artifact);
    }
}
