use flowermesh::{generate, write_array_artifact, write_vector_drawing, MeshParameters};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // Validate the sampling parameters before anything is generated. These
    // values reproduce the "flower_1" reference case: a full disc of radius
    // 100 sampled at 12 angles per ring across 5 rings.
    let parameters = MeshParameters::new(0.0, 100.0, 12, 5)?;

    // Build the ground structure. Candidate bars that leave the buffered
    // annular region or duplicate an already-accepted collinear bar are
    // discarded; everything else becomes an element. See
    // https://en.wikipedia.org/wiki/Truss for the structural background.
    let mesh = generate(&parameters);

    // Emit both artifacts: a DXF line drawing for vector tooling and the raw
    // coordinate/connectivity tables for the downstream optimizer.
    write_vector_drawing(&mesh, "flower_1.dxf")?;
    write_array_artifact(&mesh, "flower_1.json")?;

    println!(
        "flower_1: {} points, {} elements",
        mesh.point_count(),
        mesh.element_count()
    );

    Ok(())
}
