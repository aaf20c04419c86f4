//! Demo showing a filtered triangle mesh with its wireframe.
//!
//! Builds a sphere by subdividing an octahedron, then drops every vertex
//! below the equator so only the upper cap is drawn.

use std::collections::HashMap;

use mcxplot::*;

fn octasphere(levels: u32) -> (Vec<DVec3>, Vec<UVec3>) {
    let mut vertices = vec![
        DVec3::X,
        DVec3::NEG_X,
        DVec3::Y,
        DVec3::NEG_Y,
        DVec3::Z,
        DVec3::NEG_Z,
    ];
    let mut faces = vec![
        UVec3::new(0, 2, 4),
        UVec3::new(2, 1, 4),
        UVec3::new(1, 3, 4),
        UVec3::new(3, 0, 4),
        UVec3::new(2, 0, 5),
        UVec3::new(1, 2, 5),
        UVec3::new(3, 1, 5),
        UVec3::new(0, 3, 5),
    ];

    for _ in 0..levels {
        let mut midpoints: HashMap<(u32, u32), u32> = HashMap::new();
        let mut midpoint = |a: u32, b: u32, vertices: &mut Vec<DVec3>| -> u32 {
            let key = (a.min(b), a.max(b));
            *midpoints.entry(key).or_insert_with(|| {
                let p = (vertices[a as usize] + vertices[b as usize]).normalize();
                vertices.push(p);
                u32::try_from(vertices.len() - 1).unwrap()
            })
        };

        let mut next = Vec::with_capacity(faces.len() * 4);
        for f in &faces {
            let ab = midpoint(f.x, f.y, &mut vertices);
            let bc = midpoint(f.y, f.z, &mut vertices);
            let ca = midpoint(f.z, f.x, &mut vertices);
            next.push(UVec3::new(f.x, ab, ca));
            next.push(UVec3::new(ab, f.y, bc));
            next.push(UVec3::new(ca, bc, f.z));
            next.push(UVec3::new(ab, bc, ca));
        }
        faces = next;
    }

    (vertices, faces)
}

fn main() -> Result<()> {
    init()?;

    let (vertices, faces) = octasphere(3);
    println!("Sphere: {} vertices, {} faces", vertices.len(), faces.len());

    // Keep the upper cap only
    let thresholds = FilterThresholds::none().with_z_min(0.0);
    let mesh = FilteredMesh::new("cap", &vertices, &faces, &thresholds)?;
    println!(
        "Cap: {} vertices, {} faces, {} edges",
        mesh.num_vertices(),
        mesh.num_faces(),
        mesh.num_edges()
    );

    let path = plot_mesh(&vertices, &faces, "#4c72b0", thresholds)?;
    println!("Mesh written to {}", path.display());

    shutdown();
    Ok(())
}
