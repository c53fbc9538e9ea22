//! Flat rectangle in the XY plane

use glam::{DVec2, DVec3};

use crate::mesh::TriMesh;

/// Generate a `width` x `height` plane centered on the origin, facing +Z.
///
/// UVs run from (0, 0) at the bottom-left corner to (1, 1) at the top-right.
pub fn generate_plane_mesh(width: f64, height: f64) -> TriMesh {
    let hw = width / 2.0;
    let hh = height / 2.0;

    let mut mesh = TriMesh::with_capacity(4, 2);
    let corners = [
        (DVec3::new(-hw, hh, 0.0), DVec2::new(0.0, 1.0)),
        (DVec3::new(hw, hh, 0.0), DVec2::new(1.0, 1.0)),
        (DVec3::new(-hw, -hh, 0.0), DVec2::new(0.0, 0.0)),
        (DVec3::new(hw, -hh, 0.0), DVec2::new(1.0, 0.0)),
    ];
    for (position, uv) in corners {
        mesh.push_vertex(position, uv);
        mesh.normals.push(DVec3::Z);
    }

    mesh.push_triangle(0, 2, 1);
    mesh.push_triangle(2, 3, 1);
    mesh
}
