//! Box (rectangular prism) mesh generation

use glam::{DVec2, DVec3};

use crate::mesh::TriMesh;

/// Generate a box mesh centered on the origin
///
/// # Arguments
/// * `size` - full extent along (x, y, z)
///
/// # Returns
/// 24 vertices (4 per face, for flat normals), 12 triangles
pub fn generate_box_mesh(size: DVec3) -> TriMesh {
    let h = size / 2.0;
    let (hx, hy, hz) = (h.x, h.y, h.z);

    let mut mesh = TriMesh::with_capacity(24, 12);

    let mut add_face = |corners: [[f64; 3]; 4], normal: DVec3| {
        let base = mesh.vertex_count() as u32;
        let uvs = [DVec2::ZERO, DVec2::X, DVec2::ONE, DVec2::Y];
        for (corner, uv) in corners.into_iter().zip(uvs) {
            mesh.push_vertex(DVec3::from_array(corner), uv);
            mesh.normals.push(normal);
        }
        mesh.push_triangle(base, base + 1, base + 2);
        mesh.push_triangle(base, base + 2, base + 3);
    };

    add_face(
        [[hx, -hy, -hz], [hx, hy, -hz], [hx, hy, hz], [hx, -hy, hz]],
        DVec3::X,
    );
    add_face(
        [[-hx, hy, -hz], [-hx, -hy, -hz], [-hx, -hy, hz], [-hx, hy, hz]],
        DVec3::NEG_X,
    );
    add_face(
        [[hx, hy, -hz], [-hx, hy, -hz], [-hx, hy, hz], [hx, hy, hz]],
        DVec3::Y,
    );
    add_face(
        [[-hx, -hy, -hz], [hx, -hy, -hz], [hx, -hy, hz], [-hx, -hy, hz]],
        DVec3::NEG_Y,
    );
    add_face(
        [[-hx, -hy, hz], [hx, -hy, hz], [hx, hy, hz], [-hx, hy, hz]],
        DVec3::Z,
    );
    add_face(
        [[-hx, hy, -hz], [hx, hy, -hz], [hx, -hy, -hz], [-hx, -hy, -hz]],
        DVec3::NEG_Z,
    );

    mesh
}
