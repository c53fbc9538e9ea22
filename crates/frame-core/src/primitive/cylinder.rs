//! Cylinder mesh generation (with end caps)

use std::f64::consts::TAU;

use glam::{DVec2, DVec3};

use crate::mesh::TriMesh;

/// Generate a capped cylinder along the Z axis, centered on the origin
pub fn generate_cylinder_mesh(radius: f64, length: f64, segments: u32) -> TriMesh {
    let segments = segments.max(3);
    let half_length = length / 2.0;
    let mut mesh = TriMesh::with_capacity((segments as usize + 1) * 4 + 2, segments as usize * 4);

    let rim = |i: u32| {
        let theta = (i as f64 / segments as f64) * TAU;
        DVec2::new(theta.cos(), theta.sin())
    };

    // Side vertices: bottom and top per segment boundary
    for i in 0..=segments {
        let dir = rim(i);
        let u = i as f64 / segments as f64;
        let normal = DVec3::new(dir.x, dir.y, 0.0);
        mesh.push_vertex((dir * radius).extend(-half_length), DVec2::new(u, 0.0));
        mesh.normals.push(normal);
        mesh.push_vertex((dir * radius).extend(half_length), DVec2::new(u, 1.0));
        mesh.normals.push(normal);
    }

    for i in 0..segments {
        let base = i * 2;
        mesh.push_triangle(base, base + 2, base + 1);
        mesh.push_triangle(base + 1, base + 2, base + 3);
    }

    for (z, normal) in [(half_length, DVec3::Z), (-half_length, DVec3::NEG_Z)] {
        let center = mesh.push_vertex(DVec3::new(0.0, 0.0, z), DVec2::splat(0.5));
        mesh.normals.push(normal);

        let rim_start = mesh.vertex_count() as u32;
        for i in 0..=segments {
            let dir = rim(i);
            mesh.push_vertex((dir * radius).extend(z), dir * 0.5 + 0.5);
            mesh.normals.push(normal);
        }

        for i in 0..segments {
            if z > 0.0 {
                mesh.push_triangle(center, rim_start + i, rim_start + i + 1);
            } else {
                // reversed winding for the bottom cap
                mesh.push_triangle(center, rim_start + i + 1, rim_start + i);
            }
        }
    }

    mesh
}
