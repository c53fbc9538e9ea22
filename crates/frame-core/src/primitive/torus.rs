//! Torus mesh generation

use std::f64::consts::TAU;

use glam::{DVec2, DVec3};

use crate::mesh::TriMesh;

/// Generate a torus lying in the XY plane around the Z axis
///
/// # Arguments
/// * `radius` - distance from the center to the middle of the tube
/// * `tube` - tube radius
/// * `radial_segments` - segments around the tube cross-section
/// * `tubular_segments` - segments around the ring
pub fn generate_torus_mesh(radius: f64, tube: f64, radial_segments: u32, tubular_segments: u32) -> TriMesh {
    let radial = radial_segments.max(3);
    let tubular = tubular_segments.max(3);
    let mut mesh = TriMesh::with_capacity(
        (radial as usize + 1) * (tubular as usize + 1),
        radial as usize * tubular as usize * 2,
    );

    for j in 0..=radial {
        let v = j as f64 / radial as f64 * TAU;
        for i in 0..=tubular {
            let u = i as f64 / tubular as f64 * TAU;
            let ring = DVec3::new(u.cos(), u.sin(), 0.0);
            let position = ring * (radius + tube * v.cos()) + DVec3::Z * (tube * v.sin());
            mesh.push_vertex(
                position,
                DVec2::new(i as f64 / tubular as f64, j as f64 / radial as f64),
            );
            mesh.normals.push((position - ring * radius).normalize_or_zero());
        }
    }

    let row = tubular + 1;
    for j in 1..=radial {
        for i in 1..=tubular {
            let a = row * j + i - 1;
            let b = row * (j - 1) + i - 1;
            let c = row * (j - 1) + i;
            let d = row * j + i;
            mesh.push_triangle(a, b, d);
            mesh.push_triangle(b, c, d);
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_torus_extent() {
        let mesh = generate_torus_mesh(0.15, 0.03, 8, 16);
        assert_eq!(mesh.vertex_count(), 9 * 17);
        assert_eq!(mesh.triangle_count(), 8 * 16 * 2);
        let (min, max) = mesh.bounds().unwrap();
        assert_relative_eq!(max.x, 0.18, epsilon = 1e-12);
        assert_relative_eq!(max.z, 0.03, epsilon = 1e-3);
        assert_relative_eq!(min.z, -0.03, epsilon = 1e-3);
    }
}
