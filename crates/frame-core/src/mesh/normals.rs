//! Normal calculation utilities for mesh data

use glam::DVec3;

/// Unit normal of a counter-clockwise triangle (+Z for a degenerate one)
pub fn triangle_normal(v0: DVec3, v1: DVec3, v2: DVec3) -> DVec3 {
    let cross = (v1 - v0).cross(v2 - v0);
    let len = cross.length();
    if len > 0.0 { cross / len } else { DVec3::Z }
}

/// Smooth per-vertex normals.
///
/// Each triangle adds its unnormalized face normal (weighted by area) to its
/// three vertices; the sums are normalized at the end. Vertices referenced
/// by no triangle, or only by degenerate ones, keep a zero normal.
pub fn compute_vertex_normals(positions: &[DVec3], indices: &[u32]) -> Vec<DVec3> {
    let mut normals = vec![DVec3::ZERO; positions.len()];

    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let (Some(&pa), Some(&pb), Some(&pc)) = (positions.get(a), positions.get(b), positions.get(c))
        else {
            continue;
        };

        let face = (pc - pb).cross(pa - pb);
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }

    for n in &mut normals {
        *n = n.normalize_or_zero();
    }
    normals
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_triangle_normal() {
        let n = triangle_normal(DVec3::ZERO, DVec3::X, DVec3::Y);
        assert_eq!(n, DVec3::Z);
        let degenerate = triangle_normal(DVec3::ZERO, DVec3::X, DVec3::X * 2.0);
        assert_eq!(degenerate, DVec3::Z);
    }

    #[test]
    fn test_flat_quad_normals() {
        let positions = [
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
        ];
        let normals = compute_vertex_normals(&positions, &[0, 1, 2, 0, 2, 3]);
        for n in normals {
            assert_relative_eq!(n.z, 1.0);
        }
    }

    #[test]
    fn test_shared_edge_is_averaged() {
        // two faces folded 90 degrees along the x axis
        let positions = [
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(0.0, 0.0, 1.0),
        ];
        let normals = compute_vertex_normals(&positions, &[0, 1, 2, 0, 3, 1]);
        let half = std::f64::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(normals[0].x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(normals[0].y, half, epsilon = 1e-12);
        assert_relative_eq!(normals[0].z, half, epsilon = 1e-12);
        assert_relative_eq!(normals[2].z, 1.0, epsilon = 1e-12);
        assert_relative_eq!(normals[3].y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_unreferenced_vertex_has_zero_normal() {
        let positions = [DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::ONE];
        let normals = compute_vertex_normals(&positions, &[0, 1, 2]);
        assert_eq!(normals[3], DVec3::ZERO);
    }
}
