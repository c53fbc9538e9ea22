//! End caps closing a side sweep

use glam::{DVec2, DVec3};

use super::{TriMesh, sweep::rail_length};

/// Triangulated cross-section shared by both caps of a side
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CapTriangulation {
    /// Outline in section space `(lateral, depth)`, closing duplicate removed
    outline: Vec<DVec2>,
    /// Counter-clockwise triangles indexing `outline`
    triangles: Vec<[u32; 3]>,
}

impl CapTriangulation {
    /// Triangulate a closed cross-section outline.
    ///
    /// The outline must be simple. A failed triangulation is logged and
    /// leaves the caps empty.
    pub fn from_outline(points: &[DVec2]) -> Self {
        let mut outline = points.to_vec();
        if outline.len() > 1 && outline.first() == outline.last() {
            outline.pop();
        }

        if outline.len() < 3 {
            tracing::debug!("Cap outline has {} points, skipping caps", outline.len());
            return Self {
                outline,
                triangles: Vec::new(),
            };
        }

        let flat: Vec<f64> = outline.iter().flat_map(|p| [p.x, p.y]).collect();
        let indices = match earcutr::earcut(&flat, &[], 2) {
            Ok(indices) => indices,
            Err(e) => {
                tracing::warn!("Failed to triangulate cap outline: {:?}", e);
                Vec::new()
            }
        };

        let triangles = indices
            .chunks_exact(3)
            .map(|tri| {
                let (a, b, c) = (tri[0], tri[1], tri[2]);
                let area = (outline[b] - outline[a]).perp_dot(outline[c] - outline[a]);
                if area < 0.0 {
                    [a as u32, c as u32, b as u32]
                } else {
                    [a as u32, b as u32, c as u32]
                }
            })
            .collect();

        Self { outline, triangles }
    }

    pub fn outline(&self) -> &[DVec2] {
        &self.outline
    }

    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Append left (−X facing) and right (+X facing) caps for a side of
    /// `inner_length`, returning the `(start, count)` index range they cover.
    pub fn append_to(&self, mesh: &mut TriMesh, inner_length: f64) -> (u32, u32) {
        let start = mesh.indices.len() as u32;
        if self.triangles.is_empty() {
            return (start, 0);
        }

        for sign in [-1.0, 1.0] {
            let base = mesh.vertex_count() as u32;
            for p in &self.outline {
                let x = sign * rail_length(inner_length, p.x) / 2.0;
                mesh.push_vertex(DVec3::new(x, p.x, p.y), *p);
            }
            for &[a, b, c] in &self.triangles {
                if sign < 0.0 {
                    mesh.push_triangle(base + a, base + c, base + b);
                } else {
                    mesh.push_triangle(base + a, base + b, base + c);
                }
            }
        }

        (start, mesh.indices.len() as u32 - start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::triangle_normal;

    fn wedge_section() -> Vec<DVec2> {
        vec![
            DVec2::new(0.0, -1.0),
            DVec2::new(0.0, 1.0),
            DVec2::new(3.0, -1.0),
            DVec2::new(0.0, -1.0),
        ]
    }

    #[test]
    fn test_closing_duplicate_dropped() {
        let cap = CapTriangulation::from_outline(&wedge_section());
        assert_eq!(cap.outline().len(), 3);
        assert_eq!(cap.triangles().len(), 1);
    }

    #[test]
    fn test_triangles_are_counter_clockwise() {
        // clockwise square
        let square = [
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, 1.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(1.0, 0.0),
        ];
        let cap = CapTriangulation::from_outline(&square);
        assert_eq!(cap.triangles().len(), 2);
        for &[a, b, c] in cap.triangles() {
            let o = cap.outline();
            let area = (o[b as usize] - o[a as usize]).perp_dot(o[c as usize] - o[a as usize]);
            assert!(area > 0.0);
        }
    }

    #[test]
    fn test_caps_face_outward() {
        let cap = CapTriangulation::from_outline(&wedge_section());
        let mut mesh = TriMesh::new();
        let (start, count) = cap.append_to(&mut mesh, 10.0);
        assert_eq!(start, 0);
        assert_eq!(count, 6);
        assert_eq!(mesh.vertex_count(), 6);

        let normal = |t: usize| {
            let i = &mesh.indices[t * 3..t * 3 + 3];
            triangle_normal(
                mesh.positions[i[0] as usize],
                mesh.positions[i[1] as usize],
                mesh.positions[i[2] as usize],
            )
        };
        // the mitered ends lean outward, so only the sign of x is checked
        assert!(normal(0).x < 0.0);
        assert!(normal(1).x > 0.0);
    }

    #[test]
    fn test_cap_vertices_follow_miter() {
        let cap = CapTriangulation::from_outline(&wedge_section());
        let mut mesh = TriMesh::new();
        cap.append_to(&mut mesh, 10.0);
        // outline point (3, -1) sits 3 units out: length 16
        assert_eq!(mesh.positions[2], DVec3::new(-8.0, 3.0, -1.0));
        assert_eq!(mesh.positions[5], DVec3::new(8.0, 3.0, -1.0));
        assert_eq!(mesh.uvs[2], DVec2::new(3.0, -1.0));
    }

    #[test]
    fn test_open_outline_kept_as_is() {
        let section = wedge_section();
        let open = &section[..3];
        let cap = CapTriangulation::from_outline(open);
        // no point is added or removed; the triangulation closes the ring itself
        assert_eq!(cap.outline(), open);
        assert_eq!(cap.triangles().len(), 1);

        let closed = CapTriangulation::from_outline(&section);
        assert_eq!(cap, closed);
    }

    #[test]
    fn test_short_outline_has_no_caps() {
        let cap = CapTriangulation::from_outline(&[DVec2::ZERO, DVec2::X]);
        assert!(cap.is_empty());
        let mut mesh = TriMesh::new();
        assert_eq!(cap.append_to(&mut mesh, 1.0), (0, 0));
        assert_eq!(mesh.vertex_count(), 0);
    }
}
