//! Interleaved GPU vertex layout

use crate::mesh::TriMesh;

/// Position, normal and UV packed as `f32` for upload
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl TriMesh {
    /// Interleave positions, normals and UVs.
    ///
    /// Missing normals or UVs are written as zero.
    pub fn to_vertices(&self) -> Vec<FrameVertex> {
        self.positions
            .iter()
            .enumerate()
            .map(|(i, p)| FrameVertex {
                position: p.as_vec3().to_array(),
                normal: self.normals.get(i).map_or([0.0; 3], |n| n.as_vec3().to_array()),
                uv: self.uvs.get(i).map_or([0.0; 2], |uv| uv.as_vec2().to_array()),
            })
            .collect()
    }
}

/// Raw bytes of a vertex buffer
pub fn vertex_bytes(vertices: &[FrameVertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::generate_plane_mesh;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(std::mem::size_of::<FrameVertex>(), 32);
        let mesh = generate_plane_mesh(2.0, 2.0);
        let vertices = mesh.to_vertices();
        assert_eq!(vertices.len(), 4);
        assert_eq!(vertices[0].position, [-1.0, 1.0, 0.0]);
        assert_eq!(vertices[0].normal, [0.0, 0.0, 1.0]);
        assert_eq!(vertices[0].uv, [0.0, 1.0]);
        assert_eq!(vertex_bytes(&vertices).len(), 4 * 32);
    }

    #[test]
    fn test_missing_normals_are_zero() {
        let mut mesh = generate_plane_mesh(1.0, 1.0);
        mesh.normals.clear();
        assert!(mesh.to_vertices().iter().all(|v| v.normal == [0.0; 3]));
    }
}
