//! Triangle mesh buffers and the profile sweep
//!
//! - `TriMesh`: positions, UVs, normals, indices and material draw groups
//! - `sweep`: mitered side mesh built from a profile
//! - `cap`: end caps triangulated from the profile cross-section

mod cap;
mod normals;
mod sweep;

use glam::{DMat4, DVec2, DVec3};
use serde::{Deserialize, Serialize};

pub use cap::CapTriangulation;
pub use normals::{compute_vertex_normals, triangle_normal};
pub use sweep::{SideMesh, SideMeshBuilder, build_side_mesh, rail_length};

/// Material slot a draw group binds to.
///
/// The renderer binds its own materials by slot index. Slots 0 and 1 share
/// the profile face definition, slot 2 carries the outer wall and caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum MaterialSlot {
    ProfileFace = 0,
    ProfileBack = 1,
    Wall = 2,
}

impl MaterialSlot {
    pub fn index(self) -> u32 {
        self as u32
    }
}

/// Contiguous range of indices drawn with one material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawGroup {
    /// First index (3 per triangle)
    pub start: u32,
    /// Number of indices
    pub count: u32,
    pub material: MaterialSlot,
}

impl DrawGroup {
    pub fn end(&self) -> u32 {
        self.start + self.count
    }

    pub fn triangle_count(&self) -> u32 {
        self.count / 3
    }
}

/// Coalesce per-segment materials into draw groups.
///
/// Each segment owns `indices_per_segment` consecutive indices starting at
/// `base`. Runs of equal material become one group and the last run is
/// always flushed.
pub fn group_runs(materials: &[MaterialSlot], base: u32, indices_per_segment: u32) -> Vec<DrawGroup> {
    let mut groups = Vec::new();
    let mut current: Option<(MaterialSlot, usize)> = None;

    for (i, &material) in materials.iter().enumerate() {
        match current {
            Some((slot, _)) if slot == material => {}
            Some((slot, start)) => {
                groups.push(DrawGroup {
                    start: base + start as u32 * indices_per_segment,
                    count: (i - start) as u32 * indices_per_segment,
                    material: slot,
                });
                current = Some((material, i));
            }
            None => current = Some((material, i)),
        }
    }

    if let Some((slot, start)) = current {
        groups.push(DrawGroup {
            start: base + start as u32 * indices_per_segment,
            count: (materials.len() - start) as u32 * indices_per_segment,
            material: slot,
        });
    }

    groups
}

/// Indexed triangle mesh with material groups
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriMesh {
    pub positions: Vec<DVec3>,
    pub uvs: Vec<DVec2>,
    /// Per-vertex normals, filled by [`TriMesh::compute_vertex_normals`]
    pub normals: Vec<DVec3>,
    /// Triangle indices (3 per triangle)
    pub indices: Vec<u32>,
    /// Draw groups in index order; empty means one material for the whole mesh
    pub groups: Vec<DrawGroup>,
}

impl TriMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertex_capacity: usize, triangle_capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_capacity),
            uvs: Vec::with_capacity(vertex_capacity),
            normals: Vec::with_capacity(vertex_capacity),
            indices: Vec::with_capacity(triangle_capacity * 3),
            groups: Vec::new(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Add a vertex, returning its index
    pub fn push_vertex(&mut self, position: DVec3, uv: DVec2) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.uvs.push(uv);
        index
    }

    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Append a draw group covering `count` indices from `start`
    pub fn add_group(&mut self, start: u32, count: u32, material: MaterialSlot) {
        self.groups.push(DrawGroup {
            start,
            count,
            material,
        });
    }

    /// Total number of indices covered by draw groups
    pub fn grouped_index_count(&self) -> usize {
        self.groups.iter().map(|g| g.count as usize).sum()
    }

    /// Discard any normals and recompute smooth vertex normals from the triangles
    pub fn compute_vertex_normals(&mut self) {
        self.normals = compute_vertex_normals(&self.positions, &self.indices);
    }

    /// Vertex positions with `transform` applied
    pub fn transformed_positions(&self, transform: &DMat4) -> Vec<DVec3> {
        self.positions
            .iter()
            .map(|p| transform.transform_point3(*p))
            .collect()
    }

    /// Axis-aligned bounds of the positions, `None` for an empty mesh
    pub fn bounds(&self) -> Option<(DVec3, DVec3)> {
        let first = *self.positions.first()?;
        Some(
            self.positions
                .iter()
                .fold((first, first), |(min, max), p| (min.min(*p), max.max(*p))),
        )
    }
}

/// Geometry construction errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("A sweep needs at least 2 profile points, got {found}")]
    NotEnoughPoints { found: usize },
    #[error("Invalid {name}: {value}")]
    InvalidDimension { name: &'static str, value: f64 },
    #[error("Invalid generator setting {name}: {value}")]
    InvalidSetting { name: &'static str, value: f64 },
}

/// Reject non-finite or negative dimensions
pub(crate) fn check_dimension(name: &'static str, value: f64) -> Result<f64, GeometryError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::InvalidDimension { name, value })
    }
}
