//! Mitered side sweep
//!
//! A side is a strip of rails, one per expanded profile point. Each rail
//! spans `inner_length + 2 * lateral_offset`, so rails further from the
//! opening are longer and four sides rotated into a rectangle meet on
//! 45° miters.

use glam::{DVec2, DVec3};

use super::{CapTriangulation, GeometryError, MaterialSlot, TriMesh, check_dimension, group_runs};
use crate::config::GeneratorConfig;
use crate::constants::MAX_SUBDIVISION_STEPS;
use crate::profile::{ExpandedProfile, ProfileBounds, ProfilePoint, ProfileScale, expand_profile, locate_rabbet_y};

/// Length of the rail at `lateral` units out from the inner edge
pub fn rail_length(inner_length: f64, lateral: f64) -> f64 {
    inner_length + 2.0 * lateral
}

/// Reject generator settings that would produce non-finite or unbounded geometry
fn check_config(config: &GeneratorConfig) -> Result<(), GeometryError> {
    let steps = config.subdivision_steps;
    if steps == 0 || steps > MAX_SUBDIVISION_STEPS {
        return Err(GeometryError::InvalidSetting {
            name: "subdivision steps",
            value: f64::from(steps),
        });
    }

    let positive = [
        ("tile factor", config.tile_factor),
        ("outer wall epsilon", config.outer_wall_epsilon),
        ("rabbet epsilon", config.rabbet_epsilon),
    ];
    for (name, value) in positive {
        if !(value.is_finite() && value > 0.0) {
            return Err(GeometryError::InvalidSetting { name, value });
        }
    }
    Ok(())
}

/// Finished mesh of one frame side, centered on the local origin along X
#[derive(Debug, Clone, PartialEq)]
pub struct SideMesh {
    inner_length: f64,
    rail_count: usize,
    mesh: TriMesh,
}

impl SideMesh {
    pub fn inner_length(&self) -> f64 {
        self.inner_length
    }

    pub fn rail_count(&self) -> usize {
        self.rail_count
    }

    pub fn mesh(&self) -> &TriMesh {
        &self.mesh
    }

    pub fn into_mesh(self) -> TriMesh {
        self.mesh
    }

    /// Left and right end of rail `i`
    pub fn rail(&self, i: usize) -> Option<(DVec3, DVec3)> {
        if i >= self.rail_count {
            return None;
        }
        Some((self.mesh.positions[2 * i], self.mesh.positions[2 * i + 1]))
    }

    /// Distance between the two ends of rail `i`
    pub fn rail_length(&self, i: usize) -> Option<f64> {
        self.rail(i).map(|(left, right)| right.x - left.x)
    }
}

/// Profile section prepared for sweeping at any inner length
#[derive(Debug, Clone)]
pub struct SideMeshBuilder {
    expanded: ExpandedProfile,
    bounds: ProfileBounds,
    scale: ProfileScale,
    /// Expanded points mapped to `(lateral, depth)`
    section: Vec<DVec2>,
    /// Normalized arc length per rail
    v_coords: Vec<f64>,
    /// Material of each segment between consecutive rails
    segment_materials: Vec<MaterialSlot>,
    cap: CapTriangulation,
    tile_factor: f64,
}

impl SideMeshBuilder {
    /// Expand and normalize `points` onto a `frame_width` x `frame_depth` section
    pub fn new(
        points: &[ProfilePoint],
        frame_width: f64,
        frame_depth: f64,
        config: &GeneratorConfig,
    ) -> Result<Self, GeometryError> {
        check_config(config)?;
        check_dimension("frame width", frame_width)?;
        check_dimension("frame depth", frame_depth)?;

        let expanded = expand_profile(points, config.subdivision_steps);
        if expanded.len() < 2 {
            return Err(GeometryError::NotEnoughPoints {
                found: expanded.len(),
            });
        }

        let bounds = ProfileBounds::new(&expanded, locate_rabbet_y(points, config.rabbet_epsilon));
        let scale = bounds.fit(frame_width, frame_depth);
        let section: Vec<DVec2> = expanded.iter().map(|p| scale.map(*p)).collect();

        let mut arc = Vec::with_capacity(section.len());
        let mut total = 0.0;
        arc.push(0.0);
        for pair in section.windows(2) {
            total += pair[0].distance(pair[1]);
            arc.push(total);
        }
        let total_arc = if total == 0.0 { 1.0 } else { total };
        let v_coords = arc.into_iter().map(|a| a / total_arc).collect();

        let on_outer_wall = |p: &DVec2| (p.x - bounds.max_x).abs() < config.outer_wall_epsilon;
        let segment_materials = expanded
            .points()
            .windows(2)
            .map(|pair| {
                if on_outer_wall(&pair[0]) && on_outer_wall(&pair[1]) {
                    MaterialSlot::Wall
                } else {
                    MaterialSlot::ProfileFace
                }
            })
            .collect();

        let cap = CapTriangulation::from_outline(&section);

        Ok(Self {
            expanded,
            bounds,
            scale,
            section,
            v_coords,
            segment_materials,
            cap,
            tile_factor: config.tile_factor,
        })
    }

    pub fn expanded(&self) -> &ExpandedProfile {
        &self.expanded
    }

    pub fn bounds(&self) -> &ProfileBounds {
        &self.bounds
    }

    pub fn scale(&self) -> &ProfileScale {
        &self.scale
    }

    /// Cross-section in `(lateral, depth)` coordinates
    pub fn section(&self) -> &[DVec2] {
        &self.section
    }

    pub fn cap(&self) -> &CapTriangulation {
        &self.cap
    }

    /// Sweep the section along a side whose opening edge is `inner_length` long
    pub fn build(&self, inner_length: f64) -> Result<SideMesh, GeometryError> {
        check_dimension("inner length", inner_length)?;

        let rails = self.section.len();
        let cap_vertices = self.cap.outline().len() * 2;
        let cap_triangles = self.cap.triangles().len() * 2;
        let mut mesh = TriMesh::with_capacity(rails * 2 + cap_vertices, (rails - 1) * 2 + cap_triangles);

        for (p, &v) in self.section.iter().zip(&self.v_coords) {
            let half = rail_length(inner_length, p.x) / 2.0;
            let u = half / self.tile_factor;
            mesh.push_vertex(DVec3::new(-half, p.x, p.y), DVec2::new(-u, v));
            mesh.push_vertex(DVec3::new(half, p.x, p.y), DVec2::new(u, v));
        }

        for i in 0..rails as u32 - 1 {
            let a = 2 * i;
            let (b, c, d) = (a + 1, a + 2, a + 3);
            mesh.push_triangle(a, b, c);
            mesh.push_triangle(b, d, c);
        }
        mesh.groups = group_runs(&self.segment_materials, 0, 6);

        let (start, count) = self.cap.append_to(&mut mesh, inner_length);
        if count > 0 {
            mesh.add_group(start, count, MaterialSlot::Wall);
        }

        mesh.compute_vertex_normals();

        tracing::debug!(
            "Built side: inner length {:.3}, {} rails, {} vertices, {} triangles, {} groups",
            inner_length,
            rails,
            mesh.vertex_count(),
            mesh.triangle_count(),
            mesh.groups.len()
        );

        Ok(SideMesh {
            inner_length,
            rail_count: rails,
            mesh,
        })
    }
}

/// Build one side mesh in a single call
pub fn build_side_mesh(
    points: &[ProfilePoint],
    inner_length: f64,
    frame_width: f64,
    frame_depth: f64,
    config: &GeneratorConfig,
) -> Result<SideMesh, GeometryError> {
    SideMeshBuilder::new(points, frame_width, frame_depth, config)?.build(inner_length)
}
