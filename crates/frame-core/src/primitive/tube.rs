//! Tube swept along a quadratic Bézier curve

use std::f64::consts::TAU;

use glam::{DQuat, DVec2, DVec3};

use crate::mesh::TriMesh;

/// Quadratic Bézier curve in 3D
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticCurve {
    pub start: DVec3,
    pub control: DVec3,
    pub end: DVec3,
}

impl QuadraticCurve {
    pub fn new(start: DVec3, control: DVec3, end: DVec3) -> Self {
        Self {
            start,
            control,
            end,
        }
    }

    pub fn point(&self, t: f64) -> DVec3 {
        let mt = 1.0 - t;
        self.start * (mt * mt) + self.control * (2.0 * mt * t) + self.end * (t * t)
    }

    /// Unit tangent at `t` (zero for a collapsed curve)
    pub fn tangent(&self, t: f64) -> DVec3 {
        let derivative = (self.control - self.start) * (2.0 * (1.0 - t)) + (self.end - self.control) * (2.0 * t);
        derivative.normalize_or_zero()
    }
}

/// Seed normal perpendicular to `tangent`, taken against its smallest axis
fn initial_normal(tangent: DVec3) -> DVec3 {
    let abs = tangent.abs();
    let axis = if abs.x <= abs.y && abs.x <= abs.z {
        DVec3::X
    } else if abs.y <= abs.z {
        DVec3::Y
    } else {
        DVec3::Z
    };
    let side = tangent.cross(axis).normalize_or_zero();
    tangent.cross(side)
}

/// Generate a tube of `radius` around `curve`.
///
/// Cross-section frames are carried along the curve by parallel transport,
/// so the tube does not twist. Ends are left open.
pub fn generate_tube_mesh(curve: &QuadraticCurve, radius: f64, segments: u32, radial_segments: u32) -> TriMesh {
    let segments = segments.max(1);
    let radial = radial_segments.max(3);

    let tangents: Vec<DVec3> = (0..=segments)
        .map(|i| curve.tangent(i as f64 / segments as f64))
        .collect();

    let mut normals = Vec::with_capacity(tangents.len());
    normals.push(initial_normal(tangents[0]));
    for i in 1..tangents.len() {
        let mut normal = normals[i - 1];
        let axis = tangents[i - 1].cross(tangents[i]);
        if axis.length() > f64::EPSILON {
            let angle = tangents[i - 1].dot(tangents[i]).clamp(-1.0, 1.0).acos();
            normal = DQuat::from_axis_angle(axis.normalize(), angle) * normal;
        }
        normals.push(normal);
    }

    let mut mesh = TriMesh::with_capacity(
        (segments as usize + 1) * (radial as usize + 1),
        segments as usize * radial as usize * 2,
    );

    for (i, (tangent, normal)) in tangents.iter().zip(&normals).enumerate() {
        let t = i as f64 / segments as f64;
        let center = curve.point(t);
        let binormal = tangent.cross(*normal);
        for j in 0..=radial {
            let v = j as f64 / radial as f64 * TAU;
            let dir = *normal * -v.cos() + binormal * v.sin();
            mesh.push_vertex(center + dir * radius, DVec2::new(t, j as f64 / radial as f64));
            mesh.normals.push(dir.normalize_or_zero());
        }
    }

    let row = radial + 1;
    for j in 1..=segments {
        for i in 1..=radial {
            let a = row * (j - 1) + (i - 1);
            let b = row * j + (i - 1);
            let c = row * j + i;
            let d = row * (j - 1) + i;
            mesh.push_triangle(a, b, d);
            mesh.push_triangle(b, c, d);
        }
    }

    mesh
}
