//! Primitive mesh generation for frame inserts and hardware
//!
//! Generates positions, normals, UVs and indices for basic shapes:
//! - Plane (artwork, glass and backing inserts)
//! - Box (hanger plates)
//! - Cylinder (with end caps, corner bumpers)
//! - Torus (hanger rings)
//! - Tube along a quadratic Bézier (hanging wire)
//!
//! Primitives carry no draw groups; the whole mesh uses one material.

mod box_mesh;
mod cylinder;
mod plane;
mod torus;
mod tube;

pub use box_mesh::generate_box_mesh;
pub use cylinder::generate_cylinder_mesh;
pub use plane::generate_plane_mesh;
pub use torus::generate_torus_mesh;
pub use tube::{QuadraticCurve, generate_tube_mesh};
