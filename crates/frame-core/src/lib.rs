//! Picture Frame Generator Core
//!
//! This crate turns a 2D moulding profile into frame geometry:
//! - Profile: authored cross-section, curve expansion and bounds
//! - Mesh: mitered side sweeps with end caps and material groups
//! - Assembly: four sides, inserts and back hardware around an opening
//! - Project: profile and parameters saved together
//! - Store: atomically swapped current frame
//! - Export: STL files and interleaved GPU vertices

pub mod assembly;
pub mod config;
pub mod constants;
pub mod export;
pub mod mesh;
pub mod primitive;
pub mod profile;
pub mod project;
pub mod store;

pub use assembly::*;
pub use config::*;
pub use constants::*;
pub use export::*;
pub use mesh::*;
pub use primitive::*;
pub use profile::*;
pub use project::*;
pub use store::*;
