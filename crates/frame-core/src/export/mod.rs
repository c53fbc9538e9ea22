//! Frame export
//!
//! - STL: every included element with its frame transform applied
//! - GPU vertices: interleaved `f32` buffers via [`FrameVertex`]

mod options;
mod vertex;

use std::io::Write;
use std::path::Path;

use glam::DVec3;

use crate::assembly::Frame;
use crate::mesh::triangle_normal;

pub use options::ExportOptions;
pub use vertex::{FrameVertex, vertex_bytes};

/// Export errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Write error: {0}")]
    Write(String),
}

fn stl_vector(v: DVec3) -> [f32; 3] {
    v.as_vec3().to_array()
}

/// Frame-space triangles of all included elements
fn frame_triangles(frame: &Frame, options: &ExportOptions) -> Vec<stl_io::Triangle> {
    let mut triangles = Vec::with_capacity(frame.triangle_count());

    for element in frame.elements().iter().filter(|e| options.includes(e.kind)) {
        let positions = element.world_positions();
        for tri in element.mesh.indices.chunks_exact(3) {
            let v0 = positions[tri[0] as usize];
            let v1 = positions[tri[1] as usize];
            let v2 = positions[tri[2] as usize];

            triangles.push(stl_io::Triangle {
                normal: stl_io::Normal::new(stl_vector(triangle_normal(v0, v1, v2))),
                vertices: [
                    stl_io::Vertex::new(stl_vector(v0)),
                    stl_io::Vertex::new(stl_vector(v1)),
                    stl_io::Vertex::new(stl_vector(v2)),
                ],
            });
        }
    }

    triangles
}

/// Write a frame as binary STL, returning the number of triangles written
pub fn write_stl<W: Write>(frame: &Frame, writer: &mut W, options: &ExportOptions) -> Result<usize, ExportError> {
    let triangles = frame_triangles(frame, options);
    stl_io::write_stl(writer, triangles.iter()).map_err(|e| ExportError::Write(e.to_string()))?;
    Ok(triangles.len())
}

/// Save a frame as a binary STL file
pub fn save_stl(frame: &Frame, path: impl AsRef<Path>, options: &ExportOptions) -> Result<usize, ExportError> {
    let path = path.as_ref();
    let mut file = std::fs::File::create(path).map_err(|e| ExportError::Io(e.to_string()))?;
    let count = write_stl(frame, &mut file, options)?;
    tracing::info!("Wrote {} triangles to {}", count, path.display());
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembly::{ElementKind, build_frame};
    use crate::config::FrameParams;
    use crate::profile::presets;

    #[test]
    fn test_save_stl_writes_all_triangles() {
        let frame = build_frame(&presets::classic_moulding(), &FrameParams::default()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.stl");

        let count = save_stl(&frame, &path, &ExportOptions::default()).unwrap();
        assert_eq!(count, frame.triangle_count());

        let mut file = std::fs::File::open(&path).unwrap();
        let mesh = stl_io::read_stl(&mut file).unwrap();
        assert_eq!(mesh.faces.len(), count);
    }

    #[test]
    fn test_sides_only_export() {
        let frame = build_frame(&presets::wedge(), &FrameParams::default()).unwrap();
        let expected: usize = frame
            .elements()
            .iter()
            .filter(|e| matches!(e.kind, ElementKind::Side(_)))
            .map(|e| e.mesh.triangle_count())
            .sum();

        let mut buffer = Vec::new();
        let count = write_stl(&frame, &mut buffer, &ExportOptions::sides_only()).unwrap();
        assert_eq!(count, expected);
        // 80-byte header, 4-byte count, 50 bytes per triangle
        assert_eq!(buffer.len(), 84 + 50 * count);
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let frame = build_frame(&presets::wedge(), &FrameParams::default()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("frame.stl");
        assert!(matches!(
            save_stl(&frame, &path, &ExportOptions::default()),
            Err(ExportError::Io(_))
        ));
    }
}
