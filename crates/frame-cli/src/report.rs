//! JSON summary of a built frame

use frame_core::{DrawGroup, ElementKind, Frame, FrameDimensions, FrameMaterials};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ElementReport {
    pub kind: ElementKind,
    pub vertices: usize,
    pub triangles: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<DrawGroup>,
}

#[derive(Debug, Serialize)]
pub struct FrameReport<'a> {
    pub name: &'a str,
    pub dimensions: FrameDimensions,
    pub vertices: usize,
    pub triangles: usize,
    pub elements: Vec<ElementReport>,
    pub materials: &'a FrameMaterials,
}

impl<'a> FrameReport<'a> {
    pub fn new(name: &'a str, frame: &'a Frame) -> Self {
        let elements = frame
            .elements()
            .iter()
            .map(|element| ElementReport {
                kind: element.kind,
                vertices: element.mesh.vertex_count(),
                triangles: element.mesh.triangle_count(),
                groups: element.mesh.groups.clone(),
            })
            .collect();

        Self {
            name,
            dimensions: frame.dimensions,
            vertices: frame.vertex_count(),
            triangles: frame.triangle_count(),
            elements,
            materials: &frame.materials,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use frame_core::{FrameParams, SidePosition, build_frame, presets};

    use super::*;

    #[test]
    fn test_report_lists_every_element() {
        let frame = build_frame(&presets::classic_moulding(), &FrameParams::default()).unwrap();
        let report = FrameReport::new("classic", &frame);

        assert_eq!(report.elements.len(), frame.elements().len());
        assert_eq!(report.triangles, frame.triangle_count());

        let top = &report.elements[0];
        assert_eq!(top.kind, ElementKind::Side(SidePosition::Top));
        assert!(!top.groups.is_empty());
    }

    #[test]
    fn test_report_json() {
        let frame = build_frame(&presets::wedge(), &FrameParams::default()).unwrap();
        let json = FrameReport::new("wedge", &frame).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["name"], "wedge");
        assert_eq!(value["dimensions"]["width"], 16.0);
        assert!(value["materials"]["walls"].is_array());
    }
}
