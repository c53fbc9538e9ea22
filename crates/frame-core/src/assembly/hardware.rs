//! Decorative back hardware: hanging wire, brackets and corner bumpers

use std::f64::consts::{FRAC_PI_2, PI};

use glam::{DMat4, DVec3};

use super::{ElementKind, FrameDimensions, FrameElement, HardwareSide, Pose};
use crate::constants::{
    BACKING_OFFSET, BUMPER_INSET, BUMPER_RADIUS, BUMPER_SEGMENTS, BUMPER_THICKNESS, HANGER_ANCHOR_INSET,
    HANGER_BRACKET_TILT, HANGER_OFFSET, HANGER_PLATE_DROP, HANGER_PLATE_SIZE, HANGER_RING_RADIAL_SEGMENTS,
    HANGER_RING_RADIUS, HANGER_RING_TUBE, HANGER_RING_TUBULAR_SEGMENTS, HANGER_WIRE_RADIAL_SEGMENTS,
    HANGER_WIRE_RADIUS, HANGER_WIRE_SEGMENTS,
};
use crate::primitive::{
    QuadraticCurve, generate_box_mesh, generate_cylinder_mesh, generate_torus_mesh, generate_tube_mesh,
};

/// Transform of the hanging group, flipped to face the wall
fn hanging_group(dims: &FrameDimensions) -> DMat4 {
    Pose::rotated_y(
        DVec3::new(0.0, dims.clean_height / 4.0, -dims.frame_depth / 2.0 - HANGER_OFFSET),
        PI,
    )
    .to_mat4()
}

/// Wire curve in hanging-group space, sagging upward between the anchors
pub fn wire_curve(clean_width: f64) -> QuadraticCurve {
    let anchor = clean_width / 2.0 - HANGER_ANCHOR_INSET;
    QuadraticCurve::new(
        DVec3::new(-anchor, 0.0, 0.0),
        DVec3::new(0.0, clean_width / 6.0, 0.0),
        DVec3::new(anchor, 0.0, 0.0),
    )
}

/// Hanging wire, two brackets (ring plus plate each) and two corner bumpers
pub fn hardware_elements(dims: &FrameDimensions) -> Vec<FrameElement> {
    let group = hanging_group(dims);
    let mut elements = Vec::with_capacity(7);

    elements.push(FrameElement {
        kind: ElementKind::HangingWire,
        mesh: generate_tube_mesh(
            &wire_curve(dims.clean_width),
            HANGER_WIRE_RADIUS,
            HANGER_WIRE_SEGMENTS,
            HANGER_WIRE_RADIAL_SEGMENTS,
        ),
        transform: group,
    });

    let anchor = dims.clean_width / 2.0 - HANGER_ANCHOR_INSET;
    for side in HardwareSide::ALL {
        let sign = side.sign();
        let bracket = group * Pose::rotated_z(DVec3::new(sign * anchor, 0.0, 0.0), sign * HANGER_BRACKET_TILT).to_mat4();

        elements.push(FrameElement {
            kind: ElementKind::HangerRing(side),
            mesh: generate_torus_mesh(
                HANGER_RING_RADIUS,
                HANGER_RING_TUBE,
                HANGER_RING_RADIAL_SEGMENTS,
                HANGER_RING_TUBULAR_SEGMENTS,
            ),
            transform: bracket * Pose::rotated_x(DVec3::ZERO, FRAC_PI_2).to_mat4(),
        });
        elements.push(FrameElement {
            kind: ElementKind::HangerPlate(side),
            mesh: generate_box_mesh(DVec3::from_array(HANGER_PLATE_SIZE)),
            transform: bracket * DMat4::from_translation(DVec3::new(0.0, -HANGER_PLATE_DROP, 0.0)),
        });
    }

    // Bumpers sit in the outer corners, flush with the backing
    for side in HardwareSide::ALL {
        let position = DVec3::new(
            side.sign() * (dims.width / 2.0 - BUMPER_INSET),
            -dims.height / 2.0 + BUMPER_INSET,
            -dims.frame_depth / 2.0 - BACKING_OFFSET,
        );
        elements.push(FrameElement {
            kind: ElementKind::CornerBumper(side),
            mesh: generate_cylinder_mesh(BUMPER_RADIUS, BUMPER_THICKNESS, BUMPER_SEGMENTS),
            transform: DMat4::from_translation(position),
        });
    }

    elements
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn dims() -> FrameDimensions {
        FrameDimensions {
            width: 16.0,
            height: 20.0,
            frame_width: 3.0,
            frame_depth: 2.0,
            clean_width: 10.0,
            clean_height: 14.0,
            rabbit_to_outer: 3.0,
            computed_inset: 0.0,
            image_inset: 0.0,
            artwork_z: 0.99,
        }
    }

    #[test]
    fn test_hardware_element_set() {
        let elements = hardware_elements(&dims());
        assert_eq!(elements.len(), 7);
        assert_eq!(elements[0].kind, ElementKind::HangingWire);
        assert_eq!(elements[1].kind, ElementKind::HangerRing(HardwareSide::Left));
        assert_eq!(elements[6].kind, ElementKind::CornerBumper(HardwareSide::Right));
    }

    #[test]
    fn test_wire_anchors_behind_frame() {
        let elements = hardware_elements(&dims());
        let wire = &elements[0];
        let curve = wire_curve(10.0);
        // the group is flipped about Y, so the left anchor lands on +x
        let start = wire.transform.transform_point3(curve.start);
        assert_relative_eq!(start.x, 4.0, epsilon = 1e-9);
        assert_relative_eq!(start.y, 3.5, epsilon = 1e-9);
        assert_relative_eq!(start.z, -1.2, epsilon = 1e-9);

        let apex = wire.transform.transform_point3(curve.point(0.5));
        assert_relative_eq!(apex.y, 3.5 + 10.0 / 12.0, epsilon = 1e-9);
    }

    #[test]
    fn test_bumpers_in_outer_corners() {
        let elements = hardware_elements(&dims());
        let left = elements
            .iter()
            .find(|e| e.kind == ElementKind::CornerBumper(HardwareSide::Left))
            .unwrap();
        let center = left.transform.transform_point3(DVec3::ZERO);
        assert_relative_eq!(center.x, -7.5);
        assert_relative_eq!(center.y, -9.5);
        assert_relative_eq!(center.z, -1.02, epsilon = 1e-12);
    }
}
