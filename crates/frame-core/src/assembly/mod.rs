//! Frame assembly
//!
//! Four mitered sides placed around the clean opening, planar inserts for
//! backing, artwork and glass, and the decorative back hardware. The frame
//! is an owned list of independent mesh + transform pairs.

mod hardware;
mod materials;
mod transform;

use std::f64::consts::{FRAC_PI_2, PI};

use glam::{DMat4, DVec3};
use serde::Serialize;
use thiserror::Error;

pub use hardware::{hardware_elements, wire_curve};
pub use materials::{
    ElementMaterial, FaceMaterial, FrameMaterials, GlassMaterial, SlotMaterial, SolidMaterial, WallMaterial,
};
pub use transform::Pose;

use crate::config::{FrameParams, GeneratorConfig};
use crate::constants::{BACK_CLEARANCE, BACKING_OFFSET, GLASS_OFFSET, MIN_CLEAN_DIMENSION, MIN_IMAGE_INSET};
use crate::mesh::{GeometryError, SideMeshBuilder, TriMesh, check_dimension};
use crate::primitive::generate_plane_mesh;
use crate::profile::{Profile, ProfileBounds, ProfileError};

/// Frame assembly errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrameError {
    #[error("Invalid profile: {0}")]
    Profile(#[from] ProfileError),

    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),
}

/// Which edge of the opening a side runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SidePosition {
    Top,
    Bottom,
    Left,
    Right,
}

impl SidePosition {
    pub const ALL: [SidePosition; 4] = [
        SidePosition::Top,
        SidePosition::Bottom,
        SidePosition::Left,
        SidePosition::Right,
    ];

    pub fn index(self) -> usize {
        match self {
            SidePosition::Top => 0,
            SidePosition::Bottom => 1,
            SidePosition::Left => 2,
            SidePosition::Right => 3,
        }
    }

    /// Length of the opening edge this side spans
    pub fn inner_length(self, clean_width: f64, clean_height: f64) -> f64 {
        match self {
            SidePosition::Top | SidePosition::Bottom => clean_width,
            SidePosition::Left | SidePosition::Right => clean_height,
        }
    }

    /// Placement of the side centered on its opening edge, lateral axis pointing outward
    pub fn pose(self, clean_width: f64, clean_height: f64) -> Pose {
        let (x, y, angle) = match self {
            SidePosition::Top => (0.0, clean_height / 2.0, 0.0),
            SidePosition::Bottom => (0.0, -clean_height / 2.0, PI),
            SidePosition::Left => (-clean_width / 2.0, 0.0, FRAC_PI_2),
            SidePosition::Right => (clean_width / 2.0, 0.0, -FRAC_PI_2),
        };
        Pose::rotated_z(DVec3::new(x, y, 0.0), angle)
    }
}

/// Left or right member of a hardware pair, as seen from the front
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HardwareSide {
    Left,
    Right,
}

impl HardwareSide {
    pub const ALL: [HardwareSide; 2] = [HardwareSide::Left, HardwareSide::Right];

    pub fn sign(self) -> f64 {
        match self {
            HardwareSide::Left => -1.0,
            HardwareSide::Right => 1.0,
        }
    }
}

/// Role of a frame element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ElementKind {
    Side(SidePosition),
    Backing,
    Artwork,
    Glass,
    HangingWire,
    HangerRing(HardwareSide),
    HangerPlate(HardwareSide),
    CornerBumper(HardwareSide),
}

/// One mesh placed in frame space
#[derive(Debug, Clone, PartialEq)]
pub struct FrameElement {
    pub kind: ElementKind,
    pub mesh: TriMesh,
    /// Local-to-frame transform
    pub transform: DMat4,
}

impl FrameElement {
    /// Mesh positions in frame space
    pub fn world_positions(&self) -> Vec<DVec3> {
        self.mesh.transformed_positions(&self.transform)
    }
}

/// Derived measurements of an assembled frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameDimensions {
    /// Outer width
    pub width: f64,
    /// Outer height
    pub height: f64,
    pub frame_width: f64,
    pub frame_depth: f64,
    /// Visible opening width
    pub clean_width: f64,
    /// Visible opening height
    pub clean_height: f64,
    /// Scaled distance from the inner lip to the outermost profile edge
    pub rabbit_to_outer: f64,
    /// Inset derived from the rabbet step
    pub computed_inset: f64,
    /// Inset in effect (explicit override or computed)
    pub image_inset: f64,
    /// Depth of the artwork plane
    pub artwork_z: f64,
}

impl FrameDimensions {
    /// Measure the opening and insert depth for a profile with `bounds`
    pub fn new(bounds: &ProfileBounds, params: &FrameParams) -> Self {
        let rabbit_to_outer = bounds.rabbit_to_outer(params.frame_width);
        let computed_inset = bounds.rabbet_inset(params.frame_depth);
        let image_inset = params.image_inset.unwrap_or(computed_inset);

        Self {
            width: params.width,
            height: params.height,
            frame_width: params.frame_width,
            frame_depth: params.frame_depth,
            clean_width: MIN_CLEAN_DIMENSION.max(params.width - 2.0 * rabbit_to_outer),
            clean_height: MIN_CLEAN_DIMENSION.max(params.height - 2.0 * rabbit_to_outer),
            rabbit_to_outer,
            computed_inset,
            image_inset,
            artwork_z: params.frame_depth / 2.0 - clamp_inset(image_inset, params.frame_depth),
        }
    }

    pub fn glass_z(&self) -> f64 {
        self.artwork_z + GLASS_OFFSET
    }
}

/// Keep the artwork between the front face and the back clearance.
///
/// The lower bound wins when the frame is thinner than the clearance.
fn clamp_inset(inset: f64, frame_depth: f64) -> f64 {
    MIN_IMAGE_INSET.max((frame_depth - BACK_CLEARANCE).min(inset))
}

/// Complete framed picture
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub dimensions: FrameDimensions,
    pub elements: Vec<FrameElement>,
    pub materials: FrameMaterials,
}

impl Frame {
    pub fn elements(&self) -> &[FrameElement] {
        &self.elements
    }

    /// First element of `kind`
    pub fn element(&self, kind: ElementKind) -> Option<&FrameElement> {
        self.elements.iter().find(|e| e.kind == kind)
    }

    pub fn side(&self, side: SidePosition) -> Option<&FrameElement> {
        self.element(ElementKind::Side(side))
    }

    pub fn vertex_count(&self) -> usize {
        self.elements.iter().map(|e| e.mesh.vertex_count()).sum()
    }

    pub fn triangle_count(&self) -> usize {
        self.elements.iter().map(|e| e.mesh.triangle_count()).sum()
    }

    /// Parse a profile from JSON and assemble it
    pub fn from_profile_json(json: &str, params: &FrameParams) -> Result<Self, FrameError> {
        let profile = Profile::from_json(json)?;
        build_frame(&profile, params)
    }
}

/// Assemble a frame around `profile`
pub fn build_frame(profile: &Profile, params: &FrameParams) -> Result<Frame, FrameError> {
    check_dimension("width", params.width)?;
    check_dimension("height", params.height)?;
    if let Some(inset) = params.image_inset {
        if !inset.is_finite() {
            return Err(GeometryError::InvalidDimension {
                name: "image inset",
                value: inset,
            }
            .into());
        }
    }

    let config: &GeneratorConfig = &params.generator;
    let builder = SideMeshBuilder::new(profile.points(), params.frame_width, params.frame_depth, config)?;
    let dims = FrameDimensions::new(builder.bounds(), params);

    let mut elements = Vec::with_capacity(14);
    for side in SidePosition::ALL {
        let inner_length = side.inner_length(dims.clean_width, dims.clean_height);
        let mesh = builder.build(inner_length)?.into_mesh();
        elements.push(FrameElement {
            kind: ElementKind::Side(side),
            mesh,
            transform: side.pose(dims.clean_width, dims.clean_height).to_mat4(),
        });
    }

    elements.push(FrameElement {
        kind: ElementKind::Backing,
        mesh: generate_plane_mesh(dims.width, dims.height),
        transform: Pose::rotated_y(
            DVec3::new(0.0, 0.0, -dims.frame_depth / 2.0 - BACKING_OFFSET),
            PI,
        )
        .to_mat4(),
    });

    elements.push(FrameElement {
        kind: ElementKind::Artwork,
        mesh: generate_plane_mesh(dims.clean_width, dims.clean_height),
        transform: DMat4::from_translation(DVec3::new(0.0, 0.0, dims.artwork_z)),
    });

    if params.has_glass {
        elements.push(FrameElement {
            kind: ElementKind::Glass,
            mesh: generate_plane_mesh(dims.clean_width, dims.clean_height),
            transform: DMat4::from_translation(DVec3::new(0.0, 0.0, dims.glass_z())),
        });
    }

    elements.extend(hardware_elements(&dims));

    let frame = Frame {
        dimensions: dims,
        materials: FrameMaterials::new(params, dims.clean_width, dims.clean_height),
        elements,
    };

    tracing::debug!(
        "Assembled frame {}x{} (opening {:.3}x{:.3}): {} elements, {} triangles",
        dims.width,
        dims.height,
        dims.clean_width,
        dims.clean_height,
        frame.elements.len(),
        frame.triangle_count()
    );

    Ok(frame)
}
