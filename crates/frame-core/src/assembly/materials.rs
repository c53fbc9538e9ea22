//! Material binding descriptors handed to the renderer
//!
//! Textures are opaque handles. The renderer resolves them and binds the
//! resulting materials to the draw-group slots of each side mesh.

use serde::Serialize;

use super::{ElementKind, SidePosition};
use crate::config::{FrameParams, FrameTextures};
use crate::constants::{DEFAULT_EDGE_TEXTURE, DEFAULT_SIDE_TEXTURE};
use crate::mesh::MaterialSlot;

/// Profile face material (slots 0 and 1)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaceMaterial {
    pub albedo: String,
    pub normal_map: Option<String>,
    pub roughness_map: Option<String>,
    pub ao_map: Option<String>,
    pub roughness: f64,
    pub metalness: f64,
    pub clearcoat: f64,
    pub clearcoat_roughness: f64,
    pub env_map_intensity: f64,
    pub ao_map_intensity: f64,
    pub normal_scale: f64,
}

impl FaceMaterial {
    pub fn from_textures(textures: &FrameTextures) -> Self {
        let albedo = textures
            .profile_albedo
            .clone()
            .or_else(|| non_empty(&textures.edge))
            .unwrap_or_else(|| DEFAULT_EDGE_TEXTURE.to_string());

        Self {
            albedo,
            normal_map: textures.profile_normal.clone(),
            roughness: if textures.profile_roughness.is_some() { 1.0 } else { 0.5 },
            roughness_map: textures.profile_roughness.clone(),
            ao_map: textures.profile_ao.clone(),
            metalness: 0.05,
            clearcoat: 0.2,
            clearcoat_roughness: 0.1,
            env_map_intensity: 2.0,
            ao_map_intensity: 0.7,
            normal_scale: 1.5,
        }
    }
}

/// Outer wall and cap material (slot 2)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WallMaterial {
    pub texture: String,
    /// Texture repeats along the sweep direction
    pub repeat_x: f64,
    pub roughness: f64,
    pub metalness: f64,
}

impl WallMaterial {
    /// Wall material for a side whose opening edge is `inner_length` long
    pub fn for_side(textures: &FrameTextures, inner_length: f64, frame_width: f64) -> Self {
        let texture = textures
            .side
            .as_deref()
            .and_then(non_empty)
            .unwrap_or_else(|| DEFAULT_SIDE_TEXTURE.to_string());
        let outer_length = inner_length + 2.0 * frame_width;
        let divisor = if frame_width == 0.0 { 1.0 } else { frame_width };

        Self {
            texture,
            repeat_x: outer_length / divisor,
            roughness: 0.5,
            metalness: 0.1,
        }
    }
}

/// Translucent glass insert
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlassMaterial {
    pub roughness: f64,
    pub clearcoat: f64,
    pub transmission: f64,
    pub thickness: f64,
    pub ior: f64,
    pub opacity: f64,
}

impl Default for GlassMaterial {
    fn default() -> Self {
        Self {
            roughness: 0.0,
            clearcoat: 1.0,
            transmission: 0.9,
            thickness: 0.05,
            ior: 1.5,
            opacity: 0.15,
        }
    }
}

/// Untextured material for hardware
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolidMaterial {
    pub color: &'static str,
    pub metalness: f64,
    pub roughness: f64,
}

const WIRE: SolidMaterial = SolidMaterial {
    color: "#C0C0C0",
    metalness: 0.8,
    roughness: 0.3,
};

const RING: SolidMaterial = SolidMaterial {
    color: "#A0A0A0",
    metalness: 0.7,
    roughness: 0.3,
};

const PLATE: SolidMaterial = SolidMaterial {
    color: "#A0A0A0",
    metalness: 0.5,
    roughness: 0.5,
};

const BUMPER: SolidMaterial = SolidMaterial {
    color: "#1a1a1a",
    metalness: 0.0,
    roughness: 0.9,
};

/// Material bound to one frame element
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ElementMaterial<'a> {
    /// Side mesh: face material for slots 0/1, wall material for slot 2
    Profile {
        face: &'a FaceMaterial,
        wall: &'a WallMaterial,
    },
    /// Unlit texture (artwork, backing)
    Textured(&'a str),
    Glass(&'a GlassMaterial),
    Solid(&'a SolidMaterial),
}

/// Material behind one draw-group slot of a side
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlotMaterial<'a> {
    Face(&'a FaceMaterial),
    Wall(&'a WallMaterial),
}

/// All material bindings of a frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameMaterials {
    pub face: FaceMaterial,
    /// Wall materials indexed by [`SidePosition::index`]
    pub walls: [WallMaterial; 4],
    pub artwork: String,
    pub backing: String,
    pub glass: GlassMaterial,
}

impl FrameMaterials {
    pub fn new(params: &FrameParams, clean_width: f64, clean_height: f64) -> Self {
        let textures = &params.textures;
        let walls = SidePosition::ALL.map(|side| {
            let inner_length = side.inner_length(clean_width, clean_height);
            WallMaterial::for_side(textures, inner_length, params.frame_width)
        });

        Self {
            face: FaceMaterial::from_textures(textures),
            walls,
            artwork: textures.artwork.clone(),
            backing: textures.backing.clone(),
            glass: GlassMaterial::default(),
        }
    }

    pub fn wall(&self, side: SidePosition) -> &WallMaterial {
        &self.walls[side.index()]
    }

    /// Material a side binds to draw-group `slot`
    pub fn slot(&self, side: SidePosition, slot: MaterialSlot) -> SlotMaterial<'_> {
        match slot {
            MaterialSlot::ProfileFace | MaterialSlot::ProfileBack => SlotMaterial::Face(&self.face),
            MaterialSlot::Wall => SlotMaterial::Wall(self.wall(side)),
        }
    }

    /// Material bound to an element of kind `kind`
    pub fn for_element(&self, kind: ElementKind) -> ElementMaterial<'_> {
        match kind {
            ElementKind::Side(side) => ElementMaterial::Profile {
                face: &self.face,
                wall: self.wall(side),
            },
            ElementKind::Backing => ElementMaterial::Textured(&self.backing),
            ElementKind::Artwork => ElementMaterial::Textured(&self.artwork),
            ElementKind::Glass => ElementMaterial::Glass(&self.glass),
            ElementKind::HangingWire => ElementMaterial::Solid(&WIRE),
            ElementKind::HangerRing(_) => ElementMaterial::Solid(&RING),
            ElementKind::HangerPlate(_) => ElementMaterial::Solid(&PLATE),
            ElementKind::CornerBumper(_) => ElementMaterial::Solid(&BUMPER),
        }
    }
}

fn non_empty(handle: &str) -> Option<String> {
    match handle {
        "" | "undefined" => None,
        other => Some(other.to_string()),
    }
}
