//! Global constants for frame-core

/// Number of subdivisions used when sampling a Bézier profile segment
pub const SUBDIVISION_STEPS: u32 = 32;

/// Largest accepted subdivision count per Bézier segment
pub const MAX_SUBDIVISION_STEPS: u32 = 1024;

/// Divisor applied to rail half-lengths when computing the U texture coordinate
pub const TILE_FACTOR: f64 = 2.0;

/// Distance from the outermost profile x below which a segment counts as outer wall
pub const OUTER_WALL_EPSILON: f64 = 0.001;

/// Tolerance for treating a raw profile point as lying on the inner lip (x = 0)
pub const RABBET_EPSILON: f64 = 1e-6;

/// Smallest clean opening dimension the assembler will produce
pub const MIN_CLEAN_DIMENSION: f64 = 0.1;

/// Lower bound of the artwork inset measured from the front face
pub const MIN_IMAGE_INSET: f64 = 0.01;

/// Clearance kept between the artwork and the back face
pub const BACK_CLEARANCE: f64 = 0.05;

/// Distance of the glass plane in front of the artwork
pub const GLASS_OFFSET: f64 = 0.05;

/// Distance of the backing plane behind the back face of the sweep
pub const BACKING_OFFSET: f64 = 0.02;

/// Distance of the hanging wire behind the back face of the sweep
pub const HANGER_OFFSET: f64 = 0.2;

/// Inset of the hanging wire anchors from the clean opening edges
pub const HANGER_ANCHOR_INSET: f64 = 1.0;

/// Radius of the hanging wire tube
pub const HANGER_WIRE_RADIUS: f64 = 0.02;

/// Number of path segments along the hanging wire
pub const HANGER_WIRE_SEGMENTS: u32 = 64;

/// Number of radial segments around the hanging wire
pub const HANGER_WIRE_RADIAL_SEGMENTS: u32 = 8;

/// Distance from the ring center to the middle of the hanger ring tube
pub const HANGER_RING_RADIUS: f64 = 0.15;

/// Tube radius of the hanger ring
pub const HANGER_RING_TUBE: f64 = 0.03;

/// Segments around the hanger ring tube cross-section
pub const HANGER_RING_RADIAL_SEGMENTS: u32 = 8;

/// Segments around the hanger ring
pub const HANGER_RING_TUBULAR_SEGMENTS: u32 = 16;

/// Hanger plate size (x, y, z)
pub const HANGER_PLATE_SIZE: [f64; 3] = [0.2, 0.4, 0.02];

/// Drop of the hanger plate below its ring
pub const HANGER_PLATE_DROP: f64 = 0.2;

/// Tilt of each hanger bracket about Z
pub const HANGER_BRACKET_TILT: f64 = std::f64::consts::FRAC_PI_6;

/// Corner bumper radius
pub const BUMPER_RADIUS: f64 = 0.3;

/// Corner bumper thickness
pub const BUMPER_THICKNESS: f64 = 0.05;

/// Inset of the corner bumpers from the outer frame edges
pub const BUMPER_INSET: f64 = 0.5;

/// Number of segments around a corner bumper
pub const BUMPER_SEGMENTS: u32 = 32;

/// Default edge (profile face) texture handle
pub const DEFAULT_EDGE_TEXTURE: &str = "/textures/edge.png";

/// Default side (outer wall) texture handle
pub const DEFAULT_SIDE_TEXTURE: &str = "/textures/side.png";

/// Default artwork texture handle
pub const DEFAULT_ARTWORK_TEXTURE: &str = "/art.png";

/// Default backing texture handle
pub const DEFAULT_BACKING_TEXTURE: &str = "/textures/frame-back.png";
