//! Built-in profiles

use glam::DVec2;

use super::{Profile, ProfilePoint};

// presets always carry more than two finite points
fn build(points: Vec<ProfilePoint>) -> Profile {
    Profile { points }
}

/// Simple triangular wedge: inner lip 2 units high sloping out to the wall
pub fn wedge() -> Profile {
    build(vec![
        ProfilePoint::linear(0.0, 0.0),
        ProfilePoint::linear(0.0, 2.0),
        ProfilePoint::linear(3.0, 0.0),
        ProfilePoint::linear(0.0, 0.0),
    ])
}

/// Zero-width profile lying entirely on the inner edge
pub fn flat_strip() -> Profile {
    build(vec![
        ProfilePoint::linear(0.0, 0.0),
        ProfilePoint::linear(0.0, 1.0),
        ProfilePoint::linear(0.0, 2.0),
        ProfilePoint::linear(0.0, 0.0),
    ])
}

/// Classic moulding with a rounded lip, cove and stepped outer wall
pub fn classic_moulding() -> Profile {
    build(vec![
        ProfilePoint::linear(0.0, 0.0),
        ProfilePoint::linear(0.0, 2.0),
        ProfilePoint::quadratic(0.15, 2.0, DVec2::new(0.4, 1.85)),
        ProfilePoint::quadratic(0.55, 1.3, DVec2::new(0.65, 1.1)),
        ProfilePoint::linear(0.75, 1.15),
        ProfilePoint::linear(0.75, 1.05),
        ProfilePoint::quadratic(0.85, 1.05, DVec2::new(1.2, 0.85)),
        ProfilePoint::quadratic(1.8, 0.55, DVec2::new(2.3, 0.35)),
        ProfilePoint::quadratic(2.35, 0.5, DVec2::new(2.4, 0.6)),
        ProfilePoint::linear(2.5, 0.85),
        ProfilePoint::linear(2.625, 0.85),
        ProfilePoint::linear(2.625, 0.625),
        ProfilePoint::linear(3.0, 0.625),
        ProfilePoint::linear(3.0, 0.0),
        ProfilePoint::linear(0.0, 0.0),
    ])
}

/// Look up a preset by name
pub fn by_name(name: &str) -> Option<Profile> {
    match name {
        "wedge" => Some(wedge()),
        "flat" | "flat_strip" => Some(flat_strip()),
        "classic" | "classic_moulding" => Some(classic_moulding()),
        _ => None,
    }
}

/// Names accepted by [`by_name`]
pub const NAMES: &[&str] = &["wedge", "flat_strip", "classic_moulding"];
