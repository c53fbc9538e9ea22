//! Export options for STL generation

use crate::assembly::ElementKind;

/// Which frame elements an export includes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Backing, artwork and glass planes
    pub include_inserts: bool,
    /// Hanging wire, brackets and corner bumpers
    pub include_hardware: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            include_inserts: true,
            include_hardware: true,
        }
    }
}

impl ExportOptions {
    /// Only the four mitered sides
    pub fn sides_only() -> Self {
        Self {
            include_inserts: false,
            include_hardware: false,
        }
    }

    pub fn includes(&self, kind: ElementKind) -> bool {
        match kind {
            ElementKind::Side(_) => true,
            ElementKind::Backing | ElementKind::Artwork | ElementKind::Glass => self.include_inserts,
            ElementKind::HangingWire
            | ElementKind::HangerRing(_)
            | ElementKind::HangerPlate(_)
            | ElementKind::CornerBumper(_) => self.include_hardware,
        }
    }
}
