//! Project file serialization
//!
//! A project bundles a profile with the frame parameters it is built with.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::assembly::{Frame, FrameError, build_frame};
use crate::config::{ConfigError, ConfigFormat, FrameParams, load_file, save_file};
use crate::profile::{Profile, presets};

/// Current project file format version
pub const PROJECT_VERSION: u32 = 1;

/// Saved frame design
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameProject {
    /// File format version
    pub version: u32,
    pub name: String,
    pub profile: Profile,
    #[serde(default)]
    pub params: FrameParams,
}

impl Default for FrameProject {
    fn default() -> Self {
        Self::new("New Frame", presets::classic_moulding())
    }
}

impl FrameProject {
    pub fn new(name: impl Into<String>, profile: Profile) -> Self {
        Self {
            version: PROJECT_VERSION,
            name: name.into(),
            profile,
            params: FrameParams::default(),
        }
    }

    /// Save project to a `.ron` or `.json` file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        save_file(self, path)
    }

    /// Load project from a `.ron` or `.json` file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let project: FrameProject = load_file(path)?;
        if project.version > PROJECT_VERSION {
            tracing::warn!(
                "Project '{}' has newer format version {} (supported: {})",
                project.name,
                project.version,
                PROJECT_VERSION
            );
        }
        Ok(project)
    }

    /// Serialize project to RON bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, ConfigError> {
        Ok(ConfigFormat::Ron.render(self)?.into_bytes())
    }

    /// Load project from RON bytes
    pub fn load_from_bytes(data: &[u8]) -> Result<Self, ConfigError> {
        let content = std::str::from_utf8(data).map_err(|e| ConfigError::Parse(e.to_string()))?;
        ConfigFormat::Ron.parse(content)
    }

    /// Assemble the frame described by this project
    pub fn build(&self) -> Result<Frame, FrameError> {
        build_frame(&self.profile, &self.params)
    }
}
