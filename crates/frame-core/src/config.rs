//! Generator and frame configuration
//!
//! Tunable generator constants and the frame parameters that drive an
//! assembly. Both can be serialized and loaded from RON or JSON files.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ARTWORK_TEXTURE, DEFAULT_BACKING_TEXTURE, DEFAULT_EDGE_TEXTURE, DEFAULT_SIDE_TEXTURE,
    OUTER_WALL_EPSILON, RABBET_EPSILON, SUBDIVISION_STEPS, TILE_FACTOR,
};

/// Geometry generator tunables
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Subdivisions per Bézier segment (samples = steps - 1, plus the end knot)
    pub subdivision_steps: u32,
    /// Divisor applied to rail half-lengths for the U coordinate
    pub tile_factor: f64,
    /// Tolerance against the outermost x for outer-wall segments
    pub outer_wall_epsilon: f64,
    /// Tolerance for knots lying on the inner lip
    pub rabbet_epsilon: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            subdivision_steps: SUBDIVISION_STEPS,
            tile_factor: TILE_FACTOR,
            outer_wall_epsilon: OUTER_WALL_EPSILON,
            rabbet_epsilon: RABBET_EPSILON,
        }
    }
}

/// Opaque texture handles resolved by the asset loader
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FrameTextures {
    /// Profile face texture used when no albedo map is given
    pub edge: String,
    /// Outer wall texture
    pub side: Option<String>,
    pub artwork: String,
    pub backing: String,
    pub profile_albedo: Option<String>,
    pub profile_normal: Option<String>,
    pub profile_roughness: Option<String>,
    pub profile_ao: Option<String>,
}

impl Default for FrameTextures {
    fn default() -> Self {
        Self {
            edge: DEFAULT_EDGE_TEXTURE.to_string(),
            side: Some(DEFAULT_SIDE_TEXTURE.to_string()),
            artwork: DEFAULT_ARTWORK_TEXTURE.to_string(),
            backing: DEFAULT_BACKING_TEXTURE.to_string(),
            profile_albedo: None,
            profile_normal: None,
            profile_roughness: None,
            profile_ao: None,
        }
    }
}

/// Parameters of one framed picture
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FrameParams {
    /// Outer frame width
    pub width: f64,
    /// Outer frame height
    pub height: f64,
    /// Lateral span of the profile
    pub frame_width: f64,
    /// Thickness of the profile
    pub frame_depth: f64,
    /// Explicit artwork inset from the front face; computed from the rabbet when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_inset: Option<f64>,
    /// Whether a glass plane is placed in front of the artwork
    pub has_glass: bool,
    pub textures: FrameTextures,
    pub generator: GeneratorConfig,
}

impl Default for FrameParams {
    fn default() -> Self {
        Self {
            width: 16.0,
            height: 20.0,
            frame_width: 3.0,
            frame_depth: 2.0,
            image_inset: None,
            has_glass: true,
            textures: FrameTextures::default(),
            generator: GeneratorConfig::default(),
        }
    }
}

impl FrameParams {
    /// Load parameters from a `.ron` or `.json` file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        load_file(path)
    }

    /// Save parameters, choosing the format from the file extension
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        save_file(self, path)
    }

    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        ConfigFormat::Ron.parse(text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        ConfigFormat::Json.parse(text)
    }
}

/// Supported parameter file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Ron,
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase())
            .as_deref()
        {
            Some("ron") => Ok(ConfigFormat::Ron),
            Some("json") => Ok(ConfigFormat::Json),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("none").to_string(),
            )),
        }
    }

    /// Deserialize a value from text in this format
    pub fn parse<T: DeserializeOwned>(self, text: &str) -> Result<T, ConfigError> {
        match self {
            ConfigFormat::Ron => ron::from_str(text).map_err(|e| ConfigError::Parse(e.to_string())),
            ConfigFormat::Json => {
                serde_json::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
            }
        }
    }

    /// Serialize a value as pretty-printed text in this format
    pub fn render<T: Serialize>(self, value: &T) -> Result<String, ConfigError> {
        match self {
            ConfigFormat::Ron => ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string())),
            ConfigFormat::Json => {
                serde_json::to_string_pretty(value).map_err(|e| ConfigError::Serialize(e.to_string()))
            }
        }
    }
}

/// Read a `.ron` or `.json` file into `T`
pub fn load_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;
    let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
    format.parse(&text)
}

/// Write `value` to a `.ron` or `.json` file
pub fn save_file<T: Serialize>(value: &T, path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let text = ConfigFormat::from_path(path)?.render(value)?;
    std::fs::write(path, text).map_err(|e| ConfigError::Io(e.to_string()))
}

/// Configuration file errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Serialize error: {0}")]
    Serialize(String),
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.subdivision_steps, 32);
        assert_eq!(config.tile_factor, 2.0);
        assert_eq!(config.outer_wall_epsilon, 0.001);
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let params = FrameParams::from_ron_str("(width: 24.0, image_inset: Some(0.3))").unwrap();
        assert_eq!(params.width, 24.0);
        assert_eq!(params.height, 20.0);
        assert_eq!(params.image_inset, Some(0.3));
        assert_eq!(params.generator, GeneratorConfig::default());
    }

    #[test]
    fn test_json_params() {
        let params = FrameParams::from_json_str(
            r#"{ "frame_depth": 1.5, "has_glass": false, "generator": { "subdivision_steps": 8 } }"#,
        )
        .unwrap();
        assert_eq!(params.frame_depth, 1.5);
        assert!(!params.has_glass);
        assert_eq!(params.generator.subdivision_steps, 8);
        assert_eq!(params.generator.tile_factor, 2.0);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let params = FrameParams {
            image_inset: Some(0.4),
            ..Default::default()
        };
        for name in ["frame.ron", "frame.json"] {
            let path = dir.path().join(name);
            params.save(&path).unwrap();
            assert_eq!(FrameParams::load(&path).unwrap(), params);
        }
    }

    #[test]
    fn test_unsupported_extension() {
        let err = FrameParams::load("frame.toml").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(ext) if ext == "toml"));
    }
}
