//! Frame cross-section profiles
//!
//! A profile is an ordered list of knots in 2D profile space. Each knot
//! carries the kind of segment that leads into it from the previous knot:
//! - Linear: straight segment
//! - Bezier: quadratic (one control point) or cubic (two control points)
//!
//! Profiles are authored as JSON (or RON) records of the form
//! `{ "x": 0.5, "y": 1.0, "segment_type": "bezier", "control_points": [{ "x": 0.4, "y": 1.8 }] }`.

mod bounds;
mod expand;
pub mod presets;
mod rabbet;

use glam::DVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use bounds::{ProfileBounds, ProfileScale};
pub use expand::{ExpandedProfile, cubic_bezier, expand_profile, quadratic_bezier};
pub use rabbet::locate_rabbet_y;

/// Profile validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("Profile needs at least 2 points, got {found}")]
    TooFewPoints { found: usize },

    #[error("Unknown segment type: {0:?}")]
    UnknownSegmentType(String),

    #[error("Bezier segment has {found} control points (expected 1 or 2)")]
    TooManyControlPoints { found: usize },

    #[error("Profile coordinate is not finite: ({x}, {y})")]
    NonFiniteCoordinate { x: f64, y: f64 },

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Control points of a curved segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BezierControl {
    /// Quadratic Bézier with a single control point
    Quadratic(DVec2),
    /// Cubic Bézier with two control points
    Cubic(DVec2, DVec2),
}

impl BezierControl {
    /// Control points in authoring order
    pub fn points(&self) -> Vec<DVec2> {
        match *self {
            BezierControl::Quadratic(cp) => vec![cp],
            BezierControl::Cubic(cp1, cp2) => vec![cp1, cp2],
        }
    }
}

/// Segment leading into a profile point
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Segment {
    /// Straight segment
    #[default]
    Linear,
    /// Curved segment
    Bezier(BezierControl),
}

impl Segment {
    /// Wire-format tag of this segment
    pub fn tag(&self) -> &'static str {
        match self {
            Segment::Linear => "linear",
            Segment::Bezier(_) => "bezier",
        }
    }

    /// Build a segment from its wire tag and control points.
    ///
    /// A bezier tag without control points degrades to a straight segment.
    pub fn from_tag(tag: &str, control_points: &[DVec2]) -> Result<Self, ProfileError> {
        match tag {
            "linear" => Ok(Segment::Linear),
            "bezier" => match *control_points {
                [] => Ok(Segment::Linear),
                [cp] => Ok(Segment::Bezier(BezierControl::Quadratic(cp))),
                [cp1, cp2] => Ok(Segment::Bezier(BezierControl::Cubic(cp1, cp2))),
                _ => Err(ProfileError::TooManyControlPoints {
                    found: control_points.len(),
                }),
            },
            other => Err(ProfileError::UnknownSegmentType(other.to_string())),
        }
    }
}

/// A knot of the profile outline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawProfilePoint", into = "RawProfilePoint")]
pub struct ProfilePoint {
    pub x: f64,
    pub y: f64,
    /// Segment leading into this point (ignored for the first point)
    pub segment: Segment,
}

impl ProfilePoint {
    /// Point reached by a straight segment
    pub fn linear(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            segment: Segment::Linear,
        }
    }

    /// Point reached by a quadratic Bézier segment
    pub fn quadratic(x: f64, y: f64, control: DVec2) -> Self {
        Self {
            x,
            y,
            segment: Segment::Bezier(BezierControl::Quadratic(control)),
        }
    }

    /// Point reached by a cubic Bézier segment
    pub fn cubic(x: f64, y: f64, control1: DVec2, control2: DVec2) -> Self {
        Self {
            x,
            y,
            segment: Segment::Bezier(BezierControl::Cubic(control1, control2)),
        }
    }

    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

/// Plain `{x, y}` record used on the wire
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct RawPoint {
    x: f64,
    y: f64,
}

/// `control_points` may be a list or a single bare point
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawControlPoints {
    Many(Vec<RawPoint>),
    One(RawPoint),
}

impl RawControlPoints {
    fn into_points(self) -> Vec<DVec2> {
        match self {
            RawControlPoints::Many(points) => {
                points.into_iter().map(|p| DVec2::new(p.x, p.y)).collect()
            }
            RawControlPoints::One(p) => vec![DVec2::new(p.x, p.y)],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawProfilePoint {
    x: f64,
    y: f64,
    segment_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    control_points: Option<RawControlPoints>,
}

fn check_finite(x: f64, y: f64) -> Result<(), ProfileError> {
    if x.is_finite() && y.is_finite() {
        Ok(())
    } else {
        Err(ProfileError::NonFiniteCoordinate { x, y })
    }
}

impl TryFrom<RawProfilePoint> for ProfilePoint {
    type Error = ProfileError;

    fn try_from(raw: RawProfilePoint) -> Result<Self, Self::Error> {
        check_finite(raw.x, raw.y)?;
        let controls = raw
            .control_points
            .map(RawControlPoints::into_points)
            .unwrap_or_default();
        for cp in &controls {
            check_finite(cp.x, cp.y)?;
        }
        Ok(Self {
            x: raw.x,
            y: raw.y,
            segment: Segment::from_tag(&raw.segment_type, &controls)?,
        })
    }
}

impl From<ProfilePoint> for RawProfilePoint {
    fn from(point: ProfilePoint) -> Self {
        let control_points = match point.segment {
            Segment::Linear => None,
            Segment::Bezier(control) => Some(RawControlPoints::Many(
                control
                    .points()
                    .into_iter()
                    .map(|p| RawPoint { x: p.x, y: p.y })
                    .collect(),
            )),
        };
        Self {
            x: point.x,
            y: point.y,
            segment_type: point.segment.tag().to_string(),
            control_points,
        }
    }
}

/// Validated frame profile (at least two knots)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ProfilePoint>", into = "Vec<ProfilePoint>")]
pub struct Profile {
    points: Vec<ProfilePoint>,
}

impl TryFrom<Vec<ProfilePoint>> for Profile {
    type Error = ProfileError;

    fn try_from(points: Vec<ProfilePoint>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<Profile> for Vec<ProfilePoint> {
    fn from(profile: Profile) -> Self {
        profile.points
    }
}

impl Profile {
    /// Create a profile, rejecting outlines with fewer than two points
    pub fn new(points: Vec<ProfilePoint>) -> Result<Self, ProfileError> {
        if points.len() < 2 {
            return Err(ProfileError::TooFewPoints {
                found: points.len(),
            });
        }
        for p in &points {
            check_finite(p.x, p.y)?;
            if let Segment::Bezier(control) = p.segment {
                for cp in control.points() {
                    check_finite(cp.x, cp.y)?;
                }
            }
        }
        Ok(Self { points })
    }

    /// Parse a profile from its JSON point list
    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        serde_json::from_str(json).map_err(|e| ProfileError::Parse(e.to_string()))
    }

    /// Serialize the profile to its JSON point list
    pub fn to_json(&self) -> Result<String, ProfileError> {
        serde_json::to_string_pretty(self).map_err(|e| ProfileError::Parse(e.to_string()))
    }

    pub fn points(&self) -> &[ProfilePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Never true for a validated profile
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the first and last knots coincide.
    ///
    /// Open outlines are accepted as-is; closing them is left to the author.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => first.position() == last.position(),
            _ => false,
        }
    }

    /// Resample curved segments into a dense polyline
    pub fn expand(&self, steps: u32) -> ExpandedProfile {
        expand_profile(&self.points, steps)
    }

    /// Y coordinate of the inner lip (rabbet step)
    pub fn rabbet_y(&self, epsilon: f64) -> f64 {
        locate_rabbet_y(&self.points, epsilon)
    }
}
