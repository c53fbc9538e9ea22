//! Curve expansion: sparse profile knots to a dense polyline

use glam::DVec2;

use super::{BezierControl, ProfilePoint, Segment};

/// Dense polyline in profile space, one entry per knot plus curve samples
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandedProfile {
    points: Vec<DVec2>,
}

impl ExpandedProfile {
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DVec2> {
        self.points.iter()
    }
}

/// Evaluate a quadratic Bézier at `t`
pub fn quadratic_bezier(p0: DVec2, c: DVec2, p1: DVec2, t: f64) -> DVec2 {
    let mt = 1.0 - t;
    p0 * (mt * mt) + c * (2.0 * mt * t) + p1 * (t * t)
}

/// Evaluate a cubic Bézier at `t`
pub fn cubic_bezier(p0: DVec2, c1: DVec2, c2: DVec2, p1: DVec2, t: f64) -> DVec2 {
    let mt = 1.0 - t;
    p0 * (mt * mt * mt) + c1 * (3.0 * mt * mt * t) + c2 * (3.0 * mt * t * t) + p1 * (t * t * t)
}

/// Expand a profile into a polyline.
///
/// Straight segments contribute only their end knot. Curved segments are
/// sampled at `t = s / steps` for `s = 1..steps` before the end knot is
/// appended, so every knot appears verbatim in the output.
pub fn expand_profile(points: &[ProfilePoint], steps: u32) -> ExpandedProfile {
    let mut expanded = Vec::with_capacity(points.len() * steps.max(1) as usize);

    let Some(first) = points.first() else {
        return ExpandedProfile { points: expanded };
    };
    expanded.push(first.position());

    for pair in points.windows(2) {
        let prev = pair[0].position();
        let point = &pair[1];
        let end = point.position();

        if let Segment::Bezier(control) = point.segment {
            for s in 1..steps {
                let t = s as f64 / steps as f64;
                let sample = match control {
                    BezierControl::Quadratic(cp) => quadratic_bezier(prev, cp, end, t),
                    BezierControl::Cubic(cp1, cp2) => cubic_bezier(prev, cp1, cp2, end, t),
                };
                expanded.push(sample);
            }
        }

        expanded.push(end);
    }

    ExpandedProfile { points: expanded }
}
