//! Profile extents and the fit scale onto a frame cross-section

use glam::DVec2;

use super::ExpandedProfile;

/// Extents of an expanded profile plus the inner-lip height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    /// `max_x - min_x`, or 1 for a profile with no lateral extent
    pub width: f64,
    /// `max_y - min_y`, or 1 for a profile with no depth extent
    pub depth: f64,
    /// Y coordinate of the rabbet step in profile space
    pub rabbit_y: f64,
}

/// Replace a zero extent by 1 so it can be used as a divisor
fn extent_or_unit(extent: f64) -> f64 {
    if extent == 0.0 { 1.0 } else { extent }
}

impl ProfileBounds {
    /// Compute bounds over the expanded polyline
    pub fn new(expanded: &ExpandedProfile, rabbit_y: f64) -> Self {
        if expanded.is_empty() {
            return Self {
                min_x: 0.0,
                max_x: 0.0,
                min_y: 0.0,
                max_y: 0.0,
                width: 1.0,
                depth: 1.0,
                rabbit_y,
            };
        }

        let min = expanded
            .iter()
            .fold(DVec2::splat(f64::INFINITY), |acc, p| acc.min(*p));
        let max = expanded
            .iter()
            .fold(DVec2::splat(f64::NEG_INFINITY), |acc, p| acc.max(*p));

        Self {
            min_x: min.x,
            max_x: max.x,
            min_y: min.y,
            max_y: max.y,
            width: extent_or_unit(max.x - min.x),
            depth: extent_or_unit(max.y - min.y),
            rabbit_y,
        }
    }

    /// Whether the profile has no lateral or no depth extent
    pub fn is_degenerate(&self) -> bool {
        self.max_x - self.min_x == 0.0 || self.max_y - self.min_y == 0.0
    }

    /// Scale that makes the profile span `frame_width` laterally and `frame_depth` in depth
    pub fn fit(&self, frame_width: f64, frame_depth: f64) -> ProfileScale {
        if self.is_degenerate() {
            tracing::debug!(
                "Degenerate profile extent ({} x {}), using unit divisor",
                self.max_x - self.min_x,
                self.max_y - self.min_y
            );
        }
        ProfileScale {
            scale_x: frame_width / self.width,
            scale_y: frame_depth / self.depth,
            min_y: self.min_y,
            frame_depth,
        }
    }

    /// Scaled distance from the inner lip (x = 0) to the outermost profile edge
    pub fn rabbit_to_outer(&self, frame_width: f64) -> f64 {
        self.max_x * (frame_width / self.width)
    }

    /// Scaled depth from the front face down to the rabbet step
    pub fn rabbet_inset(&self, frame_depth: f64) -> f64 {
        (self.max_y - self.rabbit_y) * (frame_depth / self.depth)
    }
}

/// Mapping from profile space onto the side's cross-section plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileScale {
    pub scale_x: f64,
    pub scale_y: f64,
    pub min_y: f64,
    pub frame_depth: f64,
}

impl ProfileScale {
    /// Lateral offset from the inner edge for a profile x
    pub fn lateral(&self, x: f64) -> f64 {
        x * self.scale_x
    }

    /// Depth position, centered so the section straddles z = 0
    pub fn depth(&self, y: f64) -> f64 {
        (y - self.min_y) * self.scale_y - self.frame_depth / 2.0
    }

    /// Map a profile point to `(lateral, depth)`
    pub fn map(&self, p: DVec2) -> DVec2 {
        DVec2::new(self.lateral(p.x), self.depth(p.y))
    }

    /// Scale a profile-space displacement
    pub fn scale_delta(&self, delta: DVec2) -> DVec2 {
        DVec2::new(delta.x * self.scale_x, delta.y * self.scale_y)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::constants::{RABBET_EPSILON, SUBDIVISION_STEPS};
    use crate::profile::{ProfilePoint, expand_profile, presets};

    fn bounds_of(profile: &crate::profile::Profile) -> ProfileBounds {
        let expanded = profile.expand(SUBDIVISION_STEPS);
        ProfileBounds::new(&expanded, profile.rabbet_y(RABBET_EPSILON))
    }

    #[test]
    fn test_wedge_bounds() {
        let bounds = bounds_of(&presets::wedge());
        assert_eq!(bounds.min_x, 0.0);
        assert_eq!(bounds.max_x, 3.0);
        assert_eq!(bounds.min_y, 0.0);
        assert_eq!(bounds.max_y, 2.0);
        assert_eq!(bounds.width, 3.0);
        assert_eq!(bounds.depth, 2.0);
        assert_eq!(bounds.rabbit_y, 2.0);
    }

    #[test]
    fn test_fit_scale() {
        let bounds = bounds_of(&presets::wedge());
        let scale = bounds.fit(6.0, 1.0);
        assert_relative_eq!(scale.scale_x, 2.0);
        assert_relative_eq!(scale.scale_y, 0.5);

        let mapped = scale.map(DVec2::new(3.0, 2.0));
        assert_relative_eq!(mapped.x, 6.0);
        assert_relative_eq!(mapped.y, 0.5);
        assert_relative_eq!(scale.depth(0.0), -0.5);
    }

    #[test]
    fn test_zero_width_falls_back_to_unit_divisor() {
        let bounds = bounds_of(&presets::flat_strip());
        assert!(bounds.is_degenerate());
        assert_eq!(bounds.width, 1.0);

        let scale = bounds.fit(3.0, 2.0);
        assert!(scale.scale_x.is_finite());
        assert_eq!(scale.scale_x, 3.0);
    }

    #[test]
    fn test_zero_depth_falls_back_to_unit_divisor() {
        let points = [ProfilePoint::linear(0.0, 1.0), ProfilePoint::linear(2.0, 1.0)];
        let bounds = ProfileBounds::new(&expand_profile(&points, SUBDIVISION_STEPS), 1.0);
        assert_eq!(bounds.depth, 1.0);
        assert_eq!(bounds.fit(1.0, 2.0).scale_y, 2.0);
    }

    #[test]
    fn test_bounds_include_curve_samples() {
        let points = [
            ProfilePoint::linear(0.0, 0.0),
            ProfilePoint::quadratic(2.0, 0.0, DVec2::new(1.0, 2.0)),
        ];
        let bounds = ProfileBounds::new(&expand_profile(&points, SUBDIVISION_STEPS), 0.0);
        // the quadratic apex at t = 0.5 has y = 1
        assert_relative_eq!(bounds.max_y, 1.0);
    }

    #[test]
    fn test_rabbet_inset_and_outer_distance() {
        let bounds = bounds_of(&presets::classic_moulding());
        assert_relative_eq!(bounds.rabbit_to_outer(3.0), 3.0);
        assert_relative_eq!(bounds.rabbet_inset(2.0), 0.0);
    }
}
