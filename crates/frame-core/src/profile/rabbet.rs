//! Inner lip (rabbet) detection

use super::ProfilePoint;

/// Locate the y coordinate of the rabbet step on the raw profile knots.
///
/// Knots lying on the inner edge (`|x| <= epsilon`) are preferred and the
/// highest of them wins. Without such a knot the one closest to x = 0 is
/// used (first one on ties). An empty profile yields 0.
pub fn locate_rabbet_y(points: &[ProfilePoint], epsilon: f64) -> f64 {
    let on_lip = points
        .iter()
        .filter(|p| p.x.abs() <= epsilon)
        .map(|p| p.y)
        .reduce(f64::max);
    if let Some(y) = on_lip {
        return y;
    }

    let mut closest: Option<&ProfilePoint> = None;
    for p in points {
        match closest {
            Some(c) if p.x.abs() >= c.x.abs() => {}
            _ => closest = Some(p),
        }
    }
    closest.map_or(0.0, |p| p.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::RABBET_EPSILON;

    #[test]
    fn test_highest_point_on_inner_edge() {
        let points = [
            ProfilePoint::linear(0.0, 0.0),
            ProfilePoint::linear(0.0, 1.5),
            ProfilePoint::linear(2.0, 3.0),
            ProfilePoint::linear(1e-7, 0.8),
        ];
        assert_eq!(locate_rabbet_y(&points, RABBET_EPSILON), 1.5);
    }

    #[test]
    fn test_fallback_to_closest_point() {
        let points = [
            ProfilePoint::linear(0.5, 0.2),
            ProfilePoint::linear(0.25, 1.25),
            ProfilePoint::linear(-0.25, 9.0),
            ProfilePoint::linear(3.0, 0.0),
        ];
        // -0.25 ties with 0.25; the earlier knot is kept
        assert_eq!(locate_rabbet_y(&points, RABBET_EPSILON), 1.25);
    }

    #[test]
    fn test_empty_profile() {
        assert_eq!(locate_rabbet_y(&[], RABBET_EPSILON), 0.0);
    }
}
