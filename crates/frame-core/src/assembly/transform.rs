//! Element placement

use glam::{DMat4, DQuat, DVec3, EulerRot};

/// Position and XYZ Euler rotation of a frame element relative to its parent
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    pub xyz: DVec3,
    pub rpy: DVec3, // roll, pitch, yaw in radians
}

impl Pose {
    pub fn new(xyz: DVec3, rpy: DVec3) -> Self {
        Self { xyz, rpy }
    }

    pub fn from_position(xyz: DVec3) -> Self {
        Self {
            xyz,
            rpy: DVec3::ZERO,
        }
    }

    pub fn rotated_x(xyz: DVec3, angle: f64) -> Self {
        Self::new(xyz, DVec3::new(angle, 0.0, 0.0))
    }

    pub fn rotated_y(xyz: DVec3, angle: f64) -> Self {
        Self::new(xyz, DVec3::new(0.0, angle, 0.0))
    }

    pub fn rotated_z(xyz: DVec3, angle: f64) -> Self {
        Self::new(xyz, DVec3::new(0.0, 0.0, angle))
    }

    pub fn to_quat(&self) -> DQuat {
        DQuat::from_euler(EulerRot::XYZ, self.rpy.x, self.rpy.y, self.rpy.z)
    }

    pub fn to_mat4(&self) -> DMat4 {
        DMat4::from_rotation_translation(self.to_quat(), self.xyz)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_translation_only() {
        let m = Pose::from_position(DVec3::new(1.0, 2.0, 3.0)).to_mat4();
        assert_eq!(m.transform_point3(DVec3::ZERO), DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_quarter_turn_about_z() {
        let m = Pose::rotated_z(DVec3::ZERO, FRAC_PI_2).to_mat4();
        let p = m.transform_point3(DVec3::X);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-12);
    }
}
