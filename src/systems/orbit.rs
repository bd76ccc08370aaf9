//! Sphere orbit and its cosmetic tint.

use glam::Vec3;

/// Drives the sphere around a horizontal circle of fixed radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitDriver {
    pub radius: f32,
}

impl OrbitDriver {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }

    /// Position at elapsed simulation time `t`.
    pub fn position_at(&self, t: f32) -> Vec3 {
        Vec3::new(self.radius * t.sin(), 0.0, self.radius * t.cos())
    }
}

/// Colour state of the sphere mesh.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SphereTint {
    Resting,
    Colliding,
}

impl SphereTint {
    // Never true on the flat orbit; a vertical term would make it reachable.
    pub fn from_height(y: f32) -> Self {
        if y < 0.0 {
            SphereTint::Colliding
        } else {
            SphereTint::Resting
        }
    }

    /// 0xRRGGBB
    pub fn color(self) -> u32 {
        match self {
            SphereTint::Resting => 0xff69b4,
            SphereTint::Colliding => 0xff0000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn starts_on_positive_z() {
        let orbit = OrbitDriver::new(0.2);
        assert_eq!(orbit.position_at(0.0), Vec3::new(0.0, 0.0, 0.2));
    }

    #[test]
    fn quarter_turn_on_positive_x() {
        let p = OrbitDriver::new(0.2).position_at(FRAC_PI_2);
        assert!(p.abs_diff_eq(Vec3::new(0.2, 0.0, 0.0), 1e-6));
    }

    #[test]
    fn stays_on_circle() {
        let orbit = OrbitDriver::new(0.2);
        for k in 0..500 {
            let p = orbit.position_at(k as f32 * 0.037);
            assert_eq!(p.y, 0.0);
            assert!(((p.x * p.x + p.z * p.z) - 0.04).abs() < 1e-6);
        }
    }

    #[test]
    fn tint_only_below_zero() {
        assert_eq!(SphereTint::from_height(0.0), SphereTint::Resting);
        assert_eq!(SphereTint::from_height(0.3), SphereTint::Resting);
        assert_eq!(SphereTint::from_height(-0.01), SphereTint::Colliding);
        assert_eq!(SphereTint::Colliding.color(), 0xff0000);
    }
}
