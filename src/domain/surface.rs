//! Parametric surfaces sampled by the grid builder and the render mesh.

use glam::Vec3;

/// A surface as a function of two normalized coordinates.
pub trait Surface {
    fn point(&self, u: f32, v: f32) -> Vec3;
}

impl<F> Surface for F
where
    F: Fn(f32, f32) -> Vec3,
{
    fn point(&self, u: f32, v: f32) -> Vec3 {
        self(u, v)
    }
}

/// Flat rectangle in the XY plane, centred on x and starting half a
/// height above the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub width: f32,
    pub height: f32,
}

impl Plane {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Surface for Plane {
    fn point(&self, u: f32, v: f32) -> Vec3 {
        Vec3::new((u - 0.5) * self.width, (v + 0.5) * self.height, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plane_corners() {
        let plane = Plane::new(2.0, 1.0);
        assert_eq!(plane.point(0.0, 0.0), Vec3::new(-1.0, 0.5, 0.0));
        assert_eq!(plane.point(1.0, 1.0), Vec3::new(1.0, 1.5, 0.0));
    }

    #[test]
    fn closures_are_surfaces() {
        let tilted = |u: f32, v: f32| Vec3::new(u, v, u + v);
        assert_eq!(tilted.point(0.25, 0.5), Vec3::new(0.25, 0.5, 0.75));
    }
}
