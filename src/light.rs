//! Lighting types for the renderer.

use crate::math::vec3::Vec3;

/// A point light fixed in the shading space (viewer at the origin).
///
/// Carries an RGB color/intensity and the scalar ambient intensity applied
/// to the material's ambient coefficient. Constant for the process lifetime.
pub struct PointLight {
    /// Position in the same space as shaded fragments.
    pub position: Vec3,
    /// RGB color/intensity of the light.
    pub color: Vec3,
    /// Scalar multiplier for the ambient lighting contribution (default: 0.2)
    pub ambient_intensity: f32,
}

impl PointLight {
    /// Create a new point light at the given position with the given color.
    pub fn new(position: Vec3, color: Vec3) -> Self {
        PointLight {
            position,
            color,
            ambient_intensity: 0.2,
        }
    }

    /// Unit direction from a surface point toward the light.
    pub fn direction_to(&self, point: Vec3) -> Vec3 {
        (self.position - point).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn direction_points_from_surface_to_light() {
        let light = PointLight::new(Vec3::new(0.0, 5.0, 0.0), Vec3::ONE);
        let dir = light.direction_to(Vec3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(dir.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(dir.y, 1.0, epsilon = 1e-6);
        assert_relative_eq!(dir.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn direction_is_unit_length() {
        let light = PointLight::new(Vec3::new(-4.0, 4.0, -3.0), Vec3::ONE);
        let dir = light.direction_to(Vec3::new(0.5, -1.0, -7.0));
        assert_relative_eq!(dir.magnitude(), 1.0, epsilon = 1e-6);
    }
}
