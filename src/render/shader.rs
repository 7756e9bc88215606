//! Per-fragment shading.
//!
//! The rasterizer handles coverage, depth, and attribute interpolation; the
//! shader computes a final color from the interpolated position and normal.
//! The [`FragmentShader`] trait is the seam between the two, mirroring how
//! GPUs separate the fixed-function rasterizer from programmable fragment
//! shaders.

use crate::colors::{self, Rgb};
use crate::light::PointLight;
use crate::material::Material;
use crate::math::vec3::Vec3;

/// Display gamma; linear colors are encoded with exponent `1 / GAMMA`.
pub const GAMMA: f32 = 2.2;

/// Computes the color of one fragment.
///
/// `position` and `normal` are in the shading space (viewer at the origin);
/// `normal` is unit length and already oriented toward the viewer.
pub trait FragmentShader {
    fn shade(&self, position: Vec3, normal: Vec3) -> Rgb;
}

/// Phong reflectance: ambient + Lambertian diffuse + mirror-lobe specular,
/// gamma-encoded for display.
///
/// Borrows the scene's light and material; both are constant across a frame.
pub struct PhongShader<'a> {
    light: &'a PointLight,
    material: &'a Material,
}

impl<'a> PhongShader<'a> {
    pub fn new(light: &'a PointLight, material: &'a Material) -> Self {
        Self { light, material }
    }

    /// The linear (pre-gamma) reflectance at a fragment.
    pub fn reflectance(&self, position: Vec3, normal: Vec3) -> Vec3 {
        let ambient = self.material.ambient * self.light.ambient_intensity;

        let to_light = self.light.direction_to(position);
        let to_viewer = (-position).normalize();
        let mirrored = (-to_light).reflect(normal);

        let diffuse =
            self.material.diffuse * self.light.color * normal.dot(to_light).max(0.0);
        let specular = self.material.specular
            * self.light.color
            * mirrored.dot(to_viewer).max(0.0).powf(self.material.shininess);

        ambient + diffuse + specular
    }
}

impl FragmentShader for PhongShader<'_> {
    #[inline]
    fn shade(&self, position: Vec3, normal: Vec3) -> Rgb {
        let linear = self.reflectance(position, normal);
        colors::encode_rgb(linear.powf(1.0 / GAMMA).clamp01())
    }
}
