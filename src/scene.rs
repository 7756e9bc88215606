//! Scene configuration passed into a render pass.
//!
//! Everything the pipeline reads (light, material, frustum, model placement,
//! mesh resolution) lives here as explicit owned state rather than
//! process-wide globals.

use crate::light::PointLight;
use crate::material::Material;
use crate::math::vec3::Vec3;
use crate::pipeline::{Frustum, ModelTransform};

/// Owned configuration for one renderable scene.
pub struct Scene {
    pub light: PointLight,
    pub material: Material,
    pub frustum: Frustum,
    pub model: ModelTransform,
    /// Longitude segments of the generated sphere.
    pub sphere_longitudes: usize,
    /// Latitude samples of the generated sphere, poles included.
    pub sphere_latitudes: usize,
}

impl Default for Scene {
    /// The stock scene: a green-tinted unit sphere scaled by 2, placed 7
    /// units down the view axis, lit by a white point light up and to the
    /// left of the viewer.
    fn default() -> Self {
        Self {
            light: PointLight::new(Vec3::new(-4.0, 4.0, -3.0), Vec3::ONE),
            material: Material::new(
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(0.0, 0.5, 0.0),
                Vec3::new(0.5, 0.5, 0.5),
                32.0,
            ),
            frustum: Frustum::new(-0.1, 0.1, -0.1, 0.1, -0.1, -1000.0),
            model: ModelTransform::new(2.0, 7.0),
            sphere_longitudes: 20,
            sphere_latitudes: 10,
        }
    }
}
