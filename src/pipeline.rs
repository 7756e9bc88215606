//! Vertex transform chain: model placement, perspective projection, and the
//! viewport mapping.
//!
//! The three stages are pure, stateless mappings applied per vertex in
//! order. World-space positions and normals are retained unprojected for
//! shading; only the screen-space result feeds the rasterizer.

use crate::math::vec3::Vec3;

/// Uniform scale plus a translation down the view axis.
///
/// Places object-space geometry in front of the viewer. With the viewer at
/// the origin looking down `-z`, a positive `view_offset` keeps all geometry
/// strictly at `z < 0`, which the projection relies on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelTransform {
    scale: f32,
    view_offset: f32,
}

impl ModelTransform {
    pub fn new(scale: f32, view_offset: f32) -> Self {
        Self { scale, view_offset }
    }

    pub fn apply(&self, p: Vec3) -> Vec3 {
        Vec3::new(
            self.scale * p.x,
            self.scale * p.y,
            self.scale * p.z - self.view_offset,
        )
    }
}

/// Perspective projection defined by explicit frustum planes.
///
/// Uses the negative-`z` convention: the viewer looks down `-z`, so both
/// `near` and `far` are negative with `far < near < 0`. The mapping divides
/// by `-z` and is undefined at `z == 0`; the model transform must keep all
/// geometry strictly in front of the viewer.
#[derive(Clone, Copy, Debug)]
pub struct Frustum {
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
}

impl Frustum {
    /// Creates a frustum from its six plane parameters.
    ///
    /// # Panics
    /// Panics on a malformed frustum (`left >= right`, `bottom >= top`, or
    /// planes violating `far < near < 0`).
    pub fn new(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        assert!(left < right, "frustum left must be less than right");
        assert!(bottom < top, "frustum bottom must be less than top");
        assert!(
            far < near && near < 0.0,
            "frustum planes must satisfy far < near < 0, got near={near} far={far}"
        );
        Self {
            left,
            right,
            bottom,
            top,
            near,
            far,
        }
    }

    /// Projects a view-space point to normalized device coordinates.
    pub fn project(&self, p: Vec3) -> Vec3 {
        let inv_neg_z = 1.0 / -p.z;
        let x = (2.0 * self.near / (self.right - self.left)) * p.x * inv_neg_z;
        let y = (2.0 * self.near / (self.top - self.bottom)) * p.y * inv_neg_z;
        let z = (self.far + self.near) / (self.near - self.far)
            + (2.0 * self.far * self.near / (self.near - self.far)) * inv_neg_z;
        Vec3::new(x, y, z)
    }
}

/// Maps NDC `x, y` in `[-1, 1]` to pixel coordinates.
///
/// The vertical axis flips so `y = 1` lands on row 0 (top-left origin).
/// `z` passes through unchanged and is used directly as the depth value.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn to_screen(&self, ndc: Vec3) -> Vec3 {
        Vec3::new(
            (ndc.x + 1.0) * 0.5 * self.width as f32,
            (1.0 - ndc.y) * 0.5 * self.height as f32,
            ndc.z,
        )
    }

    /// Exact inverse of [`to_screen`](Self::to_screen).
    pub fn to_ndc(&self, screen: Vec3) -> Vec3 {
        Vec3::new(
            2.0 * screen.x / self.width as f32 - 1.0,
            1.0 - 2.0 * screen.y / self.height as f32,
            screen.z,
        )
    }
}

/// Reorients a normal to face the viewer at the origin.
///
/// Flips `normal` when it points away from the viewing direction. Applied at
/// the vertex stage and again per fragment after interpolation, so shading is
/// two-sided regardless of face winding.
pub fn orient_toward_viewer(normal: Vec3, position: Vec3) -> Vec3 {
    if normal.dot((-position).normalize()) < 0.0 {
        -normal
    } else {
        normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_frustum() -> Frustum {
        Frustum::new(-0.1, 0.1, -0.1, 0.1, -0.1, -1000.0)
    }

    #[test]
    fn model_transform_scales_then_offsets() {
        let model = ModelTransform::new(2.0, 7.0);
        let p = model.apply(Vec3::new(1.0, -0.5, 0.25));
        assert_eq!(p, Vec3::new(2.0, -1.0, -6.5));
    }

    #[test]
    fn model_transform_keeps_unit_sphere_in_front() {
        let model = ModelTransform::new(2.0, 7.0);
        // The nearest point of a unit sphere at the origin.
        let nearest = model.apply(Vec3::new(0.0, 0.0, 1.0));
        assert!(nearest.z < 0.0);
    }

    #[test]
    fn projection_centers_on_axis_points() {
        let frustum = test_frustum();
        let ndc = frustum.project(Vec3::new(0.0, 0.0, -7.0));
        assert_relative_eq!(ndc.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(ndc.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn projection_maps_near_and_far_planes_to_unit_depths() {
        let frustum = test_frustum();
        let near = frustum.project(Vec3::new(0.0, 0.0, -0.1));
        let far = frustum.project(Vec3::new(0.0, 0.0, -1000.0));
        assert_relative_eq!(near.z, 1.0, epsilon = 1e-3);
        assert_relative_eq!(far.z, -1.0, epsilon = 1e-3);
    }

    #[test]
    fn projection_depth_distinguishes_distances() {
        let frustum = test_frustum();
        let nearer = frustum.project(Vec3::new(0.0, 0.0, -5.0));
        let farther = frustum.project(Vec3::new(0.0, 0.0, -9.0));
        assert!(nearer.z != farther.z);
    }

    #[test]
    fn viewport_round_trips_ndc_coordinates() {
        let viewport = Viewport::new(512, 512);
        for &(x, y) in &[(0.0, 0.0), (-1.0, -1.0), (1.0, 1.0), (0.3, -0.7)] {
            let ndc = Vec3::new(x, y, 0.5);
            let back = viewport.to_ndc(viewport.to_screen(ndc));
            assert_relative_eq!(back.x, ndc.x, epsilon = 1e-5);
            assert_relative_eq!(back.y, ndc.y, epsilon = 1e-5);
            assert_relative_eq!(back.z, ndc.z, epsilon = 1e-5);
        }
    }

    #[test]
    fn viewport_flips_vertical_axis() {
        let viewport = Viewport::new(512, 256);
        let top = viewport.to_screen(Vec3::new(0.0, 1.0, 0.0));
        let bottom = viewport.to_screen(Vec3::new(0.0, -1.0, 0.0));
        assert_relative_eq!(top.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(bottom.y, 256.0, epsilon = 1e-6);
    }

    #[test]
    fn normals_facing_away_are_flipped() {
        let position = Vec3::new(0.0, 0.0, -7.0);
        let away = Vec3::new(0.0, 0.0, -1.0);
        let flipped = orient_toward_viewer(away, position);
        assert_eq!(flipped, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn normals_facing_viewer_are_untouched() {
        let position = Vec3::new(0.0, 0.0, -7.0);
        let toward = Vec3::new(0.0, 0.0, 1.0);
        assert_eq!(orient_toward_viewer(toward, position), toward);
    }

    #[test]
    #[should_panic(expected = "far < near < 0")]
    fn frustum_rejects_positive_near_plane() {
        Frustum::new(-0.1, 0.1, -0.1, 0.1, 0.1, -1000.0);
    }
}
