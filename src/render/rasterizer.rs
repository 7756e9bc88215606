//! Barycentric triangle rasterization.
//!
//! For each triangle the rasterizer walks the pixels of its clamped
//! screen-space bounding box, computes barycentric weights per pixel center,
//! and shades the covered pixels that pass the depth test.
//!
//! # Coverage and ties
//!
//! A pixel is covered iff all three barycentric weights are `>= 0`, edges
//! included. Pixels exactly on an edge shared by two triangles are therefore
//! visited by both; the strict `<` depth comparison keeps the
//! first-submitted fragment on an exact depth tie. Face order is fixed per
//! mesh, so output frames are deterministic.
//!
//! # Depth interpolation
//!
//! Depth is interpolated linearly in screen space from the already-projected
//! `z` values. This is not perspective-correct; for visibility ordering of
//! this pipeline it is an accepted approximation.

use crate::math::vec3::Vec3;
use crate::pipeline::orient_toward_viewer;
use crate::render::framebuffer::FrameBuffer;
use crate::render::shader::FragmentShader;

/// Screen-space double-area threshold below which a triangle is considered
/// degenerate (viewed edge-on) and skipped without diagnostics.
pub const DEGENERATE_AREA_EPSILON: f32 = 1e-5;

/// A triangle ready for rasterization.
///
/// Screen positions drive coverage and depth; the world-space positions and
/// normals are interpolated per fragment for shading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub screen: [Vec3; 3],
    pub world: [Vec3; 3],
    pub normals: [Vec3; 3],
}

impl Triangle {
    pub fn new(screen: [Vec3; 3], world: [Vec3; 3], normals: [Vec3; 3]) -> Self {
        Self {
            screen,
            world,
            normals,
        }
    }
}

/// Bounding-box rasterizer with per-pixel barycentric coverage.
pub struct Rasterizer;

impl Rasterizer {
    pub fn new() -> Self {
        Rasterizer
    }

    /// Rasterizes one triangle into the frame buffer.
    ///
    /// Covered pixels that pass the depth test get interpolated world-space
    /// attributes, a viewer-facing normal, and a shader-computed color; all
    /// other pixels are left untouched.
    pub fn fill_triangle<S: FragmentShader>(
        &self,
        triangle: &Triangle,
        buffer: &mut FrameBuffer,
        shader: &S,
    ) {
        let [v0, v1, v2] = triangle.screen;

        // Signed double area; near-zero means the triangle projects to
        // (almost) nothing on screen.
        let denom = (v1.y - v2.y) * (v0.x - v2.x) + (v2.x - v1.x) * (v0.y - v2.y);
        if denom.abs() < DEGENERATE_AREA_EPSILON {
            return;
        }
        let inv_denom = 1.0 / denom;

        let min_x = (v0.x.min(v1.x).min(v2.x).floor() as i32).max(0);
        let max_x = (v0.x.max(v1.x).max(v2.x).ceil() as i32).min(buffer.width() as i32 - 1);
        let min_y = (v0.y.min(v1.y).min(v2.y).floor() as i32).max(0);
        let max_y = (v0.y.max(v1.y).max(v2.y).ceil() as i32).min(buffer.height() as i32 - 1);

        let [w0, w1, w2] = triangle.world;
        let [n0, n1, n2] = triangle.normals;

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                // Sample at the pixel center.
                let px = x as f32 + 0.5;
                let py = y as f32 + 0.5;

                let a = ((v1.y - v2.y) * (px - v2.x) + (v2.x - v1.x) * (py - v2.y)) * inv_denom;
                let b = ((v2.y - v0.y) * (px - v2.x) + (v0.x - v2.x) * (py - v2.y)) * inv_denom;
                let c = 1.0 - a - b;
                if a < 0.0 || b < 0.0 || c < 0.0 {
                    continue;
                }

                let depth = a * v0.z + b * v1.z + c * v2.z;
                if !buffer.depth_test(x, y, depth) {
                    continue;
                }

                let position = w0 * a + w1 * b + w2 * c;
                let normal = (n0 * a + n1 * b + n2 * c).normalize();
                let normal = orient_toward_viewer(normal, position);
                buffer.set_pixel_with_depth(x, y, depth, shader.shade(position, normal));
            }
        }
    }
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::Rgb;

    /// Ignores position and normal, returning one fixed color.
    struct SolidShader(Rgb);

    impl FragmentShader for SolidShader {
        fn shade(&self, _position: Vec3, _normal: Vec3) -> Rgb {
            self.0
        }
    }

    fn flat_triangle(p0: (f32, f32), p1: (f32, f32), p2: (f32, f32), depth: f32) -> Triangle {
        Triangle::new(
            [
                Vec3::new(p0.0, p0.1, depth),
                Vec3::new(p1.0, p1.1, depth),
                Vec3::new(p2.0, p2.1, depth),
            ],
            [Vec3::new(0.0, 0.0, -1.0); 3],
            [Vec3::new(0.0, 0.0, 1.0); 3],
        )
    }

    #[test]
    fn covers_interior_and_skips_exterior() {
        let mut buffer = FrameBuffer::new(32, 32);
        let triangle = flat_triangle((4.0, 4.0), (28.0, 4.0), (4.0, 28.0), 0.5);
        Rasterizer::new().fill_triangle(&triangle, &mut buffer, &SolidShader([255, 0, 0]));

        // Well inside the right-angle corner.
        assert_eq!(buffer.get_pixel(8, 8), Some([255, 0, 0]));
        // Outside the hypotenuse and outside the bounding box.
        assert_eq!(buffer.get_pixel(27, 27), Some([0, 0, 0]));
        assert_eq!(buffer.get_pixel(31, 2), Some([0, 0, 0]));
    }

    #[test]
    fn collinear_vertices_write_nothing() {
        let mut buffer = FrameBuffer::new(32, 32);
        let triangle = flat_triangle((0.0, 0.0), (10.0, 10.0), (20.0, 20.0), 0.5);
        Rasterizer::new().fill_triangle(&triangle, &mut buffer, &SolidShader([255, 255, 255]));
        assert!(buffer.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn clockwise_and_counter_clockwise_windings_both_fill() {
        let mut buffer = FrameBuffer::new(32, 32);
        let ccw = flat_triangle((4.0, 4.0), (28.0, 4.0), (4.0, 28.0), 0.5);
        let cw = Triangle::new(
            [ccw.screen[0], ccw.screen[2], ccw.screen[1]],
            ccw.world,
            ccw.normals,
        );
        Rasterizer::new().fill_triangle(&cw, &mut buffer, &SolidShader([0, 255, 0]));
        assert_eq!(buffer.get_pixel(8, 8), Some([0, 255, 0]));
    }

    #[test]
    fn nearer_triangle_wins_in_either_submission_order() {
        let near = flat_triangle((0.0, 0.0), (31.0, 0.0), (0.0, 31.0), 0.2);
        let far = flat_triangle((0.0, 0.0), (31.0, 0.0), (0.0, 31.0), 0.8);
        let rasterizer = Rasterizer::new();

        let mut near_first = FrameBuffer::new(32, 32);
        rasterizer.fill_triangle(&near, &mut near_first, &SolidShader([255, 0, 0]));
        rasterizer.fill_triangle(&far, &mut near_first, &SolidShader([0, 0, 255]));

        let mut far_first = FrameBuffer::new(32, 32);
        rasterizer.fill_triangle(&far, &mut far_first, &SolidShader([0, 0, 255]));
        rasterizer.fill_triangle(&near, &mut far_first, &SolidShader([255, 0, 0]));

        assert_eq!(near_first.as_bytes(), far_first.as_bytes());
        assert_eq!(near_first.get_pixel(5, 5), Some([255, 0, 0]));
    }

    #[test]
    fn partially_offscreen_triangle_is_clipped_to_the_buffer() {
        let mut buffer = FrameBuffer::new(16, 16);
        let triangle = flat_triangle((-20.0, -20.0), (40.0, 0.0), (0.0, 40.0), 0.5);
        Rasterizer::new().fill_triangle(&triangle, &mut buffer, &SolidShader([9, 9, 9]));
        assert_eq!(buffer.get_pixel(1, 1), Some([9, 9, 9]));
    }

    #[test]
    fn occluded_fragments_leave_depth_untouched() {
        let mut buffer = FrameBuffer::new(8, 8);
        let rasterizer = Rasterizer::new();
        rasterizer.fill_triangle(
            &flat_triangle((0.0, 0.0), (8.0, 0.0), (0.0, 8.0), 0.1),
            &mut buffer,
            &SolidShader([1, 1, 1]),
        );
        rasterizer.fill_triangle(
            &flat_triangle((0.0, 0.0), (8.0, 0.0), (0.0, 8.0), 0.9),
            &mut buffer,
            &SolidShader([2, 2, 2]),
        );
        assert_eq!(buffer.depth_at(2, 2), Some(0.1));
        assert_eq!(buffer.get_pixel(2, 2), Some([1, 1, 1]));
    }
}
