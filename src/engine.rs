//! Core rendering engine.
//!
//! [`Engine`] owns the scene configuration and output dimensions and exposes
//! one operation to the display boundary: [`Engine::render_frame`]. A pass
//! generates the mesh, runs every vertex through the transform chain, then
//! rasterizes and shades each face into a fresh frame buffer.

use crate::mesh::Mesh;
use crate::pipeline::{self, Viewport};
use crate::render::{FrameBuffer, PhongShader, Rasterizer, Triangle};
use crate::scene::Scene;

pub struct Engine {
    width: u32,
    height: u32,
    scene: Scene,
    rasterizer: Rasterizer,
}

impl Engine {
    /// Creates an engine rendering `width x height` frames of `scene`.
    pub fn new(width: u32, height: u32, scene: Scene) -> Self {
        Self {
            width,
            height,
            scene,
            rasterizer: Rasterizer::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Renders one complete frame and returns it.
    ///
    /// The pass is synchronous and sequential; the returned buffer is final
    /// by the time the caller sees it. Rendering has no hidden state: two
    /// calls on the same engine produce byte-identical buffers.
    pub fn render_frame(&self) -> FrameBuffer {
        let mesh = Mesh::uv_sphere(self.scene.sphere_longitudes, self.scene.sphere_latitudes);
        let viewport = Viewport::new(self.width, self.height);

        // Per-vertex stage: place into view space, orient the normal toward
        // the viewer, project to the screen. World-space attributes are kept
        // unprojected for shading.
        let mut world = Vec::with_capacity(mesh.vertex_count());
        let mut normals = Vec::with_capacity(mesh.vertex_count());
        let mut screen = Vec::with_capacity(mesh.vertex_count());
        for (position, normal) in mesh.positions().iter().zip(mesh.normals()) {
            let world_position = self.scene.model.apply(*position);
            world.push(world_position);
            normals.push(pipeline::orient_toward_viewer(
                normal.normalize(),
                world_position,
            ));
            screen.push(viewport.to_screen(self.scene.frustum.project(world_position)));
        }

        let mut buffer = FrameBuffer::new(self.width, self.height);
        let shader = PhongShader::new(&self.scene.light, &self.scene.material);
        for face in mesh.faces() {
            let triangle = Triangle::new(
                [screen[face.a], screen[face.b], screen[face.c]],
                [world[face.a], world[face.b], world[face.c]],
                [normals[face.a], normals[face.b], normals[face.c]],
            );
            self.rasterizer.fill_triangle(&triangle, &mut buffer, &shader);
        }
        buffer
    }
}
