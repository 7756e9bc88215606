//! Triangle mesh storage and the UV-sphere generator.
//!
//! A [`Mesh`] keeps vertex positions and vertex normals in two parallel
//! sequences indexed identically, plus a face list of index triples into
//! them. Meshes are immutable once generated and owned by the render pass
//! that created them.
//!
//! Face winding is *not* guaranteed consistent by construction. Facing is
//! corrected at shading time by reorienting normals toward the viewer (see
//! [`crate::pipeline::orient_toward_viewer`]), never by reordering faces.

use std::f32::consts::{PI, TAU};

use crate::math::vec3::Vec3;

/// Three indices into a mesh's vertex sequences, forming one triangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

/// An immutable triangle mesh: parallel position/normal sequences plus faces.
pub struct Mesh {
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    faces: Vec<Face>,
}

impl Mesh {
    /// Generates a unit UV-sphere with `longitudes` columns and `latitudes`
    /// latitude samples (poles included in the count).
    ///
    /// Interior rings sample latitude over `(0, π)` exclusive; the two poles
    /// are appended as explicit vertices and closed with triangle fans. Every
    /// vertex of a unit sphere is its own unit normal.
    ///
    /// Produces `(latitudes - 2) * longitudes + 2` vertices and
    /// `2 * (latitudes - 3) * longitudes + 2 * longitudes` faces.
    ///
    /// # Panics
    /// Panics if either resolution is below 3: at least one interior ring and
    /// three columns are needed to form valid triangles.
    pub fn uv_sphere(longitudes: usize, latitudes: usize) -> Self {
        assert!(
            longitudes >= 3,
            "sphere needs at least 3 longitude segments, got {longitudes}"
        );
        assert!(
            latitudes >= 3,
            "sphere needs at least 3 latitude segments, got {latitudes}"
        );

        let w = longitudes;
        let h = latitudes;

        let mut positions = Vec::with_capacity((h - 2) * w + 2);
        let mut normals = Vec::with_capacity((h - 2) * w + 2);

        for j in 1..h - 1 {
            let theta = j as f32 / (h - 1) as f32 * PI;
            for i in 0..w {
                let phi = i as f32 / w as f32 * TAU;
                let point = Vec3::new(
                    theta.sin() * phi.cos(),
                    theta.cos(),
                    -theta.sin() * phi.sin(),
                );
                positions.push(point);
                normals.push(point.normalize());
            }
        }

        let north = positions.len();
        positions.push(Vec3::UP);
        normals.push(Vec3::UP);
        let south = positions.len();
        positions.push(Vec3::DOWN);
        normals.push(Vec3::DOWN);

        let mut faces = Vec::with_capacity(2 * (h - 3) * w + 2 * w);

        // Two triangles per quad between adjacent interior rings. Columns
        // wrap modulo `w`.
        for j in 0..h - 3 {
            for i in 0..w {
                let curr = j * w + i;
                let next = j * w + (i + 1) % w;
                let below = (j + 1) * w + i;
                let below_next = (j + 1) * w + (i + 1) % w;
                faces.push(Face {
                    a: curr,
                    b: below_next,
                    c: next,
                });
                faces.push(Face {
                    a: curr,
                    b: below,
                    c: below_next,
                });
            }
        }

        // Fan each pole against its nearest ring.
        let base = (h - 3) * w;
        for i in 0..w {
            let next = (i + 1) % w;
            faces.push(Face {
                a: north,
                b: next,
                c: i,
            });
            faces.push(Face {
                a: south,
                b: base + i,
                c: base + next,
            });
        }

        debug_assert_eq!(positions.len(), normals.len());

        Self {
            positions,
            normals,
            faces,
        }
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}
