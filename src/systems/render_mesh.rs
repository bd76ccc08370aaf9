//! Render-side cloth mesh and the per-frame sync from physics.
//!
//! Topology is fixed at construction and mirrors the particle grid: vertex
//! (i, j) lives at slot `(i * (ny + 1) + j) * 3`. Only positions and normals
//! change after that.

use glam::Vec3;

use crate::domain::Surface;
use crate::systems::grid::ParticleGrid;
use crate::systems::physics::ParticleWorld;

pub struct RenderMesh {
    positions: Vec<f32>,
    normals: Vec<f32>,
    uvs: Vec<f32>,
    indices: Vec<u32>,
    nx: usize,
    ny: usize,
    needs_upload: bool,
}

impl RenderMesh {
    pub fn from_surface<S: Surface + ?Sized>(surface: &S, nx: usize, ny: usize) -> Self {
        let vertex_count = (nx + 1) * (ny + 1);
        let mut positions = Vec::with_capacity(vertex_count * 3);
        let mut uvs = Vec::with_capacity(vertex_count * 2);

        for i in 0..=nx {
            for j in 0..=ny {
                let u = i as f32 / nx as f32;
                let v = j as f32 / ny as f32;
                let p = surface.point(u, v);
                positions.extend_from_slice(&[p.x, p.y, p.z]);
                uvs.extend_from_slice(&[u, v]);
            }
        }

        let stride = (ny + 1) as u32;
        let mut indices = Vec::with_capacity(nx * ny * 6);
        for i in 0..nx as u32 {
            for j in 0..ny as u32 {
                let a = i * stride + j;
                let b = (i + 1) * stride + j;
                let c = (i + 1) * stride + j + 1;
                let d = i * stride + j + 1;
                indices.extend_from_slice(&[a, b, d]);
                indices.extend_from_slice(&[b, c, d]);
            }
        }

        let mut mesh = RenderMesh {
            positions,
            normals: vec![0.0; vertex_count * 3],
            uvs,
            indices,
            nx,
            ny,
            needs_upload: true,
        };
        mesh.compute_vertex_normals();
        mesh
    }

    /// Copy particle positions in and rebuild normals.
    pub fn sync<W: ParticleWorld>(&mut self, grid: &ParticleGrid<W::Handle>, world: &W) {
        debug_assert_eq!((grid.nx(), grid.ny()), (self.nx, self.ny));
        for (i, j, handle) in grid.iter() {
            let idx = self.slot(i, j);
            let p = world.position(handle);
            self.positions[idx] = p.x;
            self.positions[idx + 1] = p.y;
            self.positions[idx + 2] = p.z;
        }
        self.needs_upload = true;
        self.compute_vertex_normals();
    }

    /// Area-weighted smooth normals over the indexed triangles.
    pub fn compute_vertex_normals(&mut self) {
        self.normals.iter_mut().for_each(|n| *n = 0.0);

        for tri in self.indices.chunks_exact(3) {
            let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
            let pa = self.vertex(a);
            let pb = self.vertex(b);
            let pc = self.vertex(c);
            let face = (pc - pb).cross(pa - pb);
            for v in [a, b, c] {
                self.normals[v * 3] += face.x;
                self.normals[v * 3 + 1] += face.y;
                self.normals[v * 3 + 2] += face.z;
            }
        }

        for n in self.normals.chunks_exact_mut(3) {
            let v = Vec3::new(n[0], n[1], n[2]).normalize_or_zero();
            n.copy_from_slice(&[v.x, v.y, v.z]);
        }
    }

    /// Returns and clears the re-upload flag.
    pub fn take_needs_upload(&mut self) -> bool {
        std::mem::replace(&mut self.needs_upload, false)
    }

    pub fn needs_upload(&self) -> bool {
        self.needs_upload
    }

    pub fn slot(&self, i: usize, j: usize) -> usize {
        (i * (self.ny + 1) + j) * 3
    }

    pub fn vertex(&self, index: usize) -> Vec3 {
        let k = index * 3;
        Vec3::new(self.positions[k], self.positions[k + 1], self.positions[k + 2])
    }

    pub fn positions(&self) -> &[f32] { &self.positions }
    pub fn normals(&self) -> &[f32] { &self.normals }
    pub fn uvs(&self) -> &[f32] { &self.uvs }
    pub fn indices(&self) -> &[u32] { &self.indices }
    pub fn vertex_count(&self) -> usize { self.positions.len() / 3 }
}
