use glam::Vec3;

use crate::systems::{RenderMesh, SphereTint};

/// Everything one render pass needs, borrowed from the core.
pub struct FrameView<'a> {
    pub mesh: &'a RenderMesh,
    pub sphere_position: Vec3,
    pub sphere_tint: SphereTint,
    /// Positions changed since the last upload.
    pub mesh_dirty: bool,
    pub frame: u32,
}

/// Draws a frame. The engine never rasterizes; implementors hand the view
/// to whatever renderer the host has.
pub trait Renderer {
    /// Camera controls tick, before the physics step.
    fn update_controls(&mut self) {}

    fn render(&mut self, view: &FrameView<'_>);
}

/// Raw buffer addresses for zero-copy typed-array views on the JS side.
pub(crate) struct MeshLayoutData {
    pub(crate) positions_ptr: *const f32,
    pub(crate) positions_len: usize,
    pub(crate) normals_ptr: *const f32,
    pub(crate) normals_len: usize,
    pub(crate) uvs_ptr: *const f32,
    pub(crate) uvs_len: usize,
    pub(crate) indices_ptr: *const u32,
    pub(crate) indices_len: usize,
}

impl MeshLayoutData {
    pub(crate) fn of(mesh: &RenderMesh) -> Self {
        MeshLayoutData {
            positions_ptr: mesh.positions().as_ptr(),
            positions_len: mesh.positions().len(),
            normals_ptr: mesh.normals().as_ptr(),
            normals_len: mesh.normals().len(),
            uvs_ptr: mesh.uvs().as_ptr(),
            uvs_len: mesh.uvs().len(),
            indices_ptr: mesh.indices().as_ptr(),
            indices_len: mesh.indices().len(),
        }
    }
}
