//! GPU-facing data layouts shared by the native and web renderers.
//!
//! Both frontends draw every visible point (field, burst sparks, apex star)
//! as one instanced billboard quad stream using [`crate::SCENE_WGSL`].

use crate::state::Camera;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Uniforms {
    pub view: [[f32; 4]; 4],
    pub proj: [[f32; 4]; 4],
}

impl Uniforms {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view: camera.view_matrix().to_cols_array_2d(),
            proj: camera.projection_matrix().to_cols_array_2d(),
        }
    }
}

/// One billboard. `scale` is the quad edge in world units; zero hides it.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointInstance {
    pub pos: [f32; 3],
    pub scale: f32,
    pub color: [f32; 4],
}

/// Unit quad as two triangles, `x, y` per vertex.
pub const QUAD_VERTICES: [f32; 12] = [
    -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
];

/// Byte offsets of the instance attributes, in shader location order 1..=3.
pub const INSTANCE_ATTRIBUTE_OFFSETS: [u64; 3] = [0, 12, 16];
