//! Camera for the Pong arena
//!
//! Orthographic, y pointing down, one unit per arena unit

use glam::{Mat4, Vec3};

/// Camera struct
pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
}

impl Camera {
    /// Map the square `[0, side]²` onto the whole surface, origin top-left
    pub fn orthographic(side: f32) -> Self {
        let view = Mat4::IDENTITY;
        let projection = Mat4::orthographic_rh(0.0, side, side, 0.0, -1.0, 1.0);
        Self { view, projection }
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection * self.view
    }
}

/// Camera uniform data (matches WGSL struct, 256-byte aligned)
#[repr(C, align(256))]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4], // 64 bytes (mat4x4)
    _padding: [f32; 48],      // 192 bytes padding (48 * 4) to reach 256 bytes
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            _padding: [0.0; 48],
        }
    }
}
