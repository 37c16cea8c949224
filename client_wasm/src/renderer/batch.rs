//! Per-frame instance lists collected from `Canvas` calls

use game_core::render::Color;
use game_core::Rect;
use glam::Vec2;

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // centre x, centre y, scale_x, scale_y
    pub tint: [f32; 4],      // rgba
    pub params: [f32; 4],    // rotation (radians), unused
}

impl InstanceData {
    fn new(center: Vec2, scale: Vec2, rotation: f32, tint: Color) -> Self {
        Self {
            transform: [center.x, center.y, scale.x, scale.y],
            tint,
            params: [rotation, 0.0, 0.0, 0.0],
        }
    }
}

/// Everything drawn since the last present
#[derive(Debug, Clone, Default)]
pub struct DrawBatch {
    pub clear: Color,
    pub rects: Vec<InstanceData>,
    pub circles: Vec<InstanceData>,
}

impl DrawBatch {
    /// Start over with a uniform background
    pub fn fill(&mut self, color: Color) {
        self.clear = color;
        self.rects.clear();
        self.circles.clear();
    }

    pub fn push_rect(&mut self, rect: Rect, color: Color) {
        self.rects
            .push(InstanceData::new(rect.center(), rect.size, 0.0, color));
    }

    pub fn push_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.circles
            .push(InstanceData::new(center, Vec2::splat(2.0 * radius), 0.0, color));
    }

    /// A line is a square-capped rectangle rotated onto the segment
    pub fn push_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        let delta = to - from;
        let length = delta.length();
        if length == 0.0 {
            return;
        }
        self.rects.push(InstanceData::new(
            (from + to) / 2.0,
            Vec2::new(length, width),
            delta.y.atan2(delta.x),
            color,
        ));
    }

    pub fn reset(&mut self) {
        self.rects.clear();
        self.circles.clear();
    }
}
