pub mod batch;

#[cfg(target_arch = "wasm32")]
mod draw;
#[cfg(target_arch = "wasm32")]
mod init;
#[cfg(target_arch = "wasm32")]
mod pipeline;
#[cfg(target_arch = "wasm32")]
mod resources;
#[cfg(target_arch = "wasm32")]
mod shaders;

#[cfg(target_arch = "wasm32")]
pub use gpu::Renderer;

#[cfg(target_arch = "wasm32")]
mod gpu {
    use super::batch::DrawBatch;
    use super::resources::{self, GameBuffers};
    use super::{draw, init, pipeline};
    use crate::camera::Camera;
    use crate::mesh::{create_circle, create_rectangle, Mesh};
    use crate::text;
    use game_core::render::{Canvas, Color};
    use game_core::{Rect, RenderError};
    use glam::Vec2;
    use wgpu::*;

    /// Segments of the ball's disc
    const CIRCLE_SEGMENTS: u16 = 48;

    /// WebGPU implementation of the game's drawing surface
    pub struct Renderer {
        pub device: Device,
        pub queue: Queue,
        pub surface: Surface<'static>,
        pub surface_config: SurfaceConfiguration,
        pub size: (u32, u32),
        pub camera: Camera,

        pub main_pipeline: RenderPipeline,
        pub camera_bind_group: BindGroup,

        pub buffers: GameBuffers,
        pub meshes: (Mesh, Mesh), // rect, circle

        pub batch: DrawBatch,
    }

    impl Renderer {
        /// Set up WebGPU on `canvas`, showing an arena of side `arena_side`
        pub async fn new(
            canvas: web_sys::HtmlCanvasElement,
            arena_side: f32,
        ) -> Result<Self, RenderError> {
            let ctx = init::init_wgpu(canvas).await?;
            let camera = Camera::orthographic(arena_side);

            let buffers = resources::create_buffers(&ctx.device, &camera);
            let pipes = pipeline::create_pipelines(&ctx.device, ctx.config.format);

            // Meshes
            let rect_mesh = Mesh::new(&ctx.device, create_rectangle());
            let circle_mesh = Mesh::new(&ctx.device, create_circle(CIRCLE_SEGMENTS));

            let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
                label: Some("Camera Bind Group"),
                layout: &pipes.camera_layout,
                entries: &[BindGroupEntry {
                    binding: 0,
                    resource: buffers.camera.as_entire_binding(),
                }],
            });

            Ok(Self {
                device: ctx.device,
                queue: ctx.queue,
                surface: ctx.surface,
                surface_config: ctx.config,
                size: ctx.size,
                camera,
                main_pipeline: pipes.main_pipeline,
                camera_bind_group,
                buffers,
                meshes: (rect_mesh, circle_mesh),
                batch: DrawBatch::default(),
            })
        }

        /// Follow a canvas size change
        pub fn resize(&mut self, width: u32, height: u32) {
            if width == 0 || height == 0 || (width, height) == self.size {
                return;
            }
            self.size = (width, height);
            self.surface_config.width = width;
            self.surface_config.height = height;
            self.surface.configure(&self.device, &self.surface_config);
            tracing::debug!(width, height, "surface resized");
        }
    }

    impl Canvas for Renderer {
        fn fill(&mut self, color: Color) {
            self.batch.fill(color);
        }

        fn fill_rect(&mut self, rect: Rect, color: Color) {
            self.batch.push_rect(rect, color);
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
            self.batch.push_circle(center, radius, color);
        }

        fn draw_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
            self.batch.push_line(from, to, width, color);
        }

        fn draw_text(&mut self, text: &str, top_left: Vec2, glyph_height: f32, color: Color) {
            for rect in text::layout(text, top_left, glyph_height) {
                self.batch.push_rect(rect, color);
            }
        }

        fn present(&mut self) -> Result<(), RenderError> {
            draw::draw_frame(self)
        }
    }
}
