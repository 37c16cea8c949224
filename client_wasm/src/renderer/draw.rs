use super::batch::InstanceData;
use super::resources::MAX_INSTANCES;
use super::Renderer;
use game_core::RenderError;
use wgpu::*;

/// Submit the collected batch and show it
pub fn draw_frame(renderer: &mut Renderer) -> Result<(), RenderError> {
    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(SurfaceError::Lost | SurfaceError::Outdated) => {
            // Skip this frame, the next one draws on the fresh surface
            renderer
                .surface
                .configure(&renderer.device, &renderer.surface_config);
            renderer.batch.reset();
            tracing::warn!("surface lost, reconfigured");
            return Ok(());
        }
        Err(e) => {
            return Err(RenderError::Frame(format!(
                "Failed to get current texture: {:?}",
                e
            )))
        }
    };
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    let rect_count = upload(renderer, &renderer.buffers.rects, &renderer.batch.rects);
    let circle_count = upload(renderer, &renderer.buffers.circles, &renderer.batch.circles);

    let [r, g, b, a] = renderer.batch.clear.map(f64::from);
    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color { r, g, b, a }),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_pipeline(&renderer.main_pipeline);
        pass.set_bind_group(0, &renderer.camera_bind_group, &[]);

        // Rects (paddles, centre line, score digits)
        let (rect_mesh, circle_mesh) = &renderer.meshes;
        if rect_count > 0 {
            pass.set_vertex_buffer(0, rect_mesh.vertex_buffer.slice(..));
            pass.set_index_buffer(rect_mesh.index_buffer.slice(..), IndexFormat::Uint16);
            pass.set_vertex_buffer(1, renderer.buffers.rects.slice(..));
            pass.draw_indexed(0..rect_mesh.index_count, 0, 0..rect_count);
        }

        // Circle (ball)
        if circle_count > 0 {
            pass.set_vertex_buffer(0, circle_mesh.vertex_buffer.slice(..));
            pass.set_index_buffer(circle_mesh.index_buffer.slice(..), IndexFormat::Uint16);
            pass.set_vertex_buffer(1, renderer.buffers.circles.slice(..));
            pass.draw_indexed(0..circle_mesh.index_count, 0, 0..circle_count);
        }
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();
    renderer.batch.reset();

    Ok(())
}

/// Write instances into `buffer`, returning how many will be drawn
fn upload(renderer: &Renderer, buffer: &Buffer, instances: &[InstanceData]) -> u32 {
    if instances.len() > MAX_INSTANCES {
        tracing::warn!(
            count = instances.len(),
            max = MAX_INSTANCES,
            "instance buffer full, dropping shapes"
        );
    }
    let instances = &instances[..instances.len().min(MAX_INSTANCES)];
    if !instances.is_empty() {
        renderer
            .queue
            .write_buffer(buffer, 0, bytemuck::cast_slice(instances));
    }
    instances.len() as u32
}
