use super::resources::InstanceBuffer;
use super::Renderer;
use crate::error::ClientError;
use crate::mesh::Mesh;
use crate::scene::Scene;
use wgpu::*;

// Cleared to the top background color; the gradient bands cover it anyway
const CLEAR_COLOR: Color = Color {
    r: 0.007,
    g: 0.009,
    b: 0.029,
    a: 1.0,
};

pub fn draw_frame(renderer: &mut Renderer, scene: &Scene) -> Result<(), ClientError> {
    let output = renderer
        .surface
        .get_current_texture()
        .map_err(|e| ClientError::SurfaceTexture(format!("{:?}", e)))?;
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    renderer.buffers.rects.upload(&renderer.queue, &scene.rects);
    renderer.buffers.circles.upload(&renderer.queue, &scene.circles);
    renderer.buffers.overlay.upload(&renderer.queue, &scene.overlay);

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(CLEAR_COLOR),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_pipeline(&renderer.sprite_pipeline);
        pass.set_bind_group(0, &renderer.camera_bind_group, &[]);

        // Board, then round things on top, then the end-screen shade
        draw_instances(&mut pass, &renderer.rect_mesh, &renderer.buffers.rects);
        draw_instances(&mut pass, &renderer.circle_mesh, &renderer.buffers.circles);
        draw_instances(&mut pass, &renderer.rect_mesh, &renderer.buffers.overlay);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

fn draw_instances<'a>(pass: &mut RenderPass<'a>, mesh: &'a Mesh, instances: &'a InstanceBuffer) {
    if instances.count == 0 {
        return;
    }
    pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
    pass.set_index_buffer(mesh.index_buffer.slice(..), IndexFormat::Uint16);
    pass.set_vertex_buffer(1, instances.buffer.slice(..));
    pass.draw_indexed(0..mesh.index_count, 0, 0..instances.count);
}
