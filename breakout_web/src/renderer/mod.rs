pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use crate::camera::Camera;
use crate::error::ClientError;
use crate::mesh::{create_circle, create_rectangle, Mesh};
use crate::scene::Scene;
use resources::GameBuffers;
use wgpu::*;

const CIRCLE_SEGMENTS: u16 = 32;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub size: (u32, u32),
    pub camera: Camera,

    pub sprite_pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,

    pub buffers: GameBuffers,
    pub rect_mesh: Mesh,
    pub circle_mesh: Mesh,
}

impl Renderer {
    pub async fn new(canvas: web_sys::HtmlCanvasElement) -> Result<Self, ClientError> {
        let ctx = init::init_wgpu(canvas).await?;
        let camera = Camera::screen(ctx.size.0 as f32, ctx.size.1 as f32);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let pipes = pipeline::create_pipelines(&ctx.device, ctx.config.format);

        let rect_mesh = create_rectangle(&ctx.device);
        let circle_mesh = create_circle(&ctx.device, CIRCLE_SEGMENTS);

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
            sprite_pipeline: pipes.sprite_pipeline,
            camera_bind_group,
            buffers,
            rect_mesh,
            circle_mesh,
        })
    }

    pub fn draw(&mut self, scene: &Scene) -> Result<(), ClientError> {
        draw::draw_frame(self, scene)
    }
}
