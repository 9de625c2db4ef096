use crate::camera::{Camera, CameraUniform};
use crate::scene::InstanceData;
use wgpu::util::DeviceExt;
use wgpu::*;

/// Instances each list can hold; the full board needs well under this
pub const INSTANCE_CAPACITY: usize = 128;

/// A vertex buffer of instances plus how many are live this frame
pub struct InstanceBuffer {
    pub buffer: Buffer,
    pub count: u32,
    capacity: usize,
}

impl InstanceBuffer {
    fn new(device: &Device, label: &str, capacity: usize) -> Self {
        let buffer = device.create_buffer(&BufferDescriptor {
            label: Some(label),
            size: (std::mem::size_of::<InstanceData>() * capacity) as u64,
            usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        Self {
            buffer,
            count: 0,
            capacity,
        }
    }

    /// Upload `instances`, dropping any beyond capacity
    pub fn upload(&mut self, queue: &Queue, instances: &[InstanceData]) {
        let len = instances.len().min(self.capacity);
        if len < instances.len() {
            log::warn!(
                "instance buffer full, dropping {} sprites",
                instances.len() - len
            );
        }
        if len > 0 {
            queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&instances[..len]));
        }
        self.count = len as u32;
    }
}

pub struct GameBuffers {
    pub camera: Buffer,
    pub rects: InstanceBuffer,
    pub circles: InstanceBuffer,
    pub overlay: InstanceBuffer,
}

pub fn create_buffers(device: &Device, camera: &Camera) -> GameBuffers {
    // Camera buffer
    let camera_uniform = CameraUniform::from_camera(camera);

    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    GameBuffers {
        camera: camera_buffer,
        rects: InstanceBuffer::new(device, "Rect Instance Buffer", INSTANCE_CAPACITY),
        circles: InstanceBuffer::new(device, "Circle Instance Buffer", INSTANCE_CAPACITY),
        overlay: InstanceBuffer::new(device, "Overlay Instance Buffer", INSTANCE_CAPACITY),
    }
}
