use wgpu::{Buffer, BufferUsages, Device, Queue};

/// Grid dimensions passed to the render shader (16 bytes)
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RenderParams {
    pub grid_width: u32,
    pub grid_height: u32,
    pub _padding: [u32; 2],
}

/// Per-frame cell colors plus the uniform describing their layout
pub struct FrameBuffers {
    /// Packed RGBA per cell, row-major
    pub color_buffer: Buffer,
    pub render_params_buffer: Buffer,
    pub width: u32,
    pub height: u32,
}

impl FrameBuffers {
    pub fn new(device: &Device, queue: &Queue, width: u32, height: u32) -> Self {
        let cell_count = width * height;
        let buffer_size = (cell_count as usize * std::mem::size_of::<u32>()) as u64;

        let color_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("cell-color-buffer"),
            size: buffer_size,
            usage: BufferUsages::STORAGE | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let render_params_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("render-params-buffer"),
            size: std::mem::size_of::<RenderParams>() as u64,
            usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let params = RenderParams {
            grid_width: width,
            grid_height: height,
            _padding: [0, 0],
        };
        queue.write_buffer(&render_params_buffer, 0, bytemuck::bytes_of(&params));

        Self {
            color_buffer,
            render_params_buffer,
            width,
            height,
        }
    }

    /// Upload one frame of packed colors
    pub fn upload_colors(&self, queue: &Queue, colors: &[u32]) {
        debug_assert_eq!(colors.len(), (self.width * self.height) as usize);
        queue.write_buffer(&self.color_buffer, 0, bytemuck::cast_slice(colors));
    }
}
