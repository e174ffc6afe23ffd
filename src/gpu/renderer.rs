use std::sync::Arc;

use wgpu::BindGroup;
use winit::window::Window;

use crate::gpu::{FrameBuffers, GpuContext, RenderPipeline};
use crate::render::colorize;
use crate::simulation::{FrameSink, HeightField};

/// Draws each presented height field to the window surface.
pub struct GpuRenderer {
    gpu: GpuContext,
    buffers: FrameBuffers,
    pipeline: RenderPipeline,
    bind_group: BindGroup,
    /// Reused CPU-side color staging
    colors: Vec<u32>,
}

impl GpuRenderer {
    /// Blocks on adapter and device creation
    pub fn new(window: Arc<Window>, grid_width: u32, grid_height: u32) -> Self {
        log::info!("Creating GPU context...");
        let gpu = pollster::block_on(GpuContext::new(window));

        let buffers = FrameBuffers::new(&gpu.device, &gpu.queue, grid_width, grid_height);
        let pipeline = RenderPipeline::new(&gpu.device, gpu.format());
        let bind_group = pipeline.create_bind_group(&gpu.device, &buffers);

        Self {
            gpu,
            buffers,
            pipeline,
            bind_group,
            colors: Vec::with_capacity((grid_width * grid_height) as usize),
        }
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.gpu.resize(new_size);
    }
}

impl FrameSink for GpuRenderer {
    fn present(&mut self, field: &HeightField) {
        colorize(field, &mut self.colors);
        self.buffers.upload_colors(&self.gpu.queue, &self.colors);

        let output = match self.gpu.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                // Reconfigure and skip this frame
                self.gpu.surface.configure(&self.gpu.device, &self.gpu.config);
                return;
            }
            Err(e) => {
                log::error!("Surface error: {:?}", e);
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame-encoder"),
            });
        self.pipeline.draw(&mut encoder, &view, &self.bind_group);

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }
}
