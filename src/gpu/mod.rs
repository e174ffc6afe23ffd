mod buffers;
mod context;
mod render;
mod renderer;

pub use buffers::{FrameBuffers, RenderParams};
pub use context::GpuContext;
pub use render::RenderPipeline;
pub use renderer::GpuRenderer;
