/// Renderer-facing context: device/queue plus the formats a pipeline must match.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    pub depth_format: wgpu::TextureFormat,
    pub sample_count: u32,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        depth_format: wgpu::TextureFormat,
        sample_count: u32,
    ) -> Self {
        Self {
            device,
            queue,
            surface_format,
            depth_format,
            sample_count,
        }
    }
}

/// Open render pass for the current frame.
///
/// Color and depth are already cleared and the viewport is already set.
pub struct RenderTarget<'a> {
    pub pass: wgpu::RenderPass<'a>,
}

impl<'a> RenderTarget<'a> {
    #[inline]
    pub fn new(pass: wgpu::RenderPass<'a>) -> Self {
        Self { pass }
    }
}
