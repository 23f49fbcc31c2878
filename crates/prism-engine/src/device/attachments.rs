use winit::dpi::PhysicalSize;

/// Depth format used by every frame.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Size-dependent render attachments owned alongside the surface.
///
/// - `depth` always exists and matches the sample count.
/// - `msaa_color` exists only when `sample_count > 1`; it is resolved into the
///   surface texture at the end of the pass.
pub struct FrameAttachments {
    pub depth: wgpu::TextureView,
    pub msaa_color: Option<wgpu::TextureView>,
    pub sample_count: u32,
    pub size: PhysicalSize<u32>,
}

impl FrameAttachments {
    pub fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        size: PhysicalSize<u32>,
        sample_count: u32,
    ) -> Self {
        let extent = wgpu::Extent3d {
            width: size.width.max(1),
            height: size.height.max(1),
            depth_or_array_layers: 1,
        };

        let depth = device
            .create_texture(&wgpu::TextureDescriptor {
                label: Some("prism depth"),
                size: extent,
                mip_level_count: 1,
                sample_count,
                dimension: wgpu::TextureDimension::D2,
                format: DEPTH_FORMAT,
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                view_formats: &[],
            })
            .create_view(&wgpu::TextureViewDescriptor::default());

        let msaa_color = (sample_count > 1).then(|| {
            device
                .create_texture(&wgpu::TextureDescriptor {
                    label: Some("prism msaa color"),
                    size: extent,
                    mip_level_count: 1,
                    sample_count,
                    dimension: wgpu::TextureDimension::D2,
                    format: color_format,
                    usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                    view_formats: &[],
                })
                .create_view(&wgpu::TextureViewDescriptor::default())
        });

        log::debug!(
            "frame attachments {}x{} ({}x msaa)",
            extent.width,
            extent.height,
            sample_count
        );

        Self {
            depth,
            msaa_color,
            sample_count,
            size,
        }
    }
}
