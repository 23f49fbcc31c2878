use winit::dpi::PhysicalSize;

use super::SurfaceErrorAction;

/// MSAA sample counts wgpu can expose, highest first.
const SAMPLE_COUNTS: [u32; 5] = [16, 8, 4, 2, 1];

pub(crate) fn choose_surface_format(
    caps: &wgpu::SurfaceCapabilities,
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    if caps.formats.is_empty() {
        return None;
    }

    if prefer_srgb {
        let preferred = [
            wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::TextureFormat::Rgba8UnormSrgb,
        ];
        for f in preferred {
            if caps.formats.contains(&f) {
                return Some(f);
            }
        }
    }

    Some(caps.formats[0])
}

pub(crate) fn choose_alpha_mode(
    caps: &wgpu::SurfaceCapabilities,
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| caps.alpha_modes.contains(m))
        .or_else(|| caps.alpha_modes.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Uses `requested` when the surface supports it.
///
/// Adaptive vsync (`FifoRelaxed`) is not universally available; `Fifo` is
/// guaranteed by wgpu and is the fallback for any unsupported request.
pub(crate) fn choose_present_mode(
    caps: &wgpu::SurfaceCapabilities,
    requested: wgpu::PresentMode,
) -> wgpu::PresentMode {
    if caps.present_modes.contains(&requested) {
        requested
    } else {
        wgpu::PresentMode::Fifo
    }
}

/// Format features the device will validate against.
///
/// Adapter-reported flags apply only when the device enabled
/// `TEXTURE_ADAPTER_SPECIFIC_FORMAT_FEATURES` or the adapter is downlevel.
/// Otherwise wgpu checks the format's guaranteed features.
pub(crate) fn usable_format_flags(
    format: wgpu::TextureFormat,
    adapter_flags: wgpu::TextureFormatFeatureFlags,
    device_features: wgpu::Features,
    downlevel: bool,
) -> wgpu::TextureFormatFeatureFlags {
    if downlevel
        || device_features.contains(wgpu::Features::TEXTURE_ADAPTER_SPECIFIC_FORMAT_FEATURES)
    {
        adapter_flags
    } else {
        format.guaranteed_format_features(device_features).flags
    }
}

/// Highest sample count not above `requested` that the format supports.
pub(crate) fn choose_sample_count(
    flags: wgpu::TextureFormatFeatureFlags,
    requested: u32,
) -> u32 {
    SAMPLE_COUNTS
        .into_iter()
        .filter(|&n| n <= requested.max(1))
        .find(|&n| n == 1 || flags.sample_count_supported(n))
        .unwrap_or(1)
}

pub(crate) fn apply_resize(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &mut wgpu::SurfaceConfiguration,
    size: &mut PhysicalSize<u32>,
    new_size: PhysicalSize<u32>,
) -> bool {
    *size = new_size;

    // wgpu rejects 0x0 surfaces; configuration is deferred until a real size arrives.
    if new_size.width == 0 || new_size.height == 0 {
        return false;
    }

    config.width = new_size.width;
    config.height = new_size.height;

    surface.configure(device, config);
    true
}

pub(crate) fn map_surface_error(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    size: PhysicalSize<u32>,
    err: wgpu::SurfaceError,
) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
            if size.width > 0 && size.height > 0 {
                surface.configure(device, config);
            }
            SurfaceErrorAction::Reconfigured
        }
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout => SurfaceErrorAction::SkipFrame,
        wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}
