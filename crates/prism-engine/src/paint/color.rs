/// Straight-alpha RGBA color with `f32` channels in `[0, 1]`.
///
/// Used for clear colors; vertex colors live in the vertex data itself.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Opaque gray with all channels set to `v`.
    #[inline]
    pub const fn gray(v: f32) -> Self {
        Self::rgb(v, v, v)
    }
}

impl From<Color> for wgpu::Color {
    fn from(c: Color) -> Self {
        wgpu::Color {
            r: c.r as f64,
            g: c.g as f64,
            b: c.b as f64,
            a: c.a as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_is_opaque() {
        let c = Color::gray(0.1);
        assert_eq!(c, Color::new(0.1, 0.1, 0.1, 1.0));
    }

    #[test]
    fn primaries_are_opaque() {
        for c in [Color::RED, Color::GREEN, Color::BLUE] {
            assert_eq!(c.a, 1.0);
            assert_eq!(c.r + c.g + c.b, 1.0);
        }
    }

    #[test]
    fn converts_to_wgpu() {
        let c: wgpu::Color = Color::RED.into();
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert_eq!(c.a, 1.0);
    }
}
