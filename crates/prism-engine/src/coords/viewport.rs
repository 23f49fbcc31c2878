/// Target aspect ratio expressed as `num:den` (e.g. 16:9).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AspectRatio {
    pub num: u32,
    pub den: u32,
}

impl AspectRatio {
    pub const WIDESCREEN: AspectRatio = AspectRatio::new(16, 9);

    #[inline]
    pub const fn new(num: u32, den: u32) -> Self {
        Self { num, den }
    }

    #[inline]
    pub fn as_f32(self) -> f32 {
        self.num as f32 / self.den as f32
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::WIDESCREEN
    }
}

/// Viewport rectangle in physical pixels, origin top-left.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Viewport {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[inline]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Viewport covering a whole `width` x `height` surface.
    #[inline]
    pub const fn full(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Computes the largest viewport of the given aspect ratio centered in a
    /// `width` x `height` surface.
    ///
    /// Ratios within `f32::EPSILON` of the target use the full surface. A wider
    /// surface gets side bars, a taller one gets top and bottom bars. Sizes are
    /// rounded to the nearest pixel and the remaining margin is split evenly,
    /// the odd pixel going to the far side.
    pub fn letterbox(width: u32, height: u32, aspect: AspectRatio) -> Self {
        if width == 0 || height == 0 || aspect.num == 0 || aspect.den == 0 {
            return Self::default();
        }

        let current = width as f32 / height as f32;
        let target = aspect.as_f32();

        if (current - target).abs() <= f32::EPSILON {
            return Self::full(width, height);
        }

        if current > target {
            let w = ((height as f32 * target).round_ties_even() as u32).min(width);
            Self::new((width - w) / 2, 0, w, height)
        } else {
            let h = ((width as f32 / target).round_ties_even() as u32).min(height);
            Self::new(0, (height - h) / 2, width, h)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lb(w: u32, h: u32) -> Viewport {
        Viewport::letterbox(w, h, AspectRatio::WIDESCREEN)
    }

    #[test]
    fn exact_ratio_uses_full_window() {
        assert_eq!(lb(1280, 720), Viewport::full(1280, 720));
        assert_eq!(lb(1920, 1080), Viewport::full(1920, 1080));
        assert_eq!(lb(16, 9), Viewport::full(16, 9));
    }

    #[test]
    fn wider_window_gets_side_bars() {
        let vp = lb(3000, 1080);
        assert_eq!(vp, Viewport::new(540, 0, 1920, 1080));

        let vp = lb(1000, 500);
        // 500 * 16 / 9 = 888.89
        assert_eq!(vp.width, 889);
        assert_eq!(vp.x, 55);
        assert_eq!(vp.height, 500);
    }

    #[test]
    fn f1_preset_is_slightly_wide() {
        // 1136x630 is not exactly 16:9.
        assert_eq!(lb(1136, 630), Viewport::new(8, 0, 1120, 630));
    }

    #[test]
    fn taller_window_gets_top_and_bottom_bars() {
        assert_eq!(lb(800, 800), Viewport::new(0, 175, 800, 450));
        assert_eq!(lb(1280, 1024), Viewport::new(0, 152, 1280, 720));
    }

    #[test]
    fn result_is_centered() {
        for (w, h) in [(3000, 1080), (800, 800), (1001, 333), (333, 1001)] {
            let vp = lb(w, h);
            let left = vp.x;
            let right = w - vp.x - vp.width;
            let top = vp.y;
            let bottom = h - vp.y - vp.height;
            assert!(right.abs_diff(left) <= 1, "{w}x{h}: {vp:?}");
            assert!(bottom.abs_diff(top) <= 1, "{w}x{h}: {vp:?}");
        }
    }

    #[test]
    fn result_fits_inside_window() {
        for (w, h) in [(1, 1), (2, 1000), (1000, 2), (1137, 640), (641, 360)] {
            let vp = lb(w, h);
            assert!(vp.x + vp.width <= w);
            assert!(vp.y + vp.height <= h);
        }
    }

    #[test]
    fn identical_input_gives_identical_output() {
        let a = lb(1366, 768);
        let b = lb(1366, 768);
        assert_eq!(a, b);
    }

    #[test]
    fn zero_sized_window_is_empty() {
        assert!(lb(0, 720).is_empty());
        assert!(lb(1280, 0).is_empty());
        assert!(!lb(1280, 720).is_empty());
    }

    #[test]
    fn other_ratios() {
        let square = AspectRatio::new(1, 1);
        assert_eq!(Viewport::letterbox(400, 300, square), Viewport::new(50, 0, 300, 300));
        assert_eq!(Viewport::letterbox(300, 400, square), Viewport::new(0, 50, 300, 300));
    }
}
