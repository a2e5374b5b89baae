//! Brightness to glyph quantization.

/// Ordered glyph table, darkest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphRamp {
    glyphs: &'static [char],
}

impl GlyphRamp {
    /// 10 levels from space (darkest) to `@` (brightest)
    pub const STANDARD: GlyphRamp = GlyphRamp::new(&[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@']);

    /// Panics if `glyphs` is empty.
    pub const fn new(glyphs: &'static [char]) -> Self {
        assert!(!glyphs.is_empty(), "glyph ramp must not be empty");
        Self { glyphs }
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn glyphs(&self) -> &'static [char] {
        self.glyphs
    }

    /// Mean of the three channels, not rounded.
    pub fn brightness(rgb: [u8; 3]) -> f64 {
        let [r, g, b] = rgb.map(f64::from);
        (r + g + b) / 3.0
    }

    /// Floor of `brightness * (len - 1) / 255`, for brightness in `0.0..=255.0`.
    pub fn index_for(&self, brightness: f64) -> usize {
        let last = self.glyphs.len() - 1;
        ((brightness * last as f64 / 255.0) as usize).min(last)
    }

    pub fn glyph_for(&self, brightness: f64) -> char {
        self.glyphs[self.index_for(brightness)]
    }
}

impl Default for GlyphRamp {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        let ramp = GlyphRamp::STANDARD;
        assert_eq!(ramp.index_for(0.0), 0);
        assert_eq!(ramp.glyph_for(0.0), ' ');
        assert_eq!(ramp.index_for(255.0), 9);
        assert_eq!(ramp.glyph_for(255.0), '@');
    }

    #[test]
    fn test_index_is_floored() {
        let ramp = GlyphRamp::STANDARD;
        // 28.33.. * 9 / 255 = 0.99..
        assert_eq!(ramp.index_for(28.3), 0);
        assert_eq!(ramp.index_for(28.34), 1);
        assert_eq!(ramp.index_for(254.9), 8);
    }

    #[test]
    fn test_monotonic() {
        let ramp = GlyphRamp::STANDARD;
        let mut prev = 0;
        for step in 0..=765 {
            let idx = ramp.index_for(step as f64 / 3.0);
            assert!(idx >= prev, "index dropped at brightness {}", step as f64 / 3.0);
            prev = idx;
        }
        assert_eq!(prev, 9);
    }

    #[test]
    fn test_brightness_is_not_truncated() {
        assert_eq!(GlyphRamp::brightness([0, 0, 1]), 1.0 / 3.0);
        assert_eq!(GlyphRamp::brightness([255, 255, 255]), 255.0);
    }

    #[test]
    fn test_white_block_maps_to_brightest() {
        let ramp = GlyphRamp::STANDARD;
        assert_eq!(ramp.glyph_for(GlyphRamp::brightness([255, 255, 255])), '@');
    }

    #[test]
    fn test_custom_ramp() {
        let ramp = GlyphRamp::new(&['a', 'b']);
        assert_eq!(ramp.len(), 2);
        assert_eq!(ramp.glyph_for(127.0), 'a');
        assert_eq!(ramp.glyph_for(255.0), 'b');
    }
}
