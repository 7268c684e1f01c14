#![forbid(unsafe_code)]

//! Font cell metrics.

/// Pixel dimensions of a glyph cell for the currently selected font.
///
/// Immutable for the duration of a cursor activation; the display context
/// queries its font provider whenever the active cursor changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetrics {
    /// Glyph cell width in pixels.
    pub width: u16,
    /// Glyph cell height in pixels.
    pub height: u16,
}

impl FontMetrics {
    /// Create new metrics.
    #[inline]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Cell width as a signed pixel extent.
    #[inline]
    pub const fn width_px(&self) -> i32 {
        self.width as i32
    }

    /// Cell height as a signed pixel extent.
    #[inline]
    pub const fn height_px(&self) -> i32 {
        self.height as i32
    }
}

impl Default for FontMetrics {
    /// The classic 8x8 system font cell.
    fn default() -> Self {
        Self::new(8, 8)
    }
}
