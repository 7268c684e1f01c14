#![forbid(unsafe_code)]

//! Color types.

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0);
}
