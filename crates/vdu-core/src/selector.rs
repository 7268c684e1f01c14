#![forbid(unsafe_code)]

//! Tagged selectors for the "active" cursor and viewport.
//!
//! The engine owns a fixed pair of cursors and a fixed pair of viewports;
//! these enums select which member of each pair is current. Using tags
//! instead of references keeps the context freely movable and rules out
//! dangling selectors.

/// Selects which cursor (and font) is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorType {
    /// The text cursor: glyph-cell motion, scrolling, paged output.
    #[default]
    Text,
    /// The graphics cursor: plotter-style motion, toroidal wrapping.
    Graphics,
}

/// Selects which viewport is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewportType {
    /// The text viewport.
    #[default]
    Text,
    /// The graphics viewport.
    Graphics,
}

#[cfg(test)]
mod tests {
    use super::{CursorType, ViewportType};

    #[test]
    fn defaults_are_text() {
        assert_eq!(CursorType::default(), CursorType::Text);
        assert_eq!(ViewportType::default(), ViewportType::Text);
    }
}
