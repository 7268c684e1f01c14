#![forbid(unsafe_code)]

//! Narrow interfaces to the excluded collaborators.
//!
//! The engine never rasterizes, blits, or scrolls pixels itself; it calls
//! a [`GraphicsBackend`] for overlay and scroll mechanics and a
//! [`FontProvider`] for glyph cell metrics. Both are supplied at context
//! construction, so tests can substitute recording fakes
//! (see [`crate::testing`]).

use std::fmt;

use vdu_core::{CursorType, FontMetrics, Viewport};

/// Opaque handle to a backend-owned overlay object.
///
/// The engine holds at most one (for the text cursor) and releases it
/// before allocating a replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayHandle(u32);

impl OverlayHandle {
    /// Create a handle from a backend-assigned id.
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// The backend-assigned id.
    #[inline]
    pub const fn id(&self) -> u32 {
        self.0
    }
}

/// Direction for scrolling a viewport's content by one text row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Content moves up (new blank row appears at the bottom).
    Up,
    /// Content moves down (new blank row appears at the top).
    Down,
}

/// Errors raised by the graphics backend.
#[derive(Debug)]
pub enum BackendError {
    /// Overlay pixel storage could not be allocated.
    OutOfMemory,
    /// The backend rejected the request.
    Rejected(String),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory => write!(f, "out of overlay memory"),
            Self::Rejected(msg) => write!(f, "backend rejected request: {msg}"),
        }
    }
}

impl std::error::Error for BackendError {}

/// Overlay and scroll mechanics owned by the rendering layer.
///
/// The engine uploads a filled pixel buffer at allocation time and from
/// then on refers to the overlay by handle. Composition is XOR: painting
/// the overlay twice over the same pixels is a no-op, which is what makes
/// flash and un-flash exact inverses.
pub trait GraphicsBackend {
    /// Create an overlay object of `width x height` pixels from `data`
    /// (one RGBA2222 byte per pixel).
    fn alloc_overlay(
        &mut self,
        width: u16,
        height: u16,
        data: &[u8],
    ) -> Result<OverlayHandle, BackendError>;

    /// Refill an existing overlay with a single color, keeping its size.
    fn fill_overlay(&mut self, handle: OverlayHandle, color: u8);

    /// Destroy an overlay object.
    fn free_overlay(&mut self, handle: OverlayHandle);

    /// Show or hide an overlay.
    fn set_overlay_visible(&mut self, handle: OverlayHandle, visible: bool);

    /// Switch an overlay to XOR composition.
    fn set_overlay_xor(&mut self, handle: OverlayHandle);

    /// Move an overlay to an absolute pixel position.
    fn move_overlay(&mut self, handle: OverlayHandle, x: i32, y: i32);

    /// Register (or unregister, with `None`) an overlay as the system's
    /// text cursor.
    fn register_text_cursor(&mut self, handle: Option<OverlayHandle>);

    /// Scroll a viewport's content by `amount` pixels in `direction`.
    fn scroll_region(&mut self, viewport: Viewport, direction: ScrollDirection, amount: u16);
}

/// Glyph cell metrics for the font bound to each cursor type.
pub trait FontProvider {
    /// Metrics of the font selected for `cursor`.
    fn metrics(&self, cursor: CursorType) -> FontMetrics;
}

#[cfg(test)]
mod tests {
    use super::{BackendError, OverlayHandle};

    #[test]
    fn overlay_handle_round_trips_id() {
        assert_eq!(OverlayHandle::new(7).id(), 7);
    }

    #[test]
    fn backend_error_display() {
        assert_eq!(BackendError::OutOfMemory.to_string(), "out of overlay memory");
        let err = BackendError::Rejected("bad size".into());
        assert_eq!(err.to_string(), "backend rejected request: bad size");
    }
}
