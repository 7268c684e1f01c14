#![forbid(unsafe_code)]

//! Recording test doubles for the backend seams.
//!
//! [`RecordingBackend`] logs every backend call so tests can assert on
//! call ordering (release-before-allocate, unregister-before-free) as
//! well as final state. Published rather than test-gated so downstream
//! crates can drive a full context in their own tests.

use vdu_core::{CursorType, FontMetrics, Viewport};

use crate::backend::{BackendError, FontProvider, GraphicsBackend, OverlayHandle, ScrollDirection};
use crate::context::Context;

/// One recorded backend invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    AllocOverlay { width: u16, height: u16, color: u8 },
    FillOverlay { id: u32, color: u8 },
    FreeOverlay { id: u32 },
    SetVisible { id: u32, visible: bool },
    SetXor { id: u32 },
    MoveOverlay { id: u32, x: i32, y: i32 },
    RegisterTextCursor { id: Option<u32> },
    ScrollRegion {
        viewport: Viewport,
        direction: ScrollDirection,
        amount: u16,
    },
}

/// A backend that records calls instead of touching hardware.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    pub calls: Vec<BackendCall>,
    /// When set, every allocation fails with `OutOfMemory`.
    pub fail_alloc: bool,
    next_id: u32,
}

impl GraphicsBackend for RecordingBackend {
    fn alloc_overlay(
        &mut self,
        width: u16,
        height: u16,
        data: &[u8],
    ) -> Result<OverlayHandle, BackendError> {
        if self.fail_alloc {
            return Err(BackendError::OutOfMemory);
        }
        self.next_id += 1;
        self.calls.push(BackendCall::AllocOverlay {
            width,
            height,
            color: data.first().copied().unwrap_or(0),
        });
        Ok(OverlayHandle::new(self.next_id))
    }

    fn fill_overlay(&mut self, handle: OverlayHandle, color: u8) {
        self.calls.push(BackendCall::FillOverlay {
            id: handle.id(),
            color,
        });
    }

    fn free_overlay(&mut self, handle: OverlayHandle) {
        self.calls.push(BackendCall::FreeOverlay { id: handle.id() });
    }

    fn set_overlay_visible(&mut self, handle: OverlayHandle, visible: bool) {
        self.calls.push(BackendCall::SetVisible {
            id: handle.id(),
            visible,
        });
    }

    fn set_overlay_xor(&mut self, handle: OverlayHandle) {
        self.calls.push(BackendCall::SetXor { id: handle.id() });
    }

    fn move_overlay(&mut self, handle: OverlayHandle, x: i32, y: i32) {
        self.calls.push(BackendCall::MoveOverlay {
            id: handle.id(),
            x,
            y,
        });
    }

    fn register_text_cursor(&mut self, handle: Option<OverlayHandle>) {
        self.calls.push(BackendCall::RegisterTextCursor {
            id: handle.map(|h| h.id()),
        });
    }

    fn scroll_region(&mut self, viewport: Viewport, direction: ScrollDirection, amount: u16) {
        self.calls.push(BackendCall::ScrollRegion {
            viewport,
            direction,
            amount,
        });
    }
}

/// A provider with one fixed 8x8 font for both cursors.
#[derive(Debug, Default)]
pub struct FixedFonts;

impl FontProvider for FixedFonts {
    fn metrics(&self, _cursor: CursorType) -> FontMetrics {
        FontMetrics::new(8, 8)
    }
}

/// A fresh context on a 320x192 canvas (40x24 text cells at 8x8).
pub fn test_context() -> Context<RecordingBackend, FixedFonts> {
    Context::new(RecordingBackend::default(), FixedFonts, 320, 192)
}

/// Like [`test_context`] but every overlay allocation fails.
pub fn failing_context() -> Context<RecordingBackend, FixedFonts> {
    let backend = RecordingBackend {
        fail_alloc: true,
        ..RecordingBackend::default()
    };
    Context::new(backend, FixedFonts, 320, 192)
}
