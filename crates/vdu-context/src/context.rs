#![forbid(unsafe_code)]

//! The display context object.
//!
//! A [`Context`] owns the complete cursor/viewport state for one display:
//! the text and graphics cursor positions, the text and graphics
//! viewports, the behaviour flags, text colors, the cursor overlay, and
//! the paged-output governor. "Active" cursor and viewport are tagged
//! selectors into the owned pairs rather than references, so a context is
//! a plain movable value with no lifetime entanglements.

use vdu_core::{CursorBehaviour, CursorType, FontMetrics, Point, Rgb, Viewport, ViewportType};

use crate::backend::{FontProvider, GraphicsBackend};
use crate::overlay::TextCursorOverlay;
use crate::paging::PagedOutput;

/// Cursor/viewport engine state for one display.
///
/// Single-threaded by contract: all operations take `&mut self` and must
/// be invoked from the one consumer thread that owns display state.
#[derive(Debug)]
pub struct Context<B, F> {
    pub(crate) backend: B,
    pub(crate) fonts: F,
    pub(crate) canvas_width: u16,
    pub(crate) canvas_height: u16,

    pub(crate) text_cursor: Point,
    pub(crate) graphics_cursor: Point,
    pub(crate) active_cursor: CursorType,

    pub(crate) text_viewport: Viewport,
    pub(crate) graphics_viewport: Viewport,
    pub(crate) active_viewport: ViewportType,

    pub(crate) behaviour: CursorBehaviour,
    pub(crate) text_fg: Rgb,
    pub(crate) text_bg: Rgb,

    pub(crate) overlay: TextCursorOverlay,
    pub(crate) paging: PagedOutput,
}

impl<B: GraphicsBackend, F: FontProvider> Context<B, F> {
    /// Create a context for a `canvas_width x canvas_height` pixel canvas.
    ///
    /// Both viewports start at full canvas, both cursors at the top-left,
    /// the text cursor active. No overlay exists until
    /// [`update_overlay`](Self::update_overlay) first runs with a valid
    /// glyph box.
    pub fn new(backend: B, fonts: F, canvas_width: u16, canvas_height: u16) -> Self {
        let full = Viewport::full(canvas_width, canvas_height);
        Self {
            backend,
            fonts,
            canvas_width,
            canvas_height,
            text_cursor: Point::default(),
            graphics_cursor: Point::default(),
            active_cursor: CursorType::Text,
            text_viewport: full,
            graphics_viewport: full,
            active_viewport: ViewportType::Text,
            behaviour: CursorBehaviour::default(),
            text_fg: Rgb::WHITE,
            text_bg: Rgb::BLACK,
            overlay: TextCursorOverlay::default(),
            paging: PagedOutput::default(),
        }
    }

    /// The graphics backend, for inspection.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Metrics of the font bound to the active cursor.
    pub fn font(&self) -> FontMetrics {
        self.fonts.metrics(self.active_cursor)
    }

    /// Whether the text cursor is the active cursor.
    #[inline]
    pub fn text_cursor_active(&self) -> bool {
        self.active_cursor == CursorType::Text
    }

    /// The raw position of the active cursor.
    pub fn cursor_position(&self) -> Point {
        match self.active_cursor {
            CursorType::Text => self.text_cursor,
            CursorType::Graphics => self.graphics_cursor,
        }
    }

    /// The raw text cursor position.
    pub fn text_cursor_position(&self) -> Point {
        self.text_cursor
    }

    /// The raw graphics cursor position.
    pub fn graphics_cursor_position(&self) -> Point {
        self.graphics_cursor
    }

    pub(crate) fn cursor_mut(&mut self) -> &mut Point {
        match self.active_cursor {
            CursorType::Text => &mut self.text_cursor,
            CursorType::Graphics => &mut self.graphics_cursor,
        }
    }

    /// The active viewport.
    pub fn viewport(&self) -> &Viewport {
        match self.active_viewport {
            ViewportType::Text => &self.text_viewport,
            ViewportType::Graphics => &self.graphics_viewport,
        }
    }

    /// Select the active viewport.
    pub fn set_active_viewport(&mut self, viewport: ViewportType) {
        self.active_viewport = viewport;
    }

    /// Select the active cursor, switching viewport and font with it.
    pub fn set_active_cursor(&mut self, cursor: CursorType) {
        self.active_cursor = cursor;
        match cursor {
            CursorType::Text => {
                self.set_active_viewport(ViewportType::Text);
                self.sync_overlay_position();
            }
            CursorType::Graphics => {
                self.set_active_viewport(ViewportType::Graphics);
            }
        }
        self.update_overlay_visibility();
    }

    /// The active cursor selector.
    pub fn active_cursor(&self) -> CursorType {
        self.active_cursor
    }

    /// Redefine the text viewport; the text cursor homes if it no longer
    /// fits the new region.
    pub fn set_text_viewport(&mut self, viewport: Viewport) {
        self.text_viewport = viewport;
        self.ensure_cursor_in_viewport(viewport);
    }

    /// Redefine the graphics viewport.
    pub fn set_graphics_viewport(&mut self, viewport: Viewport) {
        self.graphics_viewport = viewport;
    }

    /// The current behaviour flags.
    pub fn behaviour(&self) -> CursorBehaviour {
        self.behaviour
    }

    /// Set the given behaviour flags, leaving the others unchanged.
    pub fn set_behaviour_flags(&mut self, flags: CursorBehaviour) {
        self.behaviour.insert(flags);
    }

    /// Clear the given behaviour flags, leaving the others unchanged.
    pub fn clear_behaviour_flags(&mut self, flags: CursorBehaviour) {
        self.behaviour.remove(flags);
    }

    /// Toggle the given behaviour flags, leaving the others unchanged.
    pub fn toggle_behaviour_flags(&mut self, flags: CursorBehaviour) {
        self.behaviour.toggle(flags);
    }

    /// Set the text foreground/background colors the overlay color derives
    /// from. Recolors the overlay in place when only the derived XOR color
    /// changes.
    pub fn set_text_colors(&mut self, fg: Rgb, bg: Rgb) {
        self.text_fg = fg;
        self.text_bg = bg;
        self.update_overlay();
    }
}
