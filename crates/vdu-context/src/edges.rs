#![forbid(unsafe_code)]

//! Edge detection and the scroll-vs-wrap policy.
//!
//! After any cursor motion the engine classifies the cursor as off one or
//! more viewport edges (in normalized coordinates) and decides what to do:
//! the text cursor scrolls the viewport by default, while the graphics
//! cursor (and a `Y_WRAP` text cursor) wraps toroidally to the opposite
//! edge, matching a plotter-style cursor. Graphics with
//! `GR_NO_SPECIAL_ACTIONS` is allowed to sit outside the viewport.

use vdu_core::Point;

use crate::backend::{FontProvider, GraphicsBackend, ScrollDirection};
use crate::normalise;

impl<B: GraphicsBackend, F: FontProvider> crate::Context<B, F> {
    /// Normalized position of the active cursor.
    pub fn normalised_position(&self) -> Point {
        normalise::normalised_position(self.cursor_position(), self.viewport(), self.behaviour)
    }

    /// Usable logical width of the active viewport.
    pub fn normalised_width(&self) -> i32 {
        normalise::normalised_width(self.viewport(), self.behaviour, self.font())
    }

    /// Usable logical height of the active viewport.
    pub fn normalised_height(&self) -> i32 {
        normalise::normalised_height(self.viewport(), self.behaviour, self.font())
    }

    /// Usable width of the active viewport in whole text columns.
    pub fn normalised_char_width(&self) -> i32 {
        normalise::char_width(self.viewport(), self.behaviour, self.font())
    }

    /// Usable height of the active viewport in whole text rows.
    pub fn normalised_char_height(&self) -> i32 {
        normalise::char_height(self.viewport(), self.behaviour, self.font())
    }

    /// Cursor is beyond the logical right edge.
    pub fn cursor_off_right(&self) -> bool {
        self.normalised_position().x >= self.normalised_width()
    }

    /// Cursor is beyond the logical left edge.
    pub fn cursor_off_left(&self) -> bool {
        self.normalised_position().x < 0
    }

    /// Cursor is above the logical top edge.
    pub fn cursor_off_top(&self) -> bool {
        self.normalised_position().y < 0
    }

    /// Cursor is below the logical bottom edge.
    pub fn cursor_off_bottom(&self) -> bool {
        self.normalised_position().y >= self.normalised_height()
    }

    /// True when one more newline would make the cursor off-bottom.
    pub fn cursor_on_bottom_row(&self) -> bool {
        let font = self.font();
        let line = if self.behaviour.flip_xy() {
            font.width_px()
        } else {
            font.height_px()
        };
        self.normalised_position().y >= self.normalised_height() - line
    }

    /// Resolve an out-of-viewport cursor by scrolling or wrapping.
    ///
    /// Returns `true` if the cursor wrapped, `false` if nothing needed
    /// doing or the viewport scrolled instead.
    pub fn scroll_or_wrap(&mut self) -> bool {
        let off_left = self.cursor_off_left();
        let off_right = self.cursor_off_right();
        let off_top = self.cursor_off_top();
        let off_bottom = self.cursor_off_bottom();
        if !off_left && !off_right && !off_top && !off_bottom {
            return false;
        }

        if self.text_cursor_active() && !self.behaviour.y_wrap() {
            // Text cursor with vertical auto-scroll enabled.
            let font = self.font();
            let line = if self.behaviour.flip_xy() {
                font.width
            } else {
                font.height
            };
            if off_top {
                let viewport = *self.viewport();
                self.backend
                    .scroll_region(viewport, ScrollDirection::Down, line);
                loop {
                    self.cursor_down(true);
                    if !self.cursor_off_top() {
                        break;
                    }
                }
                return false;
            }
            if off_bottom {
                let viewport = *self.viewport();
                self.backend
                    .scroll_region(viewport, ScrollDirection::Up, line);
                loop {
                    self.cursor_up(true);
                    if !self.cursor_off_bottom() {
                        break;
                    }
                }
                return false;
            }
        }

        // Graphics cursor may be allowed to rest outside the viewport.
        if !self.text_cursor_active() && self.behaviour.gr_no_special_actions() {
            return false;
        }

        // Wrap to the opposite edge.
        if off_left {
            self.cursor_end_row();
        }
        if off_right {
            self.carriage_return();
        }
        if off_top {
            self.cursor_end_col();
        }
        if off_bottom {
            self.cursor_top();
        }
        true
    }

    /// Auto-newline after character emission: if the cursor ran off the
    /// right edge, perform CR + cursor-down and report `true`.
    ///
    /// Distinct from [`scroll_or_wrap`](Self::scroll_or_wrap), which is
    /// the edge resolution used after direct cursor motion; callers choose
    /// which to invoke.
    pub fn auto_newline(&mut self) -> bool {
        if self.cursor_off_right()
            && (self.text_cursor_active() || !self.behaviour.gr_no_special_actions())
        {
            self.carriage_return();
            self.cursor_down(false);
            return true;
        }
        false
    }

    /// Force the text cursor to viewport-home if it lies outside the
    /// glyph-aligned interior of `viewport`.
    ///
    /// Used after a viewport is resized or redefined.
    pub fn ensure_cursor_in_viewport(&mut self, viewport: vdu_core::Viewport) {
        let font = self.fonts.metrics(vdu_core::CursorType::Text);
        let x_adj = normalise::x_adjustment(&viewport, font);
        let y_adj = normalise::y_adjustment(&viewport, font);
        if self.text_cursor.x < viewport.x1
            || self.text_cursor.x > viewport.x2 - x_adj
            || self.text_cursor.y < viewport.y1
            || self.text_cursor.y > viewport.y2 - y_adj
        {
            self.home_text_cursor_in(viewport);
        }
    }
}
