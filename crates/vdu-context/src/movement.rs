#![forbid(unsafe_code)]

//! Orientation-aware cursor movement.
//!
//! Logical "up/down/left/right" are redirected through the flip/invert
//! flags, so on an inverted-vertical viewport a "down" moves the raw Y
//! coordinate upward. Every mutating operation re-synchronizes the
//! overlay position before returning.

use vdu_core::{CursorBehaviour, FontMetrics, Point, Viewport};

use crate::backend::{FontProvider, GraphicsBackend};
use crate::normalise;
use vdu_core::{KeyModifiers, PauseRequest};

/// Snap a cursor to the logical left edge of its row.
fn cr_point(cursor: &mut Point, viewport: &Viewport, behaviour: CursorBehaviour, font: FontMetrics) {
    if behaviour.flip_xy() {
        cursor.y = if behaviour.invert_vertical() {
            viewport.y2 + 1 - font.height_px() - normalise::y_adjustment(viewport, font)
        } else {
            viewport.y1
        };
    } else {
        cursor.x = if behaviour.invert_horizontal() {
            viewport.x2 + 1 - font.width_px() - normalise::x_adjustment(viewport, font)
        } else {
            viewport.x1
        };
    }
}

/// Snap a cursor to the logical top edge of its column.
fn top_point(
    cursor: &mut Point,
    viewport: &Viewport,
    behaviour: CursorBehaviour,
    font: FontMetrics,
) {
    if behaviour.flip_xy() {
        cursor.x = if behaviour.invert_horizontal() {
            viewport.x2 + 1 - font.width_px() - normalise::x_adjustment(viewport, font)
        } else {
            viewport.x1
        };
    } else {
        cursor.y = if behaviour.invert_vertical() {
            viewport.y2 + 1 - font.height_px() - normalise::y_adjustment(viewport, font)
        } else {
            viewport.y1
        };
    }
}

/// Snap a cursor to the last whole cell of its row.
fn end_row_point(
    cursor: &mut Point,
    viewport: &Viewport,
    behaviour: CursorBehaviour,
    font: FontMetrics,
) {
    if behaviour.flip_xy() {
        cursor.y = if behaviour.invert_vertical() {
            viewport.y1
        } else {
            viewport.y2 + 1 - font.height_px() - normalise::y_adjustment(viewport, font)
        };
    } else {
        cursor.x = if behaviour.invert_horizontal() {
            viewport.x1
        } else {
            viewport.x2 + 1 - font.width_px() - normalise::x_adjustment(viewport, font)
        };
    }
}

/// Snap a cursor to the last whole cell of its column.
fn end_col_point(
    cursor: &mut Point,
    viewport: &Viewport,
    behaviour: CursorBehaviour,
    font: FontMetrics,
) {
    if behaviour.flip_xy() {
        cursor.x = if behaviour.invert_horizontal() {
            viewport.x1
        } else {
            viewport.x2 + 1 - font.width_px() - normalise::x_adjustment(viewport, font)
        };
    } else {
        cursor.y = if behaviour.invert_vertical() {
            viewport.y1
        } else {
            viewport.y2 + 1 - font.height_px() - normalise::y_adjustment(viewport, font)
        };
    }
}

impl<B: GraphicsBackend, F: FontProvider> crate::Context<B, F> {
    /// Move the active cursor up one line.
    ///
    /// With `move_only` the edge policy is skipped, which the scroll
    /// resolution itself relies on to avoid recursion.
    pub fn cursor_up(&mut self, move_only: bool) {
        let font = self.font();
        let behaviour = self.behaviour;
        let cursor = self.cursor_mut();
        if behaviour.flip_xy() {
            let dx = if behaviour.invert_horizontal() {
                font.width_px()
            } else {
                -font.width_px()
            };
            cursor.x = cursor.x.saturating_add(dx);
        } else {
            let dy = if behaviour.invert_vertical() {
                font.height_px()
            } else {
                -font.height_px()
            };
            cursor.y = cursor.y.saturating_add(dy);
        }
        self.sync_overlay_position();
        if !move_only {
            self.scroll_or_wrap();
        }
    }

    /// Move the active cursor down one line.
    pub fn cursor_down(&mut self, move_only: bool) {
        let font = self.font();
        let behaviour = self.behaviour;
        let cursor = self.cursor_mut();
        if behaviour.flip_xy() {
            let dx = if behaviour.invert_horizontal() {
                -font.width_px()
            } else {
                font.width_px()
            };
            cursor.x = cursor.x.saturating_add(dx);
        } else {
            let dy = if behaviour.invert_vertical() {
                -font.height_px()
            } else {
                font.height_px()
            };
            cursor.y = cursor.y.saturating_add(dy);
        }
        self.sync_overlay_position();
        if !move_only {
            self.scroll_or_wrap();
        }
    }

    /// Move the active cursor back one character. A wrap off the left
    /// edge completes a reverse line-wrap by also moving up a line.
    pub fn cursor_left(&mut self) {
        let font = self.font();
        let behaviour = self.behaviour;
        let cursor = self.cursor_mut();
        if behaviour.flip_xy() {
            let dy = if behaviour.invert_vertical() {
                font.height_px()
            } else {
                -font.height_px()
            };
            cursor.y = cursor.y.saturating_add(dy);
        } else {
            let dx = if behaviour.invert_horizontal() {
                font.width_px()
            } else {
                -font.width_px()
            };
            cursor.x = cursor.x.saturating_add(dx);
        }
        self.sync_overlay_position();
        if self.scroll_or_wrap() {
            self.cursor_up(false);
        }
    }

    /// Advance the active cursor right one character.
    ///
    /// Auto-newline is left to the caller (see
    /// [`auto_newline`](Self::auto_newline)) so batch character emission
    /// controls wrap timing, which scroll protection depends on.
    pub fn cursor_right(&mut self) {
        let font = self.font();
        let behaviour = self.behaviour;
        let cursor = self.cursor_mut();
        if behaviour.flip_xy() {
            let dy = if behaviour.invert_vertical() {
                -font.height_px()
            } else {
                font.height_px()
            };
            cursor.y = cursor.y.saturating_add(dy);
        } else {
            let dx = if behaviour.invert_horizontal() {
                -font.width_px()
            } else {
                font.width_px()
            };
            cursor.x = cursor.x.saturating_add(dx);
        }
        self.sync_overlay_position();
    }

    /// Move the active cursor to the logical leftmost position in the
    /// viewport.
    pub fn carriage_return(&mut self) {
        let font = self.font();
        let behaviour = self.behaviour;
        let viewport = *self.viewport();
        cr_point(self.cursor_mut(), &viewport, behaviour, font);
        self.sync_overlay_position();
    }

    /// Move the active cursor to the logical top of its column.
    pub fn cursor_top(&mut self) {
        let font = self.font();
        let behaviour = self.behaviour;
        let viewport = *self.viewport();
        top_point(self.cursor_mut(), &viewport, behaviour, font);
        self.sync_overlay_position();
    }

    /// Move the active cursor to the last whole cell of its row.
    pub fn cursor_end_row(&mut self) {
        let font = self.font();
        let behaviour = self.behaviour;
        let viewport = *self.viewport();
        end_row_point(self.cursor_mut(), &viewport, behaviour, font);
        self.sync_overlay_position();
    }

    /// Move the active cursor to the last whole cell of its column.
    pub fn cursor_end_col(&mut self) {
        let font = self.font();
        let behaviour = self.behaviour;
        let viewport = *self.viewport();
        end_col_point(self.cursor_mut(), &viewport, behaviour, font);
        self.sync_overlay_position();
    }

    /// Move the active cursor to the logical top-left of the viewport.
    pub fn cursor_home(&mut self) {
        self.carriage_return();
        self.cursor_top();
    }

    /// Home the raw text cursor within an explicit viewport.
    pub(crate) fn home_text_cursor_in(&mut self, viewport: Viewport) {
        let font = self.fonts.metrics(vdu_core::CursorType::Text);
        let behaviour = self.behaviour;
        cr_point(&mut self.text_cursor, &viewport, behaviour, font);
        top_point(&mut self.text_cursor, &viewport, behaviour, font);
        self.sync_overlay_position();
    }

    /// TAB(col, row): place the cursor at an absolute text cell.
    ///
    /// Out-of-range requests are silently ignored and leave the cursor
    /// unchanged.
    pub fn tab(&mut self, col: u8, row: u8) {
        let font = self.font();
        let behaviour = self.behaviour;
        let viewport = *self.viewport();
        let x_adj = normalise::x_adjustment(&viewport, font);
        let y_adj = normalise::y_adjustment(&viewport, font);
        let (col, row) = (col as i32, row as i32);

        let (x_cell, y_cell) = if behaviour.flip_xy() {
            (row, col)
        } else {
            (col, row)
        };
        let x_pos = if behaviour.invert_horizontal() {
            (viewport.x2 + 1) - ((x_cell + 1) * font.width_px()) - x_adj
        } else {
            viewport.x1 + (x_cell * font.width_px())
        };
        let y_pos = if behaviour.invert_vertical() {
            (viewport.y2 + 1) - ((y_cell + 1) * font.height_px()) - y_adj
        } else {
            viewport.y1 + (y_cell * font.height_px())
        };

        if viewport.x1 <= x_pos
            && x_pos < viewport.x2 - x_adj
            && viewport.y1 <= y_pos
            && y_pos < viewport.y2 - y_adj
        {
            let cursor = self.cursor_mut();
            cursor.x = x_pos;
            cursor.y = y_pos;
        }
        self.sync_overlay_position();
    }

    /// Place the active cursor at an absolute raw pixel position.
    ///
    /// No edge resolution is performed; callers follow up with
    /// [`scroll_or_wrap`](Self::scroll_or_wrap) if they need it.
    pub fn move_to(&mut self, position: Point) {
        *self.cursor_mut() = position;
        self.sync_overlay_position();
    }

    /// Move the active cursor by a raw pixel delta.
    ///
    /// Relative moves ignore the orientation flags for direction but obey
    /// them for wrapping and scrolling. An off-right cursor takes the
    /// auto-newline path, which cascades into the paging check; scroll
    /// protection on the text cursor suppresses all of it.
    pub fn relative_move(
        &mut self,
        dx: i32,
        dy: i32,
        keys: KeyModifiers,
    ) -> Option<PauseRequest> {
        let cursor = self.cursor_mut();
        *cursor = cursor.translate(dx, dy);
        self.sync_overlay_position();

        if !self.text_cursor_active() || !self.behaviour.scroll_protect() {
            if self.cursor_off_right() {
                if self.auto_newline() {
                    return self.check_paged_mode(keys);
                }
            } else {
                self.scroll_or_wrap();
            }
        }
        None
    }

    /// The active cursor's position in text cells (column, row).
    pub fn text_position(&self) -> (i32, i32) {
        let font = self.font();
        let p = self.normalised_position();
        (
            p.x / font.width_px().max(1),
            p.y / font.height_px().max(1),
        )
    }

    /// Characters remaining beyond the cursor in the current line.
    ///
    /// A cursor already past the last column reports a full line's worth,
    /// the budget of the fresh line it is about to start.
    pub fn chars_remaining_in_line(&self) -> i32 {
        let columns = self.normalised_char_width();
        let (col, _) = self.text_position();
        let remaining = (columns - 1) - col;
        if remaining >= 0 { remaining } else { columns }
    }
}
