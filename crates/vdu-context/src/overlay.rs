#![forbid(unsafe_code)]

//! Text cursor presentation.
//!
//! The visible cursor is an overlay bitmap composited in XOR mode over
//! the framebuffer. Its color is the XOR of the text foreground and
//! background colors (top two bits per channel, packed RGBA2222), so
//! painting it restores full text/background contrast and painting it
//! twice is a no-op; flash and un-flash are exact inverses.
//!
//! Lifecycle: the overlay is created lazily on first valid geometry,
//! destroyed and recreated when its size changes, recolored in place when
//! only the derived color changes, and fully destroyed when the requested
//! glyph-box intersection becomes non-positive. The old resource is
//! always released before a replacement is allocated, so the backend
//! never sees two registered cursors.

use std::time::Duration;

use tracing::{debug, warn};
use vdu_core::{CursorType, Rgb};

use crate::backend::{FontProvider, GraphicsBackend, OverlayHandle};

/// Slow flash period.
pub const CURSOR_PHASE: Duration = Duration::from_millis(640);
/// Fast flash period.
pub const CURSOR_FAST_PHASE: Duration = Duration::from_millis(160);

/// Derive the overlay color from the text colors.
///
/// Top two bits of each channel are XOR-combined and packed AABBGGRR
/// with full alpha.
pub(crate) fn cursor_color(fg: Rgb, bg: Rgb) -> u8 {
    let r = (fg.r ^ bg.r) >> 6;
    let g = (fg.g ^ bg.g) >> 6;
    let b = (fg.b ^ bg.b) >> 6;
    (0b11 << 6) | (b << 4) | (g << 2) | r
}

/// Owned pixel storage backing the overlay.
#[derive(Debug)]
pub(crate) struct CursorBitmap {
    pub(crate) width: u16,
    pub(crate) height: u16,
    pub(crate) color: u8,
    /// One RGBA2222 byte per pixel; released on every destroy path.
    pub(crate) data: Vec<u8>,
}

/// Presentation state for the text cursor overlay.
#[derive(Debug)]
pub(crate) struct TextCursorOverlay {
    pub(crate) enabled: bool,
    pub(crate) flashing: bool,
    pub(crate) flash_rate: Duration,
    pub(crate) last_flash: Duration,
    /// Current flash phase; `true` is the painted half of the cycle.
    pub(crate) phase: bool,
    pub(crate) temporarily_hidden: bool,
    pub(crate) visible: bool,
    pub(crate) h_start: u8,
    pub(crate) h_end: u8,
    pub(crate) v_start: u8,
    pub(crate) v_end: u8,
    pub(crate) bitmap: Option<CursorBitmap>,
    pub(crate) handle: Option<OverlayHandle>,
}

impl Default for TextCursorOverlay {
    fn default() -> Self {
        Self {
            enabled: true,
            flashing: true,
            flash_rate: CURSOR_PHASE,
            last_flash: Duration::ZERO,
            phase: true,
            temporarily_hidden: false,
            visible: false,
            h_start: 0,
            h_end: u8::MAX,
            v_start: 0,
            v_end: u8::MAX,
            bitmap: None,
            handle: None,
        }
    }
}

impl<B: GraphicsBackend, F: FontProvider> crate::Context<B, F> {
    /// Whether an overlay object currently exists.
    pub fn overlay_exists(&self) -> bool {
        self.overlay.handle.is_some()
    }

    /// Dimensions of the current overlay, if any.
    pub fn overlay_size(&self) -> Option<(u16, u16)> {
        self.overlay.bitmap.as_ref().map(|b| (b.width, b.height))
    }

    /// Rebuild the overlay to match the requested glyph box and colors.
    ///
    /// The single entry point for geometry and color changes; destroys
    /// the overlay when the requested box collapses, recolors in place
    /// when only the color changed, otherwise recreates at the new size.
    pub fn update_overlay(&mut self) {
        let font = self.fonts.metrics(CursorType::Text);
        let width =
            (font.width as i32).min(self.overlay.h_end as i32) - self.overlay.h_start as i32;
        let height =
            (font.height as i32).min(self.overlay.v_end as i32) - self.overlay.v_start as i32;
        if width <= 0 || height <= 0 {
            self.delete_overlay();
            return;
        }
        let (width, height) = (width as u16, height as u16);
        let color = cursor_color(self.text_fg, self.text_bg);

        let different_size = match &self.overlay.bitmap {
            None => true,
            Some(b) => b.width != width || b.height != height,
        };
        if different_size {
            // Release the old resource before allocating its replacement.
            self.delete_overlay();
            let data = vec![color; width as usize * height as usize];
            match self.backend.alloc_overlay(width, height, &data) {
                Ok(handle) => {
                    self.backend.set_overlay_xor(handle);
                    self.overlay.handle = Some(handle);
                    self.overlay.bitmap = Some(CursorBitmap {
                        width,
                        height,
                        color,
                        data,
                    });
                    debug!(width, height, color, "created text cursor overlay");
                }
                Err(err) => {
                    // Not fatal: the cursor stays absent until the next
                    // geometry or color change retries.
                    warn!(%err, "failed to allocate text cursor overlay");
                    return;
                }
            }
        } else if self
            .overlay
            .bitmap
            .as_ref()
            .is_some_and(|b| b.color != color)
        {
            if let Some(bitmap) = self.overlay.bitmap.as_mut() {
                bitmap.data.fill(color);
                bitmap.color = color;
            }
            if let Some(handle) = self.overlay.handle {
                self.backend.fill_overlay(handle, color);
            }
            debug!(color, "recolored text cursor overlay");
        }

        self.backend.register_text_cursor(self.overlay.handle);
        self.update_overlay_visibility();
        self.sync_overlay_position();
    }

    /// Destroy the overlay and release its pixel storage.
    pub(crate) fn delete_overlay(&mut self) {
        if self.overlay.handle.is_some() || self.overlay.bitmap.is_some() {
            debug!("deleting text cursor overlay");
        }
        self.backend.register_text_cursor(None);
        if let Some(handle) = self.overlay.handle.take() {
            self.backend.free_overlay(handle);
        }
        self.overlay.bitmap = None;
        self.overlay.visible = false;
    }

    /// Keep the overlay on the text cursor's raw position.
    pub(crate) fn sync_overlay_position(&mut self) {
        if let Some(handle) = self.overlay.handle {
            self.backend
                .move_overlay(handle, self.text_cursor.x, self.text_cursor.y);
        }
    }

    /// Recompute effective overlay visibility and push it to the backend.
    pub(crate) fn update_overlay_visibility(&mut self) {
        if let Some(handle) = self.overlay.handle {
            let visible = self.overlay.enabled
                && self.text_cursor_active()
                && !self.overlay.temporarily_hidden
                && self.overlay.phase;
            self.overlay.visible = visible;
            self.backend.set_overlay_visible(handle, visible);
        }
    }

    /// Advance the flash clock.
    ///
    /// `now` is any monotonic elapsed time; the phase toggles once per
    /// flash period while the cursor is flashing, enabled, active, and
    /// not temporarily hidden.
    pub fn flash_tick(&mut self, now: Duration) {
        if !self.overlay.flashing || self.overlay.temporarily_hidden {
            return;
        }
        if now.saturating_sub(self.overlay.last_flash) >= self.overlay.flash_rate {
            self.overlay.last_flash = now;
            if self.text_cursor_active() && self.overlay.enabled {
                if let Some(handle) = self.overlay.handle {
                    self.overlay.phase = !self.overlay.phase;
                    self.overlay.visible = self.overlay.phase;
                    self.backend.set_overlay_visible(handle, self.overlay.visible);
                }
            }
        }
    }

    /// Enable or disable the cursor.
    ///
    /// Values follow the classic control set: 0 hides, 1 shows, 2 shows
    /// steady, 3 shows flashing. Other values behave as "show".
    pub fn enable_cursor(&mut self, enable: u8) {
        self.overlay.enabled = enable != 0;
        self.update_overlay_visibility();
        if enable == 2 {
            self.overlay.flashing = false;
        }
        if enable == 3 {
            self.overlay.flashing = true;
        }
    }

    /// Set the cursor appearance: 0 steady, 1 off, 2 fast flash, 3 slow
    /// flash. Other values are ignored.
    pub fn set_cursor_appearance(&mut self, appearance: u8) {
        match appearance {
            0 => {
                self.overlay.flashing = false;
            }
            1 => {
                self.overlay.enabled = false;
                self.update_overlay_visibility();
            }
            2 => {
                self.overlay.flash_rate = CURSOR_FAST_PHASE;
                self.overlay.flashing = true;
            }
            3 => {
                self.overlay.flash_rate = CURSOR_PHASE;
                self.overlay.flashing = true;
            }
            _ => {}
        }
    }

    /// Temporarily hide the cursor while output paints under it.
    pub fn hide_cursor(&mut self) {
        if !self.overlay.temporarily_hidden && self.overlay.visible {
            if let Some(handle) = self.overlay.handle {
                self.backend.set_overlay_visible(handle, false);
            }
            self.overlay.visible = false;
            self.overlay.temporarily_hidden = true;
        }
    }

    /// Restore visibility after a temporary hide.
    pub fn show_cursor(&mut self) {
        if self.overlay.temporarily_hidden {
            if let Some(handle) = self.overlay.handle {
                self.backend.set_overlay_visible(handle, true);
            }
            self.overlay.visible = true;
            self.overlay.temporarily_hidden = false;
        }
    }

    /// Set the top row of the cursor glyph box.
    pub fn set_cursor_v_start(&mut self, start: u8) {
        self.overlay.v_start = start;
        self.update_overlay();
    }

    /// Set the bottom row of the cursor glyph box.
    pub fn set_cursor_v_end(&mut self, end: u8) {
        self.overlay.v_end = end;
        self.update_overlay();
    }

    /// Set the left column of the cursor glyph box.
    pub fn set_cursor_h_start(&mut self, start: u8) {
        self.overlay.h_start = start;
        self.update_overlay();
    }

    /// Set the right column of the cursor glyph box.
    pub fn set_cursor_h_end(&mut self, end: u8) {
        self.overlay.h_end = end;
        self.update_overlay();
    }

    /// Reset basic cursor control, used when changing screen modes.
    ///
    /// Appearance and geometry return to defaults, the text viewport
    /// reverts to full canvas, the text cursor becomes active and homes,
    /// and paging is disabled. Behaviour flags are deliberately left
    /// alone.
    pub fn reset_text_cursor(&mut self) {
        self.overlay.enabled = true;
        self.overlay.flashing = true;
        self.overlay.flash_rate = CURSOR_PHASE;
        self.overlay.v_start = 0;
        self.overlay.v_end = u8::MAX;
        self.overlay.h_start = 0;
        self.overlay.h_end = u8::MAX;
        self.update_overlay();

        self.text_viewport = vdu_core::Viewport::full(self.canvas_width, self.canvas_height);
        self.set_active_cursor(CursorType::Text);
        self.cursor_home();
        self.set_paged_mode(crate::PagedMode::Disabled);
    }
}
