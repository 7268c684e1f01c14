#![forbid(unsafe_code)]

//! Paged-output flow control.
//!
//! In paged mode the consumer may print a budget of text rows before the
//! external dispatcher must pause and wait for acknowledgement. The
//! governor only counts rows and raises [`PauseRequest`] intents; the
//! dispatcher owns the actual run-state machine, and nothing here blocks.

use tracing::trace;
use vdu_core::{KeyModifiers, PauseRequest};

use crate::backend::{FontProvider, GraphicsBackend};

/// Paged-output mode state machine.
///
/// The temporary states remember the base mode they were promoted from,
/// so clearing a temporary page returns exactly where it started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PagedMode {
    /// Paging off.
    #[default]
    Disabled,
    /// Paging on.
    Enabled,
    /// Temporarily paged; reverts to `Disabled`.
    TempEnabledDisabled,
    /// Temporarily paged; reverts to `Enabled`.
    TempEnabledEnabled,
}

impl PagedMode {
    /// Decode the byte-facing mode value. Out-of-range values are
    /// unknown and yield `None`.
    pub const fn from_byte(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Disabled),
            1 => Some(Self::Enabled),
            2 => Some(Self::TempEnabledDisabled),
            3 => Some(Self::TempEnabledEnabled),
            _ => None,
        }
    }
}

/// Governor state owned by the context.
#[derive(Debug)]
pub(crate) struct PagedOutput {
    pub(crate) mode: PagedMode,
    /// Rows remaining before a paging pause fires.
    pub(crate) count: i32,
    /// Rows of previous-page context kept visible at a page boundary.
    pub(crate) context_rows: u8,
    /// Frames to wait when Ctrl alone slows output; 0 disables.
    pub(crate) ctrl_pause_frames: u16,
}

impl Default for PagedOutput {
    fn default() -> Self {
        Self {
            mode: PagedMode::Disabled,
            count: 0,
            context_rows: 0,
            ctrl_pause_frames: 0,
        }
    }
}

impl<B: GraphicsBackend, F: FontProvider> crate::Context<B, F> {
    /// The current paged mode.
    pub fn paged_mode(&self) -> PagedMode {
        self.paging.mode
    }

    /// Rows remaining in the current page.
    pub fn paged_mode_count(&self) -> i32 {
        self.paging.count
    }

    /// Set the base paged mode and reset the row budget.
    pub fn set_paged_mode(&mut self, mode: PagedMode) {
        self.paging.mode = mode;
        self.reset_paged_mode_count();
    }

    /// Byte-facing paged mode setter; unknown values are ignored and the
    /// state is unchanged.
    pub fn set_paged_mode_byte(&mut self, value: u8) {
        if let Some(mode) = PagedMode::from_byte(value) {
            self.set_paged_mode(mode);
        }
    }

    /// Promote the current mode to its temporary-paged variant.
    ///
    /// Idempotent: already-temporary modes are left alone.
    pub fn set_temp_paged_mode(&mut self) {
        match self.paging.mode {
            PagedMode::Disabled => self.paging.mode = PagedMode::TempEnabledDisabled,
            PagedMode::Enabled => self.paging.mode = PagedMode::TempEnabledEnabled,
            _ => {}
        }
    }

    /// Demote a temporary-paged mode back to its base mode.
    pub fn clear_temp_paged_mode(&mut self) {
        match self.paging.mode {
            PagedMode::TempEnabledDisabled => self.paging.mode = PagedMode::Disabled,
            PagedMode::TempEnabledEnabled => self.paging.mode = PagedMode::Enabled,
            _ => {}
        }
    }

    /// Rows of context retained at a page boundary.
    pub fn set_paged_mode_context(&mut self, rows: u8) {
        self.paging.context_rows = rows;
    }

    /// Frames to wait per line while Ctrl is held; 0 disables the slow
    /// output assist.
    pub fn set_ctrl_pause_frames(&mut self, frames: u16) {
        self.paging.ctrl_pause_frames = frames;
    }

    /// Reset the row budget from the cursor's current row.
    ///
    /// The budget is `max(rows - current_row, rows - context_rows)`: a
    /// cursor mid-screen still gets at least a near-full page.
    pub fn reset_paged_mode_count(&mut self) {
        let rows = self.normalised_char_height();
        let (_, row) = self.text_position();
        self.paging.count = (rows - row).max(rows - self.paging.context_rows as i32);
    }

    /// Account for one line advance and report any pause intent.
    ///
    /// Call on every line advance while processing output. Only the text
    /// cursor participates in paging; the Ctrl/Shift combinations are
    /// checked regardless of mode.
    pub fn check_paged_mode(&mut self, keys: KeyModifiers) -> Option<PauseRequest> {
        if !self.text_cursor_active() {
            return None;
        }
        if self.paging.mode != PagedMode::Disabled {
            self.paging.count -= 1;
            if self.paging.count <= 0 {
                trace!("paged output budget exhausted");
                return Some(PauseRequest::PagedMode);
            }
        }
        if keys.ctrl {
            if keys.shift {
                return Some(PauseRequest::ComboKey);
            }
            if self.paging.ctrl_pause_frames > 0 {
                return Some(PauseRequest::WaitFrames(self.paging.ctrl_pause_frames));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::PagedMode;
    use crate::testing::test_context;
    use vdu_core::{CursorType, KeyModifiers, PauseRequest, Point};

    #[test]
    fn from_byte_rejects_unknown_values() {
        assert_eq!(PagedMode::from_byte(1), Some(PagedMode::Enabled));
        assert_eq!(PagedMode::from_byte(4), None);
        assert_eq!(PagedMode::from_byte(255), None);
    }

    #[test]
    fn unknown_byte_leaves_state_unchanged() {
        let mut ctx = test_context();
        ctx.set_paged_mode(PagedMode::Enabled);
        let count = ctx.paged_mode_count();
        ctx.set_paged_mode_byte(9);
        assert_eq!(ctx.paged_mode(), PagedMode::Enabled);
        assert_eq!(ctx.paged_mode_count(), count);
    }

    #[test]
    fn temp_mode_promotion_and_clearing() {
        let mut ctx = test_context();
        ctx.set_temp_paged_mode();
        assert_eq!(ctx.paged_mode(), PagedMode::TempEnabledDisabled);
        // Idempotent.
        ctx.set_temp_paged_mode();
        assert_eq!(ctx.paged_mode(), PagedMode::TempEnabledDisabled);
        ctx.clear_temp_paged_mode();
        assert_eq!(ctx.paged_mode(), PagedMode::Disabled);

        ctx.set_paged_mode(PagedMode::Enabled);
        ctx.set_temp_paged_mode();
        assert_eq!(ctx.paged_mode(), PagedMode::TempEnabledEnabled);
        ctx.clear_temp_paged_mode();
        assert_eq!(ctx.paged_mode(), PagedMode::Enabled);
        // Clearing a non-temporary mode is a no-op.
        ctx.clear_temp_paged_mode();
        assert_eq!(ctx.paged_mode(), PagedMode::Enabled);
    }

    #[test]
    fn budget_resets_from_cursor_row() {
        let mut ctx = test_context();
        // 23 usable rows in a 192px viewport (after the cell margin).
        ctx.text_cursor = Point::new(0, 10 * 8);
        ctx.set_paged_mode(PagedMode::Enabled);
        assert_eq!(ctx.paged_mode_count(), 23);

        ctx.set_paged_mode_context(5);
        ctx.set_paged_mode(PagedMode::Enabled);
        // max(23 - 10, 23 - 5) = 18
        assert_eq!(ctx.paged_mode_count(), 18);
    }

    #[test]
    fn countdown_fires_exactly_once_at_zero() {
        let mut ctx = test_context();
        ctx.set_paged_mode(PagedMode::Enabled);
        let k = ctx.paged_mode_count();
        assert!(k > 0);

        for _ in 0..k - 1 {
            assert_eq!(ctx.check_paged_mode(KeyModifiers::NONE), None);
        }
        assert_eq!(
            ctx.check_paged_mode(KeyModifiers::NONE),
            Some(PauseRequest::PagedMode)
        );
    }

    #[test]
    fn disabled_mode_never_pauses() {
        let mut ctx = test_context();
        for _ in 0..500 {
            assert_eq!(ctx.check_paged_mode(KeyModifiers::NONE), None);
        }
    }

    #[test]
    fn graphics_cursor_does_not_page() {
        let mut ctx = test_context();
        ctx.set_paged_mode(PagedMode::Enabled);
        ctx.set_active_cursor(CursorType::Graphics);
        let count = ctx.paged_mode_count();
        assert_eq!(ctx.check_paged_mode(KeyModifiers::NONE), None);
        assert_eq!(ctx.paged_mode_count(), count);
    }

    #[test]
    fn ctrl_shift_requests_combo_pause() {
        let mut ctx = test_context();
        assert_eq!(
            ctx.check_paged_mode(KeyModifiers::new(true, true)),
            Some(PauseRequest::ComboKey)
        );
        // Ctrl alone does nothing unless a pause duration is configured.
        assert_eq!(ctx.check_paged_mode(KeyModifiers::new(true, false)), None);
        ctx.set_ctrl_pause_frames(6);
        assert_eq!(
            ctx.check_paged_mode(KeyModifiers::new(true, false)),
            Some(PauseRequest::WaitFrames(6))
        );
    }
}
