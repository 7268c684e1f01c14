#![forbid(unsafe_code)]

//! Cursor behaviour flags.
//!
//! The behaviour flags select the display orientation (axis flip and
//! per-axis inversion) and the edge policies (wrap vs scroll, scroll
//! protection, graphics special actions). They persist across screen mode
//! changes and are never implicitly reset.

use bitflags::bitflags;

bitflags! {
    /// Orientation and edge-policy flags for the active cursor.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct CursorBehaviour: u8 {
        /// Swap the roles of the horizontal and vertical axes.
        const FLIP_XY = 1 << 0;
        /// Mirror the logical horizontal axis (measure from the far edge).
        const INVERT_HORIZONTAL = 1 << 1;
        /// Mirror the logical vertical axis (measure from the far edge).
        const INVERT_VERTICAL = 1 << 2;
        /// Wrap vertically instead of scrolling the viewport.
        const Y_WRAP = 1 << 3;
        /// Suppress the auto-newline after relative moves of the text cursor.
        const SCROLL_PROTECT = 1 << 4;
        /// Allow the graphics cursor to sit outside the viewport untouched.
        const GR_NO_SPECIAL_ACTIONS = 1 << 5;
    }
}

impl CursorBehaviour {
    /// Axis flip is active.
    #[inline]
    pub const fn flip_xy(&self) -> bool {
        self.contains(Self::FLIP_XY)
    }

    /// Logical horizontal axis is mirrored.
    #[inline]
    pub const fn invert_horizontal(&self) -> bool {
        self.contains(Self::INVERT_HORIZONTAL)
    }

    /// Logical vertical axis is mirrored.
    #[inline]
    pub const fn invert_vertical(&self) -> bool {
        self.contains(Self::INVERT_VERTICAL)
    }

    /// Vertical wrapping is preferred over scrolling.
    #[inline]
    pub const fn y_wrap(&self) -> bool {
        self.contains(Self::Y_WRAP)
    }

    /// Scroll protection is active.
    #[inline]
    pub const fn scroll_protect(&self) -> bool {
        self.contains(Self::SCROLL_PROTECT)
    }

    /// Graphics cursor special actions are suppressed.
    #[inline]
    pub const fn gr_no_special_actions(&self) -> bool {
        self.contains(Self::GR_NO_SPECIAL_ACTIONS)
    }
}
