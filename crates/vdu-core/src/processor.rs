#![forbid(unsafe_code)]

//! Run-state intents raised toward the external command dispatcher.
//!
//! The engine never blocks or sleeps. When flow control requires the
//! consumer loop to pause (paged output exhausted its row budget, or the
//! operator is holding a pause key combination), the engine returns a
//! [`PauseRequest`] and the dispatcher owns the actual run-state machine.

/// A pause intent for the external processor/run-state controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseRequest {
    /// Paged output has printed its row budget; wait for acknowledgement.
    PagedMode,
    /// The pause key combination is held; wait for release.
    ComboKey,
    /// Wait for the given number of display frames, then resume.
    WaitFrames(u16),
}

/// Snapshot of the modifier keys the paging governor consults.
///
/// Captured by the caller at command-processing time; the engine never
/// talks to the keyboard driver directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyModifiers {
    /// Control key is held.
    pub ctrl: bool,
    /// Shift key is held.
    pub shift: bool,
}

impl KeyModifiers {
    /// No modifier held.
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
    };

    /// Create a new snapshot.
    #[inline]
    pub const fn new(ctrl: bool, shift: bool) -> Self {
        Self { ctrl, shift }
    }
}

#[cfg(test)]
mod tests {
    use super::KeyModifiers;

    #[test]
    fn none_has_no_modifiers() {
        assert_eq!(KeyModifiers::NONE, KeyModifiers::default());
        assert!(!KeyModifiers::NONE.ctrl);
        assert!(!KeyModifiers::NONE.shift);
    }
}
