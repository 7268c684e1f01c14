#![forbid(unsafe_code)]

//! VDU display engine public facade crate.
//!
//! Re-exports the common types from the internal crates and offers a
//! lightweight prelude for day-to-day usage: construct a [`Context`] over
//! your [`GraphicsBackend`]/[`FontProvider`] implementations, feed it
//! commands from a [`CommandQueue`], and drive [`Context::flash_tick`]
//! from your frame loop.

// --- Core re-exports -------------------------------------------------------

pub use vdu_core::{
    CursorBehaviour, CursorType, FontMetrics, KeyModifiers, PauseRequest, Point, Rgb, Viewport,
    ViewportType,
};

// --- Queue re-exports ------------------------------------------------------

pub use vdu_queue::CommandQueue;

// --- Context re-exports ----------------------------------------------------

pub use vdu_context::{
    BackendError, Context, FontProvider, GraphicsBackend, OverlayHandle, PagedMode,
    ScrollDirection,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        CommandQueue, Context, CursorBehaviour, CursorType, FontMetrics, FontProvider,
        GraphicsBackend, KeyModifiers, PagedMode, PauseRequest, Point, Rgb, Viewport,
    };

    pub use crate::{context, core, queue};
}

pub use vdu_context as context;
pub use vdu_core as core;
pub use vdu_queue as queue;
